//! Web-Adder CLI
//! Runs the page's add action from the command line. The main interface is
//! through WASM bindings.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use web_adder::{AdderConfig, AdderForm, Coercion, FieldId};

#[derive(Parser, Debug)]
#[command(name = "web-adder", about = "Add two numbers the way the adder page does")]
struct Cli {
    /// First operand, as typed into the first field
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second operand, as typed into the second field
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Coerce with `Number(text)` rules instead of number-input rules
    #[arg(long)]
    lenient: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("web_adder=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("web_adder=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Run one trigger and return the answer text
fn run(cli: Cli) -> Result<String> {
    let mut config = match &cli.config {
        Some(path) => AdderConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AdderConfig::default(),
    };
    if cli.lenient {
        config.coercion = Coercion::NumberLiteral;
    }
    debug!(?config, "configuration loaded");

    let mut form = AdderForm::from_config(&config);
    form.set_field(FieldId::Num1, cli.a);
    form.set_field(FieldId::Num2, cli.b);
    let evaluation = form.trigger();
    debug!(a = evaluation.operands[0], b = evaluation.operands[1], "evaluated");

    Ok(evaluation.text.clone())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    println!("{}", run(cli)?);
    Ok(())
}
