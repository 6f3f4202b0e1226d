//! Web-Adder: a number adder bound to a browser page
//!
//! This crate provides:
//! - A pure IEEE-754 adder (NaN and infinities pass through unchecked)
//! - Field coercion matching what a browser reports for number inputs
//! - Result formatting matching what a browser prints for numbers
//! - A headless page model and the WASM glue that wires it to the DOM

pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod history;
pub mod input;
pub mod math;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::{bind_page, AdderBinding, WasmAdder};

// Re-export primary types
pub use config::{AdderConfig, ElementIds};
pub use error::{AdderError, Result};
pub use form::{AdderForm, Evaluation, FieldId};
pub use format::to_display_string;
pub use history::History;
pub use input::{coerce, Coercion};
pub use math::{add, sum, Operand, Operands, Operation};

/// Coerce two field texts, add them and format the sum.
///
/// This is one trigger of the page without any state.
pub fn evaluate(num1: &str, num2: &str, coercion: Coercion) -> String {
    let a = coercion.apply(num1);
    let b = coercion.apply(num2);
    to_display_string(add(a, b))
}
