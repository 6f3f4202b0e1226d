//! Display formatting for results

mod number;

pub use number::to_display_string;
