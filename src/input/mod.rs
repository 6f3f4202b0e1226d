//! Input coercion: turning field text into operands

mod coerce;

pub use coerce::{coerce, number_literal, value_as_number, Coercion};
