//! Arithmetic core: the adder and its sibling binary operations

mod operation;
pub mod serde_float;

pub use operation::{add, sum, Operand, Operands, Operation};
