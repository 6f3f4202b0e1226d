//! Headless model of the adder page
//!
//! Holds the text of the two input fields and of the answer element. A
//! trigger reads both fields, adds them and replaces the answer, exactly as
//! the browser binding does on a button click.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use tracing::debug;

use crate::error::AdderError;
use crate::format::to_display_string;
use crate::history::History;
use crate::input::Coercion;
use crate::math::{Operand, Operands, Operation};
use crate::AdderConfig;

/// One of the two input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Num1,
    Num2,
}

impl FromStr for FieldId {
    type Err = AdderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "num1" => Ok(FieldId::Num1),
            "num2" => Ok(FieldId::Num2),
            _ => Err(AdderError::UnknownField {
                name: name.to_string(),
            }),
        }
    }
}

impl FieldId {
    fn index(self) -> usize {
        match self {
            FieldId::Num1 => 0,
            FieldId::Num2 => 1,
        }
    }
}

/// Record of a single trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// 1-based trigger count
    pub sequence: u64,
    /// Raw field texts at trigger time
    pub inputs: [String; 2],
    /// Operation applied to the operands
    pub operation: Operation,
    /// Coerced operands; NaN and infinities serialize as text
    #[serde(with = "crate::math::serde_float::operands")]
    pub operands: Operands,
    /// Result of the operation, `add` unless configured otherwise
    #[serde(with = "crate::math::serde_float")]
    pub result: Operand,
    /// Text written to the answer element
    pub text: String,
}

/// The page state: two fields, one answer
#[derive(Debug, Clone)]
pub struct AdderForm {
    fields: [String; 2],
    answer: String,
    coercion: Coercion,
    operation: Operation,
    history: History,
    sequence: u64,
    last: Option<Evaluation>,
}

impl AdderForm {
    /// Create an empty form with the given coercion mode
    pub fn new(coercion: Coercion) -> Self {
        Self {
            fields: [String::new(), String::new()],
            answer: String::new(),
            coercion,
            operation: Operation::default(),
            history: History::default(),
            sequence: 0,
            last: None,
        }
    }

    /// Create a form from configuration
    pub fn from_config(config: &AdderConfig) -> Self {
        Self {
            operation: config.operation,
            history: History::new(config.history_depth),
            ..Self::new(config.coercion)
        }
    }

    /// Replace the text of a field
    pub fn set_field(&mut self, id: FieldId, text: impl Into<String>) {
        self.fields[id.index()] = text.into();
    }

    /// Current text of a field
    pub fn field(&self, id: FieldId) -> &str {
        &self.fields[id.index()]
    }

    /// Read both fields, apply the operation and update the answer
    pub fn trigger(&mut self) -> &Evaluation {
        let a = self.coercion.apply(&self.fields[0]);
        let b = self.coercion.apply(&self.fields[1]);
        let result = self.operation.apply(a, b);
        let text = to_display_string(result);

        self.sequence += 1;
        debug!(
            sequence = self.sequence,
            num1 = %self.fields[0],
            op = %self.operation.symbol(),
            num2 = %self.fields[1],
            answer = %text,
            "evaluated"
        );

        self.answer.clone_from(&text);
        let evaluation = Evaluation {
            sequence: self.sequence,
            inputs: self.fields.clone(),
            operation: self.operation,
            operands: smallvec![a, b],
            result,
            text,
        };
        self.history.push(evaluation.clone());
        self.last.insert(evaluation)
    }

    /// Text currently shown in the answer element
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Most recent evaluation, independent of history depth
    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    pub fn coercion(&self) -> Coercion {
        self.coercion
    }

    pub fn set_coercion(&mut self, coercion: Coercion) {
        self.coercion = coercion;
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = operation;
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}

impl Default for AdderForm {
    fn default() -> Self {
        Self::new(Coercion::default())
    }
}
