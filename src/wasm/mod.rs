//! WASM bindings for the adder

mod binding;

pub use binding::{bind_page, AdderBinding};

use wasm_bindgen::prelude::*;

use crate::{to_display_string, AdderConfig, AdderForm, FieldId};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Add two numbers
#[wasm_bindgen(js_name = add)]
pub fn add_numbers(a: f64, b: f64) -> f64 {
    crate::add(a, b)
}

/// Format a number the way the answer element shows it
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64) -> String {
    to_display_string(value)
}

/// WASM-exposed headless form, for pages that do their own DOM wiring
#[wasm_bindgen]
pub struct WasmAdder {
    form: AdderForm,
}

#[wasm_bindgen]
impl WasmAdder {
    /// Create a form with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            form: AdderForm::default(),
        }
    }

    /// Create a form from a JSON configuration document
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<WasmAdder, JsValue> {
        let config = AdderConfig::from_json_str(config_json)?;
        Ok(Self {
            form: AdderForm::from_config(&config),
        })
    }

    /// Add two numbers
    pub fn add(&self, a: f64, b: f64) -> f64 {
        crate::add(a, b)
    }

    /// Set the text of `"num1"` or `"num2"`
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, field: &str, text: &str) -> Result<(), JsValue> {
        let id: FieldId = field.parse()?;
        self.form.set_field(id, text);
        Ok(())
    }

    /// Run the addition and return the new answer text
    pub fn trigger(&mut self) -> String {
        self.form.trigger().text.clone()
    }

    /// Current answer text
    pub fn answer(&self) -> String {
        self.form.answer().to_string()
    }

    /// Last evaluation as JSON, or `undefined` before the first trigger
    #[wasm_bindgen(js_name = lastEvaluation)]
    pub fn last_evaluation(&self) -> Result<Option<String>, JsValue> {
        self.form
            .last_evaluation()
            .map(|evaluation| serde_json::to_string(evaluation).map_err(crate::AdderError::from))
            .transpose()
            .map_err(JsValue::from)
    }

    /// Number of evaluations kept in history
    #[wasm_bindgen(js_name = historyLen)]
    pub fn history_len(&self) -> usize {
        self.form.history().len()
    }

    /// Forget all past evaluations
    #[wasm_bindgen(js_name = clearHistory)]
    pub fn clear_history(&mut self) {
        self.form.history_mut().clear();
    }
}

impl Default for WasmAdder {
    fn default() -> Self {
        Self::new()
    }
}
