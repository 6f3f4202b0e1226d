//! DOM wiring: two number inputs, a button and an answer element
//!
//! The click listener shares the form with the binding handle through an
//! `Rc<RefCell<_>>`. Dropping the handle removes the listener.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

use crate::error::{AdderError, Result};
use crate::{AdderConfig, AdderForm, FieldId};

const CLICK: &str = "click";

/// A live binding between the page elements and an [`AdderForm`]
#[wasm_bindgen]
pub struct AdderBinding {
    form: Rc<RefCell<AdderForm>>,
    trigger: HtmlElement,
    listener: Closure<dyn FnMut(Event)>,
}

impl AdderBinding {
    /// Look up the configured elements and install the click listener
    pub fn attach(config: &AdderConfig) -> Result<Self> {
        let document = document()?;
        let ids = &config.elements;

        let num1: HtmlInputElement = element(&document, &ids.num1, "an input element")?;
        let num2: HtmlInputElement = element(&document, &ids.num2, "an input element")?;
        let trigger: HtmlElement = element(&document, &ids.trigger, "an HTML element")?;
        let answer: HtmlElement = element(&document, &ids.answer, "an HTML element")?;

        let form = Rc::new(RefCell::new(AdderForm::from_config(config)));
        let listener = Closure::<dyn FnMut(Event)>::new({
            let form = Rc::clone(&form);
            move |_event: Event| {
                let mut form = form.borrow_mut();
                form.set_field(FieldId::Num1, num1.value());
                form.set_field(FieldId::Num2, num2.value());
                form.trigger();
                answer.set_inner_text(form.answer());
            }
        });

        trigger
            .add_event_listener_with_callback(CLICK, listener.as_ref().unchecked_ref())
            .map_err(|error| AdderError::Listener(format!("{error:?}")))?;

        info!(trigger = %ids.trigger, answer = %ids.answer, "adder attached");

        Ok(Self {
            form,
            trigger,
            listener,
        })
    }
}

#[wasm_bindgen]
impl AdderBinding {
    /// Text currently shown in the answer element
    pub fn answer(&self) -> String {
        self.form.borrow().answer().to_string()
    }

    /// Number of evaluations kept in history
    #[wasm_bindgen(js_name = historyLen)]
    pub fn history_len(&self) -> usize {
        self.form.borrow().history().len()
    }

    /// Remove the listener now instead of waiting for garbage collection
    pub fn detach(self) {}
}

impl Drop for AdderBinding {
    fn drop(&mut self) {
        let _ = self
            .trigger
            .remove_event_listener_with_callback(CLICK, self.listener.as_ref().unchecked_ref());
    }
}

/// Bind the page. `config_json` defaults to the standard element ids.
#[wasm_bindgen(js_name = bindPage)]
pub fn bind_page(config_json: Option<String>) -> std::result::Result<AdderBinding, JsValue> {
    let config = match config_json {
        Some(json) => AdderConfig::from_json_str(&json)?,
        None => AdderConfig::default(),
    };

    AdderBinding::attach(&config).map_err(|error| {
        warn!(%error, "failed to bind adder");
        JsValue::from(error)
    })
}

fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(AdderError::NoWindow)?
        .document()
        .ok_or(AdderError::NoDocument)
}

fn element<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| AdderError::MissingElement { id: id.to_string() })?
        .dyn_into::<T>()
        .map_err(|_| AdderError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}
