//! Browser tests for the page binding. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_adder::{AdderBinding, AdderConfig, AdderError};
use web_sys::{HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_page(body: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(body);
}

fn standard_page() {
    mount_page(
        r#"<input id="num1" type="number">
           <input id="num2" type="number">
           <button id="add">Add</button>
           <span id="answer"></span>"#,
    );
}

fn by_id<T: JsCast>(id: &str) -> T {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<T>()
        .unwrap()
}

fn press(num1: &str, num2: &str) -> String {
    by_id::<HtmlInputElement>("num1").set_value(num1);
    by_id::<HtmlInputElement>("num2").set_value(num2);
    by_id::<HtmlElement>("add").click();
    by_id::<HtmlElement>("answer").inner_text()
}

#[wasm_bindgen_test]
fn adds_two_and_two() {
    standard_page();
    let _binding = AdderBinding::attach(&AdderConfig::default()).unwrap();
    assert_eq!(press("2", "2"), "4");
}

#[wasm_bindgen_test]
fn adds_negative_and_fraction() {
    standard_page();
    let _binding = AdderBinding::attach(&AdderConfig::default()).unwrap();
    assert_eq!(press("-5", "3.5"), "-1.5");
}

#[wasm_bindgen_test]
fn empty_field_shows_nan() {
    standard_page();
    let binding = AdderBinding::attach(&AdderConfig::default()).unwrap();
    assert_eq!(press("", "3"), "NaN");
    assert_eq!(binding.history_len(), 1);
}

#[wasm_bindgen_test]
fn dropped_binding_stops_listening() {
    standard_page();
    let binding = AdderBinding::attach(&AdderConfig::default()).unwrap();
    assert_eq!(press("1", "1"), "2");
    drop(binding);
    assert_eq!(press("5", "5"), "2");
}

#[wasm_bindgen_test]
fn missing_element_is_reported() {
    mount_page(r#"<input id="num1" type="number">"#);
    let result = AdderBinding::attach(&AdderConfig::default());
    assert!(matches!(result, Err(AdderError::MissingElement { ref id }) if id == "num2"));
}

#[wasm_bindgen_test]
fn wrong_element_type_is_reported() {
    mount_page(
        r#"<div id="num1"></div>
           <input id="num2" type="number">
           <button id="add"></button>
           <span id="answer"></span>"#,
    );
    let result = AdderBinding::attach(&AdderConfig::default());
    assert!(matches!(result, Err(AdderError::WrongElementType { .. })));
}
