use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, Node};

pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

pub(crate) fn class_selector(class: &str) -> String {
    format!(".{class}")
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub(crate) fn query(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

/// Element with `id` inside `scope`, looked up without building a CSS selector.
pub(crate) fn element_by_id(scope: &Element, id: &str) -> Option<Element> {
    let element = scope.owner_document()?.get_element_by_id(id)?;
    let node: &Node = &element;
    scope.contains(Some(node)).then_some(element)
}

/// The form owning `anchor`, else the first form under `scope`.
pub(crate) fn owning_form(anchor: &Element, scope: &Element) -> Option<HtmlFormElement> {
    closest(anchor, "form")
        .or_else(|| {
            if scope.tag_name().eq_ignore_ascii_case("form") {
                Some(scope.clone())
            } else {
                query(scope, "form")
            }
        })
        .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
}

pub(crate) fn create_element<T: JsCast>(document: &Document, tag: &str) -> Result<T, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str("unexpected element type"))
}

pub(crate) fn create_hidden_input(
    document: &Document,
    name: &str,
    value: &str,
) -> Result<HtmlInputElement, JsValue> {
    let input: HtmlInputElement = create_element(document, "input")?;
    input.set_type("hidden");
    input.set_name(name);
    input.set_value(value);
    Ok(input)
}

pub(crate) fn add_classes(element: &Element, classes: &[String]) -> Result<(), JsValue> {
    let list = element.class_list();
    for class in classes {
        list.add_1(class)?;
    }
    Ok(())
}

pub(crate) fn set_opacity(element: &HtmlElement, value: &str) -> Result<(), JsValue> {
    element.style().set_property("opacity", value)
}
