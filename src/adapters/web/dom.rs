use crate::core::alerts::{FadeTimeline, FADE_TRANSITION};
use crate::utils::error::{PageError, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        PageError::dom(message)
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| PageError::dom("no global window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| PageError::dom("window has no document"))
}

/// Elements of a node list that are of type `T`; anything else is skipped.
pub fn collect<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>> {
    Ok(collect(document.query_selector_all(selector)?))
}

pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>> {
    Ok(collect(root.query_selector_all(selector)?))
}

pub fn query_one<T: JsCast>(document: &Document, selector: &str) -> Result<Option<T>> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

pub fn query_one_in<T: JsCast>(root: &Element, selector: &str) -> Result<Option<T>> {
    Ok(root
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| PageError::dom(format!("<{}> has an unexpected type", tag)))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element.style().set_property(property, value)?;
    Ok(())
}

pub fn hide(element: &HtmlElement) -> Result<()> {
    set_style(element, "display", "none")
}

pub fn trimmed_text(element: &Element) -> String {
    element
        .text_content()
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

/// One-shot timer. The closure is released by the browser after it runs.
pub fn set_timeout<F>(delay_ms: u32, callback: F) -> Result<i32>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(callback);
    let handle = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    )?;
    Ok(handle)
}

/// Opacity transition, then `display: none` once it has run. Elements removed
/// from the document in the meantime are left alone.
pub fn fade_out(element: HtmlElement, hide_after_ms: u32) -> Result<()> {
    if !element.is_connected() {
        return Ok(());
    }
    set_style(&element, "transition", FADE_TRANSITION)?;
    set_style(&element, "opacity", "0")?;
    set_timeout(hide_after_ms, move || {
        if element.is_connected() {
            if let Err(e) = hide(&element) {
                tracing::warn!("Failed to hide faded element: {}", e);
            }
        }
    })?;
    Ok(())
}

pub fn schedule_fade(element: HtmlElement, timeline: FadeTimeline) -> Result<()> {
    set_timeout(timeline.fade_after_ms, move || {
        if let Err(e) = fade_out(element, timeline.hide_after_fade_ms) {
            tracing::warn!("Failed to fade element: {}", e);
        }
    })?;
    Ok(())
}

/// Log a handler failure; event handlers never propagate errors to the page.
pub fn report(context: &str, result: Result<()>) {
    if let Err(e) = result {
        tracing::error!("{} failed: {}", context, e);
    }
}
