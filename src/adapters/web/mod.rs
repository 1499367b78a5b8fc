//! Browser bindings: the `PageBehavior` class a page template drives, plus a
//! few stateless helpers exported to JS.
//!
//! ```js
//! import init, { PageBehavior } from "./pkg/page_behavior.js";
//! await init();
//! const page = new PageBehavior(JSON.stringify({ verbose: false }));
//! document.addEventListener("DOMContentLoaded", () => page.wire());
//! window.addEventListener("load", () => page.onLoad(document.body.dataset.page));
//! ```

pub mod dom;
pub mod field;
pub mod host;
pub mod listener;
pub mod wiring;

use crate::config::PageConfig;
use crate::core::alerts::{FadeTimeline, Notification};
use crate::core::controller::PageController;
use crate::core::modal::{panel_markup, ModalState, CANCEL_CLASS, CONFIRM_CLASS, OVERLAY_STYLE, PANEL_STYLE};
use crate::core::registry::{ListenerRegistry, Phase};
use crate::core::table::{sort_key, sort_order};
use crate::domain::model::{AlertVariant, ModalAction, SortMode};
use crate::utils::error::{PageError, Result};
use crate::utils::logger;
use host::WebHost;
use js_sys::{Array, Function, JsString, Object};
use listener::{attach_for_element_lifetime, Listener};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlTableRowElement};
use wiring::Wiring;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

fn locale_compare(a: &str, b: &str) -> Ordering {
    JsString::from(a)
        .locale_compare(b, &Array::new(), &Object::new())
        .cmp(&0)
}

#[wasm_bindgen]
pub struct PageBehavior {
    controller: Rc<PageController<WebHost>>,
    registry: RefCell<ListenerRegistry<Listener>>,
}

#[wasm_bindgen]
impl PageBehavior {
    /// `config_json` is an optional JSON object; missing keys take defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> std::result::Result<PageBehavior, JsValue> {
        let config = PageConfig::from_optional_json(config_json.as_deref())?;
        logger::init_browser_logger(config.verbose);

        Ok(Self {
            controller: Rc::new(PageController::new(WebHost::new()?, config)),
            registry: RefCell::new(ListenerRegistry::new()),
        })
    }

    /// Attach the generic listeners. Call once the DOM is parsed; repeated
    /// calls are ignored until [`PageBehavior::teardown`].
    pub fn wire(&self) -> std::result::Result<(), JsValue> {
        let Some(mut wiring) = self.claim(Phase::Ready)? else {
            return Ok(());
        };
        wiring.wire_ready();
        self.registry.borrow_mut().extend(wiring.finish());
        Ok(())
    }

    /// Page-specific initializer plus row hover. `page_kind` comes from the
    /// template; without it the kind is detected from the path.
    #[wasm_bindgen(js_name = onLoad)]
    pub fn on_load(&self, page_kind: Option<String>) -> std::result::Result<(), JsValue> {
        let Some(mut wiring) = self.claim(Phase::Load)? else {
            return Ok(());
        };
        wiring.wire_load(self.controller.resolve_page(page_kind.as_deref()));
        self.registry.borrow_mut().extend(wiring.finish());
        Ok(())
    }

    /// Detach every listener this instance attached. Returns how many.
    pub fn teardown(&self) -> u32 {
        self.registry.borrow_mut().detach_all() as u32
    }

    #[wasm_bindgen(js_name = listenerCount)]
    pub fn listener_count(&self) -> u32 {
        self.registry.borrow().len() as u32
    }

    #[wasm_bindgen(js_name = sortTable)]
    pub fn sort_table(&self, column_index: u32, numeric: Option<bool>) -> std::result::Result<(), JsValue> {
        Ok(self.sort_primary_table(column_index as usize, SortMode::from_flag(numeric.unwrap_or(false)))?)
    }

    #[wasm_bindgen(js_name = exportTableToCsv)]
    pub fn export_table_to_csv(&self, filename: Option<String>) -> std::result::Result<(), JsValue> {
        let rows = self.primary_table_rows()?;
        self.controller
            .export_table(rows.as_deref(), filename.as_deref())?;
        Ok(())
    }

    #[wasm_bindgen(js_name = printTable)]
    pub fn print_table(&self) -> std::result::Result<(), JsValue> {
        let html = self.primary_table()?.map(|table| table.outer_html());
        self.controller.print_table(html.as_deref())?;
        Ok(())
    }

    #[wasm_bindgen(js_name = printPage)]
    pub fn print_page(&self) -> std::result::Result<(), JsValue> {
        self.controller.host().window().print()
    }

    #[wasm_bindgen(js_name = showModal)]
    pub fn show_modal(
        &self,
        title: &str,
        content: &str,
        callback: Option<Function>,
    ) -> std::result::Result<(), JsValue> {
        Ok(open_modal(title, content, callback)?)
    }

    #[wasm_bindgen(js_name = showNotification)]
    pub fn show_notification(&self, message: &str, variant: Option<String>) -> std::result::Result<(), JsValue> {
        let variant = variant
            .as_deref()
            .map(AlertVariant::parse_or_default)
            .unwrap_or_default();
        let notification = Notification::new(message, variant);
        let timeline = FadeTimeline::for_notification(&self.controller.config().timings);
        Ok(append_notification(&notification, timeline)?)
    }

    #[wasm_bindgen(js_name = resetFormFields)]
    pub fn reset_form_fields(&self, form_id: &str) -> std::result::Result<(), JsValue> {
        let document = dom::document()?;
        let Some(form) = document
            .get_element_by_id(form_id)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        else {
            tracing::debug!("No form with id {}", form_id);
            return Ok(());
        };
        form.reset();

        let selector = self.controller.config().selectors.input_error();
        let errors: Vec<Element> = dom::query_all(&document, &selector)?;
        for error in errors {
            error.remove();
        }
        Ok(())
    }

    #[wasm_bindgen(js_name = disableSubmitButton)]
    pub fn disable_submit_button(&self, form_id: &str, disabled: Option<bool>) -> std::result::Result<(), JsValue> {
        let disabled = disabled.unwrap_or(true);
        let document = dom::document()?;
        let Some(form) = document.get_element_by_id(form_id) else {
            return Ok(());
        };
        let selector = &self.controller.config().selectors.submit_button;
        let Some(button): Option<HtmlButtonElement> = dom::query_one_in(&form, selector)? else {
            return Ok(());
        };

        button.set_disabled(disabled);
        let (opacity, cursor) = if disabled { ("0.5", "not-allowed") } else { ("1", "pointer") };
        dom::set_style(&button, "opacity", opacity)?;
        dom::set_style(&button, "cursor", cursor)?;
        Ok(())
    }
}

impl PageBehavior {
    /// `None` when the phase already ran. A phase that cannot start is
    /// released again so a later call can retry it.
    fn claim(&self, phase: Phase) -> Result<Option<Wiring>> {
        if !self.registry.borrow_mut().begin(phase) {
            return Ok(None);
        }
        match dom::document() {
            Ok(document) => Ok(Some(Wiring::new(self.controller.clone(), document))),
            Err(e) => {
                self.registry.borrow_mut().release(phase);
                Err(e)
            }
        }
    }

    fn primary_table(&self) -> Result<Option<Element>> {
        dom::query_one(&dom::document()?, &self.controller.config().selectors.table)
    }

    /// Cell text of every `tr` (header and body), `None` without a table.
    fn primary_table_rows(&self) -> Result<Option<Vec<Vec<String>>>> {
        let Some(table) = self.primary_table()? else {
            return Ok(None);
        };
        let rows: Vec<Element> = dom::query_all_in(&table, "tr")?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let cells: Vec<Element> = dom::query_all_in(&row, "td, th")?;
            out.push(cells.iter().map(dom::trimmed_text).collect());
        }
        Ok(Some(out))
    }

    fn sort_primary_table(&self, column: usize, mode: SortMode) -> Result<()> {
        let Some(table) = self.primary_table()? else {
            tracing::debug!("No table to sort");
            return Ok(());
        };
        let Some(tbody) = table.query_selector("tbody")? else {
            return Ok(());
        };

        let rows: Vec<HtmlTableRowElement> = dom::query_all_in(&table, "tbody tr")?;
        let keys: Vec<String> = rows
            .iter()
            .map(|row| {
                let cells = row.cells();
                let texts: Vec<String> = (0..cells.length())
                    .filter_map(|i| cells.item(i))
                    .map(|cell| dom::trimmed_text(&cell))
                    .collect();
                sort_key(&texts, column)
            })
            .collect();

        for index in sort_order(&keys, mode, locale_compare) {
            tbody.append_child(&rows[index])?;
        }
        tracing::debug!("Sorted {} rows by column {} ({:?})", rows.len(), column, mode);
        Ok(())
    }
}

fn open_modal(title: &str, content: &str, callback: Option<Function>) -> Result<()> {
    let document = dom::document()?;
    let body = document.body().ok_or_else(|| PageError::MissingElement {
        selector: "body".to_string(),
    })?;

    let overlay: HtmlElement = dom::create(&document, "div")?;
    overlay.style().set_css_text(OVERLAY_STYLE);
    let panel: HtmlElement = dom::create(&document, "div")?;
    panel.style().set_css_text(PANEL_STYLE);
    panel.set_inner_html(&panel_markup(title, content));
    overlay.append_child(&panel)?;
    body.append_child(&overlay)?;

    // each modal carries its own state; nothing is looked up by id
    let state = Rc::new(RefCell::new(ModalState::default()));
    let dismiss = {
        let overlay = overlay.clone();
        Rc::new(move |action: ModalAction| {
            let Some(run_callback) = state.borrow_mut().resolve(action) else {
                return;
            };
            if run_callback {
                if let Some(callback) = &callback {
                    if let Err(e) = callback.call0(&JsValue::NULL) {
                        tracing::error!("Modal callback threw: {:?}", e);
                    }
                }
            }
            overlay.remove();
        })
    };

    for (class, action) in [(CANCEL_CLASS, ModalAction::Cancel), (CONFIRM_CLASS, ModalAction::Confirm)] {
        if let Some(button) = panel.query_selector(&format!(".{}", class))? {
            let dismiss = dismiss.clone();
            attach_for_element_lifetime(&button, "click", move |_event: Event| dismiss(action))?;
        }
    }

    let backdrop = overlay.clone();
    attach_for_element_lifetime(&overlay, "click", move |event: Event| {
        let on_backdrop = event
            .target()
            .map(|target| JsValue::from(target) == JsValue::from(backdrop.clone()))
            .unwrap_or(false);
        if on_backdrop {
            dismiss(ModalAction::Backdrop);
        }
    })?;
    Ok(())
}

fn append_notification(notification: &Notification, timeline: FadeTimeline) -> Result<()> {
    let document = dom::document()?;
    let body = document.body().ok_or_else(|| PageError::MissingElement {
        selector: "body".to_string(),
    })?;

    let alert: HtmlElement = dom::create(&document, "div")?;
    alert.set_class_name(&notification.class_name());
    for (property, value) in notification.styles() {
        dom::set_style(&alert, property, value)?;
    }
    alert.set_text_content(Some(&notification.message));
    body.append_child(&alert)?;

    dom::schedule_fade(alert, timeline)
}

#[wasm_bindgen(js_name = formatPhoneNumber)]
pub fn format_phone_number(phone: &str) -> String {
    crate::core::format::format_phone_number(phone)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: &str) -> std::result::Result<String, JsValue> {
    Ok(crate::core::format::format_date(value)?)
}
