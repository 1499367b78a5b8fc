use crate::adapters::web::dom::{self, report};
use crate::adapters::web::field::WebField;
use crate::adapters::web::host::WebHost;
use crate::adapters::web::listener::Listener;
use crate::core::alerts::FadeTimeline;
use crate::core::controller::{
    init_dashboard_charts, is_enter_key, trim_field, uppercase_field, PageController,
};
use crate::domain::model::{DeleteDecision, PageKind};
use crate::utils::error::Result;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    KeyboardEvent,
};

type Controller = Rc<PageController<WebHost>>;

fn current_element(event: &Event) -> Option<Element> {
    event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

fn pressed_enter(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .map(|key| is_enter_key(&key.key()))
        .unwrap_or(false)
}

/// Collects the listeners attached during one phase. Dropping it before
/// [`Wiring::finish`] detaches them again.
pub struct Wiring {
    controller: Controller,
    document: Document,
    listeners: Vec<Listener>,
}

impl Wiring {
    pub fn new(controller: Controller, document: Document) -> Self {
        Self {
            controller,
            document,
            listeners: Vec::new(),
        }
    }

    pub fn finish(self) -> Vec<Listener> {
        self.listeners
    }

    fn on<F>(&mut self, target: &EventTarget, kind: &'static str, handler: F) -> Result<()>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::attach(target, kind, handler)?);
        Ok(())
    }

    fn config(&self) -> &crate::config::PageConfig {
        self.controller.config()
    }

    // ---- DOM ready ----

    /// Each feature is wired on its own; one that fails is logged and skipped.
    pub fn wire_ready(&mut self) {
        report("Wiring delete triggers", self.wire_delete_triggers());
        report("Wiring form validation", self.wire_form_submission());
        report("Wiring alert close", self.wire_alert_close());
        report("Wiring blur validation", self.wire_blur_validation());
        report("Wiring search", self.wire_search());
        report("Scheduling alert dismissal", self.schedule_alert_dismissal());
        tracing::debug!("Wired {} listeners at DOM ready", self.listeners.len());
    }

    fn wire_delete_triggers(&mut self) -> Result<()> {
        let triggers: Vec<Element> = dom::query_all(&self.document, &self.config().selectors.delete_trigger)?;
        for trigger in triggers {
            let controller = self.controller.clone();
            let form_selector = self.config().selectors.form.clone();
            self.on(&trigger, "click", move |event: Event| {
                let method = current_element(&event)
                    .and_then(|el| el.closest(&form_selector).ok().flatten())
                    .and_then(|form| form.get_attribute("method"));
                if controller.confirm_delete(method.as_deref()) == DeleteDecision::Cancel {
                    event.prevent_default();
                }
            })?;
        }
        Ok(())
    }

    fn wire_form_submission(&mut self) -> Result<()> {
        let forms: Vec<Element> = dom::query_all(&self.document, &self.config().selectors.form)?;
        for form in forms {
            let controller = self.controller.clone();
            self.on(&form, "submit", move |event: Event| {
                let Some(form) = current_element(&event) else {
                    return;
                };
                let config = controller.config();
                let elements: Vec<Element> =
                    match dom::query_all_in(&form, &config.selectors.required_fields) {
                        Ok(elements) => elements,
                        Err(e) => {
                            tracing::error!("Collecting required fields failed: {}", e);
                            return;
                        }
                    };
                let fields: Vec<WebField> = elements
                    .iter()
                    .filter_map(|el| WebField::from_element(el, config))
                    .collect();

                match controller.validate_form(&fields) {
                    Ok(true) => {}
                    Ok(false) => event.prevent_default(),
                    Err(e) => tracing::error!("Form validation failed: {}", e),
                }
            })?;
        }
        Ok(())
    }

    fn wire_alert_close(&mut self) -> Result<()> {
        let closers: Vec<Element> = dom::query_all(&self.document, &self.config().selectors.alert_close)?;
        for closer in closers {
            let alert_selector = self.config().selectors.alert.clone();
            self.on(&closer, "click", move |event: Event| {
                let Some(closer) = current_element(&event) else {
                    return;
                };
                let container = closer
                    .closest(&alert_selector)
                    .ok()
                    .flatten()
                    .or_else(|| closer.parent_element())
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                if let Some(container) = container {
                    report("Closing alert", dom::hide(&container));
                }
            })?;
        }
        Ok(())
    }

    fn schedule_alert_dismissal(&mut self) -> Result<()> {
        let timeline = FadeTimeline::for_page_alert(&self.config().timings);
        let alerts: Vec<HtmlElement> = dom::query_all(&self.document, &self.config().selectors.alert)?;
        tracing::debug!(
            "Scheduling dismissal of {} alerts, hidden after {} ms",
            alerts.len(),
            timeline.total_ms()
        );
        for alert in alerts {
            dom::schedule_fade(alert, timeline)?;
        }
        Ok(())
    }

    fn wire_blur_validation(&mut self) -> Result<()> {
        let selectors = &self.config().selectors;
        let selector = format!(
            "{}, {}",
            selectors.email_inputs,
            selectors.phone_inputs(&self.config().fields.phone)
        );
        let inputs: Vec<Element> = dom::query_all(&self.document, &selector)?;
        for input in inputs {
            let controller = self.controller.clone();
            self.on(&input, "blur", move |event: Event| {
                let Some(el) = current_element(&event) else {
                    return;
                };
                if let Some(field) = WebField::from_element(&el, controller.config()) {
                    report("Blur validation", controller.validate_on_blur(&field));
                }
            })?;
        }
        Ok(())
    }

    fn wire_search(&mut self) -> Result<()> {
        let selectors = &self.config().selectors;
        let input: Option<HtmlInputElement> = dom::query_one(&self.document, &selectors.search_input)?;
        let button: Option<Element> = dom::query_one(&self.document, &selectors.search_button)?;
        let (Some(input), Some(button)) = (input, button) else {
            return Ok(());
        };

        let controller = self.controller.clone();
        let search_input = input.clone();
        self.on(&button, "click", move |_event: Event| {
            report(
                "Search",
                controller.perform_search(&search_input.value()).map(|_| ()),
            );
        })?;

        let controller = self.controller.clone();
        let search_input = input.clone();
        self.on(&input, "keypress", move |event: Event| {
            if pressed_enter(&event) {
                report(
                    "Search",
                    controller.perform_search(&search_input.value()).map(|_| ()),
                );
            }
        })?;
        Ok(())
    }

    // ---- full load ----

    pub fn wire_load(&mut self, kind: PageKind) {
        tracing::debug!("Initializing {} page", kind);
        match kind {
            PageKind::Login => report("Wiring login form", self.wire_login()),
            PageKind::Student => report("Wiring student form", self.wire_student_form()),
            PageKind::Dashboard => init_dashboard_charts(),
            PageKind::Generic => {}
        }
        report("Wiring row hover", self.wire_row_hover());
    }

    fn first_form(&self) -> Result<Option<HtmlFormElement>> {
        dom::query_one(&self.document, &self.config().selectors.form)
    }

    fn named_input(form: &HtmlFormElement, name: &str) -> Result<Option<HtmlInputElement>> {
        dom::query_one_in(form, &format!("input[name=\"{}\"]", name))
    }

    fn wire_login(&mut self) -> Result<()> {
        let Some(form) = self.first_form()? else {
            return Ok(());
        };
        let fields = &self.config().fields;
        let username = Self::named_input(&form, &fields.username)?;
        let password = Self::named_input(&form, &fields.password)?;

        if let Some(username) = username {
            let controller = self.controller.clone();
            self.on(&username, "input", move |event: Event| {
                if let Some(field) = current_element(&event)
                    .and_then(|el| WebField::from_element(&el, controller.config()))
                {
                    trim_field(&field);
                }
            })?;
        }

        if let Some(password) = password {
            self.on(&password, "keypress", move |event: Event| {
                if pressed_enter(&event) {
                    if let Err(e) = form.submit() {
                        tracing::error!("Login submit failed: {:?}", e);
                    }
                }
            })?;
        }
        Ok(())
    }

    fn wire_student_form(&mut self) -> Result<()> {
        let Some(form) = self.first_form()? else {
            return Ok(());
        };
        let fields = self.config().fields.clone();

        if let Some(student_id) = Self::named_input(&form, &fields.student_id)? {
            let controller = self.controller.clone();
            self.on(&student_id, "input", move |event: Event| {
                if let Some(field) = current_element(&event)
                    .and_then(|el| WebField::from_element(&el, controller.config()))
                {
                    uppercase_field(&field);
                }
            })?;
        }

        if let Some(email) = Self::named_input(&form, &fields.email)? {
            let controller = self.controller.clone();
            self.on(&email, "blur", move |event: Event| {
                if let Some(field) = current_element(&event)
                    .and_then(|el| WebField::from_element(&el, controller.config()))
                {
                    report("Student email check", controller.student_email_blur(&field));
                }
            })?;
        }

        if let Some(phone) = Self::named_input(&form, &fields.phone)? {
            let controller = self.controller.clone();
            self.on(&phone, "blur", move |event: Event| {
                if let Some(field) = current_element(&event)
                    .and_then(|el| WebField::from_element(&el, controller.config()))
                {
                    report("Student phone check", controller.student_phone_blur(&field));
                }
            })?;
        }
        Ok(())
    }

    fn wire_row_hover(&mut self) -> Result<()> {
        let Some(table): Option<Element> = dom::query_one(&self.document, &self.config().selectors.table)? else {
            return Ok(());
        };
        let rows: Vec<HtmlElement> = dom::query_all_in(&table, "tbody tr")?;
        let hover = self.config().styles.row_hover.clone();

        for row in rows {
            let color = hover.clone();
            let target = row.clone();
            self.on(&row, "mouseenter", move |_event: Event| {
                report("Row hover", dom::set_style(&target, "background-color", &color));
            })?;
            let target = row.clone();
            self.on(&row, "mouseleave", move |_event: Event| {
                report("Row hover", dom::set_style(&target, "background-color", "transparent"));
            })?;
        }
        Ok(())
    }
}
