use crate::adapters::web::dom::{self, set_style};
use crate::config::PageConfig;
use crate::core::validation::FieldStyle;
use crate::domain::model::{FieldDescriptor, FieldState, FieldTag};
use crate::domain::ports::FormField;
use crate::utils::error::Result;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

#[derive(Clone)]
enum Control {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

/// A form control on the page, rendered with the configured styles.
pub struct WebField<'a> {
    control: Control,
    config: &'a PageConfig,
}

impl<'a> WebField<'a> {
    /// `None` for elements that are not input, select or textarea.
    pub fn from_element(element: &Element, config: &'a PageConfig) -> Option<Self> {
        let control = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Control::Input(input.clone())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Control::Select(select.clone())
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            Control::TextArea(textarea.clone())
        } else {
            return None;
        };
        Some(Self { control, config })
    }

    fn element(&self) -> &HtmlElement {
        match &self.control {
            Control::Input(el) => el,
            Control::Select(el) => el,
            Control::TextArea(el) => el,
        }
    }

    fn remove_error_sibling(&self) {
        let class = &self.config.selectors.input_error_class;
        if let Some(sibling) = self.element().next_element_sibling() {
            if sibling.class_list().contains(class) {
                sibling.remove();
            }
        }
    }

    fn insert_error_sibling(&self, message: &str) -> Result<()> {
        let document = dom::document()?;
        let error: HtmlElement = dom::create(&document, "div")?;
        error.set_class_name(&self.config.selectors.input_error_class);
        set_style(&error, "color", &self.config.styles.error_text)?;
        set_style(&error, "font-size", "0.85rem")?;
        set_style(&error, "margin-top", "0.3rem")?;
        error.set_text_content(Some(message));
        self.element().insert_adjacent_element("afterend", &error)?;
        Ok(())
    }
}

impl FormField for WebField<'_> {
    fn descriptor(&self) -> FieldDescriptor {
        match &self.control {
            Control::Input(el) => FieldDescriptor::input(&el.type_(), &el.name(), el.required()),
            Control::Select(el) => FieldDescriptor {
                tag: FieldTag::Select,
                input_type: String::new(),
                name: el.name(),
                required: el.required(),
            },
            Control::TextArea(el) => FieldDescriptor {
                tag: FieldTag::TextArea,
                input_type: String::new(),
                name: el.name(),
                required: el.required(),
            },
        }
    }

    fn value(&self) -> String {
        match &self.control {
            Control::Input(el) => el.value(),
            Control::Select(el) => el.value(),
            Control::TextArea(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match &self.control {
            Control::Input(el) => el.set_value(value),
            Control::Select(el) => el.set_value(value),
            Control::TextArea(el) => el.set_value(value),
        }
    }

    fn render(&self, state: &FieldState) -> Result<()> {
        let style = FieldStyle::for_state(state, &self.config.styles);
        set_style(self.element(), "border-color", &style.border_color)?;
        set_style(self.element(), "box-shadow", &style.box_shadow)?;

        // at most one error sibling per field
        self.remove_error_sibling();
        if let Some(message) = state.message() {
            self.insert_error_sibling(message)?;
        }
        Ok(())
    }
}
