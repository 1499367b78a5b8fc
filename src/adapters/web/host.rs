use crate::adapters::web::dom;
use crate::domain::model::Download;
use crate::domain::ports::PageHost;
use crate::utils::error::{PageError, Result};
use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, Window};

const PRINT_WINDOW_FEATURES: &str = "width=900,height=600";

/// The browser window as a [`PageHost`].
pub struct WebHost {
    window: Window,
}

impl WebHost {
    pub fn new() -> Result<Self> {
        Ok(Self {
            window: dom::window()?,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl PageHost for WebHost {
    fn confirm(&self, message: &str) -> bool {
        match self.window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("confirm() unavailable: {:?}", e);
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!("alert() unavailable: {:?}", e);
        }
    }

    fn location_path(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn navigate(&self, href: &str) -> Result<()> {
        self.window.location().set_href(href)?;
        Ok(())
    }

    fn download(&self, download: &Download) -> Result<()> {
        let document = dom::document()?;
        let body = document
            .body()
            .ok_or_else(|| PageError::MissingElement {
                selector: "body".to_string(),
            })?;

        let parts = Array::of1(&JsValue::from_str(&download.body));
        let options = BlobPropertyBag::new();
        options.set_type(&download.mime_type);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        let anchor: HtmlAnchorElement = dom::create(&document, "a")?;
        anchor.set_href(&url);
        anchor.set_download(&download.filename);
        body.append_child(&anchor)?;
        anchor.click();
        Url::revoke_object_url(&url)?;
        body.remove_child(&anchor)?;
        Ok(())
    }

    fn print_document(&self, document: &str, delay_ms: u32) -> Result<()> {
        let print_window = self
            .window
            .open_with_url_and_target_and_features("", "", PRINT_WINDOW_FEATURES)?
            .ok_or_else(|| PageError::dom("print window was blocked"))?;
        let print_document = print_window
            .document()
            .ok_or_else(|| PageError::dom("print window has no document"))?;

        print_document.write(&Array::of1(&JsValue::from_str(document)))?;
        print_document.close()?;

        dom::set_timeout(delay_ms, move || {
            if let Err(e) = print_window.print() {
                tracing::warn!("print() failed: {:?}", e);
            }
        })?;
        Ok(())
    }
}
