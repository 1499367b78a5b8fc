use crate::domain::model::ModalAction;

pub const CANCEL_CLASS: &str = "modal-cancel";
pub const CONFIRM_CLASS: &str = "modal-confirm";

pub const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
background: rgba(0, 0, 0, 0.5); display: flex; justify-content: center; align-items: center; \
z-index: 10000;";

pub const PANEL_STYLE: &str = "background: white; padding: 2rem; border-radius: 10px; \
box-shadow: 0 10px 40px rgba(0, 0, 0, 0.3); max-width: 500px; width: 90%;";

const BUTTON_STYLE: &str = "padding: 0.6rem 1.5rem; color: white; border: none; \
border-radius: 5px; cursor: pointer; font-weight: 600;";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner markup of the panel. The title is text; `content_html` is trusted markup.
pub fn panel_markup(title: &str, content_html: &str) -> String {
    format!(
        r#"<h2 style="margin-bottom: 1rem; color: #1a1a2e;">{title}</h2>
<div style="margin-bottom: 1.5rem; color: #666;">{content}</div>
<div style="display: flex; gap: 1rem; justify-content: flex-end;">
<button type="button" class="{cancel}" style="{button} background: #999;">Cancel</button>
<button type="button" class="{confirm}" style="{button} background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);">Confirm</button>
</div>"#,
        title = escape_html(title),
        content = content_html,
        cancel = CANCEL_CLASS,
        confirm = CONFIRM_CLASS,
        button = BUTTON_STYLE,
    )
}

/// Every action dismisses; only confirm runs the callback.
pub fn invokes_callback(action: ModalAction) -> bool {
    matches!(action, ModalAction::Confirm)
}

/// A modal's lifecycle: open until the first action, closed afterwards.
#[derive(Debug, Default)]
pub struct ModalState {
    closed: bool,
}

impl ModalState {
    /// Returns whether the callback should run. Later actions on a closed
    /// modal are ignored.
    pub fn resolve(&mut self, action: ModalAction) -> Option<bool> {
        if self.closed {
            return None;
        }
        self.closed = true;
        Some(invokes_callback(action))
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
