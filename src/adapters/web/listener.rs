use crate::domain::ports::Detach;
use crate::utils::error::Result;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// An attached event listener. Owns its closure; detaching (or dropping)
/// removes it from the target.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl Listener {
    pub fn attach<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
            attached: true,
        })
    }
}

impl Detach for Listener {
    fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to remove {} listener: {:?}", self.kind, e);
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Listener for elements that live and die with a modal. The closure is
/// leaked rather than tracked.
pub fn attach_for_element_lifetime<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
