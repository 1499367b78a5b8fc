use crate::domain::ports::Detach;

/// The two points at which the host hands control to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// DOM parsed: generic listeners.
    Ready,
    /// Everything loaded: page-specific initializer and row hover.
    Load,
}

/// Tracks every listener the controller attached, per phase, so a phase runs
/// at most once until [`ListenerRegistry::detach_all`].
pub struct ListenerRegistry<L: Detach> {
    ready: bool,
    loaded: bool,
    listeners: Vec<L>,
}

impl<L: Detach> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self {
            ready: false,
            loaded: false,
            listeners: Vec::new(),
        }
    }
}

impl<L: Detach> ListenerRegistry<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a phase. `false` means it already ran and nothing should be attached.
    pub fn begin(&mut self, phase: Phase) -> bool {
        let flag = match phase {
            Phase::Ready => &mut self.ready,
            Phase::Load => &mut self.loaded,
        };
        if *flag {
            tracing::warn!("{:?} phase already initialized, skipping", phase);
            return false;
        }
        *flag = true;
        true
    }

    /// Give back a claimed phase that attached nothing, so it can run again.
    pub fn release(&mut self, phase: Phase) {
        match phase {
            Phase::Ready => self.ready = false,
            Phase::Load => self.loaded = false,
        }
    }

    pub fn track(&mut self, listener: L) {
        self.listeners.push(listener);
    }

    pub fn extend<I: IntoIterator<Item = L>>(&mut self, listeners: I) {
        for listener in listeners {
            self.track(listener);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Detach everything and re-arm both phases.
    pub fn detach_all(&mut self) -> usize {
        let count = self.listeners.len();
        for mut listener in self.listeners.drain(..) {
            listener.detach();
        }
        self.ready = false;
        self.loaded = false;
        tracing::debug!("Detached {} listeners", count);
        count
    }
}

impl<L: Detach> Drop for ListenerRegistry<L> {
    fn drop(&mut self) {
        self.detach_all();
    }
}
