use crate::config::TimingConfig;
use crate::domain::model::AlertVariant;

pub const FADE_TRANSITION: &str = "opacity 0.3s ease";

/// When an alert starts fading and when it disappears, relative to scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeTimeline {
    pub fade_after_ms: u32,
    pub hide_after_fade_ms: u32,
}

impl FadeTimeline {
    pub fn for_page_alert(timings: &TimingConfig) -> Self {
        Self {
            fade_after_ms: timings.alert_fade_delay_ms,
            hide_after_fade_ms: timings.fade_duration_ms,
        }
    }

    pub fn for_notification(timings: &TimingConfig) -> Self {
        Self {
            fade_after_ms: timings.notification_fade_delay_ms,
            hide_after_fade_ms: timings.fade_duration_ms,
        }
    }

    pub fn total_ms(&self) -> u32 {
        self.fade_after_ms.saturating_add(self.hide_after_fade_ms)
    }
}

/// A runtime-synthesized alert pinned to the top-right corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub variant: AlertVariant,
}

impl Notification {
    pub fn new(message: impl Into<String>, variant: AlertVariant) -> Self {
        Self {
            message: message.into(),
            variant,
        }
    }

    pub fn class_name(&self) -> String {
        self.variant.class_name()
    }

    pub fn styles(&self) -> [(&'static str, &'static str); 5] {
        [
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("z-index", "9999"),
            ("max-width", "400px"),
        ]
    }
}
