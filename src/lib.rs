pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::PageConfig;
pub use core::controller::PageController;
pub use core::registry::{ListenerRegistry, Phase};
pub use domain::model::{AlertVariant, DeleteDecision, FieldDescriptor, FieldState, PageKind, SortMode};
pub use domain::ports::{Detach, FormField, PageHost};
pub use utils::error::{PageError, Result};

#[cfg(target_arch = "wasm32")]
pub use adapters::web::PageBehavior;
