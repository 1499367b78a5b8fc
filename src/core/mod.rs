pub mod alerts;
pub mod controller;
pub mod format;
pub mod modal;
pub mod registry;
pub mod search;
pub mod table;
pub mod validation;

pub use crate::domain::model::{FieldDescriptor, FieldState, PageKind};
pub use crate::domain::ports::{Detach, FormField, PageHost};
pub use crate::utils::error::Result;
