//! The hook surface of the ALFAsim plugin SDK.
//!
//! The host discovers hooks by fixed name ([`HookId::host_symbol`]) and
//! invokes them synchronously and serially at defined lifecycle points.
//! A plugin is a [`Plugin`] implementation: every method is defaulted,
//! so it implements only the hooks it registers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod directive;
pub mod error;
pub mod message;
pub mod plugin;
pub mod variable;

pub use directive::{AddField, AddPhase, UpdateLayer};
pub use error::HookError;
pub use message::{Message, Severity};
pub use plugin::{HookId, Plugin};
pub use variable::{Location, Scope, SecondaryVariable, Visibility};
