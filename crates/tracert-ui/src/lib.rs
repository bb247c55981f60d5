//! Group filter widget: radio factory, event binding and the group selector.

pub mod binder;
pub mod dom;
pub mod error;
pub mod memory;
pub mod radio;
pub mod selector;
pub mod source;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use binder::{select_binder, ClickBinder, LegacyBinder, ListenerBinder};
pub use dom::{ClickHandler, Dom, RadioAttrs};
pub use error::{DomError, SelectorError, SourceError};
pub use memory::{MemoryDom, MemoryNode, NodeKind, RadioData};
pub use radio::{no_op, RadioConfig, RadioFactory, RadioOption};
pub use selector::{initialize, GroupSelector, SelectorConfig, SelectorPhase};
pub use source::{decode_nodes, NodeSource};
#[cfg(target_arch = "wasm32")]
pub use web::{HttpNodeSource, WebDom};
