use crate::dom::{ClickHandler, Dom};
use crate::error::DomError;
use std::sync::atomic::{AtomicU64, Ordering};

const CLICK: &str = "click";

static NEXT_HANDLER: AtomicU64 = AtomicU64::new(0);

/// Registers click handlers on nodes of one kind of document.
pub trait ClickBinder<D: Dom> {
    fn bind_click(
        &self,
        dom: &D,
        node: &D::Node,
        handler: ClickHandler<D::Node>,
    ) -> Result<(), DomError>;
}

/// Binds through `addEventListener`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListenerBinder;

impl<D: Dom> ClickBinder<D> for ListenerBinder {
    fn bind_click(
        &self,
        dom: &D,
        node: &D::Node,
        handler: ClickHandler<D::Node>,
    ) -> Result<(), DomError> {
        dom.add_event_listener(node, CLICK, handler)
    }
}

/// Binds through `attachEvent`.
///
/// Each registration stores its handler under its own property,
/// `"e" + type + handler name`, so two handlers for the same event on the
/// same node never overwrite each other.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyBinder;

impl LegacyBinder {
    pub fn property_name(event_type: &str, handler_name: &str) -> String {
        format!("e{event_type}{handler_name}")
    }

    fn next_handler_name() -> String {
        format!("handler{}", NEXT_HANDLER.fetch_add(1, Ordering::Relaxed))
    }
}

impl<D: Dom> ClickBinder<D> for LegacyBinder {
    fn bind_click(
        &self,
        dom: &D,
        node: &D::Node,
        handler: ClickHandler<D::Node>,
    ) -> Result<(), DomError> {
        let property = Self::property_name(CLICK, &Self::next_handler_name());
        dom.attach_event(node, CLICK, &property, handler)
    }
}

/// Picks the binder the document supports. Call once per document.
pub fn select_binder<D: Dom>(dom: &D) -> Box<dyn ClickBinder<D>> {
    if dom.supports_event_listener() {
        Box::new(ListenerBinder)
    } else {
        tracing::debug!("addEventListener unavailable, using attachEvent");
        Box::new(LegacyBinder)
    }
}
