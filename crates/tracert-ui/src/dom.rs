use crate::error::DomError;
use std::rc::Rc;

/// Click callback; receives the control that was clicked.
pub type ClickHandler<N> = Rc<dyn Fn(&N)>;

/// Attributes of one radio input.
#[derive(Debug, Clone, Copy)]
pub struct RadioAttrs<'a> {
    pub name: &'a str,
    pub id: &'a str,
    pub value: &'a str,
    pub class_name: &'a str,
}

/// The slice of a document the widget needs.
///
/// Implementations exist for the browser (`web`, wasm32 only) and for an
/// in-memory tree used natively and in tests.
pub trait Dom {
    type Node: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn create_radio(&self, attrs: &RadioAttrs<'_>) -> Result<Self::Node, DomError>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    fn append_text(&self, parent: &Self::Node, text: &str) -> Result<(), DomError>;

    fn set_checked(&self, node: &Self::Node, checked: bool);

    fn is_checked(&self, node: &Self::Node) -> bool;

    /// Whether nodes expose `addEventListener`.
    fn supports_event_listener(&self) -> bool;

    fn add_event_listener(
        &self,
        node: &Self::Node,
        event_type: &str,
        handler: ClickHandler<Self::Node>,
    ) -> Result<(), DomError>;

    /// Legacy registration: stores `handler` on the node under `property`
    /// and attaches a trampoline for `on<event_type>` that looks the
    /// property up when the event fires.
    fn attach_event(
        &self,
        node: &Self::Node,
        event_type: &str,
        property: &str,
        handler: ClickHandler<Self::Node>,
    ) -> Result<(), DomError>;
}
