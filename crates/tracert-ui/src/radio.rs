use crate::binder::{select_binder, ClickBinder};
use crate::dom::{ClickHandler, Dom, RadioAttrs};
use crate::error::DomError;
use std::rc::Rc;

/// Declarative description of one radio control.
///
/// Only `container`, `name` and `value` are required. `id` and `css_class`
/// default to empty, `checked` to false and `on_click` to a no-op.
pub struct RadioConfig<N> {
    pub container: N,
    pub name: String,
    pub id: Option<String>,
    pub value: String,
    pub checked: Option<bool>,
    pub on_click: Option<ClickHandler<N>>,
    pub css_class: Option<String>,
}

impl<N> RadioConfig<N> {
    pub fn new(container: N, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            container,
            name: name.into(),
            id: None,
            value: value.into(),
            checked: None,
            on_click: None,
            css_class: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn on_click(mut self, handler: ClickHandler<N>) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }
}

/// What [`RadioFactory::add`] put into the document.
#[derive(Debug, Clone)]
pub struct RadioOption<N> {
    pub value: String,
    pub checked: bool,
    pub element: N,
}

pub fn no_op<N: 'static>() -> ClickHandler<N> {
    Rc::new(|_: &N| {})
}

pub struct RadioFactory<'d, D: Dom> {
    dom: &'d D,
    binder: Box<dyn ClickBinder<D>>,
}

impl<'d, D: Dom> RadioFactory<'d, D> {
    pub fn new(dom: &'d D) -> Self {
        Self {
            dom,
            binder: select_binder(dom),
        }
    }

    pub fn with_binder(dom: &'d D, binder: Box<dyn ClickBinder<D>>) -> Self {
        Self { dom, binder }
    }

    pub fn dom(&self) -> &'d D {
        self.dom
    }

    /// Creates the radio, then appends it and a text label to the container.
    ///
    /// The container is trusted to be attached to the document.
    pub fn add(&self, config: RadioConfig<D::Node>) -> Result<RadioOption<D::Node>, DomError> {
        let RadioConfig {
            container,
            name,
            id,
            value,
            checked,
            on_click,
            css_class,
        } = config;
        let id = id.unwrap_or_default();
        let css_class = css_class.unwrap_or_default();
        let checked = checked.unwrap_or(false);

        let element = self.dom.create_radio(&RadioAttrs {
            name: &name,
            id: &id,
            value: &value,
            class_name: &css_class,
        })?;
        self.binder
            .bind_click(self.dom, &element, on_click.unwrap_or_else(no_op))?;

        self.dom.append_child(&container, &element)?;
        self.dom.append_text(&container, &value)?;
        self.dom.set_checked(&element, checked);

        Ok(RadioOption {
            value,
            checked,
            element,
        })
    }
}
