//! Browser backends: the live document and the HTTP node list.

use crate::dom::{ClickHandler, Dom, RadioAttrs};
use crate::error::{DomError, SourceError};
use crate::source::{decode_nodes, NodeSource};
use gloo_net::http::Request;
use js_sys::{Function, Reflect};
use tracert_model::NodesResponse;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

fn js_error(value: JsValue) -> DomError {
    DomError::Js(format!("{value:?}"))
}

pub struct WebDom {
    document: Document,
    listeners: bool,
}

impl WebDom {
    pub fn from_window() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::Unsupported("window"))?;
        let document = window.document().ok_or(DomError::Unsupported("document"))?;
        let listeners =
            Reflect::has(&document, &JsValue::from_str("addEventListener")).unwrap_or(false);
        Ok(Self {
            document,
            listeners,
        })
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_radio(&self, attrs: &RadioAttrs<'_>) -> Result<Element, DomError> {
        let input: HtmlInputElement = self
            .document
            .create_element("input")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| DomError::Js("input element has the wrong type".to_string()))?;
        input.set_type("radio");
        input.set_name(attrs.name);
        input.set_id(attrs.id);
        input.set_value(attrs.value);
        input.set_class_name(attrs.class_name);
        input.set_inner_text(attrs.value);
        Ok(input.unchecked_into())
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), DomError> {
        parent.append_child(child).map(|_| ()).map_err(js_error)
    }

    fn append_text(&self, parent: &Element, text: &str) -> Result<(), DomError> {
        let node = self.document.create_text_node(text);
        parent.append_child(&node).map(|_| ()).map_err(js_error)
    }

    fn set_checked(&self, node: &Element, checked: bool) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn is_checked(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlInputElement>()
            .map(|input| input.checked())
            .unwrap_or(false)
    }

    fn supports_event_listener(&self) -> bool {
        self.listeners
    }

    fn add_event_listener(
        &self,
        node: &Element,
        event_type: &str,
        handler: ClickHandler<Element>,
    ) -> Result<(), DomError> {
        let target = node.clone();
        let callback = Closure::<dyn FnMut()>::new(move || handler(&target));
        node.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        // Options live as long as the page.
        callback.forget();
        Ok(())
    }

    fn attach_event(
        &self,
        node: &Element,
        event_type: &str,
        property: &str,
        handler: ClickHandler<Element>,
    ) -> Result<(), DomError> {
        let attach: Function = Reflect::get(node, &JsValue::from_str("attachEvent"))
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| DomError::Unsupported("attachEvent"))?;

        let target = node.clone();
        let callback = Closure::<dyn FnMut()>::new(move || handler(&target));
        Reflect::set(node, &JsValue::from_str(property), callback.as_ref()).map_err(js_error)?;
        callback.forget();

        let owner = node.clone();
        let key = JsValue::from_str(property);
        let trampoline = Closure::<dyn FnMut()>::new(move || {
            let stored = Reflect::get(&owner, &key).and_then(|value| value.dyn_into::<Function>());
            if let Ok(function) = stored {
                if let Err(err) = function.call0(&owner) {
                    tracing::warn!(error = %js_error(err), "attached click handler threw");
                }
            }
        });
        attach
            .call2(
                node,
                &JsValue::from_str(&format!("on{event_type}")),
                trampoline.as_ref(),
            )
            .map_err(js_error)?;
        trampoline.forget();
        Ok(())
    }
}

/// Reads the node list over HTTP.
pub struct HttpNodeSource {
    endpoint: String,
}

impl HttpNodeSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl NodeSource for HttpNodeSource {
    async fn fetch_nodes(&self) -> Result<NodesResponse, SourceError> {
        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        if !response.ok() {
            return Err(SourceError::Status(response.status()));
        }
        let text = response
            .text()
            .await
            .map_err(|err| SourceError::Transport(err.to_string()))?;
        decode_nodes(&text)
    }
}
