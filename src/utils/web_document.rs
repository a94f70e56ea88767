use crate::utils::{Document, ModalError, NodeId, Result, ROOT_ELEMENT_ID};
use std::cell::{Cell, RefCell};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

/// The browser page, through `web-sys`
pub struct WebDocument {
    document: web_sys::Document,
    nodes: RefCell<Vec<(NodeId, Element)>>,
    next_node: Cell<u64>,
}

impl WebDocument {
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ModalError::dom("no document available"))?;
        Ok(Self {
            document,
            nodes: RefCell::new(Vec::new()),
            next_node: Cell::new(0),
        })
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    fn element(&self, node: NodeId) -> Option<Element> {
        self.nodes
            .borrow()
            .iter()
            .find(|(id, _)| *id == node)
            .map(|(_, element)| element.clone())
    }
}

impl Document for WebDocument {
    fn set_body_style(&self, property: &str, value: &str) {
        let Some(body) = self.body() else {
            return;
        };
        if let Err(e) = body.style().set_property(property, value) {
            tracing::warn!("Failed to set body {}: {:?}", property, e);
        }
    }

    fn remove_body_style(&self, property: &str) {
        let Some(body) = self.body() else {
            return;
        };
        if let Err(e) = body.style().remove_property(property) {
            tracing::warn!("Failed to remove body {}: {:?}", property, e);
        }
    }

    fn body_style(&self, property: &str) -> Option<String> {
        self.body()?
            .style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn append_to_body(&self, id: &str) -> Result<NodeId> {
        let body = self.body().ok_or_else(|| ModalError::dom("document has no body"))?;
        let element = self
            .document
            .create_element("div")
            .map_err(|e| ModalError::dom(format!("{:?}", e)))?;
        element.set_id(id);
        body.append_child(&element)
            .map_err(|e| ModalError::dom(format!("{:?}", e)))?;

        let node = NodeId(self.next_node.get());
        self.next_node.set(node.0 + 1);
        self.nodes.borrow_mut().push((node, element));
        Ok(node)
    }

    fn body_contains(&self, node: NodeId) -> bool {
        match (self.body(), self.element(node)) {
            (Some(body), Some(element)) => {
                let child: &Node = element.as_ref();
                body.contains(Some(child))
            }
            _ => false,
        }
    }

    fn remove_from_body(&self, node: NodeId) {
        let Some(element) = self.element(node) else {
            return;
        };
        self.nodes.borrow_mut().retain(|(id, _)| *id != node);
        if let Some(body) = self.body() {
            let child: &Node = element.as_ref();
            if let Err(e) = body.remove_child(child) {
                tracing::warn!("Failed to remove mount node: {:?}", e);
            }
        }
    }

    fn viewport_width(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn root_width(&self) -> Option<f64> {
        self.document
            .get_element_by_id(ROOT_ELEMENT_ID)?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|root| f64::from(root.offset_width()))
    }
}
