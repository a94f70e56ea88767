use crate::utils::{Result, Style, PADDING_RIGHT};
use std::cell::{Cell, RefCell};

pub const ROOT_ELEMENT_ID: &str = "root";

/// Identifies a node created through [`Document::append_to_body`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(pub u64);

/// The slice of the page a modal touches: inline styles on `body`, the
/// body's child list, and two layout widths.
pub trait Document {
    fn set_body_style(&self, property: &str, value: &str);

    fn remove_body_style(&self, property: &str);

    fn body_style(&self, property: &str) -> Option<String>;

    /// Create a `div` with the given id and append it as the last body child
    fn append_to_body(&self, id: &str) -> Result<NodeId>;

    fn body_contains(&self, node: NodeId) -> bool;

    fn remove_from_body(&self, node: NodeId);

    fn viewport_width(&self) -> f64;

    /// Layout width of the `#root` element, `None` if there is none
    fn root_width(&self) -> Option<f64>;

    /// Width taken by the page scrollbar
    fn scrollbar_gap(&self) -> Option<f64> {
        self.root_width().map(|root| self.viewport_width() - root)
    }

    /// Measure the scrollbar gap and reserve it as right padding on `body`.
    /// Returns false when there was nothing to measure.
    fn reserve_scrollbar_gap(&self) -> bool {
        match self.scrollbar_gap() {
            Some(gap) => {
                self.set_body_style(PADDING_RIGHT, &format!("{}px", gap));
                true
            }
            None => false,
        }
    }

    fn release_scrollbar_gap(&self) {
        self.remove_body_style(PADDING_RIGHT);
    }
}

#[derive(Debug)]
struct BodyNode {
    node: NodeId,
    id: String,
}

#[derive(Debug, Default)]
struct MemoryBody {
    style: Style,
    children: Vec<BodyNode>,
    viewport_width: f64,
    root_width: Option<f64>,
}

/// In-process document, used headless and in tests.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    body: RefCell<MemoryBody>,
    next_node: Cell<u64>,
}

impl MemoryDocument {
    pub fn new(viewport_width: f64) -> Self {
        let document = Self::default();
        document.body.borrow_mut().viewport_width = viewport_width;
        document
    }

    pub fn with_root(self, root_width: f64) -> Self {
        self.set_root_width(Some(root_width));
        self
    }

    pub fn set_root_width(&self, root_width: Option<f64>) {
        self.body.borrow_mut().root_width = root_width;
    }

    pub fn set_viewport_width(&self, viewport_width: f64) {
        self.body.borrow_mut().viewport_width = viewport_width;
    }

    /// Ids of the body children, in document order
    pub fn child_ids(&self) -> Vec<String> {
        self.body
            .borrow()
            .children
            .iter()
            .map(|child| child.id.clone())
            .collect()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.body
            .borrow()
            .children
            .iter()
            .find(|child| child.id == id)
            .map(|child| child.node)
    }

    pub fn body_style_css(&self) -> String {
        self.body.borrow().style.to_css()
    }
}

impl Document for MemoryDocument {
    fn set_body_style(&self, property: &str, value: &str) {
        self.body.borrow_mut().style.set(property, value);
    }

    fn remove_body_style(&self, property: &str) {
        self.body.borrow_mut().style.remove(property);
    }

    fn body_style(&self, property: &str) -> Option<String> {
        self.body.borrow().style.get(property).map(str::to_string)
    }

    fn append_to_body(&self, id: &str) -> Result<NodeId> {
        let node = NodeId(self.next_node.get());
        self.next_node.set(node.0 + 1);
        self.body.borrow_mut().children.push(BodyNode {
            node,
            id: id.to_string(),
        });
        Ok(node)
    }

    fn body_contains(&self, node: NodeId) -> bool {
        self.body
            .borrow()
            .children
            .iter()
            .any(|child| child.node == node)
    }

    fn remove_from_body(&self, node: NodeId) {
        self.body
            .borrow_mut()
            .children
            .retain(|child| child.node != node);
    }

    fn viewport_width(&self) -> f64 {
        self.body.borrow().viewport_width
    }

    fn root_width(&self) -> Option<f64> {
        self.body.borrow().root_width
    }
}
