use crate::utils::{Document, MemoryDocument, NodeId, Result, PADDING_RIGHT, ROOT_ELEMENT_ID};
use dioxus::document;

const PADDING_MARKER: &str = "portalModalPadding";

/// Document driven through `dioxus::document::eval`, for renderers without
/// direct DOM access (desktop and mobile webviews).
///
/// Writes are mirrored into an in-process shadow so reads stay synchronous.
/// The scrollbar gap is measured by the page itself when padding is
/// reserved. The widths reported to Rust come from the last
/// [`EvalDocument::refresh_metrics`].
#[derive(Debug, Default)]
pub struct EvalDocument {
    shadow: MemoryDocument,
}

impl EvalDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn refresh_metrics(&self) {
        match document::eval(&metrics_script()).join::<(f64, Option<f64>)>().await {
            Ok((viewport_width, root_width)) => {
                self.shadow.set_viewport_width(viewport_width);
                self.shadow.set_root_width(root_width);
            }
            Err(e) => tracing::warn!("Failed to measure layout: {:?}", e),
        }
    }

    fn run(script: &str) {
        let _ = document::eval(script);
    }
}

impl Document for EvalDocument {
    fn set_body_style(&self, property: &str, value: &str) {
        self.shadow.set_body_style(property, value);
        Self::run(&format!(
            "document.body.style.setProperty({}, {});",
            js_string(property),
            js_string(value)
        ));
    }

    fn remove_body_style(&self, property: &str) {
        self.shadow.remove_body_style(property);
        Self::run(&format!(
            "document.body.style.removeProperty({});",
            js_string(property)
        ));
    }

    fn body_style(&self, property: &str) -> Option<String> {
        self.shadow.body_style(property)
    }

    fn append_to_body(&self, id: &str) -> Result<NodeId> {
        let node = self.shadow.append_to_body(id)?;
        Self::run(&append_script(id, node));
        Ok(node)
    }

    fn body_contains(&self, node: NodeId) -> bool {
        self.shadow.body_contains(node)
    }

    fn remove_from_body(&self, node: NodeId) {
        self.shadow.remove_from_body(node);
        Self::run(&format!(
            "document.querySelector('[data-portal-node=\"{}\"]')?.remove();",
            node.0
        ));
    }

    fn viewport_width(&self) -> f64 {
        self.shadow.viewport_width()
    }

    fn root_width(&self) -> Option<f64> {
        self.shadow.root_width()
    }

    // Scripts run in the order they are sent, so this measures before the
    // overflow lock that follows it.
    fn reserve_scrollbar_gap(&self) -> bool {
        if let Some(gap) = self.shadow.scrollbar_gap() {
            self.shadow.set_body_style(PADDING_RIGHT, &format!("{}px", gap));
        }
        Self::run(&reserve_script());
        true
    }

    fn release_scrollbar_gap(&self) {
        self.shadow.remove_body_style(PADDING_RIGHT);
        Self::run(&release_script());
    }
}

fn append_script(id: &str, node: NodeId) -> String {
    format!(
        "const node = document.createElement('div'); node.id = {}; node.dataset.portalNode = '{}'; document.body.appendChild(node);",
        js_string(id),
        node.0
    )
}

fn reserve_script() -> String {
    format!(
        "const root = document.getElementById({root}); if (root) {{ document.body.style.setProperty({padding}, (window.innerWidth - root.offsetWidth) + 'px'); document.body.dataset.{marker} = '1'; }}",
        root = js_string(ROOT_ELEMENT_ID),
        padding = js_string(PADDING_RIGHT),
        marker = PADDING_MARKER,
    )
}

// Only padding this document wrote is removed
fn release_script() -> String {
    format!(
        "if (document.body.dataset.{marker}) {{ document.body.style.removeProperty({padding}); delete document.body.dataset.{marker}; }}",
        padding = js_string(PADDING_RIGHT),
        marker = PADDING_MARKER,
    )
}

fn metrics_script() -> String {
    format!(
        "const root = document.getElementById({}); return [window.innerWidth, root ? root.offsetWidth : null];",
        js_string(ROOT_ELEMENT_ID)
    )
}

/// Double-quoted JavaScript string literal
pub fn js_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '<' => quoted.push_str("\\u003c"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
