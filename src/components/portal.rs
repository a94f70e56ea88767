use crate::utils::js_string;
use dioxus::document;

/// Attribute marking the in-place wrapper a modal renders into before its
/// content is moved under the mount node.
pub const ANCHOR_ATTRIBUTE: &str = "data-modal-anchor";

/// Move the anchored subtree under the mount node
pub fn attach(div_id: &str) {
    let _ = document::eval(&attach_script(div_id));
}

/// Hand the subtree back to its anchor so the renderer keeps finding the
/// nodes it owns after the mount node is removed.
pub fn detach(div_id: &str) {
    let _ = document::eval(&detach_script(div_id));
}

fn lookup(div_id: &str) -> String {
    let id = js_string(div_id);
    format!(
        "const node = document.getElementById({id}); const anchor = document.querySelector('[{ANCHOR_ATTRIBUTE}=' + JSON.stringify({id}) + ']');"
    )
}

pub fn attach_script(div_id: &str) -> String {
    format!(
        "{} if (node && anchor) {{ while (anchor.firstChild) node.appendChild(anchor.firstChild); }}",
        lookup(div_id)
    )
}

pub fn detach_script(div_id: &str) -> String {
    format!(
        "{} if (node && anchor) {{ while (node.firstChild) anchor.appendChild(node.firstChild); }}",
        lookup(div_id)
    )
}
