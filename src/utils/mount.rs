use crate::utils::{Document, NodeId};

/// Where a host is in attaching its mount node.
///
/// `Mounting` and `Unmounting` are the renders that observed a change of
/// `active` before the effect step has touched the document.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MountPhase {
    #[default]
    Unmounted,
    Mounting,
    Mounted,
    Unmounting,
}

/// The one body node a host created
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MountHandle {
    pub div_id: String,
    pub node: NodeId,
}

/// Two-phase mount bookkeeping for a portal host: `observe` on render,
/// `sync` in the effect that follows it, `teardown` when the host goes away.
#[derive(Debug)]
pub struct PortalMount {
    div_id: String,
    phase: MountPhase,
    handle: Option<MountHandle>,
}

impl PortalMount {
    pub fn new(div_id: impl Into<String>) -> Self {
        Self {
            div_id: div_id.into(),
            phase: MountPhase::Unmounted,
            handle: None,
        }
    }

    pub fn div_id(&self) -> &str {
        &self.div_id
    }

    pub fn phase(&self) -> MountPhase {
        self.phase
    }

    pub fn handle(&self) -> Option<&MountHandle> {
        self.handle.as_ref()
    }

    pub fn observe(&mut self, active: bool) -> MountPhase {
        self.phase = match (self.phase, active) {
            (MountPhase::Unmounted, true) => MountPhase::Mounting,
            (MountPhase::Mounting, false) => MountPhase::Unmounted,
            (MountPhase::Mounted, false) => MountPhase::Unmounting,
            (MountPhase::Unmounting, true) => MountPhase::Mounted,
            (phase, _) => phase,
        };
        self.phase
    }

    /// Apply the pending transition to the document. Returns true when the
    /// handle changed and the host has to render again.
    pub fn sync(&mut self, document: &dyn Document) -> bool {
        match self.phase {
            MountPhase::Mounting => {
                if self.handle.is_some() {
                    self.phase = MountPhase::Mounted;
                    return false;
                }
                match document.append_to_body(&self.div_id) {
                    Ok(node) => {
                        tracing::debug!(message = "portal.mount", div_id = %self.div_id);
                        self.handle = Some(MountHandle {
                            div_id: self.div_id.clone(),
                            node,
                        });
                        self.phase = MountPhase::Mounted;
                        true
                    }
                    Err(e) => {
                        tracing::warn!("Failed to create mount node #{}: {}", self.div_id, e);
                        self.phase = MountPhase::Unmounted;
                        false
                    }
                }
            }
            MountPhase::Unmounting => {
                let changed = self.release(document);
                self.phase = MountPhase::Unmounted;
                changed
            }
            MountPhase::Unmounted | MountPhase::Mounted => false,
        }
    }

    /// `observe` followed by `sync`
    pub fn reconcile(&mut self, active: bool, document: &dyn Document) -> bool {
        self.observe(active);
        self.sync(document)
    }

    pub fn teardown(&mut self, document: &dyn Document) {
        self.release(document);
        self.phase = MountPhase::Unmounted;
    }

    /// Render gate
    pub fn should_render(&self, active: bool) -> bool {
        active && self.handle.is_some()
    }

    fn release(&mut self, document: &dyn Document) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        if document.body_contains(handle.node) {
            document.remove_from_body(handle.node);
            tracing::debug!(message = "portal.unmount", div_id = %handle.div_id);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryDocument;

    #[test]
    fn test_first_active_render_is_gated() {
        let document = MemoryDocument::new(1024.0);
        let mut mount = PortalMount::new("test-modal");

        assert_eq!(mount.observe(true), MountPhase::Mounting);
        assert!(!mount.should_render(true));
        assert!(document.child_ids().is_empty());

        assert!(mount.sync(&document));
        assert_eq!(mount.phase(), MountPhase::Mounted);
        assert!(mount.should_render(true));
        assert_eq!(document.child_ids(), vec!["test-modal"]);
    }

    #[test]
    fn test_inactive_removes_node() {
        let document = MemoryDocument::new(1024.0);
        let mut mount = PortalMount::new("test-modal");
        mount.reconcile(true, &document);

        assert_eq!(mount.observe(false), MountPhase::Unmounting);
        assert!(!mount.should_render(false));
        assert!(mount.sync(&document));
        assert_eq!(mount.phase(), MountPhase::Unmounted);
        assert!(mount.handle().is_none());
        assert!(document.child_ids().is_empty());
    }

    #[test]
    fn test_repeated_sync_is_noop() {
        let document = MemoryDocument::new(1024.0);
        let mut mount = PortalMount::new("test-modal");

        assert!(mount.reconcile(true, &document));
        assert!(!mount.reconcile(true, &document));
        assert_eq!(document.child_ids().len(), 1);

        assert!(mount.reconcile(false, &document));
        assert!(!mount.reconcile(false, &document));
    }

    #[test]
    fn test_withdrawn_activation_never_mounts() {
        let document = MemoryDocument::new(1024.0);
        let mut mount = PortalMount::new("test-modal");

        mount.observe(true);
        mount.observe(false);
        assert!(!mount.sync(&document));
        assert!(document.child_ids().is_empty());
    }

    #[test]
    fn test_reactivated_before_unmount_keeps_node() {
        let document = MemoryDocument::new(1024.0);
        let mut mount = PortalMount::new("test-modal");
        mount.reconcile(true, &document);
        let node = mount.handle().map(|h| h.node);

        mount.observe(false);
        mount.observe(true);
        assert!(!mount.sync(&document));
        assert_eq!(mount.handle().map(|h| h.node), node);
    }

    #[test]
    fn test_teardown_removes_live_node() {
        let document = MemoryDocument::new(1024.0);
        let mut mount = PortalMount::new("test-modal");
        mount.reconcile(true, &document);

        mount.teardown(&document);
        assert!(document.get_element_by_id("test-modal").is_none());

        // Second teardown has nothing to do
        mount.teardown(&document);
    }

    #[test]
    fn test_node_removed_externally() {
        let document = MemoryDocument::new(1024.0);
        let mut mount = PortalMount::new("test-modal");
        mount.reconcile(true, &document);
        if let Some(handle) = mount.handle() {
            document.remove_from_body(handle.node);
        }

        assert!(mount.reconcile(false, &document));
        assert!(mount.handle().is_none());
    }

    #[test]
    fn test_appends_after_existing_children() {
        let document = MemoryDocument::new(1024.0);
        document.append_to_body("root").unwrap();
        let mut mount = PortalMount::new("test-modal");
        mount.reconcile(true, &document);
        assert_eq!(document.child_ids(), vec!["root", "test-modal"]);
    }
}
