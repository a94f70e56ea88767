use crate::utils::Document;
use std::cell::RefCell;
use std::rc::Rc;

pub const OVERFLOW_Y: &str = "overflow-y";
pub const PADDING_RIGHT: &str = "padding-right";

#[derive(Debug, Default)]
struct LockCounts {
    holders: usize,
    padding_holders: usize,
}

/// Proof that a controller holds the body lock. Hand it back to
/// [`BodyScrollLock::release`].
#[derive(Debug, PartialEq, Eq)]
pub struct ScrollLease {
    reserves_padding: bool,
}

impl ScrollLease {
    pub fn reserves_padding(&self) -> bool {
        self.reserves_padding
    }
}

/// Reference-counted lock over the body's vertical scroll and scrollbar
/// padding. The first holder writes the styles, the last one out removes
/// them.
pub struct BodyScrollLock {
    document: Rc<dyn Document>,
    counts: RefCell<LockCounts>,
}

impl BodyScrollLock {
    pub fn new(document: Rc<dyn Document>) -> Self {
        Self {
            document,
            counts: RefCell::new(LockCounts::default()),
        }
    }

    pub fn document(&self) -> &Rc<dyn Document> {
        &self.document
    }

    pub fn holders(&self) -> usize {
        self.counts.borrow().holders
    }

    /// Lock scrolling. With `reserve_padding`, the scrollbar gap is measured
    /// before the lock hides the scrollbar and reserved as right padding on
    /// the body.
    pub fn acquire(&self, reserve_padding: bool) -> ScrollLease {
        let mut counts = self.counts.borrow_mut();

        let reserves_padding = reserve_padding && self.reserve_padding(&mut counts);
        if counts.holders == 0 {
            self.document.set_body_style(OVERFLOW_Y, "hidden");
        }
        counts.holders += 1;

        tracing::debug!(
            message = "scroll_lock.acquire",
            holders = counts.holders,
            reserves_padding
        );

        ScrollLease { reserves_padding }
    }

    pub fn release(&self, lease: ScrollLease) {
        let mut counts = self.counts.borrow_mut();

        if lease.reserves_padding {
            counts.padding_holders = counts.padding_holders.saturating_sub(1);
            if counts.padding_holders == 0 {
                self.document.release_scrollbar_gap();
            }
        }

        counts.holders = counts.holders.saturating_sub(1);
        if counts.holders == 0 {
            self.document.remove_body_style(OVERFLOW_Y);
        }
        tracing::debug!(message = "scroll_lock.release", holders = counts.holders);
    }

    fn reserve_padding(&self, counts: &mut LockCounts) -> bool {
        if counts.padding_holders > 0 {
            counts.padding_holders += 1;
            return true;
        }

        if self.document.reserve_scrollbar_gap() {
            counts.padding_holders = 1;
            true
        } else {
            tracing::warn!("No #root element to measure, skipping scrollbar padding");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{MemoryDocument, NodeId, Result};

    /// Root fills the viewport once the scrollbar is hidden
    struct ScrollbarDocument {
        inner: MemoryDocument,
        scrollbar: f64,
    }

    impl Document for ScrollbarDocument {
        fn set_body_style(&self, property: &str, value: &str) {
            self.inner.set_body_style(property, value);
        }

        fn remove_body_style(&self, property: &str) {
            self.inner.remove_body_style(property);
        }

        fn body_style(&self, property: &str) -> Option<String> {
            self.inner.body_style(property)
        }

        fn append_to_body(&self, id: &str) -> Result<NodeId> {
            self.inner.append_to_body(id)
        }

        fn body_contains(&self, node: NodeId) -> bool {
            self.inner.body_contains(node)
        }

        fn remove_from_body(&self, node: NodeId) {
            self.inner.remove_from_body(node);
        }

        fn viewport_width(&self) -> f64 {
            self.inner.viewport_width()
        }

        fn root_width(&self) -> Option<f64> {
            let viewport = self.viewport_width();
            match self.body_style(OVERFLOW_Y).as_deref() {
                Some("hidden") => Some(viewport),
                _ => Some(viewport - self.scrollbar),
            }
        }
    }

    fn lock_over(document: &Rc<MemoryDocument>) -> BodyScrollLock {
        BodyScrollLock::new(document.clone())
    }

    #[test]
    fn test_acquire_and_release_padding() {
        let document = Rc::new(MemoryDocument::new(1024.0).with_root(1009.0));
        let lock = lock_over(&document);

        let lease = lock.acquire(true);
        assert!(lease.reserves_padding());
        assert_eq!(document.body_style(OVERFLOW_Y).as_deref(), Some("hidden"));
        assert_eq!(document.body_style(PADDING_RIGHT).as_deref(), Some("15px"));

        lock.release(lease);
        assert_eq!(document.body_style(OVERFLOW_Y), None);
        assert_eq!(document.body_style(PADDING_RIGHT), None);
    }

    #[test]
    fn test_gap_measured_while_scrollbar_shows() {
        let document = Rc::new(ScrollbarDocument {
            inner: MemoryDocument::new(1024.0),
            scrollbar: 15.0,
        });
        let lock = BodyScrollLock::new(document.clone());

        let lease = lock.acquire(true);
        assert_eq!(document.body_style(PADDING_RIGHT).as_deref(), Some("15px"));
        assert_eq!(document.body_style(OVERFLOW_Y).as_deref(), Some("hidden"));

        lock.release(lease);
        assert_eq!(document.body_style(PADDING_RIGHT), None);
    }

    #[test]
    fn test_without_padding_reservation() {
        let document = Rc::new(MemoryDocument::new(1024.0).with_root(1009.0));
        let lock = lock_over(&document);

        let lease = lock.acquire(false);
        assert_eq!(document.body_style(PADDING_RIGHT), None);
        lock.release(lease);
        assert_eq!(document.body_style(OVERFLOW_Y), None);
    }

    #[test]
    fn test_missing_root_degrades_silently() {
        let document = Rc::new(MemoryDocument::new(1024.0));
        let lock = lock_over(&document);

        let lease = lock.acquire(true);
        assert!(!lease.reserves_padding());
        assert_eq!(document.body_style(PADDING_RIGHT), None);
        assert_eq!(document.body_style(OVERFLOW_Y).as_deref(), Some("hidden"));
    }

    #[test]
    fn test_last_holder_unlocks() {
        let document = Rc::new(MemoryDocument::new(1024.0).with_root(1000.0));
        let lock = lock_over(&document);

        let first = lock.acquire(true);
        let second = lock.acquire(true);
        assert_eq!(lock.holders(), 2);

        lock.release(first);
        assert_eq!(document.body_style(OVERFLOW_Y).as_deref(), Some("hidden"));
        assert_eq!(document.body_style(PADDING_RIGHT).as_deref(), Some("24px"));

        lock.release(second);
        assert_eq!(document.body_style(OVERFLOW_Y), None);
        assert_eq!(document.body_style(PADDING_RIGHT), None);
    }

    #[test]
    fn test_release_does_not_touch_foreign_padding() {
        let document = Rc::new(MemoryDocument::new(1024.0));
        document.set_body_style(PADDING_RIGHT, "40px");
        let lock = lock_over(&document);

        let lease = lock.acquire(false);
        lock.release(lease);
        assert_eq!(document.body_style(PADDING_RIGHT).as_deref(), Some("40px"));
    }
}
