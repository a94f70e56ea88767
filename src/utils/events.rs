use crate::utils::ModalController;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Surface {
    Backdrop,
    Dialog,
}

/// What the built-in handler of a surface does with a click
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ClickOutcome {
    pub close: bool,
    pub stop_propagation: bool,
}

impl Surface {
    pub fn click_outcome(self) -> ClickOutcome {
        match self {
            Surface::Backdrop => ClickOutcome {
                close: true,
                stop_propagation: false,
            },
            Surface::Dialog => ClickOutcome {
                close: false,
                stop_propagation: true,
            },
        }
    }
}

/// Handle a click that reached `surface`. The built-in outcome is applied
/// first, then the host's `extra` handler for the same surface runs.
pub fn route_click(
    surface: Surface,
    stop_propagation: impl FnOnce(),
    close: impl FnOnce(),
    extra: impl FnOnce(),
) -> ClickOutcome {
    let outcome = surface.click_outcome();
    if outcome.stop_propagation {
        stop_propagation();
    }
    if outcome.close {
        close();
    }
    extra();
    outcome
}

/// Close requested by the backdrop: the host's override when there is one,
/// the controller's own close otherwise.
pub fn close_from_backdrop(override_close: Option<impl FnOnce()>, controller: &ModalController) {
    match override_close {
        Some(close) => close(),
        None => controller.close_modal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{FixedDevice, ManualScheduler, MemoryDocument, ModalConfig, ModalEnvironment};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record(surface: Surface) -> (ClickOutcome, Vec<&'static str>) {
        let calls = RefCell::new(Vec::new());
        let outcome = route_click(
            surface,
            || calls.borrow_mut().push("stop"),
            || calls.borrow_mut().push("close"),
            || calls.borrow_mut().push("extra"),
        );
        (outcome, calls.into_inner())
    }

    fn open_controller() -> (ModalController, Rc<ManualScheduler>) {
        let document = Rc::new(MemoryDocument::new(1024.0).with_root(1009.0));
        let scheduler = Rc::new(ManualScheduler::new());
        let env = ModalEnvironment::new(document, scheduler.clone())
            .with_device(Rc::new(FixedDevice { touch: false }));
        let controller = ModalController::new(ModalConfig::new("test-modal"), env);
        controller.open_modal();
        scheduler.run_all();
        (controller, scheduler)
    }

    #[test]
    fn test_backdrop_click_closes_then_runs_extra() {
        let (outcome, calls) = record(Surface::Backdrop);
        assert!(outcome.close);
        assert_eq!(calls, vec!["close", "extra"]);
    }

    #[test]
    fn test_dialog_click_stops_without_closing() {
        let (outcome, calls) = record(Surface::Dialog);
        assert!(!outcome.close);
        assert_eq!(calls, vec!["stop", "extra"]);
    }

    #[test]
    fn test_backdrop_close_defaults_to_controller() {
        let (controller, _scheduler) = open_controller();
        close_from_backdrop(None::<fn()>, &controller);
        assert!(!controller.is_modal_visible());
    }

    #[test]
    fn test_backdrop_close_override_replaces_controller() {
        let (controller, _scheduler) = open_controller();
        let overridden = RefCell::new(false);
        close_from_backdrop(Some(|| *overridden.borrow_mut() = true), &controller);
        assert!(*overridden.borrow());
        assert!(controller.is_modal_visible());
    }
}
