use super::use_modal_environment;
use crate::utils::{ModalCallbacks, ModalConfig, ModalController, ModalState, TransitionConfig};
use dioxus::prelude::*;

/// Handle returned by [`use_modal`]; pass it to [`super::Modal`].
///
/// Reading the state subscribes the calling component, so it re-renders on
/// every open/close step.
#[derive(Clone, PartialEq)]
pub struct UseModal {
    controller: ModalController,
    state: Signal<ModalState>,
}

impl UseModal {
    pub fn open_modal(&self) {
        self.controller.open_modal();
    }

    pub fn close_modal(&self) {
        self.controller.close_modal();
    }

    pub fn state(&self) -> ModalState {
        *self.state.read()
    }

    pub fn is_modal_active(&self) -> bool {
        self.state().active
    }

    pub fn is_modal_visible(&self) -> bool {
        self.state().visible
    }

    pub fn div_id(&self) -> &str {
        self.controller.div_id()
    }

    pub fn transition(&self) -> &TransitionConfig {
        self.controller.transition()
    }

    pub fn controller(&self) -> &ModalController {
        &self.controller
    }
}

pub fn use_modal(config: ModalConfig) -> UseModal {
    use_modal_with_callbacks(config, ModalCallbacks::default())
}

/// Config and callbacks are read once, when the component first renders.
pub fn use_modal_with_callbacks(config: ModalConfig, callbacks: ModalCallbacks) -> UseModal {
    let env = use_modal_environment();
    let initial = ModalState::initial(config.initial_modal_state);
    let state = use_signal(move || initial);

    let controller = use_hook(move || {
        let controller = ModalController::with_callbacks(config, env, callbacks);
        controller.subscribe(move |next| {
            let mut state = state;
            // The owning scope may be gone when a late task lands
            if let Ok(mut slot) = state.try_write() {
                *slot = next;
            };
        });
        controller
    });

    UseModal { controller, state }
}
