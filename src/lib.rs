//! Modal dialogs for Dioxus: a portal host that renders into its own body
//! node, and a controller that sequences open/close transitions and locks
//! page scrolling while a modal is up.

pub mod components;
pub mod utils;

pub use components::{use_modal, use_modal_with_callbacks, Modal, SurfaceEvents, UseModal};
pub use utils::{ModalCallbacks, ModalConfig, ModalController, ModalEnvironment, ModalState};
