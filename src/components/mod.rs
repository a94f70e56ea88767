mod environment;
mod modal;
mod portal;
mod use_modal;

pub use environment::{use_modal_environment, DioxusScheduler};
pub use modal::{Modal, SurfaceEvents};
pub use portal::{attach_script, detach_script, ANCHOR_ATTRIBUTE};
pub use use_modal::{use_modal, use_modal_with_callbacks, UseModal};
