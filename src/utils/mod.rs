mod controller;
mod device;
mod document;
mod error;
mod eval_document;
mod events;
mod mount;
mod scheduler;
mod scroll_lock;
mod settings;
mod style;
mod types;
#[cfg(feature = "web")]
mod web_document;

pub use controller::{Callback, Listener, ModalCallbacks, ModalController, ModalEnvironment};
pub use device::{DevicePolicy, FixedDevice, UserAgentPolicy};
pub use document::{Document, MemoryDocument, NodeId, ROOT_ELEMENT_ID};
pub use error::{ModalError, Result};
pub use eval_document::{js_string, EvalDocument};
pub use events::{close_from_backdrop, route_click, ClickOutcome, Surface};
pub use mount::{MountHandle, MountPhase, PortalMount};
pub use scheduler::{ManualScheduler, Scheduler, Task};
pub use scroll_lock::{BodyScrollLock, ScrollLease, OVERFLOW_Y, PADDING_RIGHT};
pub use settings::Settings;
pub use style::*;
pub use types::{ModalConfig, ModalState, TransitionConfig, DEFAULT_TIMING_FUNCTION};
#[cfg(feature = "web")]
pub use web_document::WebDocument;
