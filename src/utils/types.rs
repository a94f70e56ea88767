use crate::utils::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TIMING_FUNCTION: &str = "ease";

/// The two flags driving a modal.
///
/// `active` means a mount node should exist and content be rendered,
/// `visible` means the content sits in its settled, opaque and interactive
/// look. `visible` is only ever true while `active` is.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ModalState {
    pub active: bool,
    pub visible: bool,
}

impl ModalState {
    pub fn initial(active: bool) -> Self {
        Self {
            active,
            visible: false,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionConfig {
    pub duration_ms: u64,
    pub timing_function: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 0,
            timing_function: DEFAULT_TIMING_FUNCTION.to_string(),
        }
    }
}

impl TransitionConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// CSS `transition` value, e.g. `all 300ms ease`
    pub fn css(&self) -> String {
        format!("all {}ms {}", self.duration_ms, self.timing_function)
    }
}

/// Controller configuration. Only `div_id` is required when parsed.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModalConfig {
    pub div_id: String,
    #[serde(default)]
    pub transition_duration: u64,
    #[serde(default = "default_timing_function")]
    pub transition_timing_function: String,
    #[serde(default)]
    pub initial_modal_state: bool,
    // false = the controller manages scroll lock padding
    #[serde(default)]
    pub is_body_overflow_disable: bool,
}

fn default_timing_function() -> String {
    DEFAULT_TIMING_FUNCTION.to_string()
}

impl ModalConfig {
    pub fn new(div_id: impl Into<String>) -> Self {
        Self {
            div_id: div_id.into(),
            transition_duration: 0,
            transition_timing_function: default_timing_function(),
            initial_modal_state: false,
            is_body_overflow_disable: false,
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn with_transition_duration(mut self, duration_ms: u64) -> Self {
        self.transition_duration = duration_ms;
        self
    }

    pub fn with_timing_function(mut self, timing_function: impl Into<String>) -> Self {
        self.transition_timing_function = timing_function.into();
        self
    }

    pub fn with_initial_state(mut self, active: bool) -> Self {
        self.initial_modal_state = active;
        self
    }

    pub fn with_body_overflow_disable(mut self, disable: bool) -> Self {
        self.is_body_overflow_disable = disable;
        self
    }

    pub fn transition(&self) -> TransitionConfig {
        TransitionConfig {
            duration_ms: self.transition_duration,
            timing_function: self.transition_timing_function.clone(),
        }
    }
}
