use regex::Regex;

const MOBILE_USER_AGENT: &str = r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini";

/// Decides whether the runtime is a touch/compact device whose overlay
/// scrollbars do not displace layout.
pub trait DevicePolicy {
    fn is_touch_device(&self) -> bool;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UserAgentPolicy {
    is_mobile: bool,
}

impl UserAgentPolicy {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let is_mobile = Regex::new(MOBILE_USER_AGENT)
            .map(|re| re.is_match(user_agent))
            .unwrap_or(false);
        Self { is_mobile }
    }

    /// Policy for the platform the app was built for
    #[cfg(feature = "web")]
    pub fn detect() -> Self {
        let user_agent = web_sys::window()
            .and_then(|window| window.navigator().user_agent().ok())
            .unwrap_or_default();
        Self::from_user_agent(&user_agent)
    }

    #[cfg(all(not(feature = "web"), feature = "mobile"))]
    pub fn detect() -> Self {
        Self { is_mobile: true }
    }

    #[cfg(all(not(feature = "web"), not(feature = "mobile")))]
    pub fn detect() -> Self {
        Self { is_mobile: false }
    }
}

impl DevicePolicy for UserAgentPolicy {
    fn is_touch_device(&self) -> bool {
        self.is_mobile
    }
}

/// Fixed answer, for tests and hosts that already know
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FixedDevice {
    pub touch: bool,
}

impl DevicePolicy for FixedDevice {
    fn is_touch_device(&self) -> bool {
        self.touch
    }
}
