use crate::utils::{
    BodyScrollLock, DevicePolicy, Document, ModalConfig, ModalState, Scheduler, ScrollLease,
    TransitionConfig, UserAgentPolicy,
};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

pub type Callback = Rc<dyn Fn()>;
pub type Listener = Rc<dyn Fn(ModalState)>;

/// Everything a controller needs from the outside world. Controllers that
/// share an environment share one body lock.
#[derive(Clone)]
pub struct ModalEnvironment {
    pub body_lock: Rc<BodyScrollLock>,
    pub scheduler: Rc<dyn Scheduler>,
    pub device: Rc<dyn DevicePolicy>,
}

impl ModalEnvironment {
    pub fn new(document: Rc<dyn Document>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            body_lock: Rc::new(BodyScrollLock::new(document)),
            scheduler,
            device: Rc::new(UserAgentPolicy::detect()),
        }
    }

    pub fn with_device(mut self, device: Rc<dyn DevicePolicy>) -> Self {
        self.device = device;
        self
    }

    pub fn document(&self) -> &Rc<dyn Document> {
        self.body_lock.document()
    }
}

#[derive(Clone, Default)]
pub struct ModalCallbacks {
    pub on_open_modal: Option<Callback>,
    pub on_close_modal: Option<Callback>,
}

impl ModalCallbacks {
    pub fn on_open(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_open_modal = Some(Rc::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_close_modal = Some(Rc::new(callback));
        self
    }
}

struct Inner {
    config: ModalConfig,
    transition: TransitionConfig,
    env: ModalEnvironment,
    callbacks: ModalCallbacks,
    state: Cell<ModalState>,
    // Bumped by every open/close; deferred work only applies while current
    token: Cell<u64>,
    lease: RefCell<Option<ScrollLease>>,
    listeners: RefCell<Vec<Listener>>,
}

/// Open/close lifecycle of one modal.
///
/// Opening marks the modal active at once and visible on the next tick, so a
/// freshly mounted node can transition from its hidden look. Closing hides it
/// at once and deactivates it after the transition duration.
#[derive(Clone)]
pub struct ModalController {
    inner: Rc<Inner>,
}

impl ModalController {
    pub fn new(config: ModalConfig, env: ModalEnvironment) -> Self {
        Self::with_callbacks(config, env, ModalCallbacks::default())
    }

    pub fn with_callbacks(
        config: ModalConfig,
        env: ModalEnvironment,
        callbacks: ModalCallbacks,
    ) -> Self {
        let state = ModalState::initial(config.initial_modal_state);
        Self {
            inner: Rc::new(Inner {
                transition: config.transition(),
                config,
                env,
                callbacks,
                state: Cell::new(state),
                token: Cell::new(0),
                lease: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn open_modal(&self) {
        let inner = &self.inner;
        let token = inner.next_token();
        tracing::debug!(message = "modal.open", div_id = %inner.config.div_id, token);

        inner.update(|state| state.active = true);
        if let Some(on_open) = &inner.callbacks.on_open_modal {
            on_open();
        }
        inner.lock_body();

        let weak = Rc::downgrade(inner);
        inner.env.scheduler.schedule(
            Duration::ZERO,
            Box::new(move || {
                Inner::run_if_current(&weak, token, |inner| {
                    inner.update(|state| state.visible = true);
                });
            }),
        );
    }

    pub fn close_modal(&self) {
        let inner = &self.inner;
        let token = inner.next_token();
        tracing::debug!(message = "modal.close", div_id = %inner.config.div_id, token);

        inner.update(|state| state.visible = false);

        let weak = Rc::downgrade(inner);
        inner.env.scheduler.schedule(
            inner.transition.duration(),
            Box::new(move || {
                Inner::run_if_current(&weak, token, |inner| {
                    if let Some(on_close) = &inner.callbacks.on_close_modal {
                        on_close();
                    }
                    // The callback may have reopened the modal
                    if inner.token.get() != token {
                        return;
                    }
                    inner.update(|state| *state = ModalState::default());
                    inner.unlock_body();
                });
            }),
        );
    }

    /// Called with the new state after every change. A listener added while
    /// listeners run first hears the next change.
    pub fn subscribe(&self, listener: impl Fn(ModalState) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn state(&self) -> ModalState {
        self.inner.state.get()
    }

    pub fn is_modal_active(&self) -> bool {
        self.state().active
    }

    pub fn is_modal_visible(&self) -> bool {
        self.state().visible
    }

    pub fn div_id(&self) -> &str {
        &self.inner.config.div_id
    }

    pub fn transition(&self) -> &TransitionConfig {
        &self.inner.transition
    }

    pub fn config(&self) -> &ModalConfig {
        &self.inner.config
    }

    pub fn environment(&self) -> &ModalEnvironment {
        &self.inner.env
    }
}

impl PartialEq for ModalController {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for ModalController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalController")
            .field("div_id", &self.inner.config.div_id)
            .field("state", &self.state())
            .finish()
    }
}

impl Inner {
    fn next_token(&self) -> u64 {
        let token = self.token.get() + 1;
        self.token.set(token);
        token
    }

    fn run_if_current(weak: &Weak<Inner>, token: u64, apply: impl FnOnce(&Inner)) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if inner.token.get() != token {
            tracing::debug!(
                message = "modal.stale_task",
                div_id = %inner.config.div_id,
                token,
                current = inner.token.get()
            );
            return;
        }
        apply(&inner);
    }

    fn update(&self, change: impl FnOnce(&mut ModalState)) {
        let mut state = self.state.get();
        change(&mut state);
        if state == self.state.get() {
            return;
        }
        self.state.set(state);
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener(state);
        }
    }

    fn lock_body(&self) {
        let mut lease = self.lease.borrow_mut();
        if lease.is_some() {
            return;
        }
        let reserve_padding =
            !self.config.is_body_overflow_disable && !self.env.device.is_touch_device();
        *lease = Some(self.env.body_lock.acquire(reserve_padding));
    }

    fn unlock_body(&self) {
        if let Some(lease) = self.lease.borrow_mut().take() {
            self.env.body_lock.release(lease);
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.unlock_body();
    }
}
