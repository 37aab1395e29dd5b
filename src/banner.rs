//! The status message banner and its hide timer.

use gloo_timers::callback::Timeout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerMessage {
    pub kind: BannerKind,
    pub text: String,
}

impl BannerMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

/// Last message shown plus whether it is currently visible. Hiding keeps the
/// text and styling so the element only gains `hidden`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Banner {
    message: Option<BannerMessage>,
    visible: bool,
}

impl Banner {
    pub fn show(&mut self, message: BannerMessage) {
        self.message = Some(message);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> Option<&BannerMessage> {
        self.message.as_ref()
    }

    /// The visible message, if any.
    pub fn current(&self) -> Option<&BannerMessage> {
        self.message.as_ref().filter(|_| self.visible)
    }
}

/// One-shot delayed callbacks. Dropping a handle cancels its callback.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through `gloo-timers`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Holds at most one pending hide callback for a banner.
pub struct BannerTimer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> BannerTimer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Schedules `on_expire` after the delay. A callback armed earlier and
    /// not yet fired is cancelled first.
    pub fn arm(&mut self, on_expire: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.scheduler.schedule(self.delay_ms, Box::new(on_expire));
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        // Dropping the handle cancels it.
        self.pending = None;
    }
}
