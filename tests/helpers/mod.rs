//! Test helpers
//!
//! In-memory stand-ins for the activities backend and for the browser timer
//! queue, plus a harness that wires them to a `BoardController`.

pub mod fake_backend;
pub mod manual_clock;
pub mod test_data;

pub use fake_backend::*;
pub use manual_clock::*;
pub use test_data::*;

use std::cell::RefCell;
use std::rc::Rc;

use activity_board::board::SignupForm;
use activity_board::{BoardAction, BoardController, BoardState};

/// A controller plus the state its actions are folded into, the way the
/// `use_reducer` hook does it in the browser.
pub struct Harness {
    pub state: Rc<RefCell<BoardState>>,
    pub backend: FakeBackend,
    pub clock: ManualClock,
    pub controller: BoardController<FakeBackend, ManualClock>,
}

impl Harness {
    pub fn new(backend: FakeBackend) -> Self {
        let state = Rc::new(RefCell::new(BoardState::default()));
        let clock = ManualClock::default();
        let sink = state.clone();
        let controller = BoardController::new(
            backend.clone(),
            clock.clone(),
            activity_board::config::DEFAULT_MESSAGE_TIMEOUT_MS,
            move |action| {
                let next = sink.borrow().apply(action);
                *sink.borrow_mut() = next;
            },
        );
        Self {
            state,
            backend,
            clock,
            controller,
        }
    }

    /// Harness over the sample roster, already loaded.
    pub fn loaded() -> Self {
        let harness = Self::new(FakeBackend::with_activities(sample_activities()));
        futures::executor::block_on(harness.controller.load_activities());
        harness
    }

    pub fn dispatch(&self, action: BoardAction) {
        let next = self.state.borrow().apply(action);
        *self.state.borrow_mut() = next;
    }

    pub fn fill_form(&self, email: &str, activity: &str) {
        self.dispatch(BoardAction::EmailChanged(email.to_string()));
        self.dispatch(BoardAction::ActivityChanged(activity.to_string()));
    }

    /// Submits whatever the form currently holds.
    pub fn submit(&self) {
        let SignupForm { email, activity } = self.state.borrow().form.clone();
        futures::executor::block_on(self.controller.handle_signup(&email, &activity));
    }

    pub fn unsubscribe(&self, email: &str, activity: &str) {
        futures::executor::block_on(self.controller.handle_unsubscribe(email, activity));
    }

    pub fn snapshot(&self) -> BoardState {
        self.state.borrow().clone()
    }
}
