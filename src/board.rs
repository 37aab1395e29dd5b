//! Board state and the controller that drives it.
//!
//! [`BoardState`] is a pure reducer over [`BoardAction`]s. [`BoardController`]
//! performs the network calls and feeds their results back as actions, so
//! the same controller runs against `fetch` in the browser and against an
//! in-memory backend in tests.

use std::cell::RefCell;
use std::rc::Rc;

use yew::Reducible;

use crate::api::{ActivitiesApi, Operation, Reply};
use crate::banner::{Banner, BannerMessage, BannerTimer, Scheduler};
use crate::error::Result;
use crate::logging;
use crate::model::Activities;

/// What the activities list region shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Ready(Activities),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardState {
    pub list: ListState,
    /// Select options. Only replaced by a successful load.
    pub options: Vec<String>,
    pub form: SignupForm,
    pub banner: Banner,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    Loaded(Activities),
    LoadFailed,
    Show(BannerMessage),
    Hide,
    EmailChanged(String),
    ActivityChanged(String),
    ResetForm,
}

impl BoardState {
    pub fn apply(&self, action: BoardAction) -> BoardState {
        let mut next = self.clone();
        match action {
            BoardAction::Loaded(activities) => {
                next.options = activities.names();
                if !next.options.contains(&next.form.activity) {
                    next.form.activity = next.first_option();
                }
                next.list = ListState::Ready(activities);
            }
            BoardAction::LoadFailed => next.list = ListState::Failed,
            BoardAction::Show(message) => next.banner.show(message),
            BoardAction::Hide => next.banner.hide(),
            BoardAction::EmailChanged(email) => next.form.email = email,
            BoardAction::ActivityChanged(activity) => next.form.activity = activity,
            BoardAction::ResetForm => {
                next.form = SignupForm {
                    email: String::new(),
                    activity: next.first_option(),
                };
            }
        }
        next
    }

    fn first_option(&self) -> String {
        self.options.first().cloned().unwrap_or_default()
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Result of a signup/unsubscribe round trip, before it touches any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: BannerMessage,
    pub reset_form: bool,
    pub reload: bool,
}

pub fn outcome_for(op: Operation, result: &Result<Reply>) -> Outcome {
    match result {
        Ok(Reply::Accepted { message }) => Outcome {
            message: BannerMessage::success(message.clone()),
            reset_form: op == Operation::Signup,
            reload: true,
        },
        Ok(Reply::Rejected { detail, .. }) => Outcome {
            message: BannerMessage::error(
                detail
                    .clone()
                    .unwrap_or_else(|| op.fallback_detail().to_string()),
            ),
            reset_form: false,
            reload: false,
        },
        Err(_) => Outcome {
            message: BannerMessage::error(op.failure_text()),
            reset_form: false,
            reload: false,
        },
    }
}

type Dispatch = Rc<dyn Fn(BoardAction)>;

pub struct BoardController<A, S: Scheduler> {
    api: A,
    timer: RefCell<BannerTimer<S>>,
    dispatch: Dispatch,
}

impl<A: ActivitiesApi, S: Scheduler> BoardController<A, S> {
    pub fn new(
        api: A,
        scheduler: S,
        message_timeout_ms: u32,
        dispatch: impl Fn(BoardAction) + 'static,
    ) -> Self {
        Self {
            api,
            timer: RefCell::new(BannerTimer::new(scheduler, message_timeout_ms)),
            dispatch: Rc::new(dispatch),
        }
    }

    /// Fetches the activity set and replaces the list and select options.
    /// On failure the list shows a static message; nothing is retried.
    pub async fn load_activities(&self) {
        match self.api.fetch_activities().await {
            Ok(activities) => (self.dispatch)(BoardAction::Loaded(activities)),
            Err(e) => {
                logging::error("Error fetching activities", &e);
                (self.dispatch)(BoardAction::LoadFailed);
            }
        }
    }

    pub async fn handle_signup(&self, email: &str, activity: &str) -> Outcome {
        self.run(Operation::Signup, email, activity).await
    }

    pub async fn handle_unsubscribe(&self, email: &str, activity: &str) -> Outcome {
        self.run(Operation::Unsubscribe, email, activity).await
    }

    async fn run(&self, op: Operation, email: &str, activity: &str) -> Outcome {
        let result = self.api.send(op, activity, email).await;
        match &result {
            Ok(Reply::Rejected { status, detail }) => logging::info(format!(
                "{} rejected with HTTP {status}: {}",
                op.path_segment(),
                detail.as_deref().unwrap_or("-")
            )),
            Err(e) => logging::error(op.log_context(), e),
            Ok(Reply::Accepted { .. }) => {}
        }

        let outcome = outcome_for(op, &result);
        self.announce(outcome.message.clone());
        if outcome.reset_form {
            (self.dispatch)(BoardAction::ResetForm);
        }
        if outcome.reload {
            self.load_activities().await;
        }
        outcome
    }

    /// Shows `message` and (re)arms the hide timer.
    fn announce(&self, message: BannerMessage) {
        (self.dispatch)(BoardAction::Show(message));
        let dispatch = self.dispatch.clone();
        self.timer
            .borrow_mut()
            .arm(move || dispatch(BoardAction::Hide));
    }
}
