//! In-memory activities backend.
//!
//! Mirrors the server's rules: unknown activity is a 404, signing up twice or
//! removing someone not on the roster is a 400.

use std::cell::RefCell;
use std::rc::Rc;

use activity_board::error::Result;
use activity_board::{Activities, ActivitiesApi, BoardError, Operation, Reply};

#[derive(Default)]
struct Inner {
    activities: Activities,
    offline: bool,
    bare_rejections: bool,
    fetches: usize,
    sent: Vec<(Operation, String, String)>,
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Rc<RefCell<Inner>>,
}

impl FakeBackend {
    pub fn with_activities(activities: Activities) -> Self {
        let backend = Self::default();
        backend.inner.borrow_mut().activities = activities;
        backend
    }

    /// Every call fails as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        self.inner.borrow_mut().offline = offline;
    }

    /// Rejections come back without a `detail` field.
    pub fn set_bare_rejections(&self, bare: bool) {
        self.inner.borrow_mut().bare_rejections = bare;
    }

    pub fn fetches(&self) -> usize {
        self.inner.borrow().fetches
    }

    pub fn sent(&self) -> Vec<(Operation, String, String)> {
        self.inner.borrow().sent.clone()
    }

    pub fn roster(&self, activity: &str) -> Vec<String> {
        self.inner
            .borrow()
            .activities
            .get(activity)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }

    fn reject(&self, status: u16, detail: &str) -> Reply {
        let detail = if self.inner.borrow().bare_rejections {
            None
        } else {
            Some(detail.to_string())
        };
        Reply::Rejected { status, detail }
    }
}

impl ActivitiesApi for FakeBackend {
    async fn fetch_activities(&self) -> Result<Activities> {
        let mut inner = self.inner.borrow_mut();
        inner.fetches += 1;
        if inner.offline {
            return Err(BoardError::Network("Failed to fetch".into()));
        }
        Ok(inner.activities.clone())
    }

    async fn send(&self, op: Operation, activity: &str, email: &str) -> Result<Reply> {
        {
            let mut inner = self.inner.borrow_mut();
            inner
                .sent
                .push((op, activity.to_string(), email.to_string()));
            if inner.offline {
                return Err(BoardError::Network("Failed to fetch".into()));
            }
        }

        let Some(mut current) = self.inner.borrow().activities.get(activity).cloned() else {
            return Ok(self.reject(404, "Activity not found"));
        };

        let reply = match op {
            Operation::Signup => {
                if current.has_participant(email) {
                    return Ok(self.reject(400, "Student is already signed up"));
                }
                current.participants.push(email.to_string());
                Reply::Accepted {
                    message: format!("Signed up {email} for {activity}"),
                }
            }
            Operation::Unsubscribe => {
                if !current.has_participant(email) {
                    return Ok(self.reject(400, "Student is not signed up for this activity"));
                }
                current.participants.retain(|p| p != email);
                Reply::Accepted {
                    message: format!("Unsubscribed {email} from {activity}"),
                }
            }
        };
        self.inner.borrow_mut().activities.upsert(current);
        Ok(reply)
    }
}
