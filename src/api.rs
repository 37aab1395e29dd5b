//! REST endpoints the board talks to.
//!
//! `GET  /activities`
//! `POST /activities/{name}/signup?email={email}`
//! `POST /activities/{name}/unsubscribe?email={email}`

use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use urlencoding::encode;

use crate::error::{BoardError, Result};
use crate::model::Activities;

pub const ACTIVITIES_PATH: &str = "/activities";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Signup,
    Unsubscribe,
}

impl Operation {
    pub fn path_segment(self) -> &'static str {
        match self {
            Operation::Signup => "signup",
            Operation::Unsubscribe => "unsubscribe",
        }
    }

    /// Shown when the server rejects the request without a `detail`.
    pub fn fallback_detail(self) -> &'static str {
        match self {
            Operation::Signup => "An error occurred",
            Operation::Unsubscribe => "Failed to remove participant",
        }
    }

    /// Shown when no usable reply came back at all.
    pub fn failure_text(self) -> &'static str {
        match self {
            Operation::Signup => "Failed to sign up. Please try again.",
            Operation::Unsubscribe => "Error unsubscribing. Try again.",
        }
    }

    pub fn log_context(self) -> &'static str {
        match self {
            Operation::Signup => "Error signing up",
            Operation::Unsubscribe => "Unsubscribe error",
        }
    }
}

pub fn activities_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), ACTIVITIES_PATH)
}

pub fn operation_url(base: &str, op: Operation, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/{}?email={}",
        activities_url(base),
        encode(activity),
        op.path_segment(),
        encode(email)
    )
}

#[derive(Debug, Default, Deserialize)]
struct ReplyBody {
    #[serde(default)]
    message: Option<String>,
    /// Usually a string; validation errors carry a list instead.
    #[serde(default)]
    detail: Option<Value>,
}

impl ReplyBody {
    /// `detail` when it is a non-empty string.
    fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(d)) if !d.is_empty() => Some(d.clone()),
            _ => None,
        }
    }
}

/// Server answer to a signup or unsubscribe request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Accepted { message: String },
    Rejected { status: u16, detail: Option<String> },
}

impl Reply {
    /// Interprets a response body. The body must be JSON even on failure;
    /// anything else is a decode error.
    pub fn from_response(status: u16, body: &str) -> Result<Self> {
        let body: ReplyBody = serde_json::from_str(body)?;
        if (200..300).contains(&status) {
            Ok(Reply::Accepted {
                message: body.message.unwrap_or_default(),
            })
        } else {
            Ok(Reply::Rejected {
                status,
                detail: body.detail_text(),
            })
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Reply::Accepted { .. })
    }
}

/// Everything the board needs from the backend.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    async fn fetch_activities(&self) -> Result<Activities>;

    async fn send(&self, op: Operation, activity: &str, email: &str) -> Result<Reply>;
}

/// [`ActivitiesApi`] over `fetch` via `gloo-net`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl ActivitiesApi for HttpApi {
    async fn fetch_activities(&self) -> Result<Activities> {
        let resp = Request::get(&activities_url(&self.base)).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !resp.ok() {
            let detail = serde_json::from_str::<ReplyBody>(&text)
                .ok()
                .and_then(|b| b.detail_text());
            return Err(BoardError::Status { status, detail });
        }
        Ok(Activities::from_json(&text)?)
    }

    async fn send(&self, op: Operation, activity: &str, email: &str) -> Result<Reply> {
        let url = operation_url(&self.base, op, activity, email);
        let resp = Request::post(&url).send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        Reply::from_response(status, &text)
    }
}
