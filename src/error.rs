//! Error types for the activity board.
//!
//! A non-2xx reply to signup/unsubscribe is not an error here; it is a
//! [`crate::api::Reply::Rejected`] value. Only failures that leave the board
//! without a usable server answer travel as [`BoardError`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16, detail: Option<String> },
}

impl From<gloo_net::Error> for BoardError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => BoardError::Decode(e),
            other => BoardError::Network(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
