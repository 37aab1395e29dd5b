//! Activity Board: a Yew front end listing extracurricular activities,
//! with signup and unsubscribe against the school's REST API.

pub mod api;
pub mod banner;
pub mod board;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;

pub use api::{ActivitiesApi, HttpApi, Operation, Reply};
pub use board::{BoardAction, BoardController, BoardState};
pub use config::BoardConfig;
pub use error::BoardError;
pub use model::{Activities, Activity};
