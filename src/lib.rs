//! Getajob - a small read-mostly job-listings API.
//!
//! Loads job and skill records from a JSON-backed store, joins skills onto
//! jobs by code, derives a todo view and a skill-frequency tally, and serves
//! everything over HTTP.

pub mod board;
pub mod config;
pub mod models;
pub mod skills;
pub mod store;
pub mod web;

pub use board::JobBoard;
pub use config::{Cli, Config, StoreLayout};
pub use web::{AppState, routes};
