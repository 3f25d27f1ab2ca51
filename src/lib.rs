//! The `taskvault` library crate.
//!
//! A multi-tenant task tracking backend. Users sign up with a
//! username/password, authenticate, and manage a personal list of tasks.
//! The crate is split into an identity component (`auth`), a task
//! component (`tasks` + `models`), and a thin HTTP layer (`routes`)
//! wired together by the main binary.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod tasks;

pub use crate::error::AppError;
