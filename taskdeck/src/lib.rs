//! `TaskDeck` — terminal task list manager library.

pub mod app;
pub mod config;
pub mod tasks;
pub mod ui;
