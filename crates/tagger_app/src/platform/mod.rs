//! Console front end: the file-selection and persistence collaborator.
mod app;
mod commands;
mod constants;
mod effects;
mod logging;
mod persistence;
mod render;

pub use app::run_app;
