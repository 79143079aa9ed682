pub mod app;
pub mod cli;
pub mod errors;
pub mod fs_op;
pub mod generation;
pub mod input;
pub mod logging;
pub mod runner;
pub mod ui;

pub use crate::app::{App, ArtifactRef, Focus, Mode, Session};
