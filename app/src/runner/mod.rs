pub mod commands;
pub mod event_loop_main;
pub mod handlers;
pub mod terminal;

pub use commands::{AppEvent, Dispatcher};
pub use event_loop_main::run_app;
