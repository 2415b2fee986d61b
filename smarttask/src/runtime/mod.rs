mod action_queue;
mod actions;
mod event_loop;
mod views;

pub(crate) use actions::refresh_screen;
pub use event_loop::run_app;
