//! Terminal UI hosting the console overlay
//!
//! `runner` owns the lifecycle; `event`, `layout` and `render` feed it;
//! `widgets` holds the drawable pieces and `panel_state` their scroll
//! position.

pub mod event;
pub mod layout;
pub mod panel_state;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
