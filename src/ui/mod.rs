//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, fixed-rate tick loop, keyboard commands
//! - **[`geometry`]**: bar layout derived from the chart area and the dataset
//! - **[`panes`]**: stateless render functions for the header, bars and status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Config`] and call [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod geometry;
pub mod panes;
pub mod theme;

pub use app::{App, RunState};
