//! # Introduction
//!
//! sortty animates comparison sorts in the terminal. An array of integers is
//! drawn as a bar chart; starting a sort resumes the chosen algorithm one
//! mutating step per frame, highlighting the two bars it just touched, so the
//! algorithm can be watched swap by swap. The UI is built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Config → Dataset → SortRun::advance (one step per tick) → BarLayout → Frame
//! ```
//!
//! 1. [`config`]: startup constants and their validation.
//! 2. [`dataset`]: random bounded datasets.
//! 3. [`sort`]: bubble and insertion sort as resumable state machines behind
//!    the [`sort::StepGenerator`] trait.
//! 4. [`ui`]: bar geometry, frame rendering and the interaction loop.
//!
//! ## Controls
//!
//! `R` reset, `SPACE` start, `A`/`D` ascending/descending, `B`/`I` bubble or
//! insertion sort, `q` quit. Everything except quitting is ignored while a
//! sort is running.

pub mod config;
pub mod dataset;
pub mod sort;
pub mod ui;
