//! Core types for famboard.
//!
//! This crate provides everything the `famboard` CLI works with:
//! - `layout` for packing a day's overlapping events into side-by-side columns
//! - `schedule`, `occurrence` and `week` for turning stored events into dated occurrences
//! - `geometry` for mapping laid-out occurrences onto a pixel timeline
//! - `store` and `config` for the on-disk household file and settings

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod occurrence;
pub mod schedule;
pub mod store;
pub mod time_of_day;
pub mod week;

pub use error::{FamboardError, FamboardResult};
pub use layout::{LayoutOptions, LayoutResult, TieBreak, TimedItem, layout_day, layout_day_with};
