//! Core domain types for chat-viz.
//!
//! Message records, bucket selection, configuration, errors, the sentiment
//! analyzer, and date/time parsing helpers shared by the data and render
//! layers.

pub mod bucket;
pub mod config;
pub mod error;
pub mod models;
pub mod sentiment;
pub mod settings;
pub mod time_utils;
