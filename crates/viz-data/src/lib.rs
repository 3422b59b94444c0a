//! Data layer for chat-viz.
//!
//! Responsible for detecting participants in a chat export, parsing message
//! lines into records, aggregating frequency and sentiment per sender per
//! time bucket, and exporting parsed records to CSV.

pub mod aggregator;
pub mod export;
pub mod parser;
pub mod sentiment;

pub use viz_core as core;
