//! Chart rendering for chat-viz.
//!
//! Turns frequency and sentiment rows into per-sender scatter or line plots
//! and writes them to PNG files named after the bucket axis.

pub mod chart;
pub mod palette;
