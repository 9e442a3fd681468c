//! stroketok core library.
//!
//! Turns a raw 2D gesture trace (ordered points + label) into a discrete
//! emission sequence for an HMM classifier:
//! - per-edge direction of the implicitly closed trace
//! - turning-angle deltas between consecutive edges
//! - quantization into a fixed-size emission alphabet `E0..`
//!
//! Archive loading, configuration and the seeded train shuffle live in
//! their own modules around that core.

pub mod angles;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod pipeline;
pub mod quantize;
pub mod shuffle;
