//! Fixed-order character-level Markov language model.
//!
//! This crate provides a character-level generation system including:
//! - Sliding-window training over an arbitrary character source
//! - Per-window next-character distributions with cumulative probabilities
//! - Seeded, reproducible weighted-random generation
//!
//! The window length is fixed when a model is constructed; the model is
//! trained once over a corpus and then queried any number of times.

/// Core model: training, probability finalization and generation.
pub mod model;

/// Character sources (the corpus-side contract of the model).
///
/// The model only ever sees a forward-only stream of characters; whether
/// they come from a file or an in-memory string is decided here.
pub mod source;

/// Error types shared by training and generation.
pub mod error;
