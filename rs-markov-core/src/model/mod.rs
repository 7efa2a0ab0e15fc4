//! Top-level module for the Markov generation system.
//!
//! This module contains the two halves of the model:
//! - Per-window distributions of observed next characters (`Distribution`)
//! - The language model itself (`LanguageModel`), tying the window table,
//!   the sliding-window trainer and the generation loop together.

/// Fixed-order language model.
///
/// Handles corpus ingestion, window bookkeeping, probability
/// finalization and text generation.
pub mod language_model;

/// Next-character distribution of a single window.
///
/// Tracks observation counts in first-occurrence order and supports
/// weighted random sampling over cumulative probabilities.
pub mod distribution;
