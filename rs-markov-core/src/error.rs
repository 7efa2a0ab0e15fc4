use thiserror::Error;

/// Errors surfaced by model construction, training and generation.
///
/// Every variant is fatal for the call that produced it. In particular a
/// training error leaves no guarantee that the partial model is usable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
	/// The corpus ended before the first window could be formed.
	#[error("corpus exhausted while forming the initial window: needed {needed} characters, got {got}")]
	SourceExhausted { needed: usize, got: usize },

	/// Generation reached a window that was never observed during training.
	///
	/// Reachable when the trailing window of the corpus occurs nowhere
	/// else in the text: it has no successors, so generation cannot
	/// continue past it.
	#[error("window {window:?} is not present in the model")]
	UnknownContext { window: String },

	/// The window length must be at least 1.
	#[error("window length must be at least 1")]
	WindowLength,
}
