use std::collections::HashMap;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::distribution::Distribution;
use crate::error::ModelError;
use crate::source::CharSource;

/// A fixed-order character-level Markov model.
///
/// The model maps every window of `window_length` consecutive characters
/// observed in a corpus to the [`Distribution`] of characters that
/// followed it, then generates new text by repeatedly sampling from
/// those distributions.
///
/// # Responsibilities
/// - Consume a [`CharSource`] and accumulate next-character counts per window
/// - Finalize all counts into probabilities once the corpus is exhausted
/// - Generate text by sliding the window over its own output
///
/// # Invariants
/// - `window_length` is >= 1 and never changes after construction
/// - Every key in the table has exactly `window_length` characters
/// - Keys are created on first observation and never removed
#[derive(Debug)]
pub struct LanguageModel {
	/// The window length used by this model.
	window_length: usize,

	/// Mapping from a window to the distribution of its successors.
	windows: HashMap<String, Distribution>,

	/// The random generator used for sampling. Owned by the model so
	/// several models with different seeds coexist safely.
	rng: StdRng,
}

impl LanguageModel {
	/// Creates a model seeded from OS entropy.
	///
	/// Generating texts from this model multiple times produces different
	/// outputs. Good for production.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self, ModelError> {
		Self::build(window_length, StdRng::from_os_rng())
	}

	/// Creates a model with a fixed seed.
	///
	/// Generating texts from this model multiple times with the same seed
	/// produces the same outputs. Good for debugging.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self, ModelError> {
		Self::build(window_length, StdRng::seed_from_u64(seed))
	}

	fn build(window_length: usize, rng: StdRng) -> Result<Self, ModelError> {
		if window_length == 0 {
			return Err(ModelError::WindowLength);
		}
		Ok(Self { window_length, windows: HashMap::new(), rng })
	}

	/// Returns the window length of this model.
	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct windows observed so far.
	pub fn window_count(&self) -> usize {
		self.windows.len()
	}

	/// Returns the distribution of one window, if it was ever observed.
	pub fn distribution(&self, window: &str) -> Option<&Distribution> {
		self.windows.get(window)
	}

	/// Iterates over all observed windows and their distributions.
	///
	/// Map iteration order, unspecified.
	pub fn windows(&self) -> impl Iterator<Item = (&String, &Distribution)> {
		self.windows.iter()
	}

	/// Trains the model on the entire character source.
	///
	/// Reads exactly `window_length` characters to form the initial
	/// window, then processes the rest of the source one character at a
	/// time: each character is counted against the window that preceded
	/// it, and the window advances by one. Once the source is exhausted,
	/// every distribution is finalized in a distinct pass.
	///
	/// Training the same instance again accumulates into the existing
	/// counts and re-finalizes; it does not reset the table. Callers
	/// wanting a fresh model must construct one.
	///
	/// # Errors
	/// Returns [`ModelError::SourceExhausted`] if the source holds fewer
	/// than `window_length` characters. No partial model is guaranteed to
	/// be usable afterwards.
	pub fn train<S: CharSource>(&mut self, source: &mut S) -> Result<(), ModelError> {
		// Read just enough characters to form the first window.
		let mut window = String::new();
		for got in 0..self.window_length {
			match source.next_char() {
				Some(chr) => window.push(chr),
				None => return Err(ModelError::SourceExhausted { needed: self.window_length, got }),
			}
		}

		// One sequential pass over the rest of the corpus.
		while let Some(chr) = source.next_char() {
			self.windows
				.entry(window.clone())
				.or_insert_with(Distribution::new)
				.update(chr);

			// Advance the window: append chr, drop the first character.
			window.push(chr);
			window.remove(0);
		}

		// All characters have been counted; compute the p and cp fields
		// of every distribution in the table.
		for distribution in self.windows.values_mut() {
			distribution.finalize();
		}

		log::debug!(
			"trained {} windows of length {}",
			self.windows.len(),
			self.window_length
		);
		Ok(())
	}

	/// Generates `length` characters continuing `initial_text`.
	///
	/// Generation starts from the trailing `window_length` characters of
	/// `initial_text` and slides the window over its own output, sampling
	/// one character per step.
	///
	/// If `initial_text` is shorter than the window length, or its
	/// trailing window was never observed during training, `initial_text`
	/// is returned unchanged. That is a defined outcome, not an error.
	///
	/// # Errors
	/// Returns [`ModelError::UnknownContext`] if generation reaches a
	/// window absent from the table mid-run. This happens when the only
	/// occurrence of a window is at the very end of the corpus: it was
	/// never followed by anything, so there is nothing to sample.
	pub fn generate(&mut self, initial_text: &str, length: usize) -> Result<String, ModelError> {
		if initial_text.chars().count() < self.window_length {
			return Ok(initial_text.to_owned());
		}

		let mut window = last_n_chars(initial_text, self.window_length);
		if !self.windows.contains_key(&window) {
			return Ok(initial_text.to_owned());
		}

		let mut generated = initial_text.to_owned();
		for _ in 0..length {
			let distribution = self
				.windows
				.get(&window)
				.ok_or_else(|| ModelError::UnknownContext { window: window.clone() })?;

			let chr = distribution.sample(&mut self.rng);
			generated.push(chr);
			window.push(chr);
			window.remove(0);
		}

		Ok(generated)
	}
}

/// Returns the last `n` characters of a string (UTF-8 aware).
///
/// If `n` is greater than the number of characters, the whole string is
/// returned.
fn last_n_chars(s: &str, n: usize) -> String {
	let count = s.chars().count();
	s.chars().skip(count.saturating_sub(n)).collect()
}

impl fmt::Display for LanguageModel {
	/// One `window : distribution` line per table entry.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, distribution) in &self.windows {
			writeln!(f, "{window} : {distribution}")?;
		}
		Ok(())
	}
}
