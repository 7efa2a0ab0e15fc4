use std::fmt;

use rand::Rng;

/// A single next-character observation inside a [`Distribution`].
///
/// `count` is accumulated during training. `p` and `cp` stay at zero until
/// [`Distribution::finalize`] runs once, after all counts are known.
#[derive(Clone, Debug, PartialEq)]
pub struct CharData {
	/// The observed character.
	pub chr: char,
	/// How many times `chr` followed the owning window.
	pub count: u64,
	/// Probability of `chr` given the owning window.
	pub p: f64,
	/// Running sum of `p` up to and including this entry.
	pub cp: f64,
}

impl CharData {
	fn new(chr: char) -> Self {
		Self { chr, count: 1, p: 0.0, cp: 0.0 }
	}
}

impl fmt::Display for CharData {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({} {} {} {})", self.chr, self.count, self.p, self.cp)
	}
}

/// All characters ever observed after one specific window.
///
/// Entries are unique by character and kept in first-occurrence order.
/// That order is load-bearing: sampling scans the entries in sequence and
/// compares against `cp`, so a stable order is what makes generation
/// reproducible for a given seed.
///
/// ## Invariants (once finalized)
/// - The counts sum to the number of times the owning window was observed
/// - The probabilities sum to 1.0 within floating-point tolerance
/// - `cp` is non-decreasing across the stored order and ends at ~1.0
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
	entries: Vec<CharData>,
}

impl Distribution {
	/// Creates an empty distribution.
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Records one observation of `chr`.
	///
	/// - If `chr` already has an entry, its count is increased.
	/// - Otherwise a new entry with count 1 is appended at the end,
	///   preserving first-occurrence order.
	pub fn update(&mut self, chr: char) {
		match self.entries.iter_mut().find(|entry| entry.chr == chr) {
			Some(entry) => entry.count += 1,
			None => self.entries.push(CharData::new(chr)),
		}
	}

	/// Computes the `p` and `cp` fields of every entry, in stored order.
	///
	/// Single pass, no sorting. Called once per window after training has
	/// consumed the whole corpus: the probabilities cannot be computed
	/// incrementally because the total count is not known until then.
	pub fn finalize(&mut self) {
		let total: u64 = self.entries.iter().map(|entry| entry.count).sum();
		if total == 0 {
			return;
		}

		let mut cp = 0.0;
		for entry in &mut self.entries {
			entry.p = entry.count as f64 / total as f64;
			cp += entry.p;
			entry.cp = cp;
		}
	}

	/// Draws one character according to the cumulative probabilities.
	///
	/// `r` is uniform in [0,1); the first entry in stored order whose `cp`
	/// is strictly greater than `r` wins. If accumulated floating-point
	/// error leaves the final `cp` below `r`, the scan falls through and a
	/// space is returned instead of failing. Known tolerance boundary.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
		let r: f64 = rng.random();

		for entry in &self.entries {
			if r < entry.cp {
				return entry.chr;
			}
		}

		log::warn!("cumulative probabilities fell short of r = {r}, falling back to ' '");
		' '
	}

	/// Number of distinct characters observed.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no character was ever observed.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Read-only view of the entries, in first-occurrence order.
	pub fn entries(&self) -> &[CharData] {
		&self.entries
	}
}

impl fmt::Display for Distribution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				write!(f, " ")?;
			}
			write!(f, "{entry}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn update_keeps_first_occurrence_order() {
		let mut distribution = Distribution::new();
		for chr in ['b', 'a', 'b', 'c', 'a', 'b'] {
			distribution.update(chr);
		}

		let chars: Vec<char> = distribution.entries().iter().map(|e| e.chr).collect();
		let counts: Vec<u64> = distribution.entries().iter().map(|e| e.count).collect();
		assert_eq!(chars, vec!['b', 'a', 'c']);
		assert_eq!(counts, vec![3, 2, 1]);
	}

	#[test]
	fn finalize_computes_probabilities_and_running_sum() {
		let mut distribution = Distribution::new();
		for chr in ['a', 'b', 'b', 'c'] {
			distribution.update(chr);
		}
		distribution.finalize();

		let entries = distribution.entries();
		assert_eq!(entries[0].p, 0.25);
		assert_eq!(entries[1].p, 0.5);
		assert_eq!(entries[2].p, 0.25);

		let total_p: f64 = entries.iter().map(|e| e.p).sum();
		assert!((total_p - 1.0).abs() < 1e-9);

		// cp is a non-decreasing running sum ending at ~1.0.
		let mut previous = 0.0;
		for entry in entries {
			assert!(entry.cp >= previous);
			previous = entry.cp;
		}
		assert!((entries.last().unwrap().cp - 1.0).abs() < 1e-9);
	}

	#[test]
	fn sample_is_reproducible_for_a_seed() {
		let mut distribution = Distribution::new();
		for chr in ['x', 'y', 'y', 'z', 'z', 'z'] {
			distribution.update(chr);
		}
		distribution.finalize();

		let draw = |seed: u64| -> Vec<char> {
			let mut rng = StdRng::seed_from_u64(seed);
			(0..32).map(|_| distribution.sample(&mut rng)).collect()
		};

		assert_eq!(draw(7), draw(7));
	}

	#[test]
	fn sample_single_entry_always_returns_it() {
		let mut distribution = Distribution::new();
		distribution.update('q');
		distribution.finalize();

		let mut rng = StdRng::seed_from_u64(0);
		for _ in 0..16 {
			assert_eq!(distribution.sample(&mut rng), 'q');
		}
	}

	#[test]
	fn sample_falls_back_to_space_when_cp_is_short() {
		// An unfinalized distribution has cp = 0.0 everywhere, so no entry
		// can exceed r: the scan must fall through to the space fallback.
		let mut distribution = Distribution::new();
		distribution.update('a');

		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(distribution.sample(&mut rng), ' ');
	}

	#[test]
	fn display_lists_entries_in_stored_order() {
		let mut distribution = Distribution::new();
		for chr in ['a', 'b', 'b'] {
			distribution.update(chr);
		}
		distribution.finalize();

		assert_eq!(
			distribution.to_string(),
			format!("(a 1 {} {}) (b 2 {} {})", 1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 1.0 / 3.0 + 2.0 / 3.0)
		);
	}
}
