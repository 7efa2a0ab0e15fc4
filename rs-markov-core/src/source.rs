use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// A forward-only stream of characters with an end marker.
///
/// This is the whole corpus-side contract of the model: the trainer asks
/// for one character at a time until the source reports empty. Where the
/// characters come from (file, buffer, network) is irrelevant to the core.
pub trait CharSource {
	/// Returns true while at least one character remains.
	fn has_more(&self) -> bool;

	/// Yields the next character, or `None` once the source is exhausted.
	fn next_char(&mut self) -> Option<char>;
}

/// In-memory character source over a decoded string.
///
/// UTF-8 aware: iterates characters, not bytes.
#[derive(Clone, Debug)]
pub struct StringSource {
	chars: Vec<char>,
	position: usize,
}

impl StringSource {
	/// Creates a source over the characters of `text`.
	pub fn new(text: &str) -> Self {
		Self { chars: text.chars().collect(), position: 0 }
	}

	/// Reads a whole corpus file into an in-memory source.
	///
	/// The file is read eagerly; a read failure surfaces here, before
	/// training starts.
	pub fn from_file<P: AsRef<Path>>(filename: P) -> io::Result<Self> {
		let mut contents = String::new();
		File::open(filename)?.read_to_string(&mut contents)?;
		Ok(Self::new(&contents))
	}
}

impl CharSource for StringSource {
	fn has_more(&self) -> bool {
		self.position < self.chars.len()
	}

	fn next_char(&mut self) -> Option<char> {
		let chr = self.chars.get(self.position).copied()?;
		self.position += 1;
		Some(chr)
	}
}
