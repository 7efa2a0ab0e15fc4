use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use rs_markov_core::model::language_model::LanguageModel;
use rs_markov_core::source::StringSource;

/// Trains a character-level Markov model on a corpus file and prints
/// generated text continuing the given initial text.
#[derive(Parser)]
#[command(version, about)]
struct Args {
	/// Window length of the model (number of context characters)
	window_length: usize,

	/// Text to start generation from
	initial_text: String,

	/// Number of characters to generate
	length: usize,

	/// Seeding mode of the random generator
	#[arg(value_enum)]
	mode: Mode,

	/// Path to the corpus file
	corpus: PathBuf,

	/// Seed used in deterministic mode
	#[arg(long, default_value_t = 20)]
	seed: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
	/// Seed from OS entropy; every run differs
	Random,
	/// Fixed seed; runs are reproducible
	Deterministic,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let mut model = match args.mode {
		Mode::Random => LanguageModel::new(args.window_length)?,
		Mode::Deterministic => LanguageModel::with_seed(args.window_length, args.seed)?,
	};

	let mut source = StringSource::from_file(&args.corpus)?;
	model.train(&mut source)?;

	println!("{}", model.generate(&args.initial_text, args.length)?);
	Ok(())
}
