use rs_markov_core::model::language_model::LanguageModel;
use rs_markov_core::source::{CharSource, StringSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A model of order 2 with a fixed seed: generating from it multiple
    // times with the same seed always produces the same text
    let mut model = LanguageModel::with_seed(2, 20)?;

    // A window length of 0 is rejected at construction
    match LanguageModel::with_seed(0, 20) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("A window length of 0 is invalid, must be at least 1"),
    }

    // Any forward-only character stream works as a corpus; here an
    // in-memory one. 'StringSource::from_file' reads a corpus file instead
    let mut source = StringSource::new("how much wood would a woodchuck chuck");
    println!("The source has characters left: {}", source.has_more());

    // Consume the whole source and finalize the probabilities
    model.train(&mut source)?;
    println!("The model observed {} distinct windows", model.window_count());

    // Dump the whole table, one 'window : distribution' line per window.
    // Each entry reads (character count probability cumulative-probability)
    print!("{}", model);

    // Continue a prompt by 30 characters. Generation can reach a window
    // that was only ever seen at the very end of the corpus; that window
    // has no successors and the run aborts with UnknownContext
    match model.generate("would", 30) {
        Ok(text) => println!("Generated: {}", text),
        Err(e) => println!("Generation stopped: {}", e),
    }

    // A prompt shorter than the window length is echoed back unchanged,
    // same for a prompt whose trailing window was never observed
    println!("Echoed: {}", model.generate("w", 30)?);
    println!("Echoed: {}", model.generate("zz", 30)?);

    Ok(())
}
