use clap::Parser;
use log::info;
use vigenere_breaker::{BreakResult, VigenereBreaker, VigenereCipher, WordSet};

/// Command-line arguments for the Vigenère auto-breaker program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the newline-delimited dictionary used for scoring
    #[arg(short, long, help = "Path to the newline-delimited dictionary file")]
    dictionary: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text (stdout if omitted)")]
    output: Option<String>,

    /// Try a single key length instead of the automatic sweep
    #[arg(short, long, help = "Try a single key length instead of the automatic sweep")]
    key_length: Option<usize>,

    /// Most common plaintext letter assumed by the frequency analysis
    #[arg(short, long, default_value_t = 'e', help = "Most common plaintext letter")]
    most_common: char,
}

/// Main entry point for the Vigenère auto-breaker.
fn main() {
    env_logger::init();
    let cli: Cli = Cli::parse();

    // Read the encrypted content and collapse CR/CRLF so every newline
    // occupies exactly one key position.
    let raw: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");
    let content: String = normalize_line_endings(&raw);

    // Load the reference word set
    let dictionary_text: String = std::fs::read_to_string(&cli.dictionary)
        .expect("Failed to read dictionary file");
    let words: WordSet = parse_word_list(&dictionary_text);
    info!("Loaded {} dictionary words", words.len());

    let breaker = VigenereBreaker::new(cli.most_common);

    let decrypted: String = match cli.key_length {
        // Manual mode: probe one key length and report its candidate
        Some(key_length) => {
            let key = breaker
                .try_key_length(&content, key_length)
                .expect("Failed to derive a key for the requested length");
            let decrypted = VigenereCipher::new(&key).decrypt(&content);
            let count = words.count_valid_words(&decrypted);
            println!("Calculated key: {key:?}");
            println!("Valid words: {count}");
            decrypted
        }
        // Auto mode: sweep key lengths 1-100 and keep the best candidate
        None => {
            let result = breaker.break_for_language(&content, &words);
            match &result {
                BreakResult::Broken {
                    key,
                    valid_word_count,
                    ..
                } => {
                    println!("Found key: {key:?}");
                    println!("Key length: {}", key.len());
                    println!("Valid words: {valid_word_count}");
                }
                BreakResult::Unbroken { .. } => {
                    println!("No suitable key found (lengths 1-{})", vigenere_breaker::MAX_KEY_LENGTH);
                    println!("Showing the original message instead.");
                }
            }
            result.decrypted_text().to_string()
        }
    };

    // Write the result to the output file, or print it
    match &cli.output {
        Some(output) => {
            std::fs::write(output, &decrypted)
                .expect("Failed to write output file");
            println!("Output saved to: {output}");
        }
        None => println!("{decrypted}"),
    }
}

/// Collapses CRLF and lone CR line endings into a single LF.
///
/// The breaker counts every character position, newlines included, so a
/// two-byte line ending would shift the key alignment of everything after it.
fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Parses a newline-delimited word list into a `WordSet`.
///
/// Blank lines are ignored; case folding happens inside the set.
fn parse_word_list(content: &str) -> WordSet {
    WordSet::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}
