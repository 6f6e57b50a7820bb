//! char-speller: print the speech commands for spelling out text.

use clap::Parser;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use char_speller::config::Config;
use char_speller::{spell, spell_without_character_mode, Command, SpellingEnv};

#[derive(Parser, Debug)]
#[command(name = "char-speller", about = "Spell text out as speech synthesizer commands")]
struct Args {
    /// Text to spell (read from stdin when omitted)
    text: Option<String>,

    /// Path to config.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Locale the text is written in, e.g. fr_FR
    #[arg(short, long)]
    locale: Option<String>,

    /// Speak phonetic descriptions (Alfa, Bravo, ...) instead of letters
    #[arg(long)]
    descriptions: bool,

    /// Say "cap" before capital letters
    #[arg(long)]
    say_cap: bool,

    /// Pitch change for capital letters in percent (0 disables)
    #[arg(long)]
    cap_pitch: Option<i32>,

    /// Beep before capital letters
    #[arg(long)]
    beep: bool,

    /// Apply Unicode normalization before spelling
    #[arg(long)]
    normalize: bool,

    /// Leave out character mode commands
    #[arg(long)]
    no_char_mode: bool,

    /// Print one JSON command per line
    #[arg(long)]
    json: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries commands
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(args.config.as_deref());

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            // Drop the newline the shell adds, keep everything else
            input.strip_suffix('\n').unwrap_or(&input).to_string()
        }
    };

    let mut spelling = config.spelling.clone();
    spelling.use_character_descriptions |= args.descriptions;
    spelling.say_cap_for_capitals |= args.say_cap;
    spelling.beep_for_capitals |= args.beep;
    spelling.unicode_normalization |= args.normalize;
    if let Some(pitch) = args.cap_pitch {
        spelling.cap_pitch_change = pitch;
    }
    let character_mode = spelling.character_mode && !args.no_char_mode;
    let request = spelling.request(text, args.locale);
    debug!("Spelling request: {request:?}");

    let symbols = config.symbol_table();
    let descriptions = config.description_table();
    let catalog = config.catalog();
    let settings = config.speech.settings();
    let env = SpellingEnv {
        symbols: &symbols,
        descriptions: &descriptions,
        catalog: &catalog,
        settings: &settings,
        default_locale: &config.speech.default_locale,
    };
    info!(
        "Spelling {} characters (locale: {})",
        request.text.chars().count(),
        env.resolve_locale(request.locale.as_deref())
    );

    let commands: Box<dyn Iterator<Item = Command>> = if character_mode {
        Box::new(spell(&request, env))
    } else {
        Box::new(spell_without_character_mode(&request, env))
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for command in commands {
        if args.json {
            writeln!(out, "{}", serde_json::to_string(&command)?)?;
        } else {
            writeln!(out, "{command}")?;
        }
    }

    Ok(())
}
