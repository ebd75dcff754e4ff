/// Preview: interactive phrase generation shell.
///
/// Usage: preview --words <path> [--config <path>] [--seed <n>] [--html]
///
/// Commands:
///   <style>    generate one sentence (haiku, couplet, comparison, ...)
///   all        generate one sentence of every style
///   reset      discard providers so the next sentences search again
///   seed <n>   rebuild the engine with a fixed seed
///   html       toggle HTML presentation
///   help       list commands
///   quit       exit

use clap::Parser;
use phrase_engine::core::config::SearchConfig;
use phrase_engine::core::dictionary::Dictionary;
use phrase_engine::core::engine::{PhraseEngine, Presentation};
use phrase_engine::schema::style::SentenceStyle;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "preview")]
#[command(about = "Interactive shell for generating Romanian phrases from a word list")]
#[command(version)]
struct Args {
    /// Word list, one `<word> <tag>` entry per line
    #[arg(short, long)]
    words: PathBuf,

    /// Search config (RON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed; omit for entropy
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start in HTML presentation
    #[arg(long)]
    html: bool,

    /// Generate one sentence of this style and exit
    #[arg(long)]
    once: Option<SentenceStyle>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::new(format!("phrase_engine={}", args.log_level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let lexicon = match Dictionary::load_from_path(&args.words) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("Failed to load {}: {}", args.words.display(), e);
            std::process::exit(1);
        }
    };
    let config = match &args.config {
        Some(path) => match SearchConfig::load_from_ron(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SearchConfig::default(),
    };
    let presentation = if args.html {
        Presentation::Html
    } else {
        Presentation::Plain
    };

    let mut engine = match build_engine(&lexicon, &config, presentation, args.seed) {
        Some(engine) => engine,
        None => std::process::exit(1),
    };

    if let Some(style) = args.once {
        match engine.generate(style) {
            Ok(sentence) => println!("{}", sentence),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!(
        "Loaded {} words ({} nouns, {} adjectives, {} verbs, {} unrecognized)",
        lexicon.total_words(),
        lexicon.accepted_nouns().len(),
        lexicon.accepted_adjectives().len(),
        lexicon.accepted_verbs().len(),
        lexicon.total_unrecognized()
    );
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "all" => {
                let all = engine.generate_all();
                println!("\n--- All Styles ---");
                for (style, sentence) in [
                    (SentenceStyle::Haiku, &all.haiku),
                    (SentenceStyle::Couplet, &all.couplet),
                    (SentenceStyle::Comparison, &all.comparison),
                    (SentenceStyle::Definition, &all.definition),
                    (SentenceStyle::Tautogram, &all.tautogram),
                    (SentenceStyle::Mirror, &all.mirror),
                    (SentenceStyle::FiveWord, &all.five_word),
                    (SentenceStyle::Distich, &all.distich),
                ] {
                    println!("{:>11}: {}", style.name(), sentence);
                }
                println!("--- End ---\n");
            }
            "reset" => {
                engine.reset();
                println!("Providers discarded.");
            }
            "seed" => {
                let Some(seed) = parts.get(1).and_then(|s| s.parse::<u64>().ok()) else {
                    println!("Usage: seed <n>");
                    continue;
                };
                if let Some(rebuilt) =
                    build_engine(&lexicon, &config, engine.presentation(), Some(seed))
                {
                    engine = rebuilt;
                    println!("Seed set to {}", seed);
                }
            }
            "html" => {
                let next = match engine.presentation() {
                    Presentation::Plain => Presentation::Html,
                    Presentation::Html => Presentation::Plain,
                };
                engine.set_presentation(next);
                println!("Presentation: {:?}", next);
            }
            other => match other.parse::<SentenceStyle>() {
                Ok(style) => match engine.generate(style) {
                    Ok(sentence) => {
                        println!("\n{}\n", sentence);
                    }
                    Err(e) => {
                        println!("ERROR: {}", e);
                    }
                },
                Err(e) => {
                    println!("{}. Type 'help' for commands.", e);
                }
            },
        }
    }
}

fn build_engine(
    lexicon: &Dictionary,
    config: &SearchConfig,
    presentation: Presentation,
    seed: Option<u64>,
) -> Option<PhraseEngine> {
    let mut builder = PhraseEngine::builder()
        .with_dictionary(lexicon.clone())
        .with_config(config.clone())
        .presentation(presentation);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    match builder.build() {
        Ok(engine) => Some(engine),
        Err(e) => {
            eprintln!("Failed to build engine: {}", e);
            None
        }
    }
}

fn print_help() {
    println!("Commands:");
    for style in SentenceStyle::ALL {
        println!("  {:<12} generate a {} sentence", style.name(), style.name());
    }
    println!("  all          generate one sentence of every style");
    println!("  reset        discard providers so the next sentences search again");
    println!("  seed <n>     rebuild the engine with a fixed seed");
    println!("  html         toggle HTML presentation");
    println!("  help         show this message");
    println!("  quit         exit");
}
