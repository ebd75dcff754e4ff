/// Lexicon report: checks which sentence styles a word list can support.
///
/// Usage: lexicon_report --words <path> [--config <path>] [--samples <n>]

use clap::Parser;
use phrase_engine::core::config::SearchConfig;
use phrase_engine::core::dictionary::Dictionary;
use phrase_engine::core::filter::Filter;
use phrase_engine::schema::word::{Category, Lexeme};
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lexicon_report")]
#[command(about = "Report word counts and style feasibility for a word list")]
#[command(version)]
struct Args {
    /// Word list, one `<word> <tag>` entry per line
    #[arg(short, long)]
    words: PathBuf,

    /// Search config (RON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Unrecognized entries and rhyme groups to print
    #[arg(long, default_value = "10")]
    samples: usize,

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
            eprintln!("ERROR: Failed to load {}: {}", args.words.display(), e);
            process::exit(1);
        }
    };
    let config = match &args.config {
        Some(path) => match SearchConfig::load_from_ron(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("ERROR: Failed to load {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => SearchConfig::default(),
    };

    println!("\n=== Lexicon Report ===\n");
    println!("Nouns:        {}", lexicon.accepted_nouns().len());
    println!("Adjectives:   {}", lexicon.accepted_adjectives().len());
    println!("Verbs:        {}", lexicon.accepted_verbs().len());
    println!("Unrecognized: {}", lexicon.total_unrecognized());
    println!("Total:        {}", lexicon.total_words());

    if lexicon.total_unrecognized() > 0 {
        println!("\nUnrecognized entries:");
        for entry in lexicon.unrecognized().iter().take(args.samples) {
            println!("  {}", entry);
        }
    }

    let groups = rhyme_groups(&lexicon);
    let mut by_size: Vec<(&String, usize)> =
        groups.iter().map(|(rhyme, words)| (rhyme, words.len())).collect();
    by_size.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("\nRhyme groups: {}", groups.len());
    for (rhyme, size) in by_size.iter().take(args.samples) {
        println!("  -{:<4} {} nouns", rhyme, size);
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let couplet_rhymes = by_size
        .iter()
        .filter(|(_, size)| *size >= config.couplet_min_nouns)
        .count();
    if couplet_rhymes == 0 {
        errors.push(format!(
            "couplet: no rhyme has {} distinct nouns",
            config.couplet_min_nouns
        ));
    }

    let mirror_groups = by_size
        .iter()
        .filter(|(_, size)| *size >= config.mirror_min_group)
        .count();
    if mirror_groups < 2 {
        errors.push(format!(
            "mirror: {} rhyme groups of {} nouns, need 2",
            mirror_groups, config.mirror_min_group
        ));
    }

    let anchors = haiku_anchors(&lexicon, &config);
    if anchors == 0 {
        errors.push("haiku: no noun fills a five-syllable line".to_string());
    } else {
        println!("\nHaiku anchors: {}", anchors);
    }

    println!("\nTautogram letters:");
    let mut feasible_letters = 0;
    for letter in config.letters() {
        let mut copy = lexicon.clone();
        copy.add_filter(Filter::starting_with(letter));
        let (nouns, adjectives, verbs) = (
            copy.accepted_nouns().len(),
            copy.accepted_adjectives().len(),
            copy.accepted_verbs().len(),
        );
        let feasible = nouns > 0 && adjectives > 0 && verbs > 0;
        if feasible {
            feasible_letters += 1;
        } else {
            warnings.push(format!("tautogram: letter '{}' cannot be used", letter));
        }
        println!(
            "  {}  {:>5} nouns {:>5} adjectives {:>5} verbs{}",
            letter,
            nouns,
            adjectives,
            verbs,
            if feasible { "" } else { "  (infeasible)" }
        );
    }
    if feasible_letters == 0 {
        errors.push("tautogram: no configured letter is feasible".to_string());
    }

    for category in Category::ALL {
        let empty = match category {
            Category::Noun => lexicon.accepted_nouns().is_empty(),
            Category::Adjective => lexicon.accepted_adjectives().is_empty(),
            Category::Verb => lexicon.accepted_verbs().is_empty(),
        };
        if empty {
            errors.push(format!("every style: no {} in the word list", category));
        }
    }

    println!();
    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }
    for warning in &warnings {
        println!("WARNING: {}", warning);
    }
    for error in &errors {
        println!("ERROR: {}", error);
    }
    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if !errors.is_empty() {
        process::exit(1);
    }
}

/// Distinct nouns per rhyme key.
fn rhyme_groups(lexicon: &Dictionary) -> FxHashMap<String, FxHashSet<String>> {
    let mut groups: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
    for noun in lexicon.accepted_nouns() {
        groups
            .entry(noun.rhyme().to_string())
            .or_default()
            .insert(noun.text().to_string());
    }
    groups
}

/// Nouns that, used as a haiku anchor, leave at least one noun accepted.
fn haiku_anchors(lexicon: &Dictionary, config: &SearchConfig) -> usize {
    let mut copy = lexicon.clone();
    let mut seen = FxHashSet::default();
    let mut count = 0;
    for anchor in lexicon.accepted_nouns() {
        if !seen.insert(anchor.text()) {
            continue;
        }
        copy.clear_filters();
        copy.add_filter(Filter::haiku(anchor, config));
        if !copy.accepted_nouns().is_empty() {
            count += 1;
        }
    }
    count
}
