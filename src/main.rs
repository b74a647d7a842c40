//! Wordforge CLI - Word-Puzzle Dataset Builder
//!
//! Command-line interface for building clean dictionaries and
//! letter-group maps from raw word lists.

use clap::{Parser, Subcommand};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use log::error;
use std::path::{Path, PathBuf};
use std::time::Instant;
use wordforge::{storage, DictionaryFilter, FilterConfig, Result, WordGroups};

#[derive(Parser)]
#[command(name = "wordforge")]
#[command(author = "Wordforge Contributors")]
#[command(version)]
#[command(about = "Word-puzzle dataset builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a raw dictionary into a clean word list
    Clean {
        /// Raw dictionary file (one word per line)
        #[arg(short, long)]
        input: PathBuf,

        /// Blocklist file (one word per line)
        #[arg(short, long)]
        blocklist: PathBuf,

        /// Output clean word list
        #[arg(short, long)]
        output: PathBuf,

        /// Minimum word length in characters
        #[arg(long, default_value_t = wordforge::DEFAULT_MIN_WORD_LENGTH)]
        min_len: usize,

        /// Maximum word length in characters
        #[arg(long, default_value_t = wordforge::DEFAULT_MAX_WORD_LENGTH)]
        max_len: usize,
    },

    /// Group a clean word list by its unique-letter keys
    Group {
        /// Clean word list file
        #[arg(short, long)]
        input: PathBuf,

        /// Output letter-group JSON file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Run both stages: clean the dictionary, then group it
    Build {
        /// Raw dictionary file (one word per line)
        #[arg(short, long)]
        input: PathBuf,

        /// Blocklist file (one word per line)
        #[arg(short, long)]
        blocklist: PathBuf,

        /// Output clean word list
        #[arg(short, long)]
        clean_output: PathBuf,

        /// Output letter-group JSON file
        #[arg(short, long)]
        groups_output: PathBuf,

        /// Minimum word length in characters
        #[arg(long, default_value_t = wordforge::DEFAULT_MIN_WORD_LENGTH)]
        min_len: usize,

        /// Maximum word length in characters
        #[arg(long, default_value_t = wordforge::DEFAULT_MAX_WORD_LENGTH)]
        max_len: usize,
    },

    /// Show statistics for a letter-group file
    Info {
        /// Letter-group JSON file to inspect
        groups: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Clean {
            input,
            blocklist,
            output,
            min_len,
            max_len,
        } => clean_dictionary(&input, &blocklist, &output, min_len, max_len).map(|_| ()),

        Commands::Group { input, output } => group_dictionary(&input, &output),

        Commands::Build {
            input,
            blocklist,
            clean_output,
            groups_output,
            min_len,
            max_len,
        } => build_all(&input, &blocklist, &clean_output, &groups_output, min_len, max_len),

        Commands::Info { groups } => show_info(&groups),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap()
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        .unwrap()
        .progress_chars("█▓▒░  ")
}

fn clean_dictionary(
    input: &Path,
    blocklist: &Path,
    output: &Path,
    min_len: usize,
    max_len: usize,
) -> Result<Vec<String>> {
    let start_time = Instant::now();

    println!("Wordforge Dictionary Builder");
    println!("   Cleaning dictionary from: {}", input.display());
    println!();

    let config = FilterConfig::with_bounds(min_len, max_len);
    config.validate()?;
    let filter = DictionaryFilter::new(config);

    // Step 1: Build the blocklist
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message("Loading blocklist...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let blocklist_lines = storage::read_raw_lines(blocklist)?;
    let blocked = filter.build_blocklist(&blocklist_lines);

    pb.finish_and_clear();
    println!("✓ Loaded {} blocklist words", format_number(blocked.len()));

    // Step 2: Load the raw dictionary
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message("Loading raw dictionary...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let raw_lines = storage::read_raw_lines(input)?;

    pb.finish_and_clear();
    println!("✓ Loaded {} raw lines", format_number(raw_lines.len()));

    // Step 3: Filter (parallel)
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message("Filtering words (parallel)...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let clean_words = filter.filter_dictionary_par(&raw_lines, &blocked);

    pb.finish_and_clear();
    println!(
        "✓ Kept {} clean words ({} dropped)",
        format_number(clean_words.len()),
        format_number(raw_lines.len() - clean_words.len())
    );

    // Step 4: Save
    storage::write_word_list(output, &clean_words)?;
    println!("✓ Saved clean dictionary to {}", output.display());

    println!();
    println!("Cleaning complete in {}", HumanDuration(start_time.elapsed()));

    Ok(clean_words)
}

fn group_dictionary(input: &Path, output: &Path) -> Result<()> {
    let start_time = Instant::now();

    println!("Wordforge Dictionary Builder");
    println!("   Grouping clean words from: {}", input.display());
    println!();

    let clean_words = storage::read_word_list(input)?;
    println!("✓ Loaded {} clean words", format_number(clean_words.len()));

    let groups = group_words(clean_words);
    storage::write_groups(output, &groups)?;
    println!("✓ Saved letter groups to {}", output.display());

    println!();
    println!("Grouping complete in {}", HumanDuration(start_time.elapsed()));

    Ok(())
}

fn build_all(
    input: &Path,
    blocklist: &Path,
    clean_output: &Path,
    groups_output: &Path,
    min_len: usize,
    max_len: usize,
) -> Result<()> {
    let start_time = Instant::now();

    let clean_words = clean_dictionary(input, blocklist, clean_output, min_len, max_len)?;

    println!();
    let groups = group_words(clean_words);
    storage::write_groups(groups_output, &groups)?;
    println!("✓ Saved letter groups to {}", groups_output.display());

    let stats = groups.stats();
    println!();
    println!("Build complete in {}", HumanDuration(start_time.elapsed()));
    println!("   Groups: {}", format_number(stats.num_groups));
    println!("   Words: {}", format_number(stats.num_words));
    println!("   Output: {}", groups_output.display());

    Ok(())
}

/// Groups the clean words with progress display.
fn group_words(clean_words: Vec<String>) -> WordGroups {
    let pb = ProgressBar::new(clean_words.len() as u64);
    pb.set_style(bar_style());
    pb.set_message("Grouping words by unique letters...");

    let mut groups = WordGroups::new();
    for word in clean_words {
        groups.insert(word);
        pb.inc(1);
    }

    pb.finish_and_clear();
    println!("✓ Grouped words under {} letter keys", format_number(groups.len()));

    groups
}

fn show_info(groups_path: &Path) -> Result<()> {
    let groups = storage::read_groups(groups_path)?;
    let stats = groups.stats();

    println!("Letter groups: {:?}", groups_path);
    println!("  Groups: {}", format_number(stats.num_groups));
    println!("  Words: {}", format_number(stats.num_words));
    println!("  Largest group: {} words", format_number(stats.largest_group));
    println!("  Average group size: {:.2}", stats.avg_group_size);

    Ok(())
}

/// Format large numbers with commas for readability
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
