//! Spelling Bee Solver - CLI
//!
//! Lists every word buildable from the puzzle letters, lowest score first.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;
use spelling_bee::{
    commands::{SolveConfig, solve_puzzle},
    output::{print_summary, print_words},
    wordlists::{WordListOptions, WordSource},
};
use std::io::Write;
use std::process;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "NY Times game solvers: find and rank Spelling Bee words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Fold dictionary words to lower case before solving
    #[arg(long, global = true)]
    lowercase: bool,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Gives solutions to the spelling-bee game
    #[command(visible_alias = "sp")]
    SpellingBee {
        /// A concatenated string of required characters. Usually only one character
        #[arg(short, long)]
        required: String,

        /// A concatenated string of extra characters. Usually six letters
        #[arg(short, long)]
        extra: String,

        /// Print each word with its score, pangrams highlighted
        #[arg(long)]
        scores: bool,

        /// Print total words, points and pangrams after the list
        #[arg(long)]
        summary: bool,

        /// Rank on all cores
        #[arg(long)]
        parallel: bool,
    },
}

impl Cli {
    /// Map -q/-v to a log level: quiet, default, verbose, debug
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    fn word_list_options(&self) -> WordListOptions {
        WordListOptions {
            lowercase: self.lowercase,
            ..WordListOptions::new(WordSource::from_arg(&self.wordlist))
        }
    }
}

fn main() {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Whoops. There was an error while executing your CLI '{e}'");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let word_list = cli.word_list_options();

    match cli.command {
        Commands::SpellingBee {
            required,
            extra,
            scores,
            summary,
            parallel,
        } => run_spelling_bee_command(
            SolveConfig {
                required,
                extra,
                word_list,
                parallel,
            },
            scores,
            summary,
        ),
    }
}

fn run_spelling_bee_command(config: SolveConfig, scores: bool, summary: bool) -> Result<()> {
    let result = solve_puzzle(config)?;

    print_words(&result, scores);
    if summary {
        print_summary(&result);
    }
    Ok(())
}
