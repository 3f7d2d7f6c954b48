use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use rhymegraph::config::Config;
use rhymegraph::lyrics::clean::clean_lyrics;
use rhymegraph::output::{terminal, write_atomic};
use rhymegraph::phonetics::resolver::RhymeResolver;
use rhymegraph::pipeline::build::{self, BuildOptions};
use rhymegraph::scoring::strength::RhymeScorer;

/// Rhymegraph: rhyme networks from song lyrics and poetry.
///
/// Finds the word at the end of every line, scores how strongly each pair
/// of those words rhymes, and writes the result as a force-layout graph.
#[derive(Parser)]
#[command(name = "rhymegraph", version, about)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the rhyme graph for a lyrics file
    Build {
        /// Lyrics text file (stanzas separated by blank lines)
        #[arg(short, long, default_value = "combined_output.txt")]
        input: PathBuf,

        /// Where to write the graph JSON
        #[arg(short, long, default_value = "network_data.json")]
        output: PathBuf,

        /// Minimum rhyme strength for a link (default: 0.6)
        #[arg(long)]
        min_strength: Option<f64>,

        /// Minimum occurrences for a word to become a node (default: 1)
        #[arg(long)]
        min_freq: Option<usize>,

        /// Only compare words ending lines at most this many lines apart
        #[arg(long)]
        window: Option<usize>,

        /// Also write the graph as GraphML
        #[arg(long)]
        graphml: Option<PathBuf>,

        /// Also write the graph as GEXF
        #[arg(long)]
        gexf: Option<PathBuf>,

        /// Pronunciation dictionary in CMU format
        #[arg(long)]
        dict: Option<PathBuf>,

        /// Remove [section headers] and (ad-libs) before segmenting
        #[arg(long)]
        strip_annotations: bool,

        /// Score word pairs on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Show how strongly two words rhyme, and why
    Score {
        a: String,
        b: String,

        /// Pronunciation dictionary in CMU format
        #[arg(long)]
        dict: Option<PathBuf>,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a word's perfect rhymes from the dictionary
    Rhymes {
        word: String,

        /// Pronunciation dictionary in CMU format
        #[arg(long)]
        dict: Option<PathBuf>,
    },

    /// Write a normalized copy of a lyrics file
    Clean {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Set up structured logging
    let default_filter = if cli.verbose {
        "rhymegraph=debug"
    } else {
        "rhymegraph=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build {
            input,
            output,
            min_strength,
            min_freq,
            window,
            graphml,
            gexf,
            dict,
            strip_annotations,
            parallel,
        } => {
            let config = Config::load()?
                .with_dict(dict)
                .with_overrides(min_strength, min_freq, window);
            config.validate()?;
            let dictionary = config.load_dictionary()?;

            info!(
                input = %input.display(),
                min_strength = config.params.min_strength,
                min_freq = config.params.min_freq,
                window = ?config.params.window,
                "Building rhyme graph"
            );

            let opts = BuildOptions {
                input,
                output,
                params: config.params,
                graphml,
                gexf,
                strip_annotations,
                parallel,
                progress: std::io::stderr().is_terminal(),
            };
            let outcome = build::run(&dictionary, &opts)?;

            terminal::display_graph_summary(&outcome.graph);
            terminal::display_exports(&outcome.exports);
            println!(
                "\n{} {}",
                "Graph written to".green(),
                opts.output.display().to_string().bold()
            );
        }

        Commands::Score { a, b, dict, json } => {
            let config = Config::load()?.with_dict(dict);
            let dictionary = config.load_dictionary()?;
            let scorer = RhymeScorer::new(RhymeResolver::new(&dictionary));
            let breakdown = scorer.breakdown(&a.to_lowercase(), &b.to_lowercase());
            if json {
                println!("{}", breakdown.to_json()?);
            } else {
                terminal::display_breakdown(&a, &b, &breakdown);
            }
        }

        Commands::Rhymes { word, dict } => {
            let config = Config::load()?.with_dict(dict);
            let dictionary = config.load_dictionary()?;
            if dictionary.is_empty() {
                println!(
                    "{}",
                    "No pronunciation dictionary loaded. Set RHYMEGRAPH_DICT or pass --dict."
                        .dimmed()
                );
                return Ok(());
            }
            terminal::display_rhymes(&word, &dictionary.rhymes(&word));
        }

        Commands::Clean { input, output } => {
            let text = build::read_input(&input)?;
            let cleaned = clean_lyrics(&text);
            write_atomic(&output, cleaned.as_bytes())
                .with_context(|| format!("Failed to write cleaned lyrics to {}", output.display()))?;
            info!(
                input = %input.display(),
                output = %output.display(),
                bytes = cleaned.len(),
                "Cleaned lyrics"
            );
            println!("Cleaned lyrics written to: {}", output.display());
        }
    }

    Ok(())
}
