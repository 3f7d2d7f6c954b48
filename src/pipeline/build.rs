// End-to-end build: lyrics file -> rhyme graph JSON (+ optional exports).
//
// Reads the whole input, optionally strips bracketed annotations, builds the
// graph against the configured dictionary, then writes the JSON artifact.
// Interchange exports run last and never fail the build.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::export::{export_graph, ExportReport};
use crate::graph::builder::{GraphBuilder, GraphParams};
use crate::graph::model::RhymeGraph;
use crate::lyrics::clean::strip_annotations;
use crate::output::write_atomic;
use crate::phonetics::resolver::RhymeResolver;
use crate::phonetics::traits::PhoneticDictionary;
use crate::scoring::strength::RhymeScorer;

/// Everything one `build` run needs besides the dictionary.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub params: GraphParams,
    pub graphml: Option<PathBuf>,
    pub gexf: Option<PathBuf>,
    pub strip_annotations: bool,
    pub parallel: bool,
    /// Show a progress bar while scoring pairs
    pub progress: bool,
}

/// What a finished build produced.
#[derive(Debug)]
pub struct BuildOutcome {
    pub graph: RhymeGraph,
    pub exports: Vec<ExportReport>,
}

/// Run the build pipeline.
pub fn run(dict: &dyn PhoneticDictionary, opts: &BuildOptions) -> Result<BuildOutcome> {
    let text = read_input(&opts.input)?;
    let text = if opts.strip_annotations {
        strip_annotations(&text)
    } else {
        text
    };

    let scorer = RhymeScorer::new(RhymeResolver::new(dict));
    let mut builder = GraphBuilder::new(&scorer, opts.params.clone()).parallel(opts.parallel);
    if opts.progress {
        builder = builder.with_progress(scoring_progress_bar()?);
    }
    let graph = builder.build_from_text(&text);

    let json = graph.to_json().context("Failed to serialize rhyme graph")?;
    write_atomic(&opts.output, json.as_bytes())?;
    info!(
        path = %opts.output.display(),
        nodes = graph.nodes.len(),
        links = graph.links.len(),
        families = graph.family_count(),
        cached_words = scorer.resolver().cached_words(),
        "Wrote rhyme graph"
    );

    let exports = export_graph(&graph, opts.graphml.as_deref(), opts.gexf.as_deref());
    Ok(BuildOutcome { graph, exports })
}

/// Read a whole lyrics file. A missing file gets a plain message.
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))
}

fn scoring_progress_bar() -> Result<ProgressBar> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Scoring [{bar:30}] {pos}/{len} pairs ({eta})")
            .context("Invalid progress bar template")?,
    );
    Ok(pb)
}
