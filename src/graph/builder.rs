// Rhyme graph assembly.
//
// Lines -> vocabulary -> candidate pairs (optionally pruned to words that end
// lines close to each other) -> pairwise strength -> thresholded edges ->
// families -> output graph.
//
// Pair scoring can run on rayon. Results are collected in candidate order
// and merged on one thread, so the parallel and sequential paths produce the
// same graph.

use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::{debug, info};

use super::families::assign_families;
use super::model::{round4, RhymeGraph, RhymeLink, RhymeNode, NODE_GROUP};
use super::vocabulary::{within_window, Vocabulary};
use crate::lyrics::segment::verse_lines;
use crate::scoring::strength::RhymeScorer;

/// Default minimum rhyme strength for a retained edge.
pub const DEFAULT_MIN_STRENGTH: f64 = 0.6;
/// Default minimum number of occurrences for a word to become a node.
pub const DEFAULT_MIN_FREQ: usize = 1;

/// Thresholds controlling which words and pairs make it into the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphParams {
    /// Only compare words ending lines at most this many lines apart
    pub window: Option<usize>,
    /// Edges below this strength are dropped
    pub min_strength: f64,
    /// Words occurring fewer times than this are dropped
    pub min_freq: usize,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            window: None,
            min_strength: DEFAULT_MIN_STRENGTH,
            min_freq: DEFAULT_MIN_FREQ,
        }
    }
}

/// An edge between two vocabulary indexes, `a < b`.
#[derive(Debug, Clone, Copy)]
struct ScoredPair {
    a: usize,
    b: usize,
    strength: f64,
}

/// Builds rhyme graphs with a fixed scorer and parameters.
pub struct GraphBuilder<'s, 'd> {
    scorer: &'s RhymeScorer<'d>,
    params: GraphParams,
    parallel: bool,
    progress: Option<ProgressBar>,
}

impl<'s, 'd> GraphBuilder<'s, 'd> {
    pub fn new(scorer: &'s RhymeScorer<'d>, params: GraphParams) -> Self {
        Self {
            scorer,
            params,
            parallel: false,
            progress: None,
        }
    }

    /// Score candidate pairs on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Tick `progress` once per scored pair. Its length is set when scoring
    /// starts.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn params(&self) -> &GraphParams {
        &self.params
    }

    /// Build the graph for raw lyrics text.
    pub fn build_from_text(&self, text: &str) -> RhymeGraph {
        self.build(&verse_lines(text))
    }

    /// Build the graph for an already segmented, flattened line list.
    pub fn build<S: AsRef<str>>(&self, lines: &[S]) -> RhymeGraph {
        let vocab = Vocabulary::from_lines(lines, self.params.min_freq);
        let candidates = self.candidate_pairs(&vocab);
        let total_pairs = vocab.len() * vocab.len().saturating_sub(1) / 2;
        debug!(
            words = vocab.len(),
            candidates = candidates.len(),
            pruned = total_pairs - candidates.len(),
            "Candidate pairs selected"
        );

        let edges = self.score_pairs(&vocab, &candidates);
        info!(
            lines = lines.len(),
            words = vocab.len(),
            scored = candidates.len(),
            edges = edges.len(),
            "Scored rhyme pairs"
        );

        let index_pairs: Vec<(usize, usize)> = edges.iter().map(|e| (e.a, e.b)).collect();
        let families = assign_families(vocab.len(), &index_pairs);

        let nodes = vocab
            .entries()
            .iter()
            .zip(&families)
            .map(|(entry, &family)| RhymeNode {
                id: entry.word.clone(),
                group: NODE_GROUP,
                count: entry.count,
                positions: entry.positions.clone(),
                rhyme_key: self.scorer.resolver().resolve(&entry.word).key,
                family,
            })
            .collect();

        let entries = vocab.entries();
        let links = edges
            .iter()
            .map(|e| RhymeLink {
                source: entries[e.a].word.clone(),
                target: entries[e.b].word.clone(),
                value: round4(e.strength),
            })
            .collect();

        RhymeGraph { nodes, links }
    }

    /// Every unordered pair `(a, b)` with `a < b`, minus pairs the window
    /// rules out.
    fn candidate_pairs(&self, vocab: &Vocabulary) -> Vec<(usize, usize)> {
        let entries = vocab.entries();
        let mut pairs = Vec::new();
        for a in 0..entries.len() {
            for b in (a + 1)..entries.len() {
                if let Some(window) = self.params.window {
                    if !within_window(&entries[a].positions, &entries[b].positions, window) {
                        continue;
                    }
                }
                pairs.push((a, b));
            }
        }
        pairs
    }

    fn score_pairs(&self, vocab: &Vocabulary, candidates: &[(usize, usize)]) -> Vec<ScoredPair> {
        let entries = vocab.entries();
        if let Some(pb) = &self.progress {
            pb.set_length(candidates.len() as u64);
        }

        let score = |&(a, b): &(usize, usize)| {
            let strength = self.scorer.strength(&entries[a].word, &entries[b].word);
            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
            (strength >= self.params.min_strength).then_some(ScoredPair { a, b, strength })
        };

        let edges: Vec<ScoredPair> = if self.parallel {
            candidates.par_iter().filter_map(score).collect()
        } else {
            candidates.iter().filter_map(score).collect()
        };

        if let Some(pb) = &self.progress {
            pb.finish_and_clear();
        }
        edges
    }
}
