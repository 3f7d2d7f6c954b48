// Graph output artifact — the node/link JSON consumed by force-layout viewers.

use serde::{Deserialize, Serialize};

/// Every node is in the same display group.
pub const NODE_GROUP: u32 = 1;

/// The rhyme network for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhymeGraph {
    /// One node per vocabulary word, in sorted word order
    pub nodes: Vec<RhymeNode>,
    /// One link per retained pair, smaller id as source
    pub links: Vec<RhymeLink>,
}

/// A distinct end-of-line word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhymeNode {
    /// The lowercase word
    pub id: String,
    pub group: u32,
    /// Number of lines ending in this word
    pub count: usize,
    /// Zero-based indexes of those lines, ascending
    pub positions: Vec<usize>,
    pub rhyme_key: String,
    /// Rhyme family (connected component) id
    pub family: usize,
}

/// A retained rhyme pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhymeLink {
    pub source: String,
    pub target: String,
    /// Rhyme strength rounded to four decimals
    pub value: f64,
}

impl RhymeGraph {
    /// Number of distinct families.
    pub fn family_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| n.family + 1)
            .max()
            .unwrap_or(0)
    }

    /// Member ids of each family, indexed by family id, in node order.
    pub fn families(&self) -> Vec<Vec<&str>> {
        let mut families: Vec<Vec<&str>> = vec![Vec::new(); self.family_count()];
        for node in &self.nodes {
            families[node.family].push(node.id.as_str());
        }
        families
    }

    /// Compact JSON, the on-disk format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Round a strength to four decimal places for output.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
