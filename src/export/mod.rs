// Graph-interchange export — GraphML and GEXF for Gephi, Cytoscape, yEd.
//
// Export is best-effort. Each format is attempted on its own and a failure
// is logged without stopping the other format or failing the run. The JSON
// graph has already been written by the time this runs.

#[cfg(feature = "export")]
pub mod gexf;
#[cfg(feature = "export")]
pub mod graphml;
#[cfg(feature = "export")]
mod xml;

use std::path::Path;

use tracing::{error, info};

use crate::graph::model::RhymeGraph;

/// Interchange formats the exporter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    GraphMl,
    Gexf,
}

impl ExportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::GraphMl => "GraphML",
            ExportFormat::Gexf => "GEXF",
        }
    }
}

/// Outcome of one requested export.
#[derive(Debug)]
pub struct ExportReport {
    pub format: ExportFormat,
    pub written: bool,
}

/// Write every requested format, isolating failures per format.
pub fn export_graph(
    graph: &RhymeGraph,
    graphml_path: Option<&Path>,
    gexf_path: Option<&Path>,
) -> Vec<ExportReport> {
    let requests = [
        (ExportFormat::GraphMl, graphml_path),
        (ExportFormat::Gexf, gexf_path),
    ];

    requests
        .into_iter()
        .filter_map(|(format, path)| path.map(|p| (format, p)))
        .map(|(format, path)| {
            let written = match write_format(graph, format, path) {
                Ok(true) => {
                    info!(path = %path.display(), "Wrote {}", format.name());
                    true
                }
                Ok(false) => false,
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to write {}", format.name());
                    false
                }
            };
            ExportReport { format, written }
        })
        .collect()
}

/// `Ok(false)` when the format is unavailable in this build.
#[cfg(feature = "export")]
fn write_format(graph: &RhymeGraph, format: ExportFormat, path: &Path) -> anyhow::Result<bool> {
    match format {
        ExportFormat::GraphMl => graphml::write(graph, path)?,
        ExportFormat::Gexf => gexf::write(graph, path)?,
    }
    Ok(true)
}

#[cfg(not(feature = "export"))]
fn write_format(_graph: &RhymeGraph, format: ExportFormat, path: &Path) -> anyhow::Result<bool> {
    tracing::warn!(
        path = %path.display(),
        "{} export not available (built without the `export` feature); skipping",
        format.name()
    );
    Ok(false)
}

/// Node positions as a single attribute value ("0 4 9").
#[cfg_attr(not(feature = "export"), allow(dead_code))]
fn positions_attr(positions: &[usize]) -> String {
    positions
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(all(test, feature = "export"))]
mod tests {
    use super::*;
    use crate::graph::model::{RhymeLink, RhymeNode};

    fn sample() -> RhymeGraph {
        RhymeGraph {
            nodes: vec![
                RhymeNode {
                    id: "mat".to_string(),
                    group: 1,
                    count: 1,
                    positions: vec![1],
                    rhyme_key: "AE1 T".to_string(),
                    family: 0,
                },
                RhymeNode {
                    id: "sat".to_string(),
                    group: 1,
                    count: 2,
                    positions: vec![0, 4],
                    rhyme_key: "AE1 T".to_string(),
                    family: 0,
                },
            ],
            links: vec![RhymeLink {
                source: "mat".to_string(),
                target: "sat".to_string(),
                value: 1.0,
            }],
        }
    }

    #[test]
    fn test_positions_attr() {
        assert_eq!(positions_attr(&[0, 4, 9]), "0 4 9");
        assert_eq!(positions_attr(&[]), "");
    }

    #[test]
    fn test_export_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let graphml = dir.path().join("g.graphml");
        let gexf = dir.path().join("g.gexf");

        let reports = export_graph(&sample(), Some(graphml.as_path()), Some(gexf.as_path()));
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.written));
        assert!(graphml.exists());
        assert!(gexf.exists());
    }

    #[test]
    fn test_failure_is_isolated_per_format() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("missing-dir").join("g.graphml");
        let gexf = dir.path().join("g.gexf");

        let reports = export_graph(&sample(), Some(bad.as_path()), Some(gexf.as_path()));
        assert_eq!(reports.len(), 2);
        assert!(!reports[0].written);
        assert!(reports[1].written);
        assert!(gexf.exists());
    }

    #[test]
    fn test_nothing_requested() {
        assert!(export_graph(&sample(), None, None).is_empty());
    }
}
