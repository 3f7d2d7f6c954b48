// Unit tests for graph construction.
//
// Builds graphs from short lyric snippets against the fixture dictionary and
// checks the structural guarantees: node order, link orientation, threshold
// and window monotonicity, family partitioning, and determinism.

use std::collections::HashSet;
use std::path::Path;

use rhymegraph::graph::builder::{GraphBuilder, GraphParams};
use rhymegraph::graph::model::RhymeGraph;
use rhymegraph::phonetics::cmudict::CmuDict;
use rhymegraph::phonetics::resolver::RhymeResolver;
use rhymegraph::scoring::strength::RhymeScorer;

const LYRICS: &str = "\
We ride tonight
under the light
holding on tight

The cat sat
on the mat
with a hat

Every day
I find a way
to make you stay
but the nation
lost its patience
at the station
";

fn fixture_dict() -> CmuDict {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cmudict-mini.dict");
    CmuDict::load(&path).unwrap()
}

fn build(text: &str, params: GraphParams) -> RhymeGraph {
    let dict = fixture_dict();
    let scorer = RhymeScorer::new(RhymeResolver::new(&dict));
    GraphBuilder::new(&scorer, params).build_from_text(text)
}

fn link_set(graph: &RhymeGraph) -> HashSet<(String, String)> {
    graph
        .links
        .iter()
        .map(|l| (l.source.clone(), l.target.clone()))
        .collect()
}

fn family_of(graph: &RhymeGraph, id: &str) -> usize {
    graph
        .nodes
        .iter()
        .find(|n| n.id == id)
        .map(|n| n.family)
        .unwrap()
}

// ============================================================
// Shape of the output
// ============================================================

#[test]
fn nodes_are_sorted_and_unique() {
    let graph = build(LYRICS, GraphParams::default());
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 12);
}

#[test]
fn links_point_from_smaller_to_larger_id() {
    let graph = build(LYRICS, GraphParams::default());
    assert!(!graph.links.is_empty());
    for link in &graph.links {
        assert!(link.source < link.target, "{} -> {}", link.source, link.target);
        assert!(link.value >= 0.6);
    }
}

#[test]
fn example_lines_group_sat_and_mat_only() {
    let graph = build(
        "the cat sat\non the mat\nnear the fan",
        GraphParams::default(),
    );
    assert_eq!(family_of(&graph, "mat"), family_of(&graph, "sat"));
    assert_ne!(family_of(&graph, "fan"), family_of(&graph, "sat"));
    assert!(graph.links.iter().all(|l| l.source != "fan" && l.target != "fan"));
}

#[test]
fn positions_are_flattened_line_indexes() {
    let graph = build(LYRICS, GraphParams::default());
    let stay = graph.nodes.iter().find(|n| n.id == "stay").unwrap();
    // stanza breaks do not count as lines
    assert_eq!(stay.positions, vec![8]);
    assert_eq!(stay.count, 1);
}

#[test]
fn min_freq_drops_rare_words() {
    let text = "a sat\nb mat\nc sat\nd fan";
    let graph = build(
        text,
        GraphParams {
            min_freq: 2,
            ..GraphParams::default()
        },
    );
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["sat"]);
    assert!(graph.links.is_empty());
}

// ============================================================
// Monotonicity
// ============================================================

#[test]
fn raising_threshold_only_removes_links() {
    let mut previous: Option<HashSet<(String, String)>> = None;
    for min_strength in [0.0, 0.3, 0.6, 0.9, 1.0] {
        let links = link_set(&build(
            LYRICS,
            GraphParams {
                min_strength,
                ..GraphParams::default()
            },
        ));
        if let Some(prev) = &previous {
            assert!(links.is_subset(prev), "threshold {min_strength} added links");
        }
        previous = Some(links);
    }
}

#[test]
fn windowed_links_are_subset_of_unwindowed() {
    let open = link_set(&build(LYRICS, GraphParams::default()));
    for window in 1..6 {
        let windowed = link_set(&build(
            LYRICS,
            GraphParams {
                window: Some(window),
                ..GraphParams::default()
            },
        ));
        assert!(windowed.is_subset(&open), "window {window}");
    }
}

#[test]
fn window_separates_distant_rhymes() {
    // "day"/"way"/"stay" sit on lines 6-8, "nation"/"station" on 9 and 11
    let graph = build(
        LYRICS,
        GraphParams {
            window: Some(1),
            ..GraphParams::default()
        },
    );
    let links = link_set(&graph);
    assert!(links.contains(&("day".to_string(), "way".to_string())));
    assert!(!links.contains(&("day".to_string(), "stay".to_string())));
    assert!(!links.contains(&("nation".to_string(), "station".to_string())));
}

// ============================================================
// Families
// ============================================================

#[test]
fn linked_nodes_share_a_family() {
    let graph = build(LYRICS, GraphParams::default());
    for link in &graph.links {
        assert_eq!(family_of(&graph, &link.source), family_of(&graph, &link.target));
    }
}

#[test]
fn families_are_dense_and_in_discovery_order() {
    let graph = build(LYRICS, GraphParams::default());
    let mut next = 0;
    for node in &graph.nodes {
        assert!(node.family <= next);
        if node.family == next {
            next += 1;
        }
    }
    assert_eq!(graph.family_count(), next);
}

#[test]
fn rhyme_groups_form_expected_families() {
    let graph = build(LYRICS, GraphParams::default());
    assert_eq!(family_of(&graph, "light"), family_of(&graph, "tonight"));
    assert_eq!(family_of(&graph, "day"), family_of(&graph, "stay"));
    assert_eq!(family_of(&graph, "nation"), family_of(&graph, "station"));
    assert_ne!(family_of(&graph, "light"), family_of(&graph, "sat"));
    assert_ne!(family_of(&graph, "day"), family_of(&graph, "nation"));
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn repeated_builds_are_identical() {
    let first = build(LYRICS, GraphParams::default()).to_json().unwrap();
    let second = build(LYRICS, GraphParams::default()).to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_build_matches_sequential() {
    let dict = fixture_dict();
    let scorer = RhymeScorer::new(RhymeResolver::new(&dict));
    let sequential = GraphBuilder::new(&scorer, GraphParams::default()).build_from_text(LYRICS);
    let parallel = GraphBuilder::new(&scorer, GraphParams::default())
        .parallel(true)
        .build_from_text(LYRICS);
    assert_eq!(sequential, parallel);
}
