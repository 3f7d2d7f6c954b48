// GraphML writer.
//
// GraphML attribute values are scalars, so node positions are written as a
// space-separated string.

use std::path::Path;

use anyhow::Result;

use super::positions_attr;
use super::xml::{self, XmlWriter};
use crate::graph::model::RhymeGraph;

const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "http://graphml.graphdrawing.org/xmlns \
                               http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";

/// (key id, domain, attribute name, attribute type)
const KEYS: [(&str, &str, &str, &str); 6] = [
    ("d0", "node", "group", "int"),
    ("d1", "node", "count", "int"),
    ("d2", "node", "positions", "string"),
    ("d3", "node", "rhyme_key", "string"),
    ("d4", "node", "family", "int"),
    ("d5", "edge", "value", "double"),
];

/// Write `graph` as GraphML to `path`.
pub fn write(graph: &RhymeGraph, path: &Path) -> Result<()> {
    xml::finish(render(graph)?, path)
}

fn render(graph: &RhymeGraph) -> Result<XmlWriter> {
    let mut w = xml::document()?;
    xml::open(
        &mut w,
        "graphml",
        &[
            ("xmlns", GRAPHML_NS),
            ("xmlns:xsi", XSI_NS),
            ("xsi:schemaLocation", SCHEMA_LOCATION),
        ],
    )?;

    for (id, domain, name, kind) in KEYS {
        xml::empty(
            &mut w,
            "key",
            &[("id", id), ("for", domain), ("attr.name", name), ("attr.type", kind)],
        )?;
    }

    xml::open(&mut w, "graph", &[("edgedefault", "undirected")])?;

    for node in &graph.nodes {
        xml::open(&mut w, "node", &[("id", node.id.as_str())])?;
        xml::text_element(&mut w, "data", &[("key", "d0")], &node.group.to_string())?;
        xml::text_element(&mut w, "data", &[("key", "d1")], &node.count.to_string())?;
        xml::text_element(&mut w, "data", &[("key", "d2")], &positions_attr(&node.positions))?;
        xml::text_element(&mut w, "data", &[("key", "d3")], &node.rhyme_key)?;
        xml::text_element(&mut w, "data", &[("key", "d4")], &node.family.to_string())?;
        xml::close(&mut w, "node")?;
    }

    for link in &graph.links {
        xml::open(
            &mut w,
            "edge",
            &[("source", link.source.as_str()), ("target", link.target.as_str())],
        )?;
        xml::text_element(&mut w, "data", &[("key", "d5")], &link.value.to_string())?;
        xml::close(&mut w, "edge")?;
    }

    xml::close(&mut w, "graph")?;
    xml::close(&mut w, "graphml")?;
    Ok(w)
}
