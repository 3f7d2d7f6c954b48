// GEXF 1.2 writer (Gephi's native format).

use std::path::Path;

use anyhow::Result;

use super::positions_attr;
use super::xml::{self, XmlWriter};
use crate::graph::model::RhymeGraph;

const GEXF_NS: &str = "http://gexf.net/1.2";

/// (attribute id, title, type) for node attributes.
const NODE_ATTRIBUTES: [(&str, &str, &str); 5] = [
    ("0", "group", "integer"),
    ("1", "count", "integer"),
    ("2", "positions", "string"),
    ("3", "rhyme_key", "string"),
    ("4", "family", "integer"),
];

/// Write `graph` as GEXF to `path`.
pub fn write(graph: &RhymeGraph, path: &Path) -> Result<()> {
    xml::finish(render(graph)?, path)
}

fn render(graph: &RhymeGraph) -> Result<XmlWriter> {
    let mut w = xml::document()?;
    xml::open(&mut w, "gexf", &[("xmlns", GEXF_NS), ("version", "1.2")])?;
    xml::open(
        &mut w,
        "graph",
        &[("mode", "static"), ("defaultedgetype", "undirected")],
    )?;

    xml::open(&mut w, "attributes", &[("class", "node")])?;
    for (id, title, kind) in NODE_ATTRIBUTES {
        xml::empty(&mut w, "attribute", &[("id", id), ("title", title), ("type", kind)])?;
    }
    xml::close(&mut w, "attributes")?;

    xml::open(&mut w, "attributes", &[("class", "edge")])?;
    xml::empty(
        &mut w,
        "attribute",
        &[("id", "0"), ("title", "value"), ("type", "double")],
    )?;
    xml::close(&mut w, "attributes")?;

    xml::open(&mut w, "nodes", &[])?;
    for node in &graph.nodes {
        xml::open(&mut w, "node", &[("id", node.id.as_str()), ("label", node.id.as_str())])?;
        xml::open(&mut w, "attvalues", &[])?;
        let values = [
            node.group.to_string(),
            node.count.to_string(),
            positions_attr(&node.positions),
            node.rhyme_key.clone(),
            node.family.to_string(),
        ];
        for ((id, _, _), value) in NODE_ATTRIBUTES.iter().zip(&values) {
            xml::empty(&mut w, "attvalue", &[("for", *id), ("value", value.as_str())])?;
        }
        xml::close(&mut w, "attvalues")?;
        xml::close(&mut w, "node")?;
    }
    xml::close(&mut w, "nodes")?;

    xml::open(&mut w, "edges", &[])?;
    for (idx, link) in graph.links.iter().enumerate() {
        let id = idx.to_string();
        let value = link.value.to_string();
        xml::open(
            &mut w,
            "edge",
            &[
                ("id", id.as_str()),
                ("source", link.source.as_str()),
                ("target", link.target.as_str()),
                ("weight", value.as_str()),
            ],
        )?;
        xml::open(&mut w, "attvalues", &[])?;
        xml::empty(&mut w, "attvalue", &[("for", "0"), ("value", value.as_str())])?;
        xml::close(&mut w, "attvalues")?;
        xml::close(&mut w, "edge")?;
    }
    xml::close(&mut w, "edges")?;

    xml::close(&mut w, "graph")?;
    xml::close(&mut w, "gexf")?;
    Ok(w)
}
