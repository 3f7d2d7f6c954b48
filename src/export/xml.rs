// Small event-writer helpers shared by the XML exporters.

use std::path::Path;

use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::output::write_atomic;

pub type XmlWriter = Writer<Vec<u8>>;

/// An in-memory, two-space indented document with its XML declaration.
pub fn document() -> Result<XmlWriter> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

pub fn open(writer: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

pub fn close(writer: &mut XmlWriter, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub fn empty(writer: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// `<name attrs>text</name>`, text escaped.
pub fn text_element(
    writer: &mut XmlWriter,
    name: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    open(writer, name, attrs)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    close(writer, name)
}

/// Write the finished document to `path` all-or-nothing.
pub fn finish(writer: XmlWriter, path: &Path) -> Result<()> {
    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    write_atomic(path, &bytes)
}
