//! XML format: `<file path="…">` elements with content wrapped in CDATA,
//! splitting any embedded `]]>` across adjacent CDATA sections. Built with
//! `quick_xml`'s event writer rather than hand-assembled strings, so
//! attribute escaping follows the XML spec rather than a bespoke table.

use super::OutputFormatter;
use crate::core_types::{ProcessedFile, RunSummary};
use quick_xml::events::{BytesCData, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

pub struct XmlFormatter;

impl OutputFormatter for XmlFormatter {
    fn preamble(&self) -> String {
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<repomix format=\"xml\">".to_string()
    }

    fn file_block(&self, file: &ProcessedFile, _index: usize) -> String {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        let mut start = BytesStart::new("file");
        start.push_attribute(("path", file.path.as_str()));
        writer.write_event(Event::Start(start)).expect("writing to an in-memory buffer cannot fail");
        write_split_cdata(&mut writer, &file.content);
        writer.write_event(Event::End(quick_xml::events::BytesEnd::new("file"))).unwrap();
        format!("  {}", into_string(writer))
    }

    fn summary_block(&self, summary: &RunSummary) -> String {
        format!(
            "  <summary files=\"{}\" lines=\"{}\" bytes=\"{}\" tokens=\"{}\" truncated=\"{}\" cancelled=\"{}\"/>\n</repomix>",
            summary.file_count,
            summary.line_count,
            summary.byte_count,
            summary.token_count.map(|t| t.to_string()).unwrap_or_default(),
            summary.content_truncated,
            summary.cancelled,
        )
    }
}

/// Writes `content` as one or more adjacent CDATA sections so that an
/// embedded `]]>` never terminates the section early: the literal sequence
/// is emitted as escaped text between two CDATA blocks instead.
fn write_split_cdata(writer: &mut Writer<Cursor<Vec<u8>>>, content: &str) {
    let mut parts = content.split("]]>");
    if let Some(first) = parts.next() {
        writer.write_event(Event::CData(BytesCData::new(first))).unwrap();
    }
    for part in parts {
        writer.write_event(Event::Text(BytesText::from_escaped("]]&gt;"))).unwrap();
        writer.write_event(Event::CData(BytesCData::new(part))).unwrap();
    }
}

fn into_string(writer: Writer<Cursor<Vec<u8>>>) -> String {
    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).expect("quick_xml only ever writes UTF-8 output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_cdata_terminator_does_not_break_the_section() {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        write_split_cdata(&mut writer, "before]]>after");
        let out = into_string(writer);
        assert!(!out.contains("]]>after"));
        assert!(out.contains("before"));
        assert!(out.contains("after"));
    }

    #[test]
    fn attribute_quotes_are_escaped_by_the_writer() {
        let fmt = XmlFormatter;
        let file = ProcessedFile {
            path: "weird\"name.rs".into(),
            content: "fn f() {}\n".into(),
            line_count: 1,
            byte_size: 10,
            is_summarized: false,
        };
        let block = fmt.file_block(&file, 0);
        assert!(block.contains("&quot;"));
    }

    #[test]
    fn file_block_wraps_content_in_cdata() {
        let fmt = XmlFormatter;
        let file = ProcessedFile {
            path: "a.rs".into(),
            content: "fn f() {}\n".into(),
            line_count: 1,
            byte_size: 10,
            is_summarized: false,
        };
        let block = fmt.file_block(&file, 0);
        assert!(block.contains("<![CDATA["));
        assert!(block.contains("path=\"a.rs\""));
    }
}
