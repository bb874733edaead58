//! Writer für handling.meta-Dateien.

use super::{CONTAINER_ELEMENT, ITEM_ELEMENT, ROOT_ELEMENT, VALUE_ATTRIBUTE};
use crate::core::{Axis, FieldValue, HandlingRecord, XmlElement};
use quick_xml::escape::escape;

/// Erste Zeile jeder exportierten Datei.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Optionen für den Export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Leerzeichen pro Einrückungsebene
    pub indent_width: usize,
    /// Beim Import behaltene, unbekannte Item-Kinder mitschreiben
    pub include_unknown_elements: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            include_unknown_elements: true,
        }
    }
}

/// Schreibt Records mit Standard-Optionen.
pub fn write_handling_meta(records: &[HandlingRecord]) -> String {
    write_handling_meta_with(records, &WriteOptions::default())
}

/// Schreibt Records als handling.meta-XML.
///
/// Felder erscheinen in Schema-Reihenfolge, Werte exakt als gespeicherter Text.
pub fn write_handling_meta_with(records: &[HandlingRecord], options: &WriteOptions) -> String {
    let mut out = XmlOut::new(options.indent_width);

    out.raw_line(0, XML_DECLARATION);
    out.raw_line(0, &format!("<{}>", ROOT_ELEMENT));

    if records.is_empty() {
        out.raw_line(1, &format!("<{} />", CONTAINER_ELEMENT));
    } else {
        out.raw_line(1, &format!("<{}>", CONTAINER_ELEMENT));
        for record in records {
            write_record(&mut out, record, options);
        }
        out.raw_line(1, &format!("</{}>", CONTAINER_ELEMENT));
    }

    out.raw_line(0, &format!("</{}>", ROOT_ELEMENT));
    out.finish()
}

fn write_record(out: &mut XmlOut, record: &HandlingRecord, options: &WriteOptions) {
    out.raw_line(
        2,
        &format!("<{}{}>", ITEM_ELEMENT, attributes(&record.item_attributes)),
    );

    for (field, value) in record.fields() {
        let name = field.name();
        let line = match value {
            FieldValue::Scalar(text) => {
                format!("<{} {}=\"{}\" />", name, VALUE_ATTRIBUTE, escape(text.as_str()))
            }
            FieldValue::Vector(vector) => {
                let axes: String = Axis::ALL
                    .iter()
                    .map(|axis| format!(" {}=\"{}\"", axis.attribute(), escape(vector.get(*axis))))
                    .collect();
                format!("<{}{} />", name, axes)
            }
            FieldValue::Text(text) if text.is_empty() => format!("<{} />", name),
            FieldValue::Text(text) => format!("<{0}>{1}</{0}>", name, escape(text.as_str())),
        };
        out.raw_line(3, &line);
    }

    if options.include_unknown_elements {
        for element in &record.extra_elements {
            write_element(out, element, 3);
        }
    }

    out.raw_line(2, &format!("</{}>", ITEM_ELEMENT));
}

/// Schreibt einen beliebigen Teilbaum rekursiv.
pub(crate) fn write_element(out: &mut XmlOut, element: &XmlElement, depth: usize) {
    let attrs = attributes(&element.attributes);

    if element.is_empty() {
        out.raw_line(depth, &format!("<{}{} />", element.name, attrs));
        return;
    }

    if element.children.is_empty() {
        out.raw_line(
            depth,
            &format!(
                "<{0}{1}>{2}</{0}>",
                element.name,
                attrs,
                escape(element.text.as_str())
            ),
        );
        return;
    }

    out.raw_line(depth, &format!("<{}{}>", element.name, attrs));
    if !element.text.is_empty() {
        out.raw_line(depth + 1, &escape(element.text.as_str()));
    }
    for child in &element.children {
        write_element(out, child, depth + 1);
    }
    out.raw_line(depth, &format!("</{}>", element.name));
}

fn attributes(attributes: &[(String, String)]) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", key, escape(value.as_str())))
        .collect()
}

/// Zeilenweiser Ausgabepuffer mit fester Einrückung.
pub(crate) struct XmlOut {
    buffer: String,
    indent_width: usize,
}

impl XmlOut {
    fn new(indent_width: usize) -> Self {
        Self {
            buffer: String::with_capacity(16 * 1024),
            indent_width,
        }
    }

    fn raw_line(&mut self, depth: usize, line: &str) {
        for _ in 0..depth * self.indent_width {
            self.buffer.push(' ');
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}
