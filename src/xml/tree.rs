//! Liest ein XML-Dokument per quick-xml in einen `XmlElement`-Baum.

use super::error::HandlingXmlError;
use crate::core::XmlElement;
use quick_xml::events::{BytesRef, BytesStart, Event};
use quick_xml::Reader;

/// Parsed ein vollständiges Dokument und liefert das Wurzelelement.
///
/// Entities und Zeichenreferenzen werden aufgelöst. Text von Elementen mit Kindern
/// wird am Element-Ende getrimmt, Text von Blatt-Elementen bleibt unverändert.
/// Deklaration, Kommentare und Processing-Instructions werden übersprungen.
pub fn read_document(xml_content: &str) -> Result<XmlElement, HandlingXmlError> {
    let mut reader = Reader::from_str(xml_content);
    // Kein trim_text: Entities kommen als eigene Events, Leerzeichen dazwischen
    // gehören zum Wert.

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let position = reader.buffer_position() as u64;

        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                ensure_no_second_root(&root, &stack, position)?;
                stack.push(element_from_start(e, position)?);
            }
            Ok(Event::Empty(ref e)) => {
                ensure_no_second_root(&root, &stack, position)?;
                let element = element_from_start(e, position)?;
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::End(_)) => {
                let mut element = stack.pop().ok_or_else(|| {
                    HandlingXmlError::malformed(position, "End-Tag ohne Start-Tag")
                })?;
                // Blatt-Text bleibt exakt erhalten, nur Einrückung zwischen Kindern fällt weg
                if !element.children.is_empty() {
                    let trimmed = element.text.trim();
                    if trimmed.len() != element.text.len() {
                        element.text = trimmed.to_string();
                    }
                }
                attach(&mut stack, &mut root, element);
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .xml_content()
                    .map_err(|err| HandlingXmlError::malformed(position, err))?;
                push_text(&mut stack, &text, position)?;
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e);
                push_text(&mut stack, &text, position)?;
            }
            Ok(Event::GeneralRef(ref e)) => {
                let resolved = resolve_reference(e, position)?;
                push_text(&mut stack, &resolved, position)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(HandlingXmlError::malformed(
                    reader.error_position() as u64,
                    err,
                ))
            }
        }
    }

    let end = reader.buffer_position() as u64;

    if let Some(open) = stack.last() {
        return Err(HandlingXmlError::malformed(
            end,
            format!("Dokument endet mit offenem Element <{}>", open.name),
        ));
    }

    root.ok_or_else(|| HandlingXmlError::malformed(end, "Kein Wurzelelement gefunden"))
}

fn element_from_start(start: &BytesStart<'_>, position: u64) -> Result<XmlElement, HandlingXmlError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|err| HandlingXmlError::malformed(position, err))?
        .to_string();

    let mut element = XmlElement::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|err| HandlingXmlError::malformed(position, err))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| HandlingXmlError::malformed(position, err))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| HandlingXmlError::malformed(position, err))?
            .into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

fn resolve_reference(reference: &BytesRef<'_>, position: u64) -> Result<String, HandlingXmlError> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|err| HandlingXmlError::malformed(position, err))?
    {
        return Ok(ch.to_string());
    }

    let name = reference
        .decode()
        .map_err(|err| HandlingXmlError::malformed(position, err))?;

    quick_xml::escape::resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| {
            HandlingXmlError::malformed(position, format!("Unbekannte Entity '&{};'", name))
        })
}

fn ensure_no_second_root(
    root: &Option<XmlElement>,
    stack: &[XmlElement],
    position: u64,
) -> Result<(), HandlingXmlError> {
    if stack.is_empty() && root.is_some() {
        return Err(HandlingXmlError::malformed(
            position,
            "Mehr als ein Wurzelelement",
        ));
    }
    Ok(())
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [XmlElement], text: &str, position: u64) -> Result<(), HandlingXmlError> {
    match stack.last_mut() {
        Some(current) => {
            current.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(HandlingXmlError::malformed(
            position,
            "Text ausserhalb des Wurzelelements",
        )),
    }
}
