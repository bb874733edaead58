//! Parser für handling.meta-Dateien.

use super::error::HandlingXmlError;
use super::tree::read_document;
use super::{CONTAINER_ELEMENT, ITEM_ELEMENT, ROOT_ELEMENT, VALUE_ATTRIBUTE};
use crate::core::{
    Axis, FieldKind, FieldValue, HandlingField, HandlingRecord, VectorValue, XmlElement,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Verhalten, wenn ein Feld der Feldtabelle in einem Item fehlt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Parse schlägt mit `MissingField` fehl
    #[default]
    Reject,
    /// Feld wird mit leerem Text angelegt (mit Warnung im Log)
    FillEmpty,
}

/// Optionen für den Import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub missing_fields: MissingFieldPolicy,
    /// Unbekannte Item-Kinder behalten, damit sie wieder geschrieben werden
    pub preserve_unknown_elements: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            missing_fields: MissingFieldPolicy::Reject,
            preserve_unknown_elements: true,
        }
    }
}

/// Gesammelte Items vor der Normalisierung.
///
/// Bildet die drei Fälle des Dokuments explizit ab: kein, genau ein oder
/// mehrere `<Item>`-Elemente.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemSet<T> {
    #[default]
    Empty,
    Single(T),
    Many(Vec<T>),
}

impl<T> ItemSet<T> {
    /// Fügt ein Item hinten an.
    pub fn push(self, item: T) -> Self {
        match self {
            ItemSet::Empty => ItemSet::Single(item),
            ItemSet::Single(first) => ItemSet::Many(vec![first, item]),
            ItemSet::Many(mut items) => {
                items.push(item);
                ItemSet::Many(items)
            }
        }
    }
}

/// Macht aus einem `ItemSet` immer eine Sequenz.
pub fn normalize_items<T>(items: ItemSet<T>) -> Vec<T> {
    match items {
        ItemSet::Empty => Vec::new(),
        ItemSet::Single(item) => vec![item],
        ItemSet::Many(items) => items,
    }
}

/// Parsed eine handling.meta mit Standard-Optionen.
pub fn parse_handling_meta(xml_content: &str) -> Result<Vec<HandlingRecord>, HandlingXmlError> {
    parse_handling_meta_with(xml_content, &ParseOptions::default())
}

/// Parsed eine handling.meta in eine geordnete Record-Liste.
pub fn parse_handling_meta_with(
    xml_content: &str,
    options: &ParseOptions,
) -> Result<Vec<HandlingRecord>, HandlingXmlError> {
    let root = read_document(xml_content)?;

    if root.name != ROOT_ELEMENT {
        return Err(HandlingXmlError::UnexpectedStructure {
            expected: ROOT_ELEMENT,
            found: format!("<{}>", root.name),
        });
    }

    let container = container_of(&root)?;

    let mut items = ItemSet::Empty;
    for child in &container.children {
        if child.name != ITEM_ELEMENT {
            return Err(HandlingXmlError::UnexpectedStructure {
                expected: ITEM_ELEMENT,
                found: format!("<{}>", child.name),
            });
        }
        items = items.push(child);
    }

    let records = normalize_items(items)
        .into_iter()
        .enumerate()
        .map(|(index, item)| record_from_item(index, item, options))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!("handling.meta geparst: {} Records", records.len());
    Ok(records)
}

/// Sucht `<HandlingData>` als einziges Kind der Wurzel.
fn container_of(root: &XmlElement) -> Result<&XmlElement, HandlingXmlError> {
    match root.children.as_slice() {
        [container] if container.name == CONTAINER_ELEMENT => Ok(container),
        [] => Err(HandlingXmlError::UnexpectedStructure {
            expected: CONTAINER_ELEMENT,
            found: "kein Element".to_string(),
        }),
        [other] => Err(HandlingXmlError::UnexpectedStructure {
            expected: CONTAINER_ELEMENT,
            found: format!("<{}>", other.name),
        }),
        many => Err(HandlingXmlError::UnexpectedStructure {
            expected: CONTAINER_ELEMENT,
            found: format!("{} Elemente", many.len()),
        }),
    }
}

/// Baut einen Record aus einem `<Item>`-Element.
fn record_from_item(
    index: usize,
    item: &XmlElement,
    options: &ParseOptions,
) -> Result<HandlingRecord, HandlingXmlError> {
    let handling_name = item
        .child(HandlingField::DISPLAY_NAME.name())
        .map(|element| element.text.clone())
        .unwrap_or_default();

    let mut fields: IndexMap<HandlingField, FieldValue> = IndexMap::new();
    let mut extras = Vec::new();

    for child in &item.children {
        let Some(field) = HandlingField::from_name(&child.name) else {
            if options.preserve_unknown_elements {
                extras.push(child.clone());
            } else {
                log::debug!("Item {}: unbekanntes Element <{}> verworfen", index, child.name);
            }
            continue;
        };

        if fields.contains_key(&field) {
            log::warn!(
                "Item {} ('{}'): Feld {} doppelt, erster Wert bleibt",
                index,
                handling_name,
                field
            );
            continue;
        }

        let value = field_value(child, field).map_err(|axis| HandlingXmlError::MissingAxis {
            item: index,
            handling_name: handling_name.clone(),
            field,
            axis,
        })?;
        fields.insert(field, value);
    }

    if options.missing_fields == MissingFieldPolicy::FillEmpty {
        for field in HandlingField::ALL {
            if fields.contains_key(field) {
                continue;
            }
            log::warn!(
                "Item {} ('{}'): Feld {} fehlt, wird leer angelegt",
                index,
                handling_name,
                field
            );
            fields.insert(*field, FieldValue::empty_for(field.kind()));
        }
    }

    HandlingRecord::from_parts(fields, item.attributes.clone(), extras).map_err(|field| {
        HandlingXmlError::MissingField {
            item: index,
            handling_name,
            field,
        }
    })
}

/// Liest den Wert eines bekannten Feldes. Fehler liefert die fehlende Achse.
fn field_value(element: &XmlElement, field: HandlingField) -> Result<FieldValue, Axis> {
    match field.kind() {
        FieldKind::Decimal | FieldKind::Integer => {
            let text = element
                .attribute(VALUE_ATTRIBUTE)
                .unwrap_or_else(|| element.text.trim());
            Ok(FieldValue::Scalar(text.to_string()))
        }
        FieldKind::Vector => {
            let axis_value = |axis: Axis| {
                element
                    .attribute(axis.attribute())
                    .map(str::to_string)
                    .ok_or(axis)
            };
            Ok(FieldValue::Vector(VectorValue {
                x: axis_value(Axis::X)?,
                y: axis_value(Axis::Y)?,
                z: axis_value(Axis::Z)?,
            }))
        }
        FieldKind::Text | FieldKind::Flags => Ok(FieldValue::Text(element.text.clone())),
    }
}
