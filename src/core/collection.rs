//! Geordnete Record-Sammlung mit Selektion (Record-Editor).

use super::record::{EditError, HandlingRecord};
use super::schema::{Axis, HandlingField};

/// Platzhalter-Name für neu angelegte Records.
pub const NEW_RECORD_NAME: &str = "new_vehicle";

/// Alle geladenen Handling-Records plus aktuell selektierter Index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandlingCollection {
    records: Vec<HandlingRecord>,
    selected: usize,
}

impl HandlingCollection {
    /// Erstellt eine Sammlung; Selektion steht auf dem ersten Record.
    pub fn new(records: Vec<HandlingRecord>) -> Self {
        Self {
            records,
            selected: 0,
        }
    }

    /// Anzahl der Records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt `true` zurück, wenn keine Records vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Alle Records in Reihenfolge.
    pub fn records(&self) -> &[HandlingRecord] {
        &self.records
    }

    /// Record an einem Index.
    pub fn get(&self, index: usize) -> Option<&HandlingRecord> {
        self.records.get(index)
    }

    /// Aktuell selektierter Index.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Aktuell selektierter Record (`None` bei leerer Sammlung).
    pub fn selected(&self) -> Option<&HandlingRecord> {
        self.records.get(self.selected)
    }

    /// Selektiert einen Record.
    pub fn select(&mut self, index: usize) -> Result<(), EditError> {
        self.check_index(index)?;
        self.selected = index;
        Ok(())
    }

    /// Setzt ein Feld eines Records.
    ///
    /// Für Vektorfelder ersetzt `axis` genau eine Komponente, die anderen
    /// beiden bleiben unverändert.
    pub fn set_field(
        &mut self,
        index: usize,
        field: HandlingField,
        axis: Option<Axis>,
        value: impl Into<String>,
        validate_numbers: bool,
    ) -> Result<(), EditError> {
        self.check_index(index)?;
        self.records[index].set(field, axis, value, validate_numbers)
    }

    /// Wie `set_field`, aber mit Feld- und Achsen-Schlüssel als Text.
    ///
    /// Unbekannte Schlüssel werden mit `UnknownField`/`UnknownAxis` abgelehnt.
    pub fn set_field_by_name(
        &mut self,
        index: usize,
        field_name: &str,
        axis_key: Option<&str>,
        value: impl Into<String>,
        validate_numbers: bool,
    ) -> Result<(), EditError> {
        let field = HandlingField::from_name(field_name)
            .ok_or_else(|| EditError::UnknownField(field_name.to_string()))?;
        let axis = axis_key
            .map(|key| Axis::from_key(key).ok_or_else(|| EditError::UnknownAxis(key.to_string())))
            .transpose()?;
        self.set_field(index, field, axis, value, validate_numbers)
    }

    /// Kopiert den Record an Index 0, benennt die Kopie um, fügt sie vorne ein
    /// und selektiert sie.
    pub fn duplicate_as_new(&mut self, name: &str) -> Result<usize, EditError> {
        let template = self.records.first().ok_or(EditError::EmptyCollection)?;

        let mut record = template.clone();
        record.set_display_name(name);
        self.records.insert(0, record);
        self.selected = 0;

        Ok(0)
    }

    /// Entfernt den Record an `index` und korrigiert die Selektion.
    ///
    /// - War der entfernte Record selektiert oder liegt die Selektion danach
    ///   außerhalb, springt sie auf `max(0, len - 1)`.
    /// - Lag der entfernte Record vor der Selektion, rückt sie um eins nach,
    ///   damit derselbe Record selektiert bleibt.
    ///
    /// Der letzte verbleibende Record kann nicht entfernt werden.
    pub fn remove(&mut self, index: usize) -> Result<HandlingRecord, EditError> {
        self.check_index(index)?;
        if self.records.len() == 1 {
            return Err(EditError::LastRecord);
        }

        let removed = self.records.remove(index);
        let new_len = self.records.len();

        if index == self.selected || self.selected >= new_len {
            self.selected = new_len.saturating_sub(1);
        } else if index < self.selected {
            self.selected -= 1;
        }

        Ok(removed)
    }

    /// Lazy, wiederholbar iterierbarer Filter über den Anzeigenamen.
    ///
    /// Vergleich ist case-insensitiv; leerer Suchtext liefert alle Records.
    pub fn filter<'a>(&'a self, query: &str) -> RecordFilter<'a> {
        RecordFilter {
            records: &self.records,
            needle: query.to_lowercase(),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(EditError::OutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }
}

/// Ergebnis von `HandlingCollection::filter`. Mutiert weder Records noch Selektion.
#[derive(Debug, Clone)]
pub struct RecordFilter<'a> {
    records: &'a [HandlingRecord],
    needle: String,
}

impl<'a> RecordFilter<'a> {
    /// Startet eine neue Iteration über alle Treffer als `(Original-Index, Record)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a HandlingRecord)> + '_ {
        let records = self.records;
        records
            .iter()
            .enumerate()
            .filter(move |(_, record)| self.matches(record))
    }

    /// Original-Indizes aller Treffer.
    pub fn indices(&self) -> Vec<usize> {
        self.iter().map(|(index, _)| index).collect()
    }

    fn matches(&self, record: &HandlingRecord) -> bool {
        self.needle.is_empty() || record.display_name().to_lowercase().contains(&self.needle)
    }
}
