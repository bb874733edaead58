//! Ein Fahrzeug-Handling-Profil (`<Item>`) als flacher Record.

use super::element::XmlElement;
use super::schema::{Axis, FieldKind, HandlingField};
use indexmap::IndexMap;

/// Fehler bei Record-Operationen des Editors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Record-Index {index} ausserhalb des gueltigen Bereichs (Laenge {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("Unbekanntes Feld '{0}'")]
    UnknownField(String),
    #[error("Unbekannte Achse '{0}' (erwartet x, y oder z)")]
    UnknownAxis(String),
    #[error("Feld {0} ist ein Vektor: Achse (x/y/z) erforderlich")]
    AxisRequired(HandlingField),
    #[error("Feld {0} ist kein Vektor: Achse nicht zulaessig")]
    AxisNotApplicable(HandlingField),
    #[error("'{value}' ist kein gueltiger Zahlenwert fuer {field}")]
    NotNumeric { field: HandlingField, value: String },
    #[error("Keine Records vorhanden")]
    EmptyCollection,
    #[error("Der letzte verbleibende Record kann nicht geloescht werden")]
    LastRecord,
}

/// Drei Achsen-Komponenten, jeweils als Text gespeichert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VectorValue {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl VectorValue {
    /// Erstellt einen Vektor aus drei Komponenten.
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// Liest eine Komponente.
    pub fn get(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Ersetzt genau eine Komponente.
    pub fn set(&mut self, axis: Axis, value: String) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

/// Wert eines Feldes; die Variante folgt dem `FieldKind` aus der Feldtabelle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Zahl (Dezimal oder Ganzzahl) als unveränderter Text
    Scalar(String),
    /// Drei Achsen-Komponenten
    Vector(VectorValue),
    /// Freitext oder Flags
    Text(String),
}

impl FieldValue {
    /// Leerer Wert passend zum Feldtyp.
    pub fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Decimal | FieldKind::Integer => FieldValue::Scalar(String::new()),
            FieldKind::Vector => FieldValue::Vector(VectorValue::default()),
            FieldKind::Text | FieldKind::Flags => FieldValue::Text(String::new()),
        }
    }

    /// Text eines skalaren Wertes (Zahl oder Text). `None` für Vektoren.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) | FieldValue::Text(s) => Some(s),
            FieldValue::Vector(_) => None,
        }
    }

    /// Vektor-Komponenten. `None` für skalare Werte.
    pub fn as_vector(&self) -> Option<&VectorValue> {
        match self {
            FieldValue::Vector(v) => Some(v),
            _ => None,
        }
    }
}

/// Prüft, ob ein Text als Zahl des gegebenen Typs gültig ist.
///
/// Dezimalwerte müssen endlich sein; Ganzzahlen dürfen keinen Dezimalpunkt haben.
/// Der Text selbst wird nie umformatiert.
pub fn is_valid_number(kind: FieldKind, text: &str) -> bool {
    let trimmed = text.trim();
    match kind {
        FieldKind::Integer => trimmed.parse::<i64>().is_ok(),
        FieldKind::Decimal | FieldKind::Vector => trimmed
            .parse::<f64>()
            .map(|value| value.is_finite())
            .unwrap_or(false),
        FieldKind::Text | FieldKind::Flags => true,
    }
}

/// Ein Handling-Profil mit allen Feldern der Feldtabelle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlingRecord {
    /// Feldwerte in Schema-Reihenfolge
    fields: IndexMap<HandlingField, FieldValue>,
    /// Attribute des `<Item>`-Elements (z.B. `type="CHandlingData"`)
    pub item_attributes: Vec<(String, String)>,
    /// Unbekannte Item-Kinder in Original-Reihenfolge
    pub extra_elements: Vec<XmlElement>,
}

impl HandlingRecord {
    /// Standard-Typattribut eines Items.
    pub const DEFAULT_ITEM_TYPE: &'static str = "CHandlingData";

    /// Erstellt einen Record mit leeren Werten für jedes Feld.
    pub fn new(name: impl Into<String>) -> Self {
        let mut fields: IndexMap<HandlingField, FieldValue> = HandlingField::ALL
            .iter()
            .map(|field| (*field, FieldValue::empty_for(field.kind())))
            .collect();
        fields.insert(HandlingField::DISPLAY_NAME, FieldValue::Text(name.into()));

        Self {
            fields,
            item_attributes: vec![("type".to_string(), Self::DEFAULT_ITEM_TYPE.to_string())],
            extra_elements: Vec::new(),
        }
    }

    /// Baut einen Record aus bereits vollständigen Feldern.
    ///
    /// Fehlt ein Feld der Tabelle, liefert der Fehler das erste fehlende Feld.
    pub fn from_parts(
        mut fields: IndexMap<HandlingField, FieldValue>,
        item_attributes: Vec<(String, String)>,
        extra_elements: Vec<XmlElement>,
    ) -> Result<Self, HandlingField> {
        if let Some(missing) = HandlingField::ALL
            .iter()
            .find(|field| !fields.contains_key(*field))
        {
            return Err(*missing);
        }
        fields.sort_keys();

        Ok(Self {
            fields,
            item_attributes,
            extra_elements,
        })
    }

    /// Anzeigename (`handlingName`).
    pub fn display_name(&self) -> &str {
        self.fields
            .get(&HandlingField::DISPLAY_NAME)
            .and_then(FieldValue::as_str)
            .unwrap_or("")
    }

    /// Setzt den Anzeigenamen.
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.fields
            .insert(HandlingField::DISPLAY_NAME, FieldValue::Text(name.into()));
    }

    /// Liest einen Feldwert.
    pub fn get(&self, field: HandlingField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Liest einen skalaren Wert (Zahl oder Text) als Text.
    pub fn scalar(&self, field: HandlingField) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    /// Liest einen Vektorwert.
    pub fn vector(&self, field: HandlingField) -> Option<&VectorValue> {
        self.get(field).and_then(FieldValue::as_vector)
    }

    /// Alle Felder in Schema-Reihenfolge.
    pub fn fields(&self) -> impl Iterator<Item = (HandlingField, &FieldValue)> {
        self.fields.iter().map(|(field, value)| (*field, value))
    }

    /// Wert des `type`-Attributs am `<Item>`.
    pub fn item_type(&self) -> Option<&str> {
        self.item_attributes
            .iter()
            .find(|(key, _)| key == "type")
            .map(|(_, value)| value.as_str())
    }

    /// Setzt ein Feld.
    ///
    /// Skalare Felder erwarten `axis == None` und werden komplett ersetzt.
    /// Vektorfelder erwarten eine Achse und ersetzen nur diese Komponente.
    /// Mit `validate_numbers` werden Zahlenfelder vor dem Schreiben geprüft;
    /// ungültiger Text lässt den gespeicherten Wert unverändert.
    pub fn set(
        &mut self,
        field: HandlingField,
        axis: Option<Axis>,
        value: impl Into<String>,
        validate_numbers: bool,
    ) -> Result<(), EditError> {
        let value = value.into();
        let kind = field.kind();

        match (kind, axis) {
            (FieldKind::Vector, None) => return Err(EditError::AxisRequired(field)),
            (FieldKind::Vector, Some(_)) => {}
            (_, Some(_)) => return Err(EditError::AxisNotApplicable(field)),
            (_, None) => {}
        }

        if validate_numbers && !is_valid_number(kind, &value) {
            return Err(EditError::NotNumeric { field, value });
        }

        let slot = self
            .fields
            .entry(field)
            .or_insert_with(|| FieldValue::empty_for(kind));

        match (slot, axis) {
            (FieldValue::Vector(vector), Some(axis)) => vector.set(axis, value),
            (FieldValue::Scalar(text), None) | (FieldValue::Text(text), None) => *text = value,
            // Variante passt nicht zum Feldtyp: Wert neu anlegen
            (slot, axis) => {
                let mut fresh = FieldValue::empty_for(kind);
                match (&mut fresh, axis) {
                    (FieldValue::Vector(vector), Some(axis)) => vector.set(axis, value),
                    (FieldValue::Scalar(text), _) | (FieldValue::Text(text), _) => *text = value,
                    _ => {}
                }
                *slot = fresh;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_contains_every_field() {
        let record = HandlingRecord::new("ADDER");
        for field in HandlingField::ALL {
            assert!(record.get(*field).is_some(), "{field} fehlt");
        }
        assert_eq!(record.display_name(), "ADDER");
        assert_eq!(record.item_type(), Some("CHandlingData"));
    }

    #[test]
    fn scalar_set_keeps_exact_text() {
        let mut record = HandlingRecord::new("ADDER");
        record
            .set(HandlingField::Mass, None, "1300.000000", true)
            .unwrap();
        assert_eq!(record.scalar(HandlingField::Mass), Some("1300.000000"));
    }

    #[test]
    fn vector_axis_set_leaves_other_axes() {
        let mut record = HandlingRecord::new("ADDER");
        for axis in Axis::ALL {
            record
                .set(HandlingField::CentreOfMassOffset, Some(axis), "0.000", true)
                .unwrap();
        }
        record
            .set(HandlingField::CentreOfMassOffset, Some(Axis::Y), "-0.150", true)
            .unwrap();

        let vector = record.vector(HandlingField::CentreOfMassOffset).unwrap();
        assert_eq!(vector, &VectorValue::new("0.000", "-0.150", "0.000"));
    }

    #[test]
    fn axis_rules_are_enforced() {
        let mut record = HandlingRecord::new("ADDER");
        assert_eq!(
            record.set(HandlingField::CentreOfMassOffset, None, "1.0", true),
            Err(EditError::AxisRequired(HandlingField::CentreOfMassOffset))
        );
        assert_eq!(
            record.set(HandlingField::Mass, Some(Axis::X), "1.0", true),
            Err(EditError::AxisNotApplicable(HandlingField::Mass))
        );
    }

    #[test]
    fn invalid_numbers_are_rejected_and_value_kept() {
        let mut record = HandlingRecord::new("ADDER");
        record.set(HandlingField::Mass, None, "1500.0", true).unwrap();

        let err = record
            .set(HandlingField::Mass, None, "abc", true)
            .unwrap_err();
        assert!(matches!(err, EditError::NotNumeric { .. }));
        assert_eq!(record.scalar(HandlingField::Mass), Some("1500.0"));

        assert!(record
            .set(HandlingField::InitialDriveGears, None, "5.5", true)
            .is_err());
        assert!(record
            .set(HandlingField::InitialDriveGears, None, "6", true)
            .is_ok());
    }

    #[test]
    fn validation_can_be_disabled() {
        let mut record = HandlingRecord::new("ADDER");
        record.set(HandlingField::Mass, None, "abc", false).unwrap();
        assert_eq!(record.scalar(HandlingField::Mass), Some("abc"));
    }

    #[test]
    fn flags_are_never_validated() {
        let mut record = HandlingRecord::new("ADDER");
        record
            .set(HandlingField::ModelFlags, None, "440010", true)
            .unwrap();
        record
            .set(HandlingField::AiHandling, None, "SPORTS_CAR", true)
            .unwrap();
        assert_eq!(record.scalar(HandlingField::AiHandling), Some("SPORTS_CAR"));
    }

    #[test]
    fn from_parts_reports_missing_field() {
        let mut fields = IndexMap::new();
        fields.insert(
            HandlingField::HandlingName,
            FieldValue::Text("ADDER".to_string()),
        );
        let err = HandlingRecord::from_parts(fields, Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, HandlingField::Mass);
    }

    #[test]
    fn number_validation() {
        assert!(is_valid_number(FieldKind::Decimal, " 0.000 "));
        assert!(is_valid_number(FieldKind::Decimal, "-1e3"));
        assert!(!is_valid_number(FieldKind::Decimal, "NaN"));
        assert!(!is_valid_number(FieldKind::Decimal, ""));
        assert!(is_valid_number(FieldKind::Integer, "6"));
        assert!(!is_valid_number(FieldKind::Integer, "6.0"));
        assert!(is_valid_number(FieldKind::Flags, "anything"));
    }
}
