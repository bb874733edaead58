//! Generischer XML-Teilbaum für Elemente außerhalb der Feldtabelle.

/// Ein XML-Element mit Attributen, Text-Inhalt und Kindern.
///
/// Wird für unbekannte Item-Kinder (z.B. `SubHandlingData`) verwendet, damit sie
/// beim Export unverändert wieder geschrieben werden können.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    /// Elementname
    pub name: String,
    /// Attribute in Original-Reihenfolge (unescaped)
    pub attributes: Vec<(String, String)>,
    /// Zusammengefügter Text-Inhalt (unescaped, bei Blatt-Elementen ungetrimmt)
    pub text: String,
    /// Kind-Elemente in Original-Reihenfolge
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Erstellt ein leeres Element mit Namen.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sucht den Wert eines Attributs.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Erstes direktes Kind mit passendem Namen.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Element ohne Kinder und ohne Text (wird als `<name ... />` geschrieben).
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_empty()
    }
}
