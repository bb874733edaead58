//! Zentrale Konfiguration für den Handling Meta Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::NEW_RECORD_NAME;
use crate::xml::{MissingFieldPolicy, ParseOptions, WriteOptions};
use serde::{Deserialize, Serialize};

// ── Import/Export ───────────────────────────────────────────────────

/// Standard-Einrückung der exportierten Datei (Leerzeichen pro Ebene).
pub const INDENT_WIDTH: usize = 2;
/// Größte erlaubte Einrückung.
pub const INDENT_WIDTH_MAX: usize = 8;
/// Vorgeschlagener Dateiname im Speichern-Dialog.
pub const DEFAULT_FILE_NAME: &str = "handling.meta";

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

/// Name der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "handling_meta_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `handling_meta_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Import ──────────────────────────────────────────────────
    /// Umgang mit fehlenden Feldern (`reject` oder `fill_empty`)
    pub missing_field_policy: MissingFieldPolicy,
    /// Unbekannte Item-Kinder beim Import behalten und wieder exportieren
    pub preserve_unknown_elements: bool,

    // ── Bearbeitung ─────────────────────────────────────────────
    /// Zahlenfelder beim Setzen prüfen
    pub validate_numbers: bool,
    /// Name neu angelegter Records
    pub new_record_name: String,
    /// Undo-Tiefe
    pub history_depth: usize,

    // ── Export ──────────────────────────────────────────────────
    /// Leerzeichen pro Einrückungsebene
    pub indent_width: usize,
    /// Dateiname-Vorschlag im Speichern-Dialog
    pub default_file_name: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            missing_field_policy: MissingFieldPolicy::default(),
            preserve_unknown_elements: true,
            validate_numbers: true,
            new_record_name: NEW_RECORD_NAME.to_string(),
            history_depth: HISTORY_DEPTH,
            indent_width: INDENT_WIDTH,
            default_file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fallback auf Defaults bei Fehler.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Optionen-Datei (neben der Binary).
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("handling-meta-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Begrenzt Zahlenwerte auf sinnvolle Bereiche.
    pub fn sanitized(mut self) -> Self {
        self.indent_width = self.indent_width.min(INDENT_WIDTH_MAX);
        self.history_depth = self.history_depth.max(1);
        self
    }

    /// Name für neue Records; leere Eingabe fällt auf den Standard zurück.
    pub fn effective_new_record_name(&self) -> &str {
        non_blank_or(&self.new_record_name, NEW_RECORD_NAME)
    }

    /// Dateiname-Vorschlag; leere Eingabe fällt auf den Standard zurück.
    pub fn effective_default_file_name(&self) -> &str {
        non_blank_or(&self.default_file_name, DEFAULT_FILE_NAME)
    }

    /// Import-Optionen für den Parser.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            missing_fields: self.missing_field_policy,
            preserve_unknown_elements: self.preserve_unknown_elements,
        }
    }

    /// Export-Optionen für den Writer.
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            indent_width: self.indent_width,
            include_unknown_elements: self.preserve_unknown_elements,
        }
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
