//! Zentrale Konfiguration für den AR-Messkern.
//!
//! `MeasureOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::SessionConfig;
use serde::{Deserialize, Serialize};

// ── Projektion ──────────────────────────────────────────────────────

/// Near-Clip-Ebene der Projektions-Matrix (Meter).
pub const NEAR_CLIP: f32 = 0.1;
/// Far-Clip-Ebene der Projektions-Matrix (Meter).
pub const FAR_CLIP: f32 = 100.0;

// ── Rendering ───────────────────────────────────────────────────────

/// Farbe der Anker-Marker (RGBA: Rot).
pub const ANCHOR_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe der Verbindungslinie (RGBA: Gelb).
pub const LINE_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Farbe erkannter Flächen (RGBA: Weiß, halbtransparent).
pub const PLANE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
/// Linienbreite der Verbindungslinie in Pixeln.
pub const LINE_WIDTH_PX: f32 = 10.0;

// ── Label ───────────────────────────────────────────────────────────

/// Nachkommastellen der Distanzanzeige (Zentimeter).
pub const LABEL_DECIMALS: usize = 1;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Mess-Optionen.
/// Wird optional als `ar_measure.toml` neben der Binary gelesen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureOptions {
    /// Near-Clip für die Projektions-Matrix
    pub near_clip: f32,
    /// Far-Clip für die Projektions-Matrix
    pub far_clip: f32,
    /// Farbe der Anker-Marker
    pub anchor_color: [f32; 4],
    /// Farbe der Verbindungslinie
    pub line_color: [f32; 4],
    /// Farbe erkannter Flächen
    pub plane_color: [f32; 4],
    /// Linienbreite in Pixeln
    pub line_width_px: f32,
    /// Nachkommastellen im Distanz-Label
    pub label_decimals: usize,
    /// Gewünschte Session-Konfiguration
    pub session: SessionConfig,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            near_clip: NEAR_CLIP,
            far_clip: FAR_CLIP,
            anchor_color: ANCHOR_COLOR,
            line_color: LINE_COLOR,
            plane_color: PLANE_COLOR,
            line_width_px: LINE_WIDTH_PX,
            label_decimals: LABEL_DECIMALS,
            session: SessionConfig::default(),
        }
    }
}

impl MeasureOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
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

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ar_measure"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ar_measure.toml")
    }

    /// Clip-Ebenen auf gültige Werte begrenzt (0 < near < far).
    pub fn clip_planes(&self) -> (f32, f32) {
        let near = if self.near_clip > 0.0 {
            self.near_clip
        } else {
            NEAR_CLIP
        };
        let far = if self.far_clip > near {
            self.far_clip
        } else {
            FAR_CLIP.max(near * 2.0)
        };
        (near, far)
    }
}
