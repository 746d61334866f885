use chrono::{DateTime, FixedOffset, Local};
use serde::Deserialize;
use std::fmt::Write;

/// Display format for the "last updated" timestamp (es-PE locale rendering).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Urgency band of an announcement, ordered from most to least urgent.
///
/// The wire names are the colour tags used by the SEACE backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum UrgencyLevel {
    #[serde(rename = "rojo")]
    Critical,
    #[serde(rename = "amarillo")]
    Warning,
    #[serde(rename = "verde")]
    Normal,
}

impl UrgencyLevel {
    /// Returns the colour tag shown next to each row.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Critical => "rojo",
            Self::Warning => "amarillo",
            Self::Normal => "verde",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::Warning => "🟡",
            Self::Normal => "🟢",
        }
    }

    /// ANSI foreground colour code used by the terminal renderer.
    pub fn ansi_color(&self) -> &'static str {
        match self {
            Self::Critical => "31",
            Self::Warning => "33",
            Self::Normal => "32",
        }
    }
}

/// A single procurement announcement as delivered by the data provider.
///
/// Field names on the wire follow the backend's JSON (`codigo`, `fecha_limite`, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Announcement {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "entidad")]
    pub entity: String,
    #[serde(rename = "fecha_limite")]
    pub deadline: DateTime<FixedOffset>,
    /// Hours between the provider's "now" and `deadline`. Negative once the deadline passed.
    #[serde(rename = "tiempo_restante_horas")]
    pub hours_remaining: f64,
    /// Tag computed by the provider. Only kept for diagnostics; the dashboard
    /// derives its own tag from `hours_remaining`.
    #[serde(rename = "estado_tiempo", default)]
    pub provider_urgency: Option<UrgencyLevel>,
    #[serde(rename = "url_detalle")]
    pub detail_url: String,
    #[serde(rename = "fecha_publicacion", default)]
    pub published_at: Option<DateTime<FixedOffset>>,
}

/// Payload returned by one read of the data provider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnnouncementBatch {
    #[serde(rename = "contrataciones")]
    pub items: Vec<Announcement>,
    pub total: usize,
    /// Server-side generation time, if the provider reports one.
    #[serde(rename = "timestamp", default)]
    pub server_timestamp: Option<DateTime<FixedOffset>>,
}

/// The current snapshot held by the fetch controller after a successful refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResult {
    pub items: Vec<Announcement>,
    pub total: usize,
    /// Client-observed completion time of the fetch.
    pub fetched_at: DateTime<Local>,
}

impl FetchResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Formats `fetched_at` with a `chrono` format string.
    ///
    /// An invalid format falls back to [`DEFAULT_TIMESTAMP_FORMAT`].
    pub fn fetched_at_display(&self, format: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.fetched_at.format(format)).is_ok() {
            return out;
        }
        self.fetched_at.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
    }
}
