use super::AnnouncementProvider;
use crate::errors::AppResult;
use crate::models::{Announcement, AnnouncementBatch, UrgencyLevel};
use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, Utc};

/// Serves the backend's demo dataset, with deadlines relative to the read time.
///
/// Useful when no backend is running (`--demo`).
#[derive(Debug, Clone, Default)]
pub struct SampleProvider {
    now: Option<DateTime<FixedOffset>>,
}

impl SampleProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins "now" so the produced deadlines are deterministic.
    pub fn at(now: DateTime<FixedOffset>) -> Self {
        Self { now: Some(now) }
    }

    pub fn batch(&self) -> AnnouncementBatch {
        let now = self.now.unwrap_or_else(|| Utc::now().fixed_offset());
        let items = vec![
            sample(
                now,
                "CM-117-2025-CPMP",
                "SERVICIO DE RENOVACIÓN E INSTALACIÓN DE ALFOMBRAS DEL DPTO. DE ATENCIÓN AL AFILIADO Y DPTO. DE GESTIÓN DE BENEFICIOS PREVISIONALES",
                "CAJA DE PENSIONES MILITAR - POLICIAL",
                18,
                UrgencyLevel::Critical,
                30529,
                Duration::days(1),
            ),
            sample(
                now,
                "CM-101-2025-INICTEL-UNI",
                "Servicio de asistencia técnica para la implementación de módulo de comunicación",
                "UNIDAD EJECUTORA 002 INICTEL-UNI",
                48,
                UrgencyLevel::Warning,
                30527,
                Duration::hours(12),
            ),
            sample(
                now,
                "CM-154-2025-MDCH",
                "SERVICIO DE UN CONTADOR PROFESIONAL PARA FISCALIZACION",
                "MUNICIPALIDAD DISTRITAL DE CHINCHAO",
                96,
                UrgencyLevel::Normal,
                30528,
                Duration::hours(6),
            ),
        ];

        AnnouncementBatch {
            total: items.len(),
            items,
            server_timestamp: Some(now),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn sample(
    now: DateTime<FixedOffset>,
    code: &str,
    description: &str,
    entity: &str,
    hours: i64,
    tag: UrgencyLevel,
    detail_id: u32,
    published_ago: Duration,
) -> Announcement {
    Announcement {
        code: code.to_string(),
        description: description.to_string(),
        entity: entity.to_string(),
        deadline: now + Duration::hours(hours),
        hours_remaining: hours as f64,
        provider_urgency: Some(tag),
        detail_url: format!(
            "https://prod6.seace.gob.pe/buscador-publico/contrataciones/{detail_id}"
        ),
        published_at: Some(now - published_ago),
    }
}

#[async_trait]
impl AnnouncementProvider for SampleProvider {
    async fn fetch_announcements(&self) -> AppResult<AnnouncementBatch> {
        Ok(self.batch())
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}
