//! Data providers for procurement announcements.
//!
//! The dashboard depends only on [`AnnouncementProvider::fetch_announcements`].
//! [`HttpProvider`] reads the backend's JSON endpoint and [`SampleProvider`]
//! serves a fixed demo dataset.

mod http;
mod sample;

pub use http::{parse_endpoint, HttpProvider, DEFAULT_ENDPOINT};
pub use sample::SampleProvider;

use crate::errors::{AppError, AppResult};
use crate::models::AnnouncementBatch;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::warn;

/// A source of the current announcement list.
#[async_trait]
pub trait AnnouncementProvider: Send + Sync {
    /// Reads the current announcements. Takes no parameters.
    async fn fetch_announcements(&self) -> AppResult<AnnouncementBatch>;

    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: AnnouncementProvider + ?Sized> AnnouncementProvider for Box<T> {
    async fn fetch_announcements(&self) -> AppResult<AnnouncementBatch> {
        (**self).fetch_announcements().await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Decodes a backend JSON payload into an [`AnnouncementBatch`].
///
/// Rejects payloads that do not match the schema or carry a non-finite
/// `tiempo_restante_horas`. Duplicate codes and a `total` that disagrees with
/// the item count are logged but accepted.
///
/// # Errors
///
/// Returns `DecodeError` if the body is not a valid payload.
pub fn decode_payload(body: &str) -> AppResult<AnnouncementBatch> {
    let batch: AnnouncementBatch = serde_json::from_str(body)?;

    if let Some(item) = batch.items.iter().find(|i| !i.hours_remaining.is_finite()) {
        return Err(AppError::DecodeError(format!(
            "Announcement {} has a non-finite hours remaining value",
            item.code
        )));
    }

    let mut seen = HashSet::with_capacity(batch.items.len());
    for item in &batch.items {
        if !seen.insert(item.code.as_str()) {
            warn!(code = %item.code, "Duplicate announcement code in payload");
        }
    }

    if batch.total != batch.items.len() {
        warn!(
            total = batch.total,
            items = batch.items.len(),
            "Payload total does not match item count"
        );
    }

    Ok(batch)
}
