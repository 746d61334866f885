//! Urgency classification and remaining-time formatting.
//!
//! Everything here is pure: the same `hours_remaining` always yields the same
//! tag and the same text. Rounding is half away from zero (`f64::round`) in
//! every branch, and the branch is picked on the raw value, so `23.999` hours
//! renders as `"24 horas"` rather than moving into the day bucket.

use crate::errors::{AppError, AppResult};
use crate::models::{Announcement, UrgencyLevel};

/// Hours below which an announcement is critical, by default.
pub const DEFAULT_CRITICAL_HOURS_BELOW: f64 = 24.0;
/// Hours below which an announcement is a warning, by default.
pub const DEFAULT_WARNING_HOURS_BELOW: f64 = 72.0;

/// Band boundaries used by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UrgencyThresholds {
    pub critical_hours_below: f64,
    pub warning_hours_below: f64,
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            critical_hours_below: DEFAULT_CRITICAL_HOURS_BELOW,
            warning_hours_below: DEFAULT_WARNING_HOURS_BELOW,
        }
    }
}

impl UrgencyThresholds {
    /// Checks that both boundaries are finite, non-negative and ordered.
    pub fn validate(&self) -> AppResult<()> {
        let bounds = [
            ("critical_hours_below", self.critical_hours_below),
            ("warning_hours_below", self.warning_hours_below),
        ];
        for (name, value) in bounds {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::InvalidInput(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.critical_hours_below >= self.warning_hours_below {
            return Err(AppError::InvalidInput(format!(
                "critical_hours_below ({}) must be lower than warning_hours_below ({})",
                self.critical_hours_below, self.warning_hours_below
            )));
        }
        Ok(())
    }
}

/// Maps hours remaining to an urgency band.
pub fn classify(hours_remaining: f64, thresholds: &UrgencyThresholds) -> UrgencyLevel {
    if hours_remaining < thresholds.critical_hours_below {
        UrgencyLevel::Critical
    } else if hours_remaining < thresholds.warning_hours_below {
        UrgencyLevel::Warning
    } else {
        UrgencyLevel::Normal
    }
}

/// When a unit label switches to its plural form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// The plural form is used for every count.
    Always,
    /// The plural form is used only for counts strictly greater than one.
    AboveOne,
}

/// A unit word together with its pluralisation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabel {
    pub singular: &'static str,
    pub plural: &'static str,
    pub rule: PluralRule,
}

impl UnitLabel {
    pub fn for_count(&self, count: i64) -> &'static str {
        match self.rule {
            PluralRule::Always => self.plural,
            PluralRule::AboveOne if count > 1 => self.plural,
            PluralRule::AboveOne => self.singular,
        }
    }
}

pub const MINUTES: UnitLabel = UnitLabel {
    singular: "minuto",
    plural: "minutos",
    rule: PluralRule::Always,
};

pub const HOURS: UnitLabel = UnitLabel {
    singular: "hora",
    plural: "horas",
    rule: PluralRule::Always,
};

pub const DAYS: UnitLabel = UnitLabel {
    singular: "día",
    plural: "días",
    rule: PluralRule::AboveOne,
};

/// Renders hours remaining as Spanish text.
///
/// - below 1 hour: `"{minutes} minutos"`
/// - below 24 hours: `"{hours} horas"`
/// - otherwise: `"{days} día(s) {hours}h"`, plural only when `days > 1`
///
/// Negative input falls into the minutes branch and never panics.
pub fn format_remaining(hours_remaining: f64) -> String {
    if hours_remaining < 1.0 {
        let minutes = (hours_remaining * 60.0).round() as i64;
        format!("{minutes} {}", MINUTES.for_count(minutes))
    } else if hours_remaining < 24.0 {
        let hours = hours_remaining.round() as i64;
        format!("{hours} {}", HOURS.for_count(hours))
    } else {
        let days = (hours_remaining / 24.0).floor() as i64;
        let remainder_hours = (hours_remaining % 24.0).round() as i64;
        format!("{days} {} {remainder_hours}h", DAYS.for_count(days))
    }
}

/// Per-row derived data consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementView<'a> {
    pub announcement: &'a Announcement,
    pub urgency: UrgencyLevel,
    pub remaining_text: String,
}

impl<'a> AnnouncementView<'a> {
    pub fn new(announcement: &'a Announcement, thresholds: &UrgencyThresholds) -> Self {
        Self {
            announcement,
            urgency: classify(announcement.hours_remaining, thresholds),
            remaining_text: format_remaining(announcement.hours_remaining),
        }
    }
}

/// Builds the display rows, most urgent first.
///
/// Rows are ordered by `hours_remaining` ascending; equal values keep the
/// provider's order.
pub fn build_views<'a>(
    items: &'a [Announcement],
    thresholds: &UrgencyThresholds,
) -> Vec<AnnouncementView<'a>> {
    let mut views: Vec<AnnouncementView<'a>> = items
        .iter()
        .map(|item| AnnouncementView::new(item, thresholds))
        .collect();
    views.sort_by(|a, b| {
        a.announcement
            .hours_remaining
            .total_cmp(&b.announcement.hours_remaining)
    });
    views
}
