//! Terminal presentation of the dashboard state.

use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::fetch::FetchState;
use crate::models::FetchResult;
use crate::urgency::{build_views, AnnouncementView, UrgencyThresholds};
use crate::utils::{pad_right, paint, truncate_chars};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Write;
use std::time::Duration;

pub const TITLE: &str = "Buscador de Contrataciones SEACE";
pub const SUBTITLE: &str = "Contrataciones de tecnología y bienes/servicios en Lima";
pub const LOADING_MESSAGE: &str = "Buscando contrataciones...";
pub const EMPTY_TITLE: &str = "No hay contrataciones";
pub const EMPTY_HINT: &str = "Pulsa Enter para buscar contrataciones (\"Actualizar\")";

const DESCRIPTION_WIDTH: usize = 90;
const CODE_WIDTH: usize = 26;
const TAG_WIDTH: usize = 11;

/// Rendering settings derived from the configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub thresholds: UrgencyThresholds,
    pub timestamp_format: String,
    pub color: bool,
    /// Show the "press Enter" hint; only meaningful when input is read.
    pub interactive: bool,
}

impl RenderOptions {
    /// Colour is used only when the config allows it and stdout is a terminal.
    pub fn from_config(
        config: &ResolvedConfig,
        interactive: bool,
        stdout_is_terminal: bool,
    ) -> Self {
        Self {
            thresholds: config.thresholds(),
            timestamp_format: config.timestamp_format.clone(),
            color: config.color && stdout_is_terminal,
            interactive,
        }
    }
}

/// Creates the spinner shown while a refresh is in flight.
///
/// # Example
///
/// ```no_run
/// use seace_dashboard::ui;
///
/// # fn main() -> Result<(), seace_dashboard::errors::AppError> {
/// let spinner = ui::create_spinner("Buscando contrataciones...")?;
/// spinner.finish_and_clear();
/// # Ok(())
/// # }
/// ```
pub fn create_spinner(message: &str) -> AppResult<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .map_err(|e| AppError::IoError(format!("Failed to create spinner template: {e}")))?,
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Renders the whole dashboard for `state` as text.
///
/// `Idle` and an empty `Loaded` both show the empty-state message; `Failed`
/// shows only the error banner.
pub fn render_state(state: &FetchState, options: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{SUBTITLE}");
    let _ = writeln!(out);

    match state {
        FetchState::Idle => render_empty(&mut out, options),
        FetchState::Loading => {
            let _ = writeln!(out, "{LOADING_MESSAGE}");
        }
        FetchState::Failed { message } => {
            let banner = format!("Error: {message}");
            if options.color {
                let _ = writeln!(out, "{}", paint(&banner, "31"));
            } else {
                let _ = writeln!(out, "{banner}");
            }
        }
        FetchState::Loaded { result } => render_result(&mut out, result, options),
    }

    out
}

fn render_empty(out: &mut String, options: &RenderOptions) {
    let _ = writeln!(out, "{EMPTY_TITLE}");
    if options.interactive {
        let _ = writeln!(out, "{EMPTY_HINT}");
    }
}

fn render_result(out: &mut String, result: &FetchResult, options: &RenderOptions) {
    let mut status = format!(
        "Última actualización: {}",
        result.fetched_at_display(&options.timestamp_format)
    );
    if !result.is_empty() {
        let _ = write!(status, "    {} contrataciones encontradas", result.items.len());
    }
    let _ = writeln!(out, "{status}");
    let _ = writeln!(out);

    if result.is_empty() {
        render_empty(out, options);
        return;
    }

    for view in build_views(&result.items, &options.thresholds) {
        render_row(out, &view, options.color);
    }
}

fn render_row(out: &mut String, view: &AnnouncementView<'_>, color: bool) {
    let item = view.announcement;
    let tag = pad_right(view.urgency.display_name(), TAG_WIDTH);
    let tag = if color {
        paint(&tag, view.urgency.ansi_color())
    } else {
        tag
    };

    let _ = writeln!(
        out,
        "{} {} {} {}",
        view.urgency.icon(),
        tag,
        pad_right(&item.code, CODE_WIDTH),
        view.remaining_text
    );
    let _ = writeln!(out, "   {}", truncate_chars(&item.description, DESCRIPTION_WIDTH));
    let _ = writeln!(out, "   {}", item.entity);
    let _ = writeln!(out, "   Ver detalle → {}", item.detail_url);
    let _ = writeln!(out);
}
