//! Inspection use cases over the layout parser.

use serde::{Deserialize, Serialize};
use slidegrid_core::{try_parse_layout_description, LayoutCell, LayoutItem};
use thiserror::Error;

/// Most decimals the table format prints; `f64` carries no more.
pub const MAX_PRECISION: usize = 17;

/// Errors produced while rendering a report.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The report could not be encoded as JSON.
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text columns.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// One catalogue entry and the outcome of parsing its layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetSummary {
    pub title: String,
    pub group: String,
    pub layout: String,
    /// Number of regions, `None` if the layout is malformed.
    pub regions: Option<usize>,
    /// Rejection reason for malformed layouts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A malformed line found by [`check_descriptions`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckFailure {
    /// 1-based line number.
    pub line: usize,
    pub description: String,
    pub reason: String,
}

/// Outcome of checking a list of descriptions.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CheckReport {
    /// Number of descriptions checked (blank and comment lines excluded).
    pub checked: usize,
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    /// Returns `true` when every checked description parsed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Renders resolved cells.
///
/// `precision` is the number of decimals printed by the table format, capped
/// at [`MAX_PRECISION`]; JSON output always carries full precision.
///
/// # Errors
///
/// Returns [`InspectError::Json`] if JSON encoding fails.
pub fn render_cells(
    cells: &[LayoutCell],
    format: OutputFormat,
    precision: usize,
) -> Result<String, InspectError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(cells)?),
        OutputFormat::Table => {
            let precision = precision.min(MAX_PRECISION);
            let width = precision + 3;
            let mut out = format!(
                "{:>4}  {:>width$}  {:>width$}  {:>width$}  {:>width$}\n",
                "area", "x", "y", "width", "height"
            );
            for cell in cells {
                out.push_str(&format!(
                    "{:>4}  {:>width$.precision$}  {:>width$.precision$}  {:>width$.precision$}  {:>width$.precision$}\n",
                    cell.area_id, cell.x, cell.y, cell.width, cell.height
                ));
            }
            Ok(out)
        }
    }
}

/// Parses every catalogue entry and summarizes the result.
pub fn summarize_presets(items: &[LayoutItem]) -> Vec<PresetSummary> {
    items
        .iter()
        .map(|item| {
            let parsed = try_parse_layout_description(&item.layout);
            PresetSummary {
                title: item.title.clone(),
                group: item.group.clone(),
                layout: item.layout.clone(),
                regions: parsed.as_ref().ok().map(Vec::len),
                error: parsed.err().map(|e| e.to_string()),
            }
        })
        .collect()
}

/// Renders preset summaries.
///
/// # Errors
///
/// Returns [`InspectError::Json`] if JSON encoding fails.
pub fn render_presets(
    summaries: &[PresetSummary],
    format: OutputFormat,
) -> Result<String, InspectError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
        OutputFormat::Table => {
            let mut out = String::new();
            for summary in summaries {
                let status = match (&summary.regions, &summary.error) {
                    (Some(regions), _) => format!("{regions} regions"),
                    (None, Some(error)) => format!("malformed: {error}"),
                    (None, None) => "malformed".to_string(),
                };
                out.push_str(&format!(
                    "{:<10} {:<20} {:<50} {}\n",
                    summary.group, summary.title, summary.layout, status
                ));
            }
            Ok(out)
        }
    }
}

/// Strict-parses every line of `text`.
///
/// Blank lines and lines starting with `#` are skipped.  Surrounding
/// whitespace is ignored.
pub fn check_descriptions(text: &str) -> CheckReport {
    let mut report = CheckReport::default();
    for (index, line) in text.lines().enumerate() {
        let description = line.trim();
        if description.is_empty() || description.starts_with('#') {
            continue;
        }
        report.checked += 1;
        if let Err(e) = try_parse_layout_description(description) {
            report.failures.push(CheckFailure {
                line: index + 1,
                description: description.to_string(),
                reason: e.to_string(),
            });
        }
    }
    report
}

/// Renders a check report.
///
/// # Errors
///
/// Returns [`InspectError::Json`] if JSON encoding fails.
pub fn render_check_report(
    report: &CheckReport,
    format: OutputFormat,
) -> Result<String, InspectError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let mut out = String::new();
            for failure in &report.failures {
                out.push_str(&format!(
                    "line {}: {:?}: {}\n",
                    failure.line, failure.description, failure.reason
                ));
            }
            out.push_str(&format!(
                "{} checked, {} malformed\n",
                report.checked,
                report.failures.len()
            ));
            Ok(out)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
