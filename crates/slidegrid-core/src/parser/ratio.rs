//! Ratio list parsing and normalization.
//!
//! A ratio list is a `:`-separated sequence of percentages, e.g. `"20:60:20"`.
//! Any component may be the wildcard `*`, which receives an even share of the
//! percentage left unclaimed by the literal components.  Row lists may also
//! pin an area id to a component with a `#N` suffix (`"60#3"`).
//!
//! # Normalization (for beginners)
//!
//! Authors do not always write percentages that add up to exactly 100
//! (`"34:33:33"`, `"50:60"`).  After the wildcards are filled in, every share
//! is divided by the total so the list always sums to `1.0`.  That way a
//! column's rows always fill the column and the columns always fill the slide.

use super::LayoutError;

/// The wildcard component.
const WILDCARD: &str = "*";

/// Separator between an explicit area id and its ratio (`"60#3"`).
const AREA_ID_SEPARATOR: char = '#';

/// One entry of a row ratio list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatioSpec {
    /// Normalized share of the parent extent.
    pub ratio: f64,
    /// Area id pinned by the author, if any.
    pub area_id: Option<u32>,
}

impl RatioSpec {
    /// Creates an unpinned spec.
    pub const fn unpinned(ratio: f64) -> Self {
        Self {
            ratio,
            area_id: None,
        }
    }
}

/// Parses a column width list such as `"20:*:20"` into normalized shares.
///
/// Returns an empty vector when the segment has no components.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidRatio`] if a component is neither `*` nor a
/// finite non-negative number, and [`LayoutError::NonPositiveTotal`] if the resolved shares
/// do not add up to a positive total.
pub fn parse_ratios(segment: &str) -> Result<Vec<f64>, LayoutError> {
    let parts = split_components(segment);
    if parts.is_empty() {
        return Ok(Vec::new());
    }

    let mut shares = Vec::with_capacity(parts.len());
    let mut wildcards = Vec::new();
    let mut remaining = 1.0;
    for (index, component) in parts.into_iter().enumerate() {
        if component == WILDCARD {
            shares.push(0.0);
            wildcards.push(index);
            continue;
        }
        let value = parse_percentage(component)?;
        shares.push(value);
        remaining -= value;
    }

    fill_wildcards(&mut shares, &wildcards, remaining);
    normalize(segment, &mut shares)?;
    Ok(shares)
}

/// Parses a row height list such as `"60#3:*"` into normalized [`RatioSpec`]s.
///
/// The `#N` suffix is split off before the wildcard check, so `"*#2"` is seen
/// as a wildcard carrying an id and rejected.  Ids that are zero or negative
/// are accepted but do not pin anything.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidAreaId`] for a non-numeric or out-of-range
/// id, [`LayoutError::WildcardWithAreaId`] for `*#N`, and the same errors as
/// [`parse_ratios`] otherwise.
pub fn parse_ratio_specs(segment: &str) -> Result<Vec<RatioSpec>, LayoutError> {
    let parts = split_components(segment);
    if parts.is_empty() {
        return Ok(Vec::new());
    }

    let mut specs = Vec::with_capacity(parts.len());
    let mut wildcards = Vec::new();
    let mut remaining = 1.0;
    for (index, part) in parts.into_iter().enumerate() {
        let (component, explicit_id) = match part.split_once(AREA_ID_SEPARATOR) {
            Some((before, after)) => (before.trim(), Some(parse_area_id(after.trim())?)),
            None => (part, None),
        };

        if component == WILDCARD {
            if explicit_id.is_some() {
                return Err(LayoutError::WildcardWithAreaId(part.to_string()));
            }
            specs.push(RatioSpec::default());
            wildcards.push(index);
            continue;
        }

        let ratio = parse_percentage(component)?;
        remaining -= ratio;
        specs.push(RatioSpec {
            ratio,
            area_id: explicit_id.flatten(),
        });
    }

    let mut shares: Vec<f64> = specs.iter().map(|spec| spec.ratio).collect();
    fill_wildcards(&mut shares, &wildcards, remaining);
    normalize(segment, &mut shares)?;
    for (spec, share) in specs.iter_mut().zip(shares) {
        spec.ratio = share;
    }
    Ok(specs)
}

// ── Private helpers ───────────────────────────────────────────────────────────

fn split_components(segment: &str) -> Vec<&str> {
    segment
        .split(':')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Parses a literal percentage into a fraction (`"25"` → `0.25`).
///
/// Negative percentages are rejected: they would push a neighbour past the
/// edge of the unit square after normalization.
fn parse_percentage(component: &str) -> Result<f64, LayoutError> {
    match component.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value / 100.0),
        _ => Err(LayoutError::InvalidRatio(component.to_string())),
    }
}

/// Parses the text after `#`.  `Ok(None)` means "explicit but not pinning".
fn parse_area_id(text: &str) -> Result<Option<u32>, LayoutError> {
    let id: i64 = text
        .parse()
        .map_err(|_| LayoutError::InvalidAreaId(text.to_string()))?;
    if id <= 0 {
        return Ok(None);
    }
    u32::try_from(id)
        .map(Some)
        .map_err(|_| LayoutError::InvalidAreaId(text.to_string()))
}

/// Gives every wildcard slot an even share of the clamped remainder.
fn fill_wildcards(shares: &mut [f64], wildcards: &[usize], remaining: f64) {
    if wildcards.is_empty() {
        return;
    }
    let per_slot = remaining.max(0.0) / wildcards.len() as f64;
    for &index in wildcards {
        shares[index] = per_slot;
    }
}

fn normalize(segment: &str, shares: &mut [f64]) -> Result<(), LayoutError> {
    let total: f64 = shares.iter().sum();
    if total <= 0.0 {
        return Err(LayoutError::NonPositiveTotal(segment.trim().to_string()));
    }
    for share in shares.iter_mut() {
        *share /= total;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
