//! Label formatting
//!
//! Human-readable labels for measured areas and distances. Area breakdowns
//! use the cadastral hectare/are/centiare units; distance labels follow the
//! kilometer convention of the default formatter unless the host supplies
//! its own.

use crate::geodesy::cumulative_distances;
use crate::position::LngLat;
use crate::units::DistanceUnit;

/// Formats an area in square meters as a cadastral breakdown, e.g.
/// `"1 ha 23 a 45 ca"`.
///
/// Hectares appear only when nonzero; ares appear when nonzero or when
/// hectares appear, keeping the breakdown progressive; centiares appear only
/// when nonzero. Negative input yields a leading `-` with the breakdown of
/// the magnitude.
///
/// A zero area (after rounding) yields an **empty string**. Callers must
/// handle that case themselves.
pub fn format_area(square_meters: f64) -> String {
    let negative = square_meters < 0.0;
    let total = square_meters.abs().round() as u64;
    let hectares = total / 10_000;
    let ares = (total % 10_000) / 100;
    let centiares = total % 100;

    let mut parts = Vec::with_capacity(3);
    if hectares > 0 {
        parts.push(format!("{} ha", hectares));
    }
    if ares > 0 || hectares > 0 {
        parts.push(format!("{} a", ares));
    }
    if centiares > 0 {
        parts.push(format!("{} ca", centiares));
    }

    if parts.is_empty() {
        return String::new();
    }
    let joined = parts.join(" ");
    if negative {
        format!("-{}", joined)
    } else {
        joined
    }
}

/// Default distance-label formatter.
///
/// Values below 1 are shown as rounded meters (`"500 m"`), values of 1 and
/// above as two-decimal kilometers (`"1.50 km"`). The suffixes assume the
/// value is in kilometers; hosts measuring in other units supply a custom
/// formatter through the control configuration.
pub fn default_label_format(value: f64) -> String {
    if value < 1.0 {
        format!("{} m", (value * 1000.0).round() as i64)
    } else {
        format!("{:.2} km", value)
    }
}

/// Per-vertex cumulative distance labels for a drawn path.
///
/// The output has the same length as the input. Entry 0 is the literal
/// `"0"`, never passed through the formatter; entry i is the formatted sum
/// of pairwise geodesic distances up to vertex i, in `unit`.
pub fn cumulative_labels<F>(coords: &[LngLat], unit: DistanceUnit, format: F) -> Vec<String>
where
    F: Fn(f64) -> String,
{
    cumulative_distances(coords, unit)
        .into_iter()
        .enumerate()
        .map(|(i, d)| if i == 0 { "0".to_string() } else { format(d) })
        .collect()
}
