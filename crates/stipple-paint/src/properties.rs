//! Paint input properties and numeric coercion
//!
//! [CSS Painting API Level 1 § 5](https://www.w3.org/TR/css-paint-api-1/#input-properties)
//!
//! "The `inputProperties` attribute defines the list of properties that the
//! paint function depends on." The host hands the paint function a read-only
//! property map; everything here is about extracting a usable
//! [`PaintConfig`] from that map.
//!
//! Coercion follows JavaScript `parseInt` followed by a truthiness fallback:
//! leading whitespace and trailing junk are tolerated, anything without
//! leading digits is unusable, and a parsed **zero counts as absent** (so
//! `--circle-square-seed: 0` still falls back to the clock). Malformed values
//! degrade silently as far as the host is concerned; a deduplicated warning
//! goes to stderr.

use std::collections::HashMap;

use crate::warning::warn_once;

/// Number of grid columns.
pub const COLUMN_COUNT_PROPERTY: &str = "--circle-square-column-count";
/// Number of grid rows.
pub const ROW_COUNT_PROPERTY: &str = "--circle-square-row-count";
/// Seed pinning the pseudorandom color sequence.
pub const SEED_PROPERTY: &str = "--circle-square-seed";

/// Grid dimension used when a count property is absent or unusable.
pub const DEFAULT_GRID_COUNT: u32 = 10;

/// Read-only property-value lookup handed to a paint function.
///
/// [CSS Painting API Level 1 § 6.3](https://www.w3.org/TR/css-paint-api-1/#paint-definition)
///
/// The Rust rendition of the host's `StylePropertyMapReadOnly`: raw string
/// values keyed by property name. Values arrive untyped; typed extraction
/// happens in [`PaintConfig::from_properties`].
#[derive(Debug, Clone, Default)]
pub struct PaintProperties {
    values: HashMap<String, String>,
}

impl PaintProperties {
    /// Create an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.values.insert(name.into(), value.into());
    }

    /// Look up the raw string value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PaintProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Self::new();
        for (name, value) in iter {
            properties.set(name, value);
        }
        properties
    }
}

/// Configuration for one paint invocation, derived from the property map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintConfig {
    /// Number of grid columns (>= 1).
    pub column_count: u32,
    /// Number of grid rows (>= 1).
    pub row_count: u32,
    /// Seed for the random sequence generator.
    pub seed: i32,
}

impl PaintConfig {
    /// Derive a configuration from the property map.
    ///
    /// `fallback_seed` is used when the seed property is absent, unusable,
    /// or zero; callers derive it from a clock (millisecond-of-second), which
    /// makes unseeded paints intentionally non-reproducible.
    #[must_use]
    pub fn from_properties(properties: &PaintProperties, fallback_seed: i32) -> Self {
        Self {
            column_count: grid_count(properties, COLUMN_COUNT_PROPERTY),
            row_count: grid_count(properties, ROW_COUNT_PROPERTY),
            seed: seed(properties, fallback_seed),
        }
    }
}

/// Extract a grid count, falling back to [`DEFAULT_GRID_COUNT`].
///
/// Zero is falsy (see module docs); non-positive counts also fall back, since
/// a negative grid dimension cannot describe any cell.
fn grid_count(properties: &PaintProperties, name: &str) -> u32 {
    let Some(raw) = properties.get(name) else {
        return DEFAULT_GRID_COUNT;
    };
    match parse_integer(raw) {
        Some(value) if value > 0 => u32::try_from(value).unwrap_or(u32::MAX),
        _ => {
            warn_once("properties", &format!("unusable value '{raw}' for {name}, using {DEFAULT_GRID_COUNT}"));
            DEFAULT_GRID_COUNT
        }
    }
}

/// Extract the seed, falling back to `fallback_seed`.
///
/// Zero is falsy (an explicit `0` still yields a clock-derived seed).
fn seed(properties: &PaintProperties, fallback_seed: i32) -> i32 {
    let Some(raw) = properties.get(SEED_PROPERTY) else {
        return fallback_seed;
    };
    match parse_integer(raw) {
        // Out-of-range values wrap modulo 2^32 (ToInt32), matching the
        // generator's own seed coercion.
        #[allow(clippy::cast_possible_truncation)]
        Some(value) if value != 0 => value as i32,
        Some(_) => fallback_seed,
        None => {
            warn_once("properties", &format!("unusable value '{raw}' for {SEED_PROPERTY}, using clock seed"));
            fallback_seed
        }
    }
}

/// JavaScript-`parseInt`-style integer coercion.
///
/// Skips leading whitespace, accepts an optional sign, consumes leading
/// ASCII digits, and ignores everything after them (`"12px"` parses as 12).
/// Returns `None` when no digits are found. Magnitudes beyond `i64` saturate.
fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(digit));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_plain() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("+3"), Some(3));
    }

    #[test]
    fn test_parse_integer_whitespace_and_trailing_junk() {
        assert_eq!(parse_integer("  12"), Some(12));
        assert_eq!(parse_integer("12px"), Some(12));
        assert_eq!(parse_integer("1.5"), Some(1));
    }

    #[test]
    fn test_parse_integer_no_digits() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("auto"), None);
        assert_eq!(parse_integer("-"), None);
        assert_eq!(parse_integer("px12"), None);
    }

    #[test]
    fn test_parse_integer_saturates() {
        assert_eq!(parse_integer("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_config_defaults_when_absent() {
        let properties = PaintProperties::new();
        let config = PaintConfig::from_properties(&properties, 17);
        assert_eq!(config.column_count, DEFAULT_GRID_COUNT);
        assert_eq!(config.row_count, DEFAULT_GRID_COUNT);
        assert_eq!(config.seed, 17);
    }

    #[test]
    fn test_config_reads_all_three_properties() {
        let properties: PaintProperties = [
            (COLUMN_COUNT_PROPERTY, "4"),
            (ROW_COUNT_PROPERTY, "6"),
            (SEED_PROPERTY, "42"),
        ]
        .into_iter()
        .collect();
        let config = PaintConfig::from_properties(&properties, 17);
        assert_eq!(config.column_count, 4);
        assert_eq!(config.row_count, 6);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_config_zero_count_is_falsy() {
        let properties: PaintProperties = [(COLUMN_COUNT_PROPERTY, "0")].into_iter().collect();
        let config = PaintConfig::from_properties(&properties, 17);
        assert_eq!(config.column_count, DEFAULT_GRID_COUNT);
    }

    #[test]
    fn test_config_negative_count_falls_back() {
        let properties: PaintProperties = [(ROW_COUNT_PROPERTY, "-5")].into_iter().collect();
        let config = PaintConfig::from_properties(&properties, 17);
        assert_eq!(config.row_count, DEFAULT_GRID_COUNT);
    }

    #[test]
    fn test_config_zero_seed_is_falsy() {
        let properties: PaintProperties = [(SEED_PROPERTY, "0")].into_iter().collect();
        let config = PaintConfig::from_properties(&properties, 17);
        assert_eq!(config.seed, 17);
    }

    #[test]
    fn test_config_malformed_values_fall_back() {
        let properties: PaintProperties = [
            (COLUMN_COUNT_PROPERTY, "lots"),
            (SEED_PROPERTY, "soon"),
        ]
        .into_iter()
        .collect();
        let config = PaintConfig::from_properties(&properties, 17);
        assert_eq!(config.column_count, DEFAULT_GRID_COUNT);
        assert_eq!(config.seed, 17);
    }

    #[test]
    fn test_config_seed_wraps_to_32_bits() {
        // 4294967297 = 2^32 + 1 -> ToInt32 -> 1
        let properties: PaintProperties = [(SEED_PROPERTY, "4294967297")].into_iter().collect();
        let config = PaintConfig::from_properties(&properties, 17);
        assert_eq!(config.seed, 1);
    }
}
