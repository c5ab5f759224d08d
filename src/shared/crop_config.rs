use crate::config::{
    DEFAULT_ASPECT_RATIO, DEFAULT_OUTPUT_WIDTH, MAX_DERIVED_DIMENSION, TITLE_PREFIX,
};

/// Per-field crop settings read from an input's `data-crop-*` attributes.
///
/// Every attribute is optional. Unusable values never fail, they fall back:
/// the aspect ratio to 1, the width to 1200 and the height to
/// `round(width / aspect_ratio)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CropConfig {
    aspect_ratio: f64,
    output_width: u32,
    output_height: u32,
    title: String,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self::from_attributes(None, None, None, None)
    }
}

impl CropConfig {
    pub fn from_attributes(
        aspect: Option<&str>,
        width: Option<&str>,
        height: Option<&str>,
        title: Option<&str>,
    ) -> Self {
        let aspect_ratio = parse_aspect_ratio(aspect.unwrap_or(""));
        let output_width = width
            .and_then(parse_dimension)
            .unwrap_or(DEFAULT_OUTPUT_WIDTH);
        let output_height = height
            .and_then(parse_dimension)
            .unwrap_or_else(|| derived_height(output_width, aspect_ratio));
        let title = match title {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => default_title(aspect_ratio),
        };

        Self {
            aspect_ratio,
            output_width,
            output_height,
            title,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
    pub fn output_width(&self) -> u32 {
        self.output_width
    }
    pub fn output_height(&self) -> u32 {
        self.output_height
    }
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Accepts `"1.5"` or `"W/H"`. Anything that does not give a finite,
/// positive ratio is treated as square.
pub fn parse_aspect_ratio(raw: &str) -> f64 {
    let raw = raw.trim();
    let parsed = if raw.contains('/') {
        let parts: Vec<Option<f64>> = raw.split('/').map(parse_leading_float).collect();
        match parts.as_slice() {
            [Some(width), Some(height)] if *height > 0. => Some(width / height),
            _ => None,
        }
    } else {
        parse_leading_float(raw)
    };

    match parsed {
        Some(ratio) if ratio.is_finite() && ratio > 0. => ratio,
        _ => DEFAULT_ASPECT_RATIO,
    }
}

/// Positive integer dimension, read the way browsers read `parseInt(_, 10)`:
/// leading whitespace is skipped and trailing garbage ignored.
pub fn parse_dimension(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<u64>().ok()?;
    if negative || value == 0 {
        return None;
    }
    u32::try_from(value).ok()
}

/// Longest decimal prefix of `raw` (after leading whitespace), like
/// `parseFloat`. Infinities are reported as `None`.
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let raw = raw.trim_start();
    let bytes = raw.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let integer_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - integer_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        mantissa_digits += fraction_end - fraction_start;
        if mantissa_digits > 0 {
            end = fraction_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+') | Some(b'-')) {
            exponent_end += 1;
        }
        let exponent_digits_start = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits_start {
            end = exponent_end;
        }
    }

    raw[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// `round(width / aspect_ratio)`, kept between 1 and the largest canvas
/// side browsers will allocate.
pub fn derived_height(width: u32, aspect_ratio: f64) -> u32 {
    let height = (width as f64 / aspect_ratio).round();
    if height.is_finite() {
        height.clamp(1., MAX_DERIVED_DIMENSION as f64) as u32
    } else {
        MAX_DERIVED_DIMENSION
    }
}

/// Ties round away from zero like `Number.prototype.toFixed`, so 1/8 reads
/// as `0.13` rather than `0.12`.
pub fn default_title(aspect_ratio: f64) -> String {
    let rounded = (aspect_ratio * 100.).round() / 100.;
    format!("{} ({:.2}:1)", TITLE_PREFIX, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_aspect_is_exact() {
        let config = CropConfig::from_attributes(Some("4/3"), None, None, None);
        assert_eq!(config.aspect_ratio(), 4. / 3.);
    }

    #[test]
    fn decimal_aspect() {
        assert_eq!(parse_aspect_ratio(" 1.5 "), 1.5);
        assert_eq!(parse_aspect_ratio("2abc"), 2.);
    }

    #[test]
    fn unusable_aspect_falls_back_to_square() {
        for raw in ["", "abc", "0", "-2", "3/0", "3/-1", "a/b", "1/2/3", "/4", "Infinity"] {
            assert_eq!(parse_aspect_ratio(raw), 1., "input {:?}", raw);
        }
        assert_eq!(CropConfig::default().aspect_ratio(), 1.);
    }

    #[test]
    fn missing_height_is_derived_from_width() {
        let config = CropConfig::from_attributes(Some("3/2"), Some("800"), None, None);
        assert_eq!(config.output_width(), 800);
        assert_eq!(config.output_height(), (800. / 1.5_f64).round() as u32);

        let config = CropConfig::from_attributes(Some("16/9"), Some("800"), Some(""), None);
        assert_eq!(config.output_height(), 450);
    }

    #[test]
    fn defaults_are_square_1200() {
        let config = CropConfig::default();
        assert_eq!(config.output_width(), 1200);
        assert_eq!(config.output_height(), 1200);
        assert_eq!(config.title(), "Görseli Kırp (1.00:1)");
    }

    #[test]
    fn explicit_dimensions_and_title_win() {
        let config = CropConfig::from_attributes(
            Some("3/1"),
            Some("1800"),
            Some("600"),
            Some("Görseli Kırp (3:1)"),
        );
        assert_eq!(config.aspect_ratio(), 3.);
        assert_eq!(config.output_width(), 1800);
        assert_eq!(config.output_height(), 600);
        assert_eq!(config.title(), "Görseli Kırp (3:1)");
    }

    #[test]
    fn generated_title_embeds_ratio() {
        let config = CropConfig::from_attributes(Some("4/3"), None, None, Some(""));
        assert_eq!(config.title(), "Görseli Kırp (1.33:1)");
    }

    #[test]
    fn generated_title_rounds_ties_up() {
        assert_eq!(default_title(1. / 8.), "Görseli Kırp (0.13:1)");
        assert_eq!(default_title(5. / 8.), "Görseli Kırp (0.63:1)");
        let config = CropConfig::from_attributes(Some("5/8"), None, None, None);
        assert_eq!(config.title(), "Görseli Kırp (0.63:1)");
    }

    #[test]
    fn tiny_aspect_does_not_blow_up_height() {
        let config = CropConfig::from_attributes(Some("1e-10"), None, None, None);
        assert_eq!(config.aspect_ratio(), 1e-10);
        assert_eq!(config.output_height(), MAX_DERIVED_DIMENSION);
        assert_eq!(derived_height(800, 1e-300), MAX_DERIVED_DIMENSION);
        assert_eq!(derived_height(1, 1e6), 1);
    }

    #[test]
    fn dimension_parsing() {
        assert_eq!(parse_dimension("800px"), Some(800));
        assert_eq!(parse_dimension("  42"), Some(42));
        assert_eq!(parse_dimension("0"), None);
        assert_eq!(parse_dimension("-5"), None);
        assert_eq!(parse_dimension("wide"), None);
        assert_eq!(parse_dimension("99999999999"), None);
    }

    #[test]
    fn leading_float_prefixes() {
        assert_eq!(parse_leading_float("1e2x"), Some(100.));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("7."), Some(7.));
        assert_eq!(parse_leading_float("1e"), Some(1.));
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("-"), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_positive_fraction_is_honoured(width in 1u32..10_000, height in 1u32..10_000) {
            let raw = format!("{}/{}", width, height);
            prop_assert_eq!(parse_aspect_ratio(&raw), width as f64 / height as f64);
        }

        #[test]
        fn derived_height_matches_rounding(width in 1u32..10_000, height in 1u32..10_000) {
            let raw_aspect = format!("{}/{}", width, height);
            let raw_width = "800";
            let config = CropConfig::from_attributes(Some(&raw_aspect), Some(raw_width), None, None);
            let expected = (800. / config.aspect_ratio())
                .round()
                .clamp(1., MAX_DERIVED_DIMENSION as f64) as u32;
            prop_assert_eq!(config.output_height(), expected);
        }

        #[test]
        fn aspect_is_always_positive(raw in ".*") {
            let ratio = parse_aspect_ratio(&raw);
            prop_assert!(ratio.is_finite() && ratio > 0.);
        }
    }
}
