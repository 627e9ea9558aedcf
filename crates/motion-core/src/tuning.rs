//! Per-element tuning: variant presets, optional overrides, and the lenient
//! number parsing used for override attributes.

use crate::constants::*;

/// Default preset selector for an interactive element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Button,
    Card,
}

impl Variant {
    /// Anything other than exactly `"card"` falls back to the button preset.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("card") => Variant::Card,
            _ => Variant::Button,
        }
    }

    pub fn defaults(self) -> Tuning {
        match self {
            Variant::Button => Tuning {
                magnetic: BUTTON_MAGNETIC,
                zoom: BUTTON_ZOOM,
                max_tilt: BUTTON_MAX_TILT_DEG,
                proximity_radius: BUTTON_PROXIMITY_RADIUS,
                glow_size: BUTTON_GLOW_SIZE_PX,
            },
            Variant::Card => Tuning {
                magnetic: CARD_MAGNETIC,
                zoom: CARD_ZOOM,
                max_tilt: CARD_MAX_TILT_DEG,
                proximity_radius: CARD_PROXIMITY_RADIUS,
                glow_size: CARD_GLOW_SIZE_PX,
            },
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Variant::Button => "premium-button",
            Variant::Card => "premium-card",
        }
    }
}

/// Resolved tuning parameters for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub magnetic: f32,
    pub zoom: f32,
    /// Degrees.
    pub max_tilt: f32,
    /// Multiplier of `max(width, height)`.
    pub proximity_radius: f32,
    /// Pixels.
    pub glow_size: f32,
}

/// Optional per-element overrides; `None` keeps the variant default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TuningOverrides {
    pub magnetic: Option<f32>,
    pub zoom: Option<f32>,
    pub max_tilt: Option<f32>,
    pub proximity_radius: Option<f32>,
    pub glow_size: Option<f32>,
}

/// Typed configuration for one registered element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementConfig {
    pub variant: Variant,
    pub overrides: TuningOverrides,
    /// `false` for decorative-only elements: they keep glow and shadow but
    /// move and rotate much less.
    pub transform_enabled: bool,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Button,
            overrides: TuningOverrides::default(),
            transform_enabled: true,
        }
    }
}

impl ElementConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn tuning(&self) -> Tuning {
        Tuning::resolve(self.variant, &self.overrides)
    }
}

impl Tuning {
    /// Apply overrides on top of the variant preset.
    ///
    /// Non-finite overrides are ignored. Finite ones are clamped into the
    /// usable range: strengths, tilt and glow at zero, the radius at
    /// [`MIN_PROXIMITY_RADIUS`] so the proximity division stays defined.
    pub fn resolve(variant: Variant, overrides: &TuningOverrides) -> Self {
        let d = variant.defaults();
        let pick = |o: Option<f32>, fallback: f32, min: f32| match o {
            Some(v) if v.is_finite() => v.max(min),
            _ => fallback,
        };
        Self {
            magnetic: pick(overrides.magnetic, d.magnetic, 0.0),
            zoom: pick(overrides.zoom, d.zoom, 0.0),
            max_tilt: pick(overrides.max_tilt, d.max_tilt, 0.0),
            proximity_radius: pick(
                overrides.proximity_radius,
                d.proximity_radius,
                MIN_PROXIMITY_RADIUS,
            ),
            glow_size: pick(overrides.glow_size, d.glow_size, 0.0),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TuningError {
    #[error("no numeric prefix in {raw:?}")]
    NotANumber { raw: String },

    #[error("non-finite value {raw:?}")]
    NotFinite { raw: String },
}

/// Parse an override attribute the way browsers' `parseFloat` does: leading
/// whitespace is skipped and the longest numeric prefix wins (`"0.09x"` is
/// `0.09`). Absent or blank input is `Ok(None)`.
pub fn parse_override(raw: Option<&str>) -> Result<Option<f32>, TuningError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let s = raw.trim_start();
    if s.is_empty() {
        return Ok(None);
    }

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.starts_with("Infinity") {
        return Err(TuningError::NotFinite {
            raw: raw.to_string(),
        });
    }

    // Parse at double precision; finite values too large for f32 saturate.
    let prefix = &s[..numeric_prefix_len(s)];
    match prefix.parse::<f64>() {
        Ok(v) if v.is_finite() => {
            Ok(Some(v.clamp(f32::MIN as f64, f32::MAX as f64) as f32))
        }
        Ok(_) => Err(TuningError::NotFinite {
            raw: raw.to_string(),
        }),
        Err(_) => Err(TuningError::NotANumber {
            raw: raw.to_string(),
        }),
    }
}

/// Length in bytes of the leading `[+-]digits[.digits][e[+-]digits]` run.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

/// Parse an override, logging and discarding anything unusable.
pub fn override_or_default(name: &str, raw: Option<&str>) -> Option<f32> {
    match parse_override(raw) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("[tuning] ignoring {} override: {}", name, e);
            None
        }
    }
}
