// Translate declarative element attributes into typed motion configuration.
// No `web_sys` here; callers pass an attribute lookup closure.

use crate::constants::*;
use motion_core::{override_or_default, ElementConfig, TuningOverrides, Variant};

/// Build the config for one element. Missing or malformed overrides keep the
/// variant default.
pub fn element_config(attr: impl Fn(&str) -> Option<String>) -> ElementConfig {
    let read = |name: &str| override_or_default(name, attr(name).as_deref());
    ElementConfig {
        variant: Variant::from_attr(attr(ATTR_VARIANT).as_deref()),
        overrides: TuningOverrides {
            magnetic: read(ATTR_STRENGTH),
            zoom: read(ATTR_ZOOM),
            max_tilt: read(ATTR_TILT),
            proximity_radius: read(ATTR_RADIUS),
            glow_size: read(ATTR_GLOW),
        },
        transform_enabled: attr(ATTR_TRANSFORM).as_deref() != Some(TRANSFORM_OFF),
    }
}

/// Classes an element should carry for its config.
pub fn element_classes(config: &ElementConfig) -> Vec<&'static str> {
    let mut classes = vec![CLASS_INTERACTIVE, config.variant.class_name()];
    if !config.transform_enabled {
        classes.push(CLASS_STATIC);
    }
    classes
}

/// Style properties for one generated particle.
pub fn particle_style((dx, dy, delay): (f32, f32, f32)) -> [(&'static str, String); 3] {
    [
        ("--pm-particle-x", format!("{}px", dx)),
        ("--pm-particle-y", format!("{}px", dy)),
        ("--pm-particle-delay", format!("{}s", delay)),
    ]
}
