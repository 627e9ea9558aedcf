// DOM-facing names shared by discovery, decoration and styling.

// Opt-in marker and per-element configuration attributes
pub const INTERACTIVE_SELECTOR: &str = "[data-premium]";
pub const ATTR_VARIANT: &str = "data-premium-variant";
pub const ATTR_STRENGTH: &str = "data-premium-strength";
pub const ATTR_ZOOM: &str = "data-premium-zoom";
pub const ATTR_TILT: &str = "data-premium-tilt";
pub const ATTR_RADIUS: &str = "data-premium-radius";
pub const ATTR_GLOW: &str = "data-premium-glow";
pub const ATTR_TRANSFORM: &str = "data-premium-transform";
pub const TRANSFORM_OFF: &str = "off";

// Classes added to discovered elements
pub const CLASS_INTERACTIVE: &str = "premium-interactive";
pub const CLASS_STATIC: &str = "premium-static"; // transforms disabled

// Generated decoration layers (appended once per element)
pub const LAYER_CLASS: &str = "pm-layer";
pub const ATTR_GENERATED: &str = "data-pm-generated";
pub const DECORATION_LAYERS: [&str; 3] = ["pm-border-flow", "pm-shimmer-sweep", "pm-cursor-glow"];
pub const PARTICLE_LAYER: &str = "pm-particles";
pub const PARTICLE_CLASS: &str = "pm-particle";

// Particle burst: (dx px, dy px, delay s)
pub const PARTICLE_VECTORS: [(f32, f32, f32); 6] = [
    (-22.0, -20.0, 0.02),
    (-12.0, -26.0, 0.12),
    (0.0, -30.0, 0.21),
    (11.0, -25.0, 0.31),
    (21.0, -19.0, 0.41),
    (-5.0, -33.0, 0.51),
];

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
