//! Named output channels written as CSS custom properties.

use smallvec::SmallVec;

pub const CHANNEL_COUNT: usize = 19;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Proximity,
    Hover,
    Press,
    TranslateX,
    TranslateY,
    RotateX,
    RotateY,
    Scale,
    ShadowX,
    ShadowY,
    ShadowBlur,
    ShadowAlpha,
    GlowX,
    GlowY,
    GlowSize,
    TextX,
    TextY,
    WarpX,
    WarpY,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    None,
    Px,
    Deg,
    Percent,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Px => "px",
            Unit::Deg => "deg",
            Unit::Percent => "%",
        }
    }
}

impl Channel {
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::Proximity,
        Channel::Hover,
        Channel::Press,
        Channel::TranslateX,
        Channel::TranslateY,
        Channel::RotateX,
        Channel::RotateY,
        Channel::Scale,
        Channel::ShadowX,
        Channel::ShadowY,
        Channel::ShadowBlur,
        Channel::ShadowAlpha,
        Channel::GlowX,
        Channel::GlowY,
        Channel::GlowSize,
        Channel::TextX,
        Channel::TextY,
        Channel::WarpX,
        Channel::WarpY,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            Channel::Proximity => "--pm-prox",
            Channel::Hover => "--pm-hover",
            Channel::Press => "--pm-press",
            Channel::TranslateX => "--pm-tx",
            Channel::TranslateY => "--pm-ty",
            Channel::RotateX => "--pm-rx",
            Channel::RotateY => "--pm-ry",
            Channel::Scale => "--pm-scale",
            Channel::ShadowX => "--pm-shadow-x",
            Channel::ShadowY => "--pm-shadow-y",
            Channel::ShadowBlur => "--pm-shadow-blur",
            Channel::ShadowAlpha => "--pm-shadow-alpha",
            Channel::GlowX => "--pm-x",
            Channel::GlowY => "--pm-y",
            Channel::GlowSize => "--pm-glow-size",
            Channel::TextX => "--pm-text-x",
            Channel::TextY => "--pm-text-y",
            Channel::WarpX => "--pm-warp-x",
            Channel::WarpY => "--pm-warp-y",
        }
    }

    pub fn unit(self) -> Unit {
        match self {
            Channel::Proximity
            | Channel::Hover
            | Channel::Press
            | Channel::Scale
            | Channel::ShadowAlpha => Unit::None,
            Channel::RotateX | Channel::RotateY | Channel::WarpX | Channel::WarpY => Unit::Deg,
            Channel::GlowX | Channel::GlowY => Unit::Percent,
            _ => Unit::Px,
        }
    }

    /// Decimal places used when formatting the value.
    pub fn precision(self) -> usize {
        match self {
            Channel::Hover => 0,
            Channel::GlowSize => 1,
            Channel::Press | Channel::GlowX | Channel::GlowY => 2,
            Channel::Proximity | Channel::Scale | Channel::ShadowAlpha => 4,
            _ => 3,
        }
    }

    /// CSS value text, e.g. `"1.250px"`.
    pub fn format(self, value: f32) -> String {
        // -0.0 would print as "-0.000"
        let value = if value == 0.0 { 0.0 } else { value };
        format!(
            "{:.*}{}",
            self.precision(),
            value,
            self.unit().suffix()
        )
    }
}

/// Ordered channel values for one element in one frame.
pub type ChannelValues = SmallVec<[(Channel, f32); CHANNEL_COUNT]>;
