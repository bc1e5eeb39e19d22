//! Style configuration for [`SwitchIcon`](super::SwitchIcon).
//!
//! A style is built either with the typed builder or parsed from a string
//! attribute bag, and is validated once when the widget is constructed.
//!
//! ## Attributes
//!
//! | Name                    | Type    | Default        |
//! |-------------------------|---------|----------------|
//! | `si_tint_color`         | color   | `#000000`      |
//! | `si_animation_duration` | integer | `300`          |
//! | `si_disabled_alpha`     | float   | `0.5`          |
//! | `si_disabled_color`     | color   | tint color     |
//! | `si_enabled`            | boolean | `true`         |
//! | `si_no_dash`            | boolean | `false`        |
//!
//! Colors are written `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`.

use crate::animation::{TimingFunction, Transition};
use crate::error::ConfigError;
use crate::widgets::Color;

pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 300;
pub const DEFAULT_DISABLED_ALPHA: f32 = 0.5;

pub const ATTR_TINT_COLOR: &str = "si_tint_color";
pub const ATTR_ANIMATION_DURATION: &str = "si_animation_duration";
pub const ATTR_DISABLED_ALPHA: &str = "si_disabled_alpha";
pub const ATTR_DISABLED_COLOR: &str = "si_disabled_color";
pub const ATTR_ENABLED: &str = "si_enabled";
pub const ATTR_NO_DASH: &str = "si_no_dash";

/// Visual configuration of a switch icon. Immutable once the widget exists.
#[derive(Debug, Clone)]
pub struct SwitchIconStyle {
    pub tint_color: Color,
    /// Color at the fully disabled end; `None` means the tint color
    pub disabled_color: Option<Color>,
    /// Icon alpha at the fully disabled end, in `[0, 1]`
    pub disabled_alpha: f32,
    pub animation_duration_ms: u32,
    pub timing: TimingFunction,
    /// Suppress the dash and the clip band entirely
    pub no_dash: bool,
    pub enabled: bool,
}

impl Default for SwitchIconStyle {
    fn default() -> Self {
        Self {
            tint_color: Color::BLACK,
            disabled_color: None,
            disabled_alpha: DEFAULT_DISABLED_ALPHA,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            timing: TimingFunction::EaseOut,
            no_dash: false,
            enabled: true,
        }
    }
}

impl SwitchIconStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tint_color(mut self, color: Color) -> Self {
        self.tint_color = color;
        self
    }

    pub fn disabled_color(mut self, color: Color) -> Self {
        self.disabled_color = Some(color);
        self
    }

    pub fn disabled_alpha(mut self, alpha: f32) -> Self {
        self.disabled_alpha = alpha;
        self
    }

    pub fn animation_duration(mut self, duration_ms: u32) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    pub fn no_dash(mut self, no_dash: bool) -> Self {
        self.no_dash = no_dash;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The disabled color with the tint fallback applied.
    pub fn resolved_disabled_color(&self) -> Color {
        self.disabled_color.unwrap_or(self.tint_color)
    }

    pub fn transition(&self) -> Transition {
        Transition::new(self.animation_duration_ms, self.timing.clone())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.disabled_alpha) {
            return Err(ConfigError::DisabledAlphaOutOfRange(self.disabled_alpha));
        }
        Ok(())
    }

    /// Parse a style from `(name, value)` attribute pairs.
    ///
    /// Unknown names are ignored. The disabled color falls back to the tint
    /// color regardless of attribute order. The result is validated.
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut style = Self::default();
        for (name, value) in attributes {
            let value = value.trim();
            match name {
                ATTR_TINT_COLOR => style.tint_color = parse_color(name, value)?,
                ATTR_DISABLED_COLOR => style.disabled_color = Some(parse_color(name, value)?),
                ATTR_ANIMATION_DURATION => {
                    style.animation_duration_ms =
                        value.parse().map_err(|_| invalid(name, value))?;
                }
                ATTR_DISABLED_ALPHA => {
                    style.disabled_alpha = value.parse().map_err(|_| invalid(name, value))?;
                }
                ATTR_ENABLED => style.enabled = parse_bool(name, value)?,
                ATTR_NO_DASH => style.no_dash = parse_bool(name, value)?,
                other => log::debug!("Ignoring unknown switch icon attribute {}", other),
            }
        }
        style.validate()?;
        Ok(style)
    }
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidAttribute {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(name, value)),
    }
}

/// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`.
pub fn parse_color(name: &str, value: &str) -> Result<Color, ConfigError> {
    let hex = value.strip_prefix('#').ok_or_else(|| invalid(name, value))?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(name, value));
    }
    let digits = u32::from_str_radix(hex, 16).map_err(|_| invalid(name, value))?;

    // Short forms repeat each nibble: #F0A -> #FF00AA
    let widen = |short: u32, nibbles: u32| -> u32 {
        (0..nibbles).rev().fold(0, |acc, i| {
            let nibble = (short >> (i * 4)) & 0xF;
            (acc << 8) | (nibble << 4) | nibble
        })
    };

    let argb = match hex.len() {
        3 => 0xFF00_0000 | widen(digits, 3),
        4 => widen(digits, 4),
        6 => 0xFF00_0000 | digits,
        8 => digits,
        _ => return Err(invalid(name, value)),
    };
    Ok(Color::from_argb(argb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = SwitchIconStyle::from_attributes([]).unwrap();
        assert_eq!(style.tint_color, Color::BLACK);
        assert_eq!(style.resolved_disabled_color(), Color::BLACK);
        assert_eq!(style.disabled_alpha, 0.5);
        assert_eq!(style.animation_duration_ms, 300);
        assert!(style.enabled);
        assert!(!style.no_dash);
    }

    #[test]
    fn test_parses_every_attribute() {
        let style = SwitchIconStyle::from_attributes([
            ("si_tint_color", "#FF0000"),
            ("si_disabled_color", "#800000FF"),
            ("si_animation_duration", "120"),
            ("si_disabled_alpha", "0.25"),
            ("si_enabled", "false"),
            ("si_no_dash", "true"),
        ])
        .unwrap();
        assert_eq!(style.tint_color, Color::from_hex(0xFF0000));
        assert_eq!(style.resolved_disabled_color(), Color::from_argb(0x800000FF));
        assert_eq!(style.animation_duration_ms, 120);
        assert_eq!(style.disabled_alpha, 0.25);
        assert!(!style.enabled);
        assert!(style.no_dash);
    }

    #[test]
    fn test_disabled_color_follows_tint() {
        let style = SwitchIconStyle::from_attributes([("si_tint_color", "#00FF00")]).unwrap();
        assert_eq!(style.resolved_disabled_color(), Color::from_hex(0x00FF00));
    }

    #[test]
    fn test_unknown_attributes_ignored() {
        let style = SwitchIconStyle::from_attributes([("android:padding", "8dp")]).unwrap();
        assert_eq!(style.animation_duration_ms, 300);
    }

    #[test]
    fn test_disabled_alpha_out_of_range() {
        let err = SwitchIconStyle::from_attributes([("si_disabled_alpha", "1.5")]).unwrap_err();
        assert_eq!(err, ConfigError::DisabledAlphaOutOfRange(1.5));
        assert_eq!(
            err.to_string(),
            "Wrong value for si_disabled_alpha [1.5]. Must be value from range [0, 1]"
        );

        let err = SwitchIconStyle::new().disabled_alpha(-0.1).validate();
        assert!(err.is_err());
        assert!(SwitchIconStyle::new().disabled_alpha(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_alpha_bounds_are_inclusive() {
        assert!(SwitchIconStyle::new().disabled_alpha(0.0).validate().is_ok());
        assert!(SwitchIconStyle::new().disabled_alpha(1.0).validate().is_ok());
    }

    #[test]
    fn test_malformed_values() {
        for (name, value) in [
            ("si_tint_color", "red"),
            ("si_tint_color", "#12345"),
            ("si_tint_color", "#+12345"),
            ("si_animation_duration", "-5"),
            ("si_disabled_alpha", "half"),
            ("si_enabled", "yes"),
        ] {
            let err = SwitchIconStyle::from_attributes([(name, value)]).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidAttribute { .. }),
                "{name}={value} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_short_color_forms() {
        assert_eq!(
            parse_color("c", "#F0A").unwrap(),
            Color::from_argb(0xFFFF00AA)
        );
        assert_eq!(
            parse_color("c", "#8F0A").unwrap(),
            Color::from_argb(0x88FF00AA)
        );
    }
}
