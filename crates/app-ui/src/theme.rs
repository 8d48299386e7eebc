//! Theme provider for Sala
//!
//! Two themes are supported, Light and Dark. They differ in surface and text
//! colors only: the parking spot palette is the same in both, so a spot's
//! state reads the same regardless of theme.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, SpotTreatment, ThemeName};
//!
//! let theme = get_theme(ThemeName::Dark);
//! assert_eq!(theme.spots.color(SpotTreatment::Selected), "#0000FF");
//! ```

use parking_core::selection::Selection;
use parking_core::spots::{ParkingSpot, SpotType};
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGBA hex string (e.g., "#FFFFFF" or "#FFFFFF80")
pub type Color = String;

// =============================================================================
// Spot Colors
// =============================================================================

/// Fixed spot colors
pub mod spot_colors {
    /// Focused spot
    pub const SELECTED: &str = "#0000FF";
    /// Occupied spot
    pub const UNAVAILABLE: &str = "#FF0000";
    /// Free accessible spot
    pub const ACCESSIBLE: &str = "#FBC02D";
    /// Free regular spot
    pub const REGULAR: &str = "#4CAF50";
    /// Icon tint on every tile
    pub const ICON_TINT: &str = "#FFFFFF";
}

/// Visual treatment of a spot tile, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotTreatment {
    /// The focused spot
    Selected,
    /// Occupied, not focused
    Unavailable,
    /// Free accessible spot
    AvailableDisabled,
    /// Free regular spot
    AvailableRegular,
}

impl SpotTreatment {
    /// Treatment of `spot` under `selection`
    pub fn of(spot: &ParkingSpot, selection: Selection) -> Self {
        if selection.is(spot.id) {
            SpotTreatment::Selected
        } else if !spot.is_available {
            SpotTreatment::Unavailable
        } else if spot.spot_type == SpotType::Disabled {
            SpotTreatment::AvailableDisabled
        } else {
            SpotTreatment::AvailableRegular
        }
    }
}

/// Colors for spot tiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotPalette {
    /// Focused spot
    pub selected: Color,
    /// Occupied spot
    pub unavailable: Color,
    /// Free accessible spot
    pub accessible: Color,
    /// Free regular spot
    pub regular: Color,
    /// Icon tint
    pub icon_tint: Color,
}

impl SpotPalette {
    /// Color for a treatment
    pub fn color(&self, treatment: SpotTreatment) -> &str {
        match treatment {
            SpotTreatment::Selected => &self.selected,
            SpotTreatment::Unavailable => &self.unavailable,
            SpotTreatment::AvailableDisabled => &self.accessible,
            SpotTreatment::AvailableRegular => &self.regular,
        }
    }
}

impl Default for SpotPalette {
    fn default() -> Self {
        Self {
            selected: spot_colors::SELECTED.to_string(),
            unavailable: spot_colors::UNAVAILABLE.to_string(),
            accessible: spot_colors::ACCESSIBLE.to_string(),
            regular: spot_colors::REGULAR.to_string(),
            icon_tint: spot_colors::ICON_TINT.to_string(),
        }
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Surface and text colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Screen background
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (labels, hints)
    pub text_muted: Color,
    /// Button fill
    pub primary: Color,
    /// Text on buttons
    pub on_primary: Color,
    /// Text field outline
    pub outline: Color,
}

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Surface and text colors
    pub colors: ThemeColors,
    /// Spot tile colors
    pub spots: SpotPalette,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }

    /// Tile color for `spot` under `selection`
    pub fn spot_color(&self, spot: &ParkingSpot, selection: Selection) -> &str {
        self.spots.color(SpotTreatment::of(spot, selection))
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            background: "#FFFBFE".to_string(),
            text: "#1C1B1F".to_string(),
            text_muted: "#49454F".to_string(),
            primary: "#6750A4".to_string(),
            on_primary: "#FFFFFF".to_string(),
            outline: "#79747E".to_string(),
        },
        spots: SpotPalette::default(),
    }
}

/// Create the dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            background: "#1C1B1F".to_string(),
            text: "#E6E1E5".to_string(),
            text_muted: "#CAC4D0".to_string(),
            primary: "#D0BCFF".to_string(),
            on_primary: "#381E72".to_string(),
            outline: "#938F99".to_string(),
        },
        spots: SpotPalette::default(),
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

/// Theme provider state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current theme name
    pub theme_name: ThemeName,
    /// Current theme (regenerated on deserialization)
    #[serde(skip, default = "light_theme")]
    pub theme: Theme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

impl ThemeState {
    /// Create a new theme state with the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self {
            theme_name,
            theme: get_theme(theme_name),
        }
    }

    /// Get the current theme
    pub fn current_theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some((r, g, b))
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FBC02D"), Some((0xFB, 0xC0, 0x2D)));
        assert_eq!(parse_hex_color("4CAF50"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
    }

    #[test]
    fn test_treatment_priority() {
        let free_regular = ParkingSpot::new(3, SpotType::Regular, true, 1);
        let free_disabled = ParkingSpot::new(1, SpotType::Disabled, true, 1);
        let taken_disabled = ParkingSpot::new(8, SpotType::Disabled, false, 2);

        let idle = Selection::NoSelection;
        assert_eq!(SpotTreatment::of(&free_regular, idle), SpotTreatment::AvailableRegular);
        assert_eq!(SpotTreatment::of(&free_disabled, idle), SpotTreatment::AvailableDisabled);
        assert_eq!(SpotTreatment::of(&taken_disabled, idle), SpotTreatment::Unavailable);

        // A focused spot is occupied after activation but still shows as selected.
        let focused = ParkingSpot::new(3, SpotType::Regular, false, 1);
        assert_eq!(
            SpotTreatment::of(&focused, Selection::SpotSelected(3)),
            SpotTreatment::Selected
        );
    }

    #[test]
    fn test_palette_colors() {
        let palette = SpotPalette::default();
        assert_eq!(palette.color(SpotTreatment::Selected), "#0000FF");
        assert_eq!(palette.color(SpotTreatment::Unavailable), "#FF0000");
        assert_eq!(palette.color(SpotTreatment::AvailableDisabled), "#FBC02D");
        assert_eq!(palette.color(SpotTreatment::AvailableRegular), "#4CAF50");
    }

    #[test]
    fn test_spot_palette_same_in_all_themes() {
        assert_eq!(light_theme().spots, dark_theme().spots);
    }

    #[test]
    fn test_theme_spot_color() {
        let theme = get_theme(ThemeName::Light);
        let spot = ParkingSpot::new(2, SpotType::Regular, false, 1);
        assert_eq!(theme.spot_color(&spot, Selection::NoSelection), "#FF0000");
    }

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!("dark".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert_eq!("LIGHT".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert!("dim".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_theme_state() {
        assert!(!ThemeState::default().current_theme().is_dark());
        let state = ThemeState::new(ThemeName::Dark);
        assert!(state.current_theme().is_dark());
        assert_eq!(state.theme_name.color_scheme(), "dark");
    }

    #[test]
    fn test_all_colors_are_valid_hex() {
        for theme in [light_theme(), dark_theme()] {
            let c = &theme.colors;
            for color in [
                &c.background,
                &c.text,
                &c.text_muted,
                &c.primary,
                &c.on_primary,
                &c.outline,
                &theme.spots.selected,
                &theme.spots.unavailable,
                &theme.spots.accessible,
                &theme.spots.regular,
                &theme.spots.icon_tint,
            ] {
                assert!(parse_hex_color(color).is_some(), "{}", color);
            }
        }
    }
}
