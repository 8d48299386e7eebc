//! UI component library for Sala
//!
//! Components are plain serializable structs. A presentation layer (the
//! terminal shell, or any other renderer) draws them and routes the named
//! event handlers back to the application.
//!
//! # Available Components
//!
//! - [`Button`] - Pressable button
//! - [`Text`] - Text with a semantic role
//! - [`Input`] - Outlined text field
//! - [`Icon`] - Named icon
//! - [`SpotTile`] - One parking spot in the lot grid
//! - [`SpotRow`] - A row of spot tiles

use crate::theme::{Color, SpotTreatment, Theme};
use crate::tokens::{radius, row_width, sizing, spacing};
use parking_core::selection::{is_interactable, Selection};
use parking_core::spots::{ParkingSpot, RowId, SpotId, SpotType};
use serde::{Deserialize, Serialize};

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Handler name for tapping the spot with `id`
pub fn activate_handler(id: SpotId) -> EventHandler {
    format!("activate:{}", id)
}

/// Parse a spot handler name back into its spot id
pub fn parse_activate_handler(handler: &str) -> Option<SpotId> {
    handler.strip_prefix("activate:")?.parse().ok()
}

// =============================================================================
// Button Component
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid background button
    #[default]
    Solid,
    /// Text-only button
    Ghost,
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Visible and accessible label
    pub label: String,
    /// Button style variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// On press event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
}

impl Button {
    /// Create a new button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            disabled: false,
            on_press: None,
        }
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set on press handler
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Background and label colors under `theme`
    pub fn colors(&self, theme: &Theme) -> (Option<Color>, Color) {
        match self.variant {
            ButtonVariant::Solid => (
                Some(theme.colors.primary.clone()),
                theme.colors.on_primary.clone(),
            ),
            ButtonVariant::Ghost => (None, theme.colors.primary.clone()),
        }
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Semantic text roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    /// Screen heading
    Headline,
    /// Regular body text
    #[default]
    Body,
    /// Small muted text
    Caption,
}

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Start of line
    #[default]
    Start,
    /// Centered
    Center,
}

/// Text component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub content: String,
    /// Semantic role
    #[serde(default)]
    pub role: TextRole,
    /// Alignment
    #[serde(default)]
    pub align: TextAlign,
}

impl Text {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: TextRole::Body,
            align: TextAlign::Start,
        }
    }

    /// Create a centered headline
    pub fn headline(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: TextRole::Headline,
            align: TextAlign::Center,
        }
    }

    /// Create a caption
    pub fn caption(content: impl Into<String>) -> Self {
        Self::new(content).with_role(TextRole::Caption)
    }

    /// Set role
    pub fn with_role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }
}

// =============================================================================
// Input Component
// =============================================================================

/// Input field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain text
    #[default]
    Text,
    /// Email address
    Email,
    /// Password. Shown in clear, as the entry screens do not mask it.
    Password,
}

/// Outlined text field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Floating label
    pub label: String,
    /// Current value
    pub value: String,
    /// Field type
    #[serde(default)]
    pub input_type: InputType,
    /// On change event handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
    /// Corner radius
    pub border_radius: f32,
}

impl Input {
    /// Create a new text field
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            input_type: InputType::Text,
            on_change: None,
            border_radius: radius::INPUT,
        }
    }

    /// Set field type
    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set on change handler
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Whether the field is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon name for a spot type
pub fn spot_icon(spot_type: SpotType) -> &'static str {
    match spot_type {
        SpotType::Disabled => "accessible",
        SpotType::Regular => "directions_car",
    }
}

/// Icon component properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Icon name (from icon set)
    pub name: String,
    /// Size in pixels
    pub size: f32,
    /// Icon color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Accessible label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Icon {
    /// Create a new icon
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            size,
            color: None,
            label: None,
        }
    }

    /// Set icon color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set accessible label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// =============================================================================
// Spot Tile
// =============================================================================

/// One parking spot in the lot grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotTile {
    /// Spot id
    pub spot_id: SpotId,
    /// Visual treatment
    pub treatment: SpotTreatment,
    /// Fill color
    pub background: Color,
    /// Type icon
    pub icon: Icon,
    /// Whether the tile accepts taps
    pub clickable: bool,
    /// Tap handler; absent when not clickable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Accessible tile label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Tile width
    pub width: f32,
    /// Tile height
    pub height: f32,
    /// Corner radius
    pub border_radius: f32,
}

impl SpotTile {
    /// Build the tile for `spot` under `selection`
    pub fn new(spot: &ParkingSpot, selection: Selection, theme: &Theme) -> Self {
        let treatment = SpotTreatment::of(spot, selection);
        let clickable = is_interactable(spot, selection);
        let icon = Icon::new(spot_icon(spot.spot_type), sizing::icon::SPOT)
            .with_color(theme.spots.icon_tint.clone())
            .with_label(spot.spot_type.name());

        Self {
            spot_id: spot.id,
            treatment,
            background: theme.spots.color(treatment).to_string(),
            icon,
            clickable,
            on_press: clickable.then(|| activate_handler(spot.id)),
            label: None,
            width: sizing::spot::WIDTH,
            height: sizing::spot::HEIGHT,
            border_radius: radius::SPOT,
        }
    }

    /// Set accessible label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A row of spot tiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotRow {
    /// Row id
    pub row: RowId,
    /// Row heading
    pub label: String,
    /// Tiles in display order
    pub tiles: Vec<SpotTile>,
    /// Gap between tiles
    pub gap: f32,
    /// Total width of tiles and gaps
    pub width: f32,
}

impl SpotRow {
    /// Lay out `tiles` as one row
    pub fn new(row: RowId, label: impl Into<String>, tiles: Vec<SpotTile>) -> Self {
        Self {
            row,
            label: label.into(),
            width: row_width(tiles.len()),
            tiles,
            gap: spacing::SPACE_TILE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::light_theme;

    #[test]
    fn test_handler_round_trip() {
        assert_eq!(activate_handler(12), "activate:12");
        assert_eq!(parse_activate_handler("activate:12"), Some(12));
        assert_eq!(parse_activate_handler("activate:x"), None);
        assert_eq!(parse_activate_handler("login"), None);
    }

    #[test]
    fn test_button_builder() {
        let button = Button::new("Кіру").on_press("login");
        assert_eq!(button.on_press.as_deref(), Some("login"));
        assert!(!button.disabled);

        let (bg, fg) = button.colors(&light_theme());
        assert_eq!(bg.as_deref(), Some("#6750A4"));
        assert_eq!(fg, "#FFFFFF");
    }

    #[test]
    fn test_ghost_button_has_no_fill() {
        let (bg, _) = Button::new("x")
            .with_variant(ButtonVariant::Ghost)
            .colors(&light_theme());
        assert!(bg.is_none());
    }

    #[test]
    fn test_input() {
        let input = Input::new("Email", "").with_type(InputType::Email);
        assert!(input.is_empty());
        assert_eq!(input.border_radius, radius::INPUT);
    }

    #[test]
    fn test_spot_tile_available_regular() {
        let spot = ParkingSpot::new(3, SpotType::Regular, true, 1);
        let tile = SpotTile::new(&spot, Selection::NoSelection, &light_theme());

        assert_eq!(tile.background, "#4CAF50");
        assert!(tile.clickable);
        assert_eq!(tile.on_press.as_deref(), Some("activate:3"));
        assert_eq!(tile.icon.name, "directions_car");
        assert_eq!(tile.icon.label.as_deref(), Some("REGULAR"));
        assert_eq!(tile.icon.color.as_deref(), Some("#FFFFFF"));
        assert_eq!((tile.width, tile.height), (65.0, 45.0));
    }

    #[test]
    fn test_spot_tile_locked_while_other_selected() {
        let spot = ParkingSpot::new(1, SpotType::Disabled, true, 1);
        let tile = SpotTile::new(&spot, Selection::SpotSelected(3), &light_theme());

        assert_eq!(tile.treatment, SpotTreatment::AvailableDisabled);
        assert_eq!(tile.background, "#FBC02D");
        assert_eq!(tile.icon.name, "accessible");
        assert!(!tile.clickable);
        assert!(tile.on_press.is_none());
    }

    #[test]
    fn test_spot_tile_selected() {
        let spot = ParkingSpot::new(3, SpotType::Regular, false, 1);
        let tile = SpotTile::new(&spot, Selection::SpotSelected(3), &light_theme());
        assert_eq!(tile.background, "#0000FF");
        assert!(tile.clickable);
    }

    #[test]
    fn test_spot_row_layout() {
        let theme = light_theme();
        let tiles: Vec<_> = (1..=3)
            .map(|id| {
                let spot = ParkingSpot::new(id, SpotType::Regular, true, 1);
                SpotTile::new(&spot, Selection::NoSelection, &theme)
            })
            .collect();
        let row = SpotRow::new(1, "Row 1", tiles);

        assert_eq!(row.label, "Row 1");
        assert_eq!(row.gap, 10.0);
        assert_eq!(row.width, 3.0 * 65.0 + 2.0 * 10.0);
    }

    #[test]
    fn test_tile_serialization_skips_missing_handler() {
        let spot = ParkingSpot::new(2, SpotType::Regular, false, 1);
        let tile = SpotTile::new(&spot, Selection::NoSelection, &light_theme());
        let json = serde_json::to_string(&tile).unwrap();
        assert!(!json.contains("on_press"));
        assert!(json.contains("\"treatment\":\"unavailable\""));
    }
}
