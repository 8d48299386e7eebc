//! Design tokens for Sala
//!
//! Spacing, sizing and corner radii used by the entry forms and the parking
//! lot grid. Values are density-independent pixels.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale
pub mod spacing {
    /// 8px - Gap between stacked form fields
    pub const SPACE_SM: f32 = 8.0;
    /// 10px - Gap between tiles in a row
    pub const SPACE_TILE: f32 = 10.0;
    /// 16px - Screen padding and gap before buttons
    pub const SPACE_LG: f32 = 16.0;
    /// 20px - Gap between rows
    pub const SPACE_ROW: f32 = 20.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Parking spot tile
    pub mod spot {
        /// Tile width (65px)
        pub const WIDTH: f32 = 65.0;
        /// Tile height (45px)
        pub const HEIGHT: f32 = 45.0;
    }

    /// Icon sizes
    pub mod icon {
        /// Icon inside a spot tile (30px)
        pub const SPOT: f32 = 30.0;
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// Spot tile corners (8px)
    pub const SPOT: f32 = 8.0;
    /// Text field corners (4px)
    pub const INPUT: f32 = 4.0;
}

/// Width in pixels of a row of `tiles` spot tiles, including gaps
pub fn row_width(tiles: usize) -> f32 {
    if tiles == 0 {
        return 0.0;
    }
    tiles as f32 * sizing::spot::WIDTH + (tiles - 1) as f32 * spacing::SPACE_TILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_fits_icon() {
        assert!(sizing::icon::SPOT < sizing::spot::HEIGHT);
        assert!(radius::SPOT * 2.0 < sizing::spot::HEIGHT);
    }

    #[test]
    fn test_row_width() {
        assert_eq!(row_width(0), 0.0);
        assert_eq!(row_width(1), 65.0);
        assert_eq!(row_width(7), 7.0 * 65.0 + 6.0 * 10.0);
    }
}
