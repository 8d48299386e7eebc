//! Spot registry
//!
//! This module defines the parking spot record and the fixed dataset the
//! parking screen is seeded with on every load.

use serde::{Deserialize, Serialize};

/// Spot identifier (unique across a lot)
pub type SpotId = u32;

/// Row identifier used for layout grouping
pub type RowId = u32;

/// Number of rows in the seeded lot
pub const ROW_COUNT: u32 = 3;

/// Number of spots per row in the seeded lot
pub const SPOTS_PER_ROW: u32 = 7;

/// Kind of parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpotType {
    /// Standard spot
    #[default]
    Regular,
    /// Accessible spot reserved for disabled drivers
    Disabled,
}

impl SpotType {
    /// Upper-case type name, used as the tile's content description
    pub fn name(&self) -> &'static str {
        match self {
            SpotType::Regular => "REGULAR",
            SpotType::Disabled => "DISABLED",
        }
    }
}

impl std::fmt::Display for SpotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single parking space
///
/// `id`, `spot_type` and `row` never change after construction. Availability
/// is only flipped by the selection engine, which produces a new record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpot {
    /// Unique identifier
    pub id: SpotId,
    /// Spot kind
    #[serde(rename = "type")]
    pub spot_type: SpotType,
    /// Whether the spot is free
    pub is_available: bool,
    /// Layout row
    pub row: RowId,
}

impl ParkingSpot {
    /// Create a new spot
    pub fn new(id: SpotId, spot_type: SpotType, is_available: bool, row: RowId) -> Self {
        Self {
            id,
            spot_type,
            is_available,
            row,
        }
    }

    /// Copy of this spot with availability inverted
    pub fn toggled(&self) -> Self {
        Self {
            is_available: !self.is_available,
            ..*self
        }
    }
}

/// Spots that start out occupied
const INITIALLY_TAKEN: [SpotId; 7] = [2, 5, 8, 10, 12, 16, 19];

/// Build the seeded lot: three rows of seven spots, ids assigned row-major
/// from 1, with the first spot of every row marked accessible.
pub fn create_initial_spots() -> Vec<ParkingSpot> {
    (1..=ROW_COUNT)
        .flat_map(|row| {
            (0..SPOTS_PER_ROW).map(move |col| {
                let id = (row - 1) * SPOTS_PER_ROW + col + 1;
                let spot_type = if col == 0 {
                    SpotType::Disabled
                } else {
                    SpotType::Regular
                };
                ParkingSpot::new(id, spot_type, !INITIALLY_TAKEN.contains(&id), row)
            })
        })
        .collect()
}
