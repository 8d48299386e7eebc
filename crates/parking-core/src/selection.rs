//! Spot selection engine
//!
//! This module owns the parking screen's interaction state machine. The
//! engine is either idle (`NoSelection`) or focused on exactly one spot
//! (`SpotSelected`). While a spot is focused every other spot is inert;
//! activating the focused spot releases it again.
//!
//! Every transition produces a new [`SelectionState`] value. Nothing here is
//! mutated in place, so the render layer can hold on to old states freely.
//!
//! # Example
//!
//! ```rust
//! use parking_core::selection::{Selection, SelectionState};
//!
//! let state = SelectionState::initial();
//! let state = state.activate(3).unwrap();
//! assert_eq!(state.selection(), Selection::SpotSelected(3));
//! assert!(!state.spot(3).unwrap().is_available);
//!
//! let state = state.activate(3).unwrap();
//! assert_eq!(state.selection(), Selection::NoSelection);
//! assert!(state.spot(3).unwrap().is_available);
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::spots::{create_initial_spots, ParkingSpot, RowId, SpotId};

/// Selection engine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No spot with this id exists in the state
    #[error("Spot not found: {0}")]
    NotFound(SpotId),

    /// The spot exists but may not receive gestures right now
    #[error("Spot is not interactable: {0}")]
    NotInteractable(SpotId),
}

/// Result type for selection operations
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Engine focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(tag = "state", content = "id")]
pub enum Selection {
    /// No spot is focused; every available spot accepts gestures
    #[default]
    NoSelection,
    /// One spot is focused; only it accepts gestures
    SpotSelected(SpotId),
}

impl Selection {
    /// Id of the focused spot, if any
    pub fn id(&self) -> Option<SpotId> {
        match self {
            Selection::NoSelection => None,
            Selection::SpotSelected(id) => Some(*id),
        }
    }

    /// Whether `id` is the focused spot
    pub fn is(&self, id: SpotId) -> bool {
        *self == Selection::SpotSelected(id)
    }
}

/// Gestures the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotEvent {
    /// The user tapped a spot
    Activate(SpotId),
}

/// Whether `spot` may receive an activation under `selection`
pub fn is_interactable(spot: &ParkingSpot, selection: Selection) -> bool {
    match selection {
        Selection::NoSelection => spot.is_available,
        Selection::SpotSelected(id) => id == spot.id,
    }
}

/// Apply an activation of `spot` to `state`, without any interactability check.
///
/// The spot's availability is inverted. If it was the focused spot the engine
/// returns to `NoSelection`, otherwise it becomes the focused spot. A spot
/// that is not part of `state` leaves the state unchanged.
pub fn on_spot_activated(spot: &ParkingSpot, state: &SelectionState) -> SelectionState {
    if state.spot(spot.id).is_none() {
        return state.clone();
    }

    let spots = state
        .spots
        .iter()
        .map(|s| if s.id == spot.id { s.toggled() } else { *s })
        .collect();

    let selection = if state.selection.is(spot.id) {
        Selection::NoSelection
    } else {
        Selection::SpotSelected(spot.id)
    };

    SelectionState { spots, selection }
}

/// Reducer form of the engine: `(state, event) -> state`
pub fn reduce(state: &SelectionState, event: SpotEvent) -> Result<SelectionState> {
    match event {
        SpotEvent::Activate(id) => state.activate(id),
    }
}

/// Snapshot of the parking screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    spots: Vec<ParkingSpot>,
    selection: Selection,
}

impl SelectionState {
    /// Create an idle state over `spots` (kept in the given display order)
    pub fn new(spots: Vec<ParkingSpot>) -> Self {
        Self {
            spots,
            selection: Selection::NoSelection,
        }
    }

    /// Idle state seeded from the spot registry
    pub fn initial() -> Self {
        Self::new(create_initial_spots())
    }

    /// All spots in display order
    pub fn spots(&self) -> &[ParkingSpot] {
        &self.spots
    }

    /// Current engine focus
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Id of the focused spot
    pub fn selected_id(&self) -> Option<SpotId> {
        self.selection.id()
    }

    /// Look up a spot by id
    pub fn spot(&self, id: SpotId) -> Option<&ParkingSpot> {
        self.spots.iter().find(|s| s.id == id)
    }

    /// Whether `id` is the focused spot
    pub fn is_selected(&self, id: SpotId) -> bool {
        self.selection.is(id)
    }

    /// Whether the spot with `id` may receive an activation (false if unknown)
    pub fn is_interactable(&self, id: SpotId) -> bool {
        self.spot(id)
            .map(|spot| is_interactable(spot, self.selection))
            .unwrap_or(false)
    }

    /// Number of spots currently free
    pub fn available_count(&self) -> usize {
        self.spots.iter().filter(|s| s.is_available).count()
    }

    /// Spots grouped by row, rows in order of first appearance
    pub fn rows(&self) -> Vec<(RowId, Vec<&ParkingSpot>)> {
        let mut rows: Vec<(RowId, Vec<&ParkingSpot>)> = Vec::new();
        for spot in &self.spots {
            match rows.iter_mut().find(|(row, _)| *row == spot.row) {
                Some((_, members)) => members.push(spot),
                None => rows.push((spot.row, vec![spot])),
            }
        }
        rows
    }

    /// Handle a tap on the spot with `id`
    ///
    /// # Errors
    ///
    /// - `SelectionError::NotFound` - no spot with this id
    /// - `SelectionError::NotInteractable` - the spot is occupied while idle,
    ///   or another spot is focused
    ///
    /// On error the caller keeps `self` as the current state.
    pub fn activate(&self, id: SpotId) -> Result<SelectionState> {
        let spot = self.spot(id).ok_or(SelectionError::NotFound(id))?;

        if !is_interactable(spot, self.selection) {
            return Err(SelectionError::NotInteractable(id));
        }

        let next = on_spot_activated(spot, self);
        tracing::debug!(
            spot = id,
            from = ?self.selection,
            to = ?next.selection,
            "Spot activated"
        );
        Ok(next)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::initial()
    }
}
