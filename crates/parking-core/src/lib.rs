//! Core parking logic for Sala
//!
//! This crate contains the spot registry, the single-focus selection
//! engine, and the entry (login/registration) form state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod selection;
pub mod spots;

pub use selection::{
    is_interactable, on_spot_activated, reduce, Selection, SelectionError, SelectionState,
    SpotEvent,
};
pub use spots::{create_initial_spots, ParkingSpot, RowId, SpotId, SpotType};
