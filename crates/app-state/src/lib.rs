//! Application state management for Sala
//!
//! This crate provides the reactive store that owns the parking screen's
//! selection state and publishes every accepted transition to subscribers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::{ParkingStore, StoreError, StoreEvent};
