//! Parking screen store
//!
//! [`ParkingStore`] holds the single current [`SelectionState`] of an active
//! parking screen. Gestures are dispatched through it one at a time; each
//! accepted gesture replaces the state value and notifies subscribers, a
//! rejected gesture leaves the state (and subscribers) untouched.

use parking_core::selection::{reduce, SelectionError, SelectionState, SpotEvent};
use parking_core::spots::SpotId;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{broadcast, watch};

/// Capacity of the change-event channel
const EVENT_BUFFER: usize = 16;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The engine rejected the gesture
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    /// The screen owning this store was torn down
    #[error("Store closed")]
    Closed,
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Discrete change notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "id", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A spot became the focused spot
    Selected(SpotId),
    /// The focused spot was released
    Released(SpotId),
    /// State was reseeded from the registry
    Reset,
}

/// Reactive holder for the parking screen state
///
/// # Example
///
/// ```rust
/// use app_state::store::ParkingStore;
///
/// let store = ParkingStore::new();
/// let rx = store.subscribe();
///
/// store.activate(3).unwrap();
/// assert_eq!(rx.borrow().selected_id(), Some(3));
///
/// // Spot 2 starts occupied, so it is rejected and nothing changes.
/// assert!(store.activate(2).is_err());
/// assert_eq!(store.snapshot().selected_id(), Some(3));
/// ```
pub struct ParkingStore {
    state: Arc<RwLock<Arc<SelectionState>>>,
    state_tx: watch::Sender<Arc<SelectionState>>,
    events_tx: broadcast::Sender<StoreEvent>,
    closed: Arc<AtomicBool>,
}

impl ParkingStore {
    /// Create a store seeded from the spot registry
    pub fn new() -> Self {
        Self::with_state(SelectionState::initial())
    }

    /// Create a store holding `state`
    pub fn with_state(state: SelectionState) -> Self {
        let state = Arc::new(state);
        let (state_tx, _) = watch::channel(Arc::clone(&state));
        let (events_tx, _) = broadcast::channel(EVENT_BUFFER);

        Self {
            state: Arc::new(RwLock::new(state)),
            state_tx,
            events_tx,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current state value
    pub fn snapshot(&self) -> Arc<SelectionState> {
        Arc::clone(&*self.state.read())
    }

    /// Apply a gesture
    ///
    /// Returns the new state. On error the current state is kept.
    pub fn dispatch(&self, event: SpotEvent) -> Result<Arc<SelectionState>> {
        let mut guard = self.state.write();
        if self.is_closed() {
            return Err(StoreError::Closed);
        }

        let next = match reduce(&guard, event) {
            Ok(next) => Arc::new(next),
            Err(e) => {
                tracing::warn!(error = %e, ?event, "Gesture rejected");
                return Err(e.into());
            }
        };

        let change = match event {
            SpotEvent::Activate(id) if next.is_selected(id) => StoreEvent::Selected(id),
            SpotEvent::Activate(id) => StoreEvent::Released(id),
        };

        // Publish before releasing the guard so subscribers see commit order.
        *guard = Arc::clone(&next);
        self.publish(Arc::clone(&next), change);
        Ok(next)
    }

    /// Tap on a spot
    pub fn activate(&self, id: SpotId) -> Result<Arc<SelectionState>> {
        self.dispatch(SpotEvent::Activate(id))
    }

    /// Reseed from the registry, as on re-entering the screen
    pub fn reset(&self) -> Result<()> {
        let mut guard = self.state.write();
        if self.is_closed() {
            return Err(StoreError::Closed);
        }

        let fresh = Arc::new(SelectionState::initial());
        *guard = Arc::clone(&fresh);
        self.publish(fresh, StoreEvent::Reset);
        Ok(())
    }

    /// Subscribe to state values
    pub fn subscribe(&self) -> watch::Receiver<Arc<SelectionState>> {
        self.state_tx.subscribe()
    }

    /// Subscribe to change events
    pub fn subscribe_events(&self) -> broadcast::Receiver<StoreEvent> {
        self.events_tx.subscribe()
    }

    /// Tear down: further gestures fail with `StoreError::Closed`
    ///
    /// Waits for an in-flight gesture to finish publishing.
    pub fn close(&self) {
        let _guard = self.state.write();
        self.closed.store(true, Ordering::SeqCst);
        tracing::debug!("Parking store closed");
    }

    /// Whether the store was torn down
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn publish(&self, state: Arc<SelectionState>, event: StoreEvent) {
        self.state_tx.send_replace(state);
        let _ = self.events_tx.send(event);
    }
}

impl Default for ParkingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ParkingStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
            events_tx: self.events_tx.clone(),
            closed: Arc::clone(&self.closed),
        }
    }
}
