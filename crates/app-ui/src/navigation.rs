//! Navigation system for Sala
//!
//! This module provides the screen routes, a navigation stack and the
//! navigation state the shell drives:
//! - Login is the root screen
//! - Register is pushed from Login
//! - ParkingLot is pushed from either entry screen after submitting

use parking_core::auth::EntryIntent;
use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All screens in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Login entry screen
    #[default]
    Login,
    /// Registration screen
    Register,
    /// Parking lot occupancy screen
    ParkingLot,
}

impl Route {
    /// Convert route to URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Register => "/register",
            Route::ParkingLot => "/parking",
        }
    }

    /// Message id of the screen title
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Login => "login-title",
            Route::Register => "register-title",
            Route::ParkingLot => "parking-title",
        }
    }
}

impl From<EntryIntent> for Route {
    fn from(intent: EntryIntent) -> Self {
        match intent {
            EntryIntent::OpenParkingLot => Route::ParkingLot,
            EntryIntent::OpenRegistration => Route::Register,
        }
    }
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Navigation stack; never empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    root: StackEntry,
    above: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a new navigation stack with a root route
    pub fn new(root: Route) -> Self {
        Self {
            root: StackEntry::new(root),
            above: Vec::new(),
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.above.push(StackEntry::new(route));
    }

    /// Pop the top route (returns the popped entry, `None` at root)
    pub fn pop(&mut self) -> Option<StackEntry> {
        self.above.pop()
    }

    /// Get the current stack entry
    pub fn current_entry(&self) -> &StackEntry {
        self.above.last().unwrap_or(&self.root)
    }

    /// Get the current (top) route
    pub fn current(&self) -> Route {
        self.current_entry().route
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.above.is_empty()
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Push animation (slide in from right)
    #[default]
    Push,
    /// Pop animation (slide out to right)
    Pop,
}

/// Pending navigation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingNavigation {
    /// Route being left
    pub from: Route,
    /// Target route
    pub to: Route,
    /// Animation type
    pub animation: NavigationAnimation,
}

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Screen stack
    pub stack: NavigationStack,
    /// Pending navigation (for animations and screen lifecycle)
    #[serde(skip)]
    pub pending: Option<PendingNavigation>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            stack: NavigationStack::new(Route::Login),
            pending: None,
        }
    }
}

impl NavigationState {
    /// Create a new navigation state rooted at Login
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current route
    pub fn current_route(&self) -> Route {
        self.stack.current()
    }

    /// Navigate to a route
    ///
    /// Navigating to the current route is a no-op.
    pub fn navigate(&mut self, route: Route) {
        let from = self.current_route();
        if from == route {
            return;
        }

        self.stack.push(route);
        tracing::info!(
            from = from.to_path(),
            to = route.to_path(),
            depth = self.stack.depth(),
            "Navigate"
        );
        self.pending = Some(PendingNavigation {
            from,
            to: route,
            animation: NavigationAnimation::Push,
        });
    }

    /// Follow an entry-screen intent
    pub fn apply_intent(&mut self, intent: EntryIntent) {
        self.navigate(Route::from(intent));
    }

    /// Go back (returns false at the root)
    pub fn go_back(&mut self) -> bool {
        if !self.stack.can_go_back() {
            return false;
        }

        let from = self.current_route();
        self.stack.pop();
        let to = self.current_route();
        tracing::info!(from = from.to_path(), to = to.to_path(), "Back");
        self.pending = Some(PendingNavigation {
            from,
            to,
            animation: NavigationAnimation::Pop,
        });
        true
    }

    /// Complete the pending navigation
    pub fn complete_navigation(&mut self) -> Option<PendingNavigation> {
        self.pending.take()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Login.to_path(), "/");
        assert_eq!(Route::Register.to_path(), "/register");
        assert_eq!(Route::ParkingLot.to_path(), "/parking");
    }

    #[test]
    fn test_route_from_intent() {
        assert_eq!(Route::from(EntryIntent::OpenParkingLot), Route::ParkingLot);
        assert_eq!(Route::from(EntryIntent::OpenRegistration), Route::Register);
    }

    #[test]
    fn test_navigation_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Login);
        assert!(!stack.can_go_back());

        stack.push(Route::Register);
        assert_eq!(stack.current(), Route::Register);
        assert_eq!(stack.depth(), 2);

        assert_eq!(stack.pop().map(|e| e.route), Some(Route::Register));
        assert!(stack.pop().is_none());
        assert_eq!(stack.current(), Route::Login);
    }

    #[test]
    fn test_stack_entries_have_unique_keys() {
        let a = StackEntry::new(Route::Login);
        let b = StackEntry::new(Route::Login);
        assert_ne!(a.key, b.key);
    }

    #[test]
    fn test_login_to_parking() {
        let mut nav = NavigationState::new();
        nav.apply_intent(EntryIntent::OpenParkingLot);

        assert_eq!(nav.current_route(), Route::ParkingLot);
        let pending = nav.complete_navigation().unwrap();
        assert_eq!(pending.from, Route::Login);
        assert_eq!(pending.to, Route::ParkingLot);
        assert_eq!(pending.animation, NavigationAnimation::Push);
        assert!(nav.complete_navigation().is_none());
    }

    #[test]
    fn test_register_and_back() {
        let mut nav = NavigationState::new();
        nav.apply_intent(EntryIntent::OpenRegistration);
        assert_eq!(nav.current_route(), Route::Register);

        assert!(nav.go_back());
        assert_eq!(nav.current_route(), Route::Login);
        assert_eq!(nav.pending.as_ref().unwrap().animation, NavigationAnimation::Pop);
        assert!(!nav.go_back());
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut nav = NavigationState::new();
        nav.navigate(Route::Login);
        assert_eq!(nav.stack.depth(), 1);
        assert!(nav.pending.is_none());
    }

    #[test]
    fn test_route_serialization() {
        let json = serde_json::to_string(&Route::ParkingLot).unwrap();
        assert_eq!(json, "\"parking_lot\"");
    }
}
