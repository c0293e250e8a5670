//! Application state for the employee registry API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::EmployeeStore;

/// Shared application state.
///
/// Holds the employee store constructed once at startup. Handlers reach the
/// store only through this state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn EmployeeStore>,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Returns the employee store.
    pub fn store(&self) -> &dyn EmployeeStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_one_store() {
        let state = AppState::new(Arc::new(InMemoryStore::new(false)));
        let clone = state.clone();
        assert!(std::ptr::addr_eq(state.store(), clone.store()));
    }
}
