//! Mount Guard
//!
//! Async work spawned by a view may finish after the view is gone, or
//! after a newer request superseded it. A response is only applied when
//! the view is still mounted and its ticket is the latest one issued.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use leptos::prelude::on_cleanup;

#[derive(Debug)]
struct GuardState {
    mounted: AtomicBool,
    generation: AtomicU64,
}

/// Identifies one request issued through [`MountGuard::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct MountGuard {
    state: Arc<GuardState>,
}

impl MountGuard {
    /// Guard tied to the current reactive owner; cleared when it is disposed.
    pub fn new() -> Self {
        let guard = Self::detached();
        let handle = guard.clone();
        on_cleanup(move || handle.unmount());
        guard
    }

    /// Guard not tied to any owner; only [`MountGuard::unmount`] clears it.
    pub fn detached() -> Self {
        Self {
            state: Arc::new(GuardState {
                mounted: AtomicBool::new(true),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Start a request, invalidating every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.state.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn unmount(&self) {
        self.state.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.state.mounted.load(Ordering::SeqCst)
    }

    /// Whether a response for `ticket` may still update view state.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.is_mounted() && self.state.generation.load(Ordering::SeqCst) == ticket.0
    }
}
