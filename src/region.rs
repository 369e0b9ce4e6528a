//! Render contexts for the page.
//!
//! A [`Region`] is the state one module paints into. Fetching operations take
//! a [`Ticket`] before they suspend and paint through
//! [`Region::update_if_current`], so a response that was overtaken by a newer
//! request is dropped instead of overwriting it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

/// Sequence number of one request against a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Region<T> {
    state: RwLock<T>,
    latest: AtomicU64,
}

impl<T> Region<T> {
    pub fn new(state: T) -> Self {
        Self {
            state: RwLock::new(state),
            latest: AtomicU64::new(0),
        }
    }

    /// Start a new request. Every ticket issued before this one becomes stale.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Mutate the state unconditionally
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Mutate the state only if `ticket` is still the latest one issued.
    ///
    /// Returns `None` when the ticket was superseded and nothing was painted.
    pub fn update_if_current<R>(&self, ticket: Ticket, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if !self.is_current(ticket) {
            tracing::debug!("Discarding stale response for ticket {}", ticket.0);
            return None;
        }
        Some(f(&mut guard))
    }

    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub fn snapshot(&self) -> T
    where
        T: Clone,
    {
        self.read(T::clone)
    }
}

/// Region state that shows a loading indicator while a request is in flight
pub trait Loadable {
    fn set_loading(&mut self, loading: bool);
}

impl<T: Loadable> Region<T> {
    /// Show the loader for `ticket` and return a guard that hides it again
    /// when dropped, whichever way the operation ends.
    pub fn begin_loading(&self, ticket: Ticket) -> LoadingGuard<'_, T> {
        self.update_if_current(ticket, |state| state.set_loading(true));
        LoadingGuard {
            region: self,
            ticket,
        }
    }
}

/// Hides the loader on drop unless a newer request has taken the region over
pub struct LoadingGuard<'a, T: Loadable> {
    region: &'a Region<T>,
    ticket: Ticket,
}

impl<T: Loadable> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.region
            .update_if_current(self.ticket, |state| state.set_loading(false));
    }
}
