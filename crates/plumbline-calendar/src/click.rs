//! Single- versus double-click disambiguation for job activations.
//!
//! Each calendar view owns its own [`ClickDisambiguator`], so several views
//! never share "last click" state.

use std::time::{Duration, Instant};

use plumbline_core::constants::DOUBLE_CLICK_THRESHOLD_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
}

/// A resolved activation of the control identified by `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome<K> {
    pub key: K,
    pub kind: ClickKind,
}

/// Holds back a first activation until it is known not to be the first half
/// of a double click.
#[derive(Debug, Clone)]
pub struct ClickDisambiguator<K> {
    threshold: Duration,
    pending: Option<(K, Instant)>,
}

impl<K: PartialEq> ClickDisambiguator<K> {
    #[must_use]
    pub const fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            pending: None,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> Duration {
        self.threshold
    }

    /// When the pending activation, if any, turns into a single click.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.threshold)
    }

    /// ## Summary
    /// Records an activation of `key` at `at`.
    ///
    /// Returns `Double` when it follows a pending activation of the same key
    /// within the threshold. Otherwise the new activation becomes pending and
    /// any previous pending activation is returned as `Single`.
    pub fn activate(&mut self, key: K, at: Instant) -> Option<ClickOutcome<K>> {
        match self.pending.take() {
            Some((pending_key, pending_at))
                if pending_key == key
                    && at.saturating_duration_since(pending_at) < self.threshold =>
            {
                Some(ClickOutcome {
                    key,
                    kind: ClickKind::Double,
                })
            }
            previous => {
                self.pending = Some((key, at));
                previous.map(|(pending_key, _)| ClickOutcome {
                    key: pending_key,
                    kind: ClickKind::Single,
                })
            }
        }
    }

    /// ## Summary
    /// Releases the pending activation as `Single` once the threshold has
    /// elapsed at `now`.
    pub fn flush(&mut self, now: Instant) -> Option<ClickOutcome<K>> {
        let expired = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= self.threshold);
        if !expired {
            return None;
        }
        self.pending.take().map(|(key, _)| ClickOutcome {
            key,
            kind: ClickKind::Single,
        })
    }

    /// Drops the pending activation without emitting anything.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<K: PartialEq> Default for ClickDisambiguator<K> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DOUBLE_CLICK_THRESHOLD_MS))
    }
}

type Callback<K> = Box<dyn FnMut(&K)>;

/// Routes resolved activations to single- and double-click callbacks.
pub struct ClickDispatcher<K> {
    disambiguator: ClickDisambiguator<K>,
    on_single: Callback<K>,
    on_double: Callback<K>,
}

impl<K: PartialEq> ClickDispatcher<K> {
    #[must_use]
    pub fn new(
        disambiguator: ClickDisambiguator<K>,
        on_single: impl FnMut(&K) + 'static,
        on_double: impl FnMut(&K) + 'static,
    ) -> Self {
        Self {
            disambiguator,
            on_single: Box::new(on_single),
            on_double: Box::new(on_double),
        }
    }

    pub fn activate(&mut self, key: K, at: Instant) {
        if let Some(outcome) = self.disambiguator.activate(key, at) {
            self.dispatch(&outcome);
        }
    }

    pub fn flush(&mut self, now: Instant) {
        if let Some(outcome) = self.disambiguator.flush(now) {
            self.dispatch(&outcome);
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.disambiguator.deadline()
    }

    fn dispatch(&mut self, outcome: &ClickOutcome<K>) {
        match outcome.kind {
            ClickKind::Single => (self.on_single)(&outcome.key),
            ClickKind::Double => (self.on_double)(&outcome.key),
        }
    }
}

impl<K> std::fmt::Debug for ClickDispatcher<K>
where
    K: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickDispatcher")
            .field("disambiguator", &self.disambiguator)
            .finish_non_exhaustive()
    }
}
