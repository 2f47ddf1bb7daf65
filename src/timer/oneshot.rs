use std::time::Duration;

/// A deferred one-shot callback owned by the state that scheduled it.
///
/// The host loop drives it with [`OneShot::advance`], passing the time elapsed
/// since the previous call. When the delay runs out the payload is handed back
/// exactly once. Arming an already armed timer replaces the pending payload and
/// restarts the delay.
#[derive(Debug, Clone, PartialEq)]
pub struct OneShot<T> {
    pending: Option<(Duration, T)>,
}

impl<T> Default for OneShot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> OneShot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to fire after `delay`, superseding anything pending
    pub fn arm(&mut self, delay: Duration, payload: T) {
        self.pending = Some((delay, payload));
    }

    /// Drop the pending payload without firing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending payload fires
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(left, _)| *left)
    }

    /// Advance the timer, returning the payload if it fired
    pub fn advance(&mut self, elapsed: Duration) -> Option<T> {
        let (left, _) = self.pending.as_mut()?;
        if elapsed < *left {
            *left -= elapsed;
            return None;
        }
        self.pending.take().map(|(_, payload)| payload)
    }
}
