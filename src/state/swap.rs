//! Image swap bookkeeping
//!
//! Showing a new image is asynchronous: the host loads the new source and
//! reports back when it is ready. Every request gets a token from a
//! per-entry counter and only the latest token may settle, so a slow load
//! finishing after a newer one can never put a stale image back on screen.

/// Identifies one swap request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwapToken(u64);

/// Latest requested value plus the value currently settled on screen
#[derive(Debug, Clone)]
pub struct SwapState<T> {
    issued: u64,
    pending: Option<(SwapToken, T)>,
    settled: Option<T>,
}

impl<T> Default for SwapState<T> {
    fn default() -> Self {
        Self {
            issued: 0,
            pending: None,
            settled: None,
        }
    }
}

impl<T: Copy> SwapState<T> {
    /// Start a swap to `value`. Any earlier pending swap becomes stale.
    pub fn begin(&mut self, value: T) -> SwapToken {
        self.issued += 1;
        let token = SwapToken(self.issued);
        self.pending = Some((token, value));
        token
    }

    /// Complete a swap. Returns `false` (and changes nothing) for stale tokens.
    pub fn settle(&mut self, token: SwapToken) -> bool {
        match self.pending {
            Some((pending, value)) if pending == token => {
                self.settled = Some(value);
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Swap immediately, invalidating whatever was pending
    pub fn replace(&mut self, value: T) {
        self.issued += 1;
        self.pending = None;
        self.settled = Some(value);
    }

    /// Value on screen, if any swap has settled yet
    pub fn settled(&self) -> Option<T> {
        self.settled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
