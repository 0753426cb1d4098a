use std::cell::Cell;

/// Counts in-flight partial requests so the loading indicator stays up
/// until the last one has finished.
#[derive(Debug, Default)]
pub struct BusyIndicator {
    in_flight: Cell<u32>,
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a started request. Returns `true` when the indicator should appear.
    pub fn begin(&self) -> bool {
        let n = self.in_flight.get();
        self.in_flight.set(n + 1);
        n == 0
    }

    /// Record a finished request, success or not. Returns `true` when the indicator should go.
    pub fn end(&self) -> bool {
        let n = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(n);
        n == 0
    }

    pub fn in_flight(&self) -> u32 {
        self.in_flight.get()
    }
}
