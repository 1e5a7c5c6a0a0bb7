use std::cell::Cell;
use std::rc::Rc;

/// Generation counter that lets only the newest in-flight request apply its result.
///
/// Every fetch takes a [`RequestTicket`] via [`LatestRequest::begin`]. Starting a
/// newer fetch, or calling [`LatestRequest::invalidate`] from an effect cleanup,
/// makes all earlier tickets stale.
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    generation: Rc<Cell<u64>>,
}

/// Proof of which generation a request was started in.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    latest: Rc<Cell<u64>>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding any outstanding one.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        RequestTicket {
            generation,
            latest: self.generation.clone(),
        }
    }

    /// Marks every outstanding ticket as stale.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

impl RequestTicket {
    /// True while no newer request has started and nothing invalidated this one.
    pub fn is_current(&self) -> bool {
        self.latest.get() == self.generation
    }
}
