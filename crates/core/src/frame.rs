use crate::time::Instant;

/// The context of a single render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// The moment the frame started.
    pub now: Instant,
}

impl Frame {
    /// Creates a [`Frame`] starting at `now`.
    pub fn new(now: Instant) -> Self {
        Self { now }
    }
}
