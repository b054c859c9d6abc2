//! Pipeline Latch Interface.
//!
//! This module defines the common trait for inter-stage buffers. It provides
//! flushing and emptiness checks so the driver can test for a drained pipeline
//! without knowing each buffer's shape.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold instructions or results as they move between stages.
pub trait PipelineLatch {
    /// Clears every entry in the latch.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if there are no valid entries in the latch, `false` otherwise.
    fn is_empty(&self) -> bool;
}

/// A single-slot buffer is an `Option`: `Some` is a valid entry.
impl<T> PipelineLatch for Option<T> {
    fn flush(&mut self) {
        *self = None;
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }
}
