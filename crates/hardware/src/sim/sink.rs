//! Snapshot Sinks.
//!
//! The engine never performs I/O; the driver hands each snapshot to a
//! [`TraceSink`]. This module provides:
//! 1. **`WriterSink`:** Streams the text dump to any `io::Write`.
//! 2. **`VecSink`:** Keeps every snapshot in memory for inspection.

use std::io::Write;

use crate::common::error::SimError;
use crate::sim::snapshot::Snapshot;

/// Consumer of per-cycle snapshots.
pub trait TraceSink {
    /// Records one snapshot. An error aborts the run.
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), SimError>;
}

/// Writes snapshots in dump format, separated by a blank line.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> WriterSink<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of snapshots written so far.
    pub const fn written(&self) -> u64 {
        self.written
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W, SimError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        if self.written > 0 {
            writeln!(self.writer)?;
        }
        write!(self.writer, "{snapshot}")?;
        self.written += 1;
        Ok(())
    }
}

/// Collects snapshots in memory.
#[derive(Clone, Debug, Default)]
pub struct VecSink {
    /// Every snapshot recorded, in order.
    pub snapshots: Vec<Snapshot>,
}

impl VecSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last snapshot recorded, if any.
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

impl TraceSink for VecSink {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn record(&mut self, snapshot: &Snapshot) -> Result<(), SimError> {
        (**self).record(snapshot)
    }
}
