use std::fmt;

use serde::Serialize;

/// Snapshot of scan progress.
///
/// A fresh value is built for every update and handed to the callback by
/// reference. `processed <= total` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressData {
    pub processed: u32,
    pub total: u32,
    pub message: String,
}

impl ProgressData {
    pub fn new(message: impl Into<String>, processed: u32, total: u32) -> Self {
        Self {
            processed,
            total,
            message: message.into(),
        }
    }

    /// Completed share in `0.0..=1.0`; `0.0` when there is nothing to do.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (f64::from(self.processed) / f64::from(self.total)).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.processed >= self.total
    }
}

impl fmt::Display for ProgressData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.message, self.processed, self.total)
    }
}

/// Receiver of progress updates from a long-running operation.
///
/// Returning `false` asks the operation to stop as soon as it can.
pub trait ProgressCallback {
    fn report(&mut self, data: &ProgressData) -> bool;
}

impl<F> ProgressCallback for F
where
    F: FnMut(&ProgressData) -> bool,
{
    fn report(&mut self, data: &ProgressData) -> bool {
        self(data)
    }
}
