/// Receives progress updates from long-running decode phases.
///
/// The preload pass that reads the whole file counts as one extra pass on
/// top of whatever passes the consumer runs itself. All methods default to
/// doing nothing.
pub trait Progress {
    /// A new extra pass will run.
    fn add_extra_pass(&mut self) {}

    /// `counter` of `limit` units of the current pass are done.
    fn report(&mut self, counter: u64, limit: u64) {
        let _ = (counter, limit);
    }

    /// The current extra pass finished.
    fn complete_extra_pass(&mut self) {}
}

/// Discards all progress updates.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}
