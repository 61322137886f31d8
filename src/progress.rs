//! Progress reporting for long-running computations.
//!
//! Computing dominators over a heap dump with millions of objects can take a while. This
//! module provides the [`Progress`] trait for surfacing that work to a user interface,
//! and [`NullProgress`], the default sink that discards all notifications.
//!
//! Work is reported in named phases. A phase starts with an estimated duration in
//! arbitrary units, advances incrementally or via absolute updates, and is closed with
//! [`Progress::done`]. Durations are estimates for display purposes only; a phase may
//! advance past its stated duration.

/// Interface for notifying users of progress during long operations.
///
/// Implementations are free to render progress however they like (terminal bar, log
/// lines, GUI widget). All methods are infallible; progress reporting must never affect
/// the computation it observes.
pub trait Progress {
    /// Indicates the start of a new phase of work with the given duration.
    ///
    /// Behavior is undefined if there is a current phase in progress.
    ///
    /// # Arguments
    ///
    /// * `description` - human readable description of the work to be done
    /// * `duration` - estimated duration of the phase, in arbitrary units appropriate
    ///   for the work in question
    fn start(&mut self, description: &str, duration: usize);

    /// Indicates the current phase has advanced `n` units towards completion.
    ///
    /// Behavior is undefined if there is no current phase in progress.
    fn advance_by(&mut self, n: usize);

    /// Indicates the current phase has advanced a single unit towards completion.
    ///
    /// Behavior is undefined if there is no current phase in progress.
    fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Indicates the current phase has completed `current` absolute units of its overall
    /// duration.
    ///
    /// Behavior is undefined if there is no current phase in progress.
    fn update(&mut self, current: usize);

    /// Indicates that the current phase has been completed.
    ///
    /// Behavior is undefined if there is no current phase in progress.
    fn done(&mut self);
}

/// A [`Progress`] implementation that ignores all notifications.
///
/// This is the default used by [`compute_dominators`](crate::compute_dominators) when no
/// progress sink has been configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl Progress for NullProgress {
    fn start(&mut self, _description: &str, _duration: usize) {}

    fn advance_by(&mut self, _n: usize) {}

    fn update(&mut self, _current: usize) {}

    fn done(&mut self) {}
}
