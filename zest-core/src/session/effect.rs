use std::time::Duration;

/// Side work a transition asks its caller to perform.
///
/// Keeping timers and provider calls out of [`crate::Session::apply`]
/// keeps every transition a pure function of (state, intent), so the
/// state machine is testable without a runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Schedule the one-shot splash timer; its firing posts
    /// [`crate::Intent::SplashDone`].
    ScheduleSplash { delay: Duration },
    /// Schedule the three tracking one-shot timers for the activation
    /// identified by `generation`, at [`crate::tracking::STEP_OFFSETS`].
    ScheduleTracking { generation: u64 },
    /// Abort any tracking timers still pending — the tracking screen was
    /// exited before they fired.
    CancelTracking,
    /// Run the recommendation lookup and post
    /// [`crate::Intent::RecommendationsLoaded`] with this `request_id`
    /// when it completes.
    FetchRecommendations { request_id: u64, query: String },
}
