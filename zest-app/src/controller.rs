//! Single owner of the session state.
//!
//! All mutations — user intents, timer firings, provider completions —
//! flow through one queue and are applied one at a time, so no observer
//! can see the session in an inconsistent intermediate form.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use zest_core::provider::RecommendationProvider;
use zest_core::tracking::STEP_OFFSETS;
use zest_core::{Effect, Intent, Session, Snapshot};

use crate::scheduler::{schedule, TimerHandle};

pub struct SessionController {
    session: Session,
    tx: UnboundedSender<Intent>,
    rx: UnboundedReceiver<Intent>,
    provider: Arc<dyn RecommendationProvider>,
    tracking_timers: Vec<TimerHandle>,
}

impl SessionController {
    /// Create the controller and start the splash timer.
    pub fn new(
        provider: Arc<dyn RecommendationProvider>,
        delivery_fee: Decimal,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (session, effects) = Session::start(delivery_fee);
        let mut controller = Self {
            session,
            tx,
            rx,
            provider,
            tracking_timers: Vec::new(),
        };
        controller.run_effects(effects);
        controller
    }

    /// Sender for external intent producers (a UI event loop).
    pub fn sender(&self) -> UnboundedSender<Intent> {
        self.tx.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Apply one intent and execute the effects it produced.
    pub fn dispatch(&mut self, intent: Intent) {
        tracing::debug!(?intent, "applying intent");
        let effects = self.session.apply(intent);
        self.run_effects(effects);
    }

    /// Wait for the next queued intent (timer firing or provider
    /// completion) and apply it.
    pub async fn wait_dispatch(&mut self) {
        if let Some(intent) = self.rx.recv().await {
            self.dispatch(intent);
        }
    }

    /// Apply every intent already sitting in the queue without blocking.
    pub fn drain(&mut self) {
        while let Ok(intent) = self.rx.try_recv() {
            self.dispatch(intent);
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleSplash { delay } => {
                    // The splash cannot be shortened or skipped, so the
                    // cancel handle is not retained.
                    let _ = schedule(self.tx.clone(), delay, Intent::SplashDone);
                }
                Effect::ScheduleTracking { generation } => {
                    // Re-entry replaces any timers from the previous
                    // activation.
                    self.cancel_tracking_timers();
                    self.tracking_timers = STEP_OFFSETS
                        .iter()
                        .enumerate()
                        .map(|(i, &delay)| {
                            self.schedule_tracking_step(generation, delay, (i + 1) as u8)
                        })
                        .collect();
                }
                Effect::CancelTracking => self.cancel_tracking_timers(),
                Effect::FetchRecommendations { request_id, query } => {
                    self.spawn_fetch(request_id, query);
                }
            }
        }
    }

    fn schedule_tracking_step(
        &self,
        generation: u64,
        delay: Duration,
        step: u8,
    ) -> TimerHandle {
        schedule(
            self.tx.clone(),
            delay,
            Intent::TrackingAdvance { generation, step },
        )
    }

    fn cancel_tracking_timers(&mut self) {
        for timer in self.tracking_timers.drain(..) {
            timer.cancel();
        }
    }

    /// Run the recommendation lookup without blocking the queue.
    ///
    /// Failures are swallowed here: the session only ever sees a dish
    /// list, empty on error, so a provider outage can never take the
    /// session down.
    fn spawn_fetch(
        &self,
        request_id: u64,
        query: String,
    ) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let dishes = match provider.recommend(&query).await {
                Ok(dishes) => dishes,
                Err(error) => {
                    tracing::warn!(%query, %error, "recommendation lookup failed");
                    Vec::new()
                }
            };
            let _ = tx.send(Intent::RecommendationsLoaded { request_id, dishes });
        });
    }
}
