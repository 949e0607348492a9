//! Simulated delivery timeline: a scripted progression through four fixed
//! milestones, driven by one-shot timers scheduled at activation.
//!
//! The timeline is not resumable — every activation of the tracking screen
//! starts over at step 0. Each activation carries a generation number so a
//! timer leaked from an earlier activation can never advance a later one.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four delivery milestones, in timeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Milestone {
    OrderPlaced,
    RestaurantPreparing,
    DriverPickedUp,
    ArrivingSoon,
}

impl Milestone {
    pub const ALL: [Milestone; 4] = [
        Milestone::OrderPlaced,
        Milestone::RestaurantPreparing,
        Milestone::DriverPickedUp,
        Milestone::ArrivingSoon,
    ];

    /// Position in the timeline, 0-based.
    pub fn index(&self) -> u8 {
        match self {
            Self::OrderPlaced => 0,
            Self::RestaurantPreparing => 1,
            Self::DriverPickedUp => 2,
            Self::ArrivingSoon => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::OrderPlaced => "Order Placed",
            Self::RestaurantPreparing => "Restaurant Preparing",
            Self::DriverPickedUp => "Driver Picked Up",
            Self::ArrivingSoon => "Arriving Soon",
        }
    }
}

/// Offsets from activation at which steps 1..=3 fire. Presentation tuning
/// constants — only their relative ordering is contractual.
pub const STEP_OFFSETS: [Duration; 3] = [
    Duration::from_secs(2),
    Duration::from_secs(6),
    Duration::from_secs(10),
];

/// Courier details shown once the driver has picked the order up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverInfo {
    pub name: String,
    pub rating: Decimal,
    pub vehicle: String,
}

impl DriverInfo {
    /// The demo courier from the reference data set.
    pub fn demo() -> Self {
        Self {
            name: "Michael R.".to_string(),
            rating: Decimal::new(49, 1),
            vehicle: "Toyota Prius".to_string(),
        }
    }
}

/// Tracking state for the current activation of the tracking screen.
///
/// `step` is in `0..=3` and only ever increases within one activation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingTimeline {
    step: u8,
    generation: u64,
}

impl TrackingTimeline {
    pub fn step(&self) -> u8 {
        self.step
    }

    /// Generation of the current activation. Timer intents carry the
    /// generation they were scheduled under.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Begins a fresh activation: step returns to 0 and the generation is
    /// bumped, invalidating any timers still pending from earlier
    /// activations. Returns the new generation for the timers to carry.
    pub fn restart(&mut self) -> u64 {
        self.step = 0;
        self.generation += 1;
        self.generation
    }

    /// Advances to `step` if the intent belongs to the current activation.
    ///
    /// Stale generations are ignored, and the step never decreases, so the
    /// timeline is monotonic within an activation no matter how timers are
    /// interleaved.
    pub fn advance(
        &mut self,
        generation: u64,
        step: u8,
    ) {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "ignoring stale tracking timer"
            );
            return;
        }
        if step > self.step {
            self.step = step.min(3);
        }
    }

    /// A milestone is completed once the step has reached its index.
    pub fn is_completed(&self, milestone: Milestone) -> bool {
        self.step >= milestone.index()
    }

    /// Driver details become visible at pickup.
    pub fn driver_visible(&self) -> bool {
        self.step >= 2
    }

    /// The terminal "order received" action is available only at the final
    /// milestone.
    pub fn can_confirm(&self) -> bool {
        self.step == 3
    }
}
