//! Compatibility-check workflow.
//!
//! Drives one comparison at a time: `Idle -> Comparing -> Resolved` on
//! success, `Failed` back to re-triggerable on a swallowed request error.
//! While comparing, a background ticker walks a progress counter toward 90
//! as a perceived-latency indicator. The ticker is cosmetic only and says
//! nothing about the request; it jumps to 100 when the result lands and
//! back to 0 when the request fails.

use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, warn};

use crate::client::ApiClient;

/// Cadence of the simulated progress ticker.
const TICK: Duration = Duration::from_millis(100);

/// The ticker never pushes progress past this; only a real result does.
const PROGRESS_CEILING: u8 = 90;

/// Score tiers for the descriptive result message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Low,
    MediumLow,
    Medium,
    MediumHigh,
    High,
}

/// Map a 0-100 score to its tier. Boundaries are half-open: 20 is already
/// medium-low, 80 already high.
pub fn tier_of(score: u8) -> Tier {
    if score < 20 {
        Tier::Low
    } else if score < 40 {
        Tier::MediumLow
    } else if score < 60 {
        Tier::Medium
    } else if score < 80 {
        Tier::MediumHigh
    } else {
        Tier::High
    }
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::MediumLow => "medium-low",
            Tier::Medium => "medium",
            Tier::MediumHigh => "medium-high",
            Tier::High => "high",
        }
    }

    /// Candidate result messages for this tier. One is drawn at random per
    /// resolved comparison; the choice never affects the stored score.
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Tier::Low => &[
                "The stars are not aligned for this pair.",
                "This match would take a lot of work.",
                "Better kept as friends, honestly.",
                "Sparks are unlikely to fly here.",
                "We would steer these two toward other matches.",
            ],
            Tier::MediumLow => &[
                "There is something here, but it is faint.",
                "A slow burn at best.",
                "They might enjoy a coffee, not a lifetime.",
                "Compatibility is lukewarm on this one.",
                "Some common ground, plenty of friction.",
            ],
            Tier::Medium => &[
                "A balanced match with real potential.",
                "Could go either way, worth a first date.",
                "Solid middle ground between these two.",
                "Not fate, but far from hopeless.",
                "An even match. The details will decide.",
            ],
            Tier::MediumHigh => &[
                "These two are clearly drawn to each other.",
                "A promising pair, well worth encouraging.",
                "Strong chemistry with room to grow.",
                "The signs point to something lasting.",
                "We would book the second date already.",
            ],
            Tier::High => &[
                "A match written in the stars.",
                "It rarely gets better than this pair.",
                "Soulmate territory.",
                "An exceptional connection. Do not let it slip.",
                "The kind of match this agency dreams of.",
            ],
        }
    }
}

/// Observable state of the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparePhase {
    Idle,
    Comparing,
    Resolved { score: u8, message: &'static str },
    Failed { reason: String },
}

#[derive(Debug, Default)]
struct Shared {
    progress: AtomicU8,
    in_flight: AtomicBool,
}

/// One comparison driver, meant to live as long as the compatibility view.
pub struct CompatibilityChecker {
    client: ApiClient,
    phase: RwLock<ComparePhase>,
    shared: Arc<Shared>,
    ticker: Mutex<Option<JoinHandle<()>>>,
    rng: Mutex<StdRng>,
}

impl CompatibilityChecker {
    pub fn new(client: ApiClient) -> Self {
        Self::with_rng(client, StdRng::from_os_rng())
    }

    /// Deterministic message selection for tests.
    pub fn with_seed(client: ApiClient, seed: u64) -> Self {
        Self::with_rng(client, StdRng::seed_from_u64(seed))
    }

    fn with_rng(client: ApiClient, rng: StdRng) -> Self {
        Self {
            client,
            phase: RwLock::new(ComparePhase::Idle),
            shared: Arc::new(Shared::default()),
            ticker: Mutex::new(None),
            rng: Mutex::new(rng),
        }
    }

    pub fn phase(&self) -> ComparePhase {
        self.phase.read().clone()
    }

    pub fn progress(&self) -> u8 {
        self.shared.progress.load(Ordering::Relaxed)
    }

    /// Back to `Idle`, clearing progress and any leftover ticker.
    pub fn reset(&self) {
        self.stop_ticker();
        self.shared.progress.store(0, Ordering::Relaxed);
        *self.phase.write() = ComparePhase::Idle;
    }

    /// Run one comparison for a pair of distinct customers. A trigger while
    /// a comparison is already in flight is a no-op returning the current
    /// phase, so rapid double-clicks never stack tickers or requests.
    pub async fn compare(&self, token: &str, first: i64, second: i64) -> ComparePhase {
        if first == second {
            warn!(customer_id = first, "Refusing to compare a customer with themselves");
            return self.phase();
        }
        if self.shared.in_flight.swap(true, Ordering::SeqCst) {
            debug!("Comparison already in flight, ignoring trigger");
            return self.phase();
        }

        self.shared.progress.store(0, Ordering::Relaxed);
        *self.phase.write() = ComparePhase::Comparing;
        self.start_ticker();

        let result = self.client.get_compatibility(token, first, second).await;
        self.stop_ticker();

        let next = match result {
            Some(outcome) => {
                let score = outcome.score();
                self.shared.progress.store(100, Ordering::Relaxed);
                let message = self.pick_message(tier_of(score));
                debug!(score, tier = tier_of(score).label(), "Comparison resolved");
                ComparePhase::Resolved { score, message }
            }
            None => {
                self.shared.progress.store(0, Ordering::Relaxed);
                ComparePhase::Failed {
                    reason: "Could not compute compatibility, please try again".to_string(),
                }
            }
        };

        *self.phase.write() = next.clone();
        self.shared.in_flight.store(false, Ordering::SeqCst);
        next
    }

    fn pick_message(&self, tier: Tier) -> &'static str {
        let pool = tier.messages();
        let index = self.rng.lock().random_range(0..pool.len());
        pool[index]
    }

    fn start_ticker(&self) {
        let shared = self.shared.clone();
        let handle = tokio::spawn(async move {
            let mut tick = interval(TICK);
            tick.tick().await; // first tick completes immediately
            loop {
                tick.tick().await;
                let current = shared.progress.load(Ordering::Relaxed);
                if current < PROGRESS_CEILING {
                    shared.progress.store(current + 1, Ordering::Relaxed);
                }
            }
        });

        // Replace-and-abort so two tickers never run at once.
        if let Some(previous) = self.ticker.lock().replace(handle) {
            previous.abort();
        }
    }

    fn stop_ticker(&self) {
        if let Some(handle) = self.ticker.lock().take() {
            handle.abort();
        }
    }
}

impl Drop for CompatibilityChecker {
    fn drop(&mut self) {
        // No progress updates may outlive the consumer.
        self.stop_ticker();
    }
}
