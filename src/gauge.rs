/// Resource gauge that gates every ability.
///
/// The gauge is a plain value type: each operation returns a new gauge, the
/// caller decides whether to keep it.

pub const DEFAULT_CAPACITY: u32 = 10;
pub const DEFAULT_REFILL_MS: u64 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gauge {
    pub value: u32,
    pub capacity: u32,
    pub refill_interval_ms: u64,
    /// Wall-clock time (ms) of the last refill, or of creation.
    pub last_refill_ms: u64,
}

impl Gauge {
    /// An empty gauge whose first refill is due one interval after `now_ms`.
    pub fn new(capacity: u32, refill_interval_ms: u64, now_ms: u64) -> Self {
        Self {
            value: 0,
            capacity,
            refill_interval_ms,
            last_refill_ms: now_ms,
        }
    }

    /// Add one unit once strictly more than one interval has elapsed.
    /// At most one unit is added per call; the interval restarts from `now_ms`.
    #[must_use]
    pub fn refill(&self, now_ms: u64) -> Gauge {
        if now_ms.saturating_sub(self.last_refill_ms) > self.refill_interval_ms {
            Gauge {
                value: (self.value + 1).min(self.capacity),
                last_refill_ms: now_ms,
                ..*self
            }
        } else {
            *self
        }
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.value >= cost
    }

    /// `None` when the gauge holds less than `cost`.
    #[must_use]
    pub fn spend(&self, cost: u32) -> Option<Gauge> {
        self.value.checked_sub(cost).map(|value| Gauge { value, ..*self })
    }

    pub fn is_full(&self) -> bool {
        self.value >= self.capacity
    }

    /// Fill level in `[0.0, 1.0]`.
    pub fn fraction(&self) -> f32 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.value as f32 / self.capacity as f32
    }
}
