use chrono::{DateTime, Utc};

use crate::market_data::types::PricedInstrument;

/// Fixed user-facing copy for a failed refresh.
pub const REFRESH_ERROR_MESSAGE: &str = "خطا در دریافت داده‌ها. لطفاً دوباره تلاش کنید.";

/// The complete dashboard state at a point in time.
///
/// Replaced wholesale through the watch channel on every completed cycle;
/// readers only ever observe whole values, never a mix of old and new
/// category data.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    /// Server-provided order, meaningful for display; never sorted.
    pub gold: Vec<PricedInstrument>,
    pub currency: Vec<PricedInstrument>,
    pub cryptocurrency: Vec<PricedInstrument>,
    /// True between cycle start and its resolution.
    pub loading: bool,
    /// Present only when the most recent cycle failed.
    pub error: Option<String>,
    /// Time of the most recent successful full refresh.
    pub last_updated: Option<DateTime<Utc>>,
}

impl MarketSnapshot {
    /// State at application start: nothing fetched yet, first cycle pending.
    pub fn new() -> Self {
        Self {
            gold: Vec::new(),
            currency: Vec::new(),
            cryptocurrency: Vec::new(),
            loading: true,
            error: None,
            last_updated: None,
        }
    }

    /// Start of a refresh cycle: flag the in-flight fetch and clear a stale
    /// error. Data and the success timestamp stay untouched.
    pub fn begin_refresh(&self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self.clone()
        }
    }

    /// Successful cycle: all three categories are replaced together.
    pub fn apply_success(
        &self,
        gold: Vec<PricedInstrument>,
        currency: Vec<PricedInstrument>,
        cryptocurrency: Vec<PricedInstrument>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            gold,
            currency,
            cryptocurrency,
            loading: false,
            error: None,
            last_updated: Some(now),
        }
    }

    /// Failed cycle: whatever was on screen stays on screen, the fixed
    /// message is surfaced, and `last_updated` still points at the last
    /// successful cycle.
    pub fn apply_failure(&self) -> Self {
        Self {
            loading: false,
            error: Some(REFRESH_ERROR_MESSAGE.to_string()),
            ..self.clone()
        }
    }
}
