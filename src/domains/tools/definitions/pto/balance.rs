//! Immutable PTO balance value type.
//!
//! The balance is constructed once from configuration at server startup and
//! injected into the tools; there is no write path.

use crate::core::config::PtoConfig;

/// Hours in one working day.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Hours required for a full day off.
const FULL_DAY_HOURS: u32 = 8;

/// Hours required for a half day off.
const HALF_DAY_HOURS: u32 = 4;

/// An employee's PTO balance, fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PtoBalance {
    hours_available: u32,
    hours_taken: u32,
}

impl PtoBalance {
    /// Create a balance from raw hour counts.
    pub fn new(hours_available: u32, hours_taken: u32) -> Self {
        Self {
            hours_available,
            hours_taken,
        }
    }

    /// Create a balance from the server configuration.
    pub fn from_config(config: &PtoConfig) -> Self {
        Self::new(config.hours_available, config.hours_taken)
    }

    /// PTO hours still available.
    pub fn hours_available(&self) -> u32 {
        self.hours_available
    }

    /// PTO hours taken this year.
    pub fn hours_taken(&self) -> u32 {
        self.hours_taken
    }

    /// Available hours converted to 8-hour days. Fractional days are
    /// reported verbatim, not rounded.
    pub fn days_available(&self) -> f64 {
        f64::from(self.hours_available) / HOURS_PER_DAY
    }

    /// Taken hours converted to 8-hour days.
    pub fn days_taken(&self) -> f64 {
        f64::from(self.hours_taken) / HOURS_PER_DAY
    }

    /// Whether the balance covers a full day off (8 hours).
    pub fn can_take_full_day(&self) -> bool {
        self.hours_available >= FULL_DAY_HOURS
    }

    /// Whether the balance covers a half day off (4 hours).
    pub fn can_take_half_day(&self) -> bool {
        self.hours_available >= HALF_DAY_HOURS
    }
}

/// Format a day count the way the balance messages report it: whole values
/// keep a trailing `.0`, fractional values print verbatim.
pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{:.1}", days)
    } else {
        days.to_string()
    }
}
