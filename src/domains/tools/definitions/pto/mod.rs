//! PTO tools module.
//!
//! Five query tools over an immutable, configuration-supplied balance:
//! - `hours`: available hours
//! - `days`: available hours converted to 8-hour days
//! - `full_day` / `half_day`: eligibility checks (8 and 4 hour thresholds)
//! - `days_taken`: days taken this year
//!
//! All tools are total - every call succeeds - because the balance is fixed
//! at startup and there is no external dependency.

pub mod balance;
pub mod days;
pub mod days_taken;
pub mod full_day;
pub mod half_day;
pub mod hours;

pub use balance::PtoBalance;
pub use days::PtoDaysTool;
pub use days_taken::PtoDaysTakenTool;
pub use full_day::PtoFullDayTool;
pub use half_day::PtoHalfDayTool;
pub use hours::PtoHoursTool;
