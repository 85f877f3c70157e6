//! Shared constants used across the rostergrid crate.

use std::ops::RangeInclusive;

/// Default number of rows generated at startup.
pub const DEFAULT_ROW_COUNT: usize = 1000;

/// Default page size used when a query omits an explicit limit.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Default estimated row height in pixels, matching the table widget.
pub const DEFAULT_ROW_HEIGHT: f64 = 45.0;

/// Default overscan margin in rows on each side of the viewport.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Inclusive age range used at generation time. Edits are only type-checked
/// against this column, not range-checked.
pub const GENERATED_AGE_RANGE: RangeInclusive<i64> = 22..=65;

/// Probability that a generated row carries a nickname.
pub const NICKNAME_PROBABILITY: f64 = 0.3;
