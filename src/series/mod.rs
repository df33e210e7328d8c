//! Series preparation: trims the raw fetch down to the display length.

use crate::models::Bar;

/// Return the last `requested_count` bars of `raw`, order preserved.
///
/// The count is clamped to availability, so asking for more bars than exist
/// yields the whole series and an empty input yields an empty output.
pub fn prepare(raw: &[Bar], requested_count: usize) -> Vec<Bar> {
    let effective = requested_count.min(raw.len());
    raw[raw.len() - effective..].to_vec()
}
