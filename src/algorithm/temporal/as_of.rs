//! Most-recent-value-as-of-a-timepoint resolution
//!
//! Every clinical axis is resolved the same way: among the dated
//! observations on or before the cutoff, the one with the greatest day wins.
//! Undated observations never qualify.

use crate::models::TimedObservation;

/// Most recent value observed on or before `cutoff_days`
///
/// Returns `None` when nothing was known by the cutoff. When several
/// observations share the latest day, the one appearing last in the input
/// is returned.
#[must_use]
pub fn resolve_as_of<V>(observations: &[TimedObservation<V>], cutoff_days: i32) -> Option<&V> {
    resolve_as_of_by(observations, cutoff_days, Some)
}

/// Most recent projected value on or before `cutoff_days`
///
/// Observations whose projection yields `None` are skipped, so a single list
/// holding several kinds of values (e.g. all lab analytes) can be queried per
/// kind.
pub fn resolve_as_of_by<'a, V, W, F>(
    observations: &'a [TimedObservation<V>],
    cutoff_days: i32,
    projection: F,
) -> Option<W>
where
    F: Fn(&'a V) -> Option<W>,
{
    observations
        .iter()
        .filter(|observation| observation.is_known_by(cutoff_days))
        .filter_map(|observation| {
            let day = observation.days_since_diagnosis?;
            projection(&observation.value).map(|value| (day, value))
        })
        .max_by_key(|(day, _)| *day)
        .map(|(_, value)| value)
}
