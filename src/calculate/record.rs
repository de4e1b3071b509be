//! Personal-best detection.

use crate::models::Sample;

/// Whether `best` is also the player's latest result.
///
/// True when `best.dps` equals the DPS of the chronologically latest
/// sample in `history` that carries a metric. This is value equality,
/// not identity: re-achieving an earlier best on the latest attempt
/// counts. When several samples share the latest timestamp, the one that
/// appears last in source order is the latest.
pub fn is_new_record<'a, I>(history: I, best: &Sample) -> bool
where
    I: IntoIterator<Item = &'a Sample>,
{
    let latest = history
        .into_iter()
        .filter(|s| s.has_metric())
        .max_by_key(|s| s.timestamp);

    match (latest, best.dps) {
        (Some(latest), Some(best_dps)) => latest.dps == Some(best_dps),
        _ => false,
    }
}
