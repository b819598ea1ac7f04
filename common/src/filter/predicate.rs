//! Record matching

use super::fields::{RangeField, SelectField};
use super::state::FilterState;
use crate::types::DiscRecord;

/// Whether one record satisfies every active constraint
pub fn matches(disc: &DiscRecord, filters: &FilterState) -> bool {
    for (field, accepted) in filters.selections() {
        match field.value_of(disc) {
            Some(value) if accepted.contains(value) => {}
            _ => return false,
        }
    }

    filters
        .ranges()
        .all(|(field, bounds)| bounds.admits(field.value_of(disc)))
}

/// Matching records in their original order
pub fn filter_all(discs: &[DiscRecord], filters: &FilterState) -> Vec<DiscRecord> {
    if filters.is_empty() {
        return discs.to_vec();
    }
    discs
        .iter()
        .filter(|d| matches(d, filters))
        .cloned()
        .collect()
}

/// Distinct values of a select field, sorted
pub fn distinct_values<'a, I>(discs: I, field: SelectField) -> Vec<String>
where
    I: IntoIterator<Item = &'a DiscRecord>,
{
    let mut values: Vec<String> = discs
        .into_iter()
        .filter_map(|d| field.value_of(d))
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Observed min/max of a range field
pub fn numeric_extent<'a, I>(discs: I, field: RangeField) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a DiscRecord>,
{
    discs
        .into_iter()
        .filter_map(|d| field.value_of(d))
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
