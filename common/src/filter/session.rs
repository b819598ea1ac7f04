//! Filter session: the unfiltered result set, the active filters and
//! everything the filter widgets derive from them

use super::fields::{RangeEnd, RangeField, SelectField};
use super::predicate::{distinct_values, filter_all, numeric_extent};
use super::state::{Bounds, FilterControls, FilterState};
use crate::types::DiscRecord;
use std::collections::BTreeSet;

/// One checklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    /// Present in the currently filtered subset
    pub available: bool,
    pub selected: bool,
}

/// Observed min/max of a numeric field over the unfiltered set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservedRange {
    pub field: RangeField,
    pub min: f64,
    pub max: f64,
}

impl ObservedRange {
    /// `Min (170g)`, `Max ($22.00)`, `Min (3.0)`
    pub fn placeholder(&self, end: RangeEnd) -> String {
        match end {
            RangeEnd::Min => format!("Min ({})", self.field.format_observed(self.min)),
            RangeEnd::Max => format!("Max ({})", self.field.format_observed(self.max)),
        }
    }
}

/// Slider geometry for one range pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderTrack {
    pub lo: f64,
    pub hi: f64,
    pub min_thumb: f64,
    pub max_thumb: f64,
}

impl SliderTrack {
    pub fn new(field: RangeField, observed: Option<ObservedRange>, bounds: Bounds) -> Self {
        let (lo, hi) = match observed {
            Some(range) => (range.min.floor(), range.max.ceil()),
            None => field.default_track(),
        };
        let min_thumb = bounds.min.unwrap_or(lo).clamp(lo, hi);
        let max_thumb = bounds.max.unwrap_or(hi).clamp(lo, hi);
        Self {
            lo,
            hi,
            min_thumb: min_thumb.min(max_thumb),
            max_thumb: max_thumb.max(min_thumb),
        }
    }

    pub fn percent(&self, value: f64) -> f64 {
        let span = self.hi - self.lo;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.lo) / span * 100.0).clamp(0.0, 100.0)
    }

    /// (left, width) of the highlighted segment, in percent
    pub fn fill(&self) -> (f64, f64) {
        let left = self.percent(self.min_thumb);
        let right = self.percent(self.max_thumb);
        (left, (right - left).max(0.0))
    }

    /// Slider step: whole grams/dollars, tenths for ratings
    pub fn step(field: RangeField) -> f64 {
        match field {
            RangeField::Weight | RangeField::Price => 1.0,
            _ => 0.1,
        }
    }
}

/// Owns the authoritative unfiltered records and the active filters
#[derive(Debug, Clone, Default)]
pub struct FilterSession {
    records: Vec<DiscRecord>,
    filters: FilterState,
    filtered: Vec<DiscRecord>,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new search result; filters always start empty
    pub fn replace_records(&mut self, records: Vec<DiscRecord>) {
        tracing::debug!(count = records.len(), "replacing result set");
        self.records = records;
        self.filters.clear();
        self.recompute();
    }

    pub fn records(&self) -> &[DiscRecord] {
        &self.records
    }

    pub fn filtered(&self) -> &[DiscRecord] {
        &self.filtered
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn apply(&mut self, filters: FilterState) {
        self.filters = filters;
        self.recompute();
    }

    pub fn apply_controls(&mut self, controls: &FilterControls) {
        self.apply(FilterState::from_controls(controls));
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = filter_all(&self.records, &self.filters);
    }

    /// Every distinct value in the unfiltered set, flagged against the
    /// filtered subset. Selected values stay listed even if they vanish.
    pub fn options(&self, field: SelectField) -> Vec<FilterOption> {
        let available: BTreeSet<String> = distinct_values(&self.filtered, field).into_iter().collect();
        let mut all: BTreeSet<String> = distinct_values(&self.records, field).into_iter().collect();
        if let Some(selected) = self.filters.selection(field) {
            all.extend(selected.iter().cloned());
        }

        all.into_iter()
            .map(|value| FilterOption {
                available: available.contains(&value),
                selected: self.filters.is_selected(field, &value),
                value,
            })
            .collect()
    }

    pub fn observed_range(&self, field: RangeField) -> Option<ObservedRange> {
        numeric_extent(&self.records, field).map(|(min, max)| ObservedRange { field, min, max })
    }

    pub fn slider_track(&self, field: RangeField) -> SliderTrack {
        SliderTrack::new(field, self.observed_range(field), self.filters.bounds(field))
    }

    /// Toggle text for a dropdown checklist
    pub fn dropdown_label(&self, field: SelectField) -> String {
        let total = distinct_values(&self.records, field).len();
        let selected: Vec<&str> = self
            .filters
            .selection(field)
            .map(|s| s.iter().map(String::as_str).collect())
            .unwrap_or_default();
        field.dropdown_label(&selected, total)
    }

    /// `Showing N discs` or `Showing X of Y discs`
    pub fn results_info(&self) -> String {
        let shown = self.filtered.len();
        let total = self.records.len();
        if shown == total {
            format!("Showing {} discs", total)
        } else {
            format!("Showing {} of {} discs", shown, total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DiscRecord> {
        let make = |mold: &str, plastic: &str, color: &str, weight: f64, price: &str| DiscRecord {
            mold: Some(mold.into()),
            plastic_type: Some(plastic.into()),
            plastic_color: Some(color.into()),
            weight: Some(weight),
            price: Some(price.into()),
            ..Default::default()
        };
        vec![
            make("Wraith", "Star", "Blue", 174.0, "18.00"),
            make("Wraith", "Champion", "Red", 172.5, "21.99"),
            make("Destroyer", "Star", "Yellow", 170.0, "18.00"),
        ]
    }

    #[test]
    fn test_replace_records_clears_filters() {
        let mut session = FilterSession::new();
        session.replace_records(sample());
        let mut filters = FilterState::new();
        filters.select(SelectField::Mold, ["Wraith"]);
        session.apply(filters);
        assert_eq!(session.filtered().len(), 2);

        session.replace_records(sample());
        assert!(session.filters().is_empty());
        assert_eq!(session.filtered().len(), 3);
    }

    #[test]
    fn test_options_flag_availability() {
        let mut session = FilterSession::new();
        session.replace_records(sample());
        let mut filters = FilterState::new();
        filters.select(SelectField::Mold, ["Destroyer"]);
        session.apply(filters);

        let plastics = session.options(SelectField::PlasticType);
        assert_eq!(plastics.len(), 2);
        assert_eq!(plastics[0].value, "Champion");
        assert!(!plastics[0].available);
        assert_eq!(plastics[1].value, "Star");
        assert!(plastics[1].available);

        let molds = session.options(SelectField::Mold);
        assert!(molds.iter().any(|o| o.value == "Destroyer" && o.selected));
        assert!(molds.iter().any(|o| o.value == "Wraith" && !o.selected && !o.available));
    }

    #[test]
    fn test_selected_option_persists_when_unavailable() {
        let mut session = FilterSession::new();
        session.replace_records(sample());
        let mut filters = FilterState::new();
        filters.select(SelectField::PlasticColor, ["Blue"]);
        filters.set_bound(RangeField::Weight, RangeEnd::Max, Some(171.0));
        session.apply(filters);

        assert!(session.filtered().is_empty());
        let colors = session.options(SelectField::PlasticColor);
        let blue = colors.iter().find(|o| o.value == "Blue").expect("blue listed");
        assert!(blue.selected);
        assert!(!blue.available);
    }

    #[test]
    fn test_observed_range_placeholders() {
        let mut session = FilterSession::new();
        session.replace_records(sample());

        let weight = session.observed_range(RangeField::Weight).expect("weights");
        assert_eq!(weight.placeholder(RangeEnd::Min), "Min (170g)");
        assert_eq!(weight.placeholder(RangeEnd::Max), "Max (174g)");

        let price = session.observed_range(RangeField::Price).expect("prices");
        assert_eq!(price.placeholder(RangeEnd::Max), "Max ($21.99)");

        assert!(session.observed_range(RangeField::Flatness).is_none());
    }

    #[test]
    fn test_slider_track() {
        let mut session = FilterSession::new();
        let track = session.slider_track(RangeField::Weight);
        assert_eq!((track.lo, track.hi), (0.0, 200.0));

        session.replace_records(sample());
        let track = session.slider_track(RangeField::Price);
        assert_eq!((track.lo, track.hi), (18.0, 22.0));
        assert_eq!(track.fill(), (0.0, 100.0));

        let mut filters = FilterState::new();
        filters.set_bound(RangeField::Price, RangeEnd::Min, Some(20.0));
        session.apply(filters);
        let track = session.slider_track(RangeField::Price);
        assert_eq!(track.min_thumb, 20.0);
        assert_eq!(track.fill(), (50.0, 50.0));
    }

    #[test]
    fn test_slider_defaults_for_ratings() {
        let track = SliderTrack::new(RangeField::Flatness, None, Bounds::default());
        assert_eq!((track.lo, track.hi), (1.0, 10.0));
        assert_eq!(SliderTrack::step(RangeField::Flatness), 0.1);
    }

    #[test]
    fn test_dropdown_label_and_results_info() {
        let mut session = FilterSession::new();
        session.replace_records(sample());
        assert_eq!(session.dropdown_label(SelectField::Mold), "All Mold");
        assert_eq!(session.results_info(), "Showing 3 discs");

        let mut filters = FilterState::new();
        filters.select(SelectField::Mold, ["Wraith"]);
        session.apply(filters);
        assert_eq!(session.dropdown_label(SelectField::Mold), "Wraith");
        assert_eq!(session.results_info(), "Showing 2 of 3 discs");
    }
}
