//! Canonical filter state and the raw control snapshot it is built from

use super::fields::{RangeEnd, RangeField, SelectField};
use std::collections::{BTreeMap, BTreeSet};

/// Range bound pair; `None` means open on that side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    pub fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn get(&self, end: RangeEnd) -> Option<f64> {
        match end {
            RangeEnd::Min => self.min,
            RangeEnd::Max => self.max,
        }
    }

    /// Swaps crossed bounds; returns true when a swap happened
    fn enforce_order(&mut self) -> bool {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => {
                self.min = Some(max);
                self.max = Some(min);
                true
            }
            _ => false,
        }
    }

    /// A value missing entirely always passes
    pub fn admits(&self, value: Option<f64>) -> bool {
        let Some(value) = value else {
            return true;
        };
        if self.min.is_some_and(|min| value < min) {
            return false;
        }
        if self.max.is_some_and(|max| value > max) {
            return false;
        }
        true
    }
}

/// Active constraints. An absent key means unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    selections: BTreeMap<SelectField, BTreeSet<String>>,
    bounds: BTreeMap<RangeField, Bounds>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty() && self.bounds.is_empty()
    }

    pub fn selection(&self, field: SelectField) -> Option<&BTreeSet<String>> {
        self.selections.get(&field)
    }

    pub fn is_selected(&self, field: SelectField, value: &str) -> bool {
        self.selections
            .get(&field)
            .is_some_and(|set| set.contains(value))
    }

    pub fn bounds(&self, field: RangeField) -> Bounds {
        self.bounds.get(&field).copied().unwrap_or_default()
    }

    /// Replaces the accepted set; an empty set removes the constraint
    pub fn select<I, S>(&mut self, field: SelectField, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|v: &String| !v.is_empty())
            .collect();
        if set.is_empty() {
            self.selections.remove(&field);
        } else {
            self.selections.insert(field, set);
        }
    }

    pub fn toggle(&mut self, field: SelectField, value: &str) {
        let set = self.selections.entry(field).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.selections.remove(&field);
        }
    }

    pub fn clear_selection(&mut self, field: SelectField) {
        self.selections.remove(&field);
    }

    /// Sets one end of a range (clamped to the field's domain) and
    /// re-establishes min <= max. Returns true if the pair was swapped.
    pub fn set_bound(&mut self, field: RangeField, end: RangeEnd, value: Option<f64>) -> bool {
        let value = value.filter(|v| v.is_finite()).map(|v| field.clamp_value(v));
        let bounds = self.bounds.entry(field).or_default();
        match end {
            RangeEnd::Min => bounds.min = value,
            RangeEnd::Max => bounds.max = value,
        }
        let swapped = bounds.enforce_order();
        if bounds.is_open() {
            self.bounds.remove(&field);
        }
        swapped
    }

    pub fn clear(&mut self) {
        self.selections.clear();
        self.bounds.clear();
    }

    pub fn selections(&self) -> impl Iterator<Item = (SelectField, &BTreeSet<String>)> {
        self.selections.iter().map(|(f, s)| (*f, s))
    }

    pub fn ranges(&self) -> impl Iterator<Item = (RangeField, Bounds)> + '_ {
        self.bounds.iter().map(|(f, b)| (*f, *b))
    }

    /// Builds the canonical state from raw control values
    pub fn from_controls(controls: &FilterControls) -> Self {
        let mut state = Self::new();
        for (field, values) in &controls.checked {
            state.select(*field, values.iter().cloned());
        }
        for ((field, end), raw) in &controls.inputs {
            if let Some(value) = parse_bound(raw) {
                state.set_bound(*field, *end, Some(value));
            }
        }
        state
    }

    /// Whether anything beyond default flatness/stiffness limits is active
    pub fn is_meaningful(&self) -> bool {
        if !self.selections.is_empty() {
            return true;
        }
        self.bounds
            .iter()
            .any(|(field, b)| meaningful_bounds(*field, b).is_some())
    }

    /// One-line description of the active constraints
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "No filters applied".to_string();
        }

        let mut parts = Vec::new();
        for (field, values) in &self.selections {
            let joined: Vec<&str> = values.iter().map(String::as_str).collect();
            parts.push(format!("{}: {}", field.summary_label(), joined.join(", ")));
        }
        for (field, bounds) in &self.bounds {
            if let Some((min, max)) = meaningful_bounds(*field, bounds) {
                let mut range = Vec::new();
                if let Some(min) = min {
                    range.push(format!("≥{}", field.format_value(min)));
                }
                if let Some(max) = max {
                    range.push(format!("≤{}", field.format_value(max)));
                }
                parts.push(format!("{}: {}", field.label(), range.join(" - ")));
            }
        }

        if parts.is_empty() {
            return "No filters applied".to_string();
        }
        let plural = if parts.len() > 1 { "s" } else { "" };
        format!("{} filter{}: {}", parts.len(), plural, parts.join(", "))
    }
}

fn meaningful_bounds(field: RangeField, bounds: &Bounds) -> Option<(Option<f64>, Option<f64>)> {
    let min = bounds
        .min
        .filter(|v| !field.is_default_bound(RangeEnd::Min, *v));
    let max = bounds
        .max
        .filter(|v| !field.is_default_bound(RangeEnd::Max, *v));
    if min.is_none() && max.is_none() {
        None
    } else {
        Some((min, max))
    }
}

/// Parses a raw input value; blank or non-numeric means "unset"
pub fn parse_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Raw state of every filter control, exactly as the user left it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterControls {
    pub checked: BTreeMap<SelectField, BTreeSet<String>>,
    pub inputs: BTreeMap<(RangeField, RangeEnd), String>,
}

impl FilterControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self, field: RangeField, end: RangeEnd) -> &str {
        self.inputs
            .get(&(field, end))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_input(&mut self, field: RangeField, end: RangeEnd, raw: impl Into<String>) {
        let raw = raw.into();
        if raw.trim().is_empty() {
            self.inputs.remove(&(field, end));
        } else {
            self.inputs.insert((field, end), raw);
        }
    }

    pub fn is_checked(&self, field: SelectField, value: &str) -> bool {
        self.checked.get(&field).is_some_and(|s| s.contains(value))
    }

    pub fn set_checked(&mut self, field: SelectField, value: &str, checked: bool) {
        let set = self.checked.entry(field).or_default();
        if checked {
            set.insert(value.to_string());
        } else {
            set.remove(value);
        }
        if set.is_empty() {
            self.checked.remove(&field);
        }
    }

    /// "Deselect All" for one checklist
    pub fn uncheck_all(&mut self, field: SelectField) {
        self.checked.remove(&field);
    }

    /// Swaps crossed min/max inputs and returns the fields that were swapped
    pub fn normalize_ranges(&mut self) -> Vec<RangeField> {
        let mut swapped = Vec::new();
        for field in RangeField::ALL {
            let min = parse_bound(self.input(field, RangeEnd::Min));
            let max = parse_bound(self.input(field, RangeEnd::Max));
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    let min_raw = self.input(field, RangeEnd::Min).to_string();
                    let max_raw = self.input(field, RangeEnd::Max).to_string();
                    self.set_input(field, RangeEnd::Min, max_raw);
                    self.set_input(field, RangeEnd::Max, min_raw);
                    swapped.push(field);
                }
            }
        }
        swapped
    }

    pub fn clear(&mut self) {
        self.checked.clear();
        self.inputs.clear();
    }
}
