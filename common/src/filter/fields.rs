//! Filterable fields of a disc record

use crate::types::{format_number, DiscRecord};

/// Multi-select (checklist) fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectField {
    Mold,
    PlasticType,
    PlasticColor,
    RimColor,
    StampFoil,
}

impl SelectField {
    pub const ALL: [SelectField; 5] = [
        SelectField::Mold,
        SelectField::PlasticType,
        SelectField::PlasticColor,
        SelectField::RimColor,
        SelectField::StampFoil,
    ];

    /// Form field name
    pub fn key(&self) -> &'static str {
        match self {
            SelectField::Mold => "mold",
            SelectField::PlasticType => "plastic_type",
            SelectField::PlasticColor => "plastic_color",
            SelectField::RimColor => "rim_color",
            SelectField::StampFoil => "stamp_foil",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SelectField::Mold => "Mold",
            SelectField::PlasticType => "Plastic Type",
            SelectField::PlasticColor => "Plastic Color",
            SelectField::RimColor => "Rim Color",
            SelectField::StampFoil => "Stamp Foil",
        }
    }

    /// Label used in the filter summary line
    pub fn summary_label(&self) -> &'static str {
        match self {
            SelectField::Mold => "Molds",
            SelectField::PlasticType => "Plastic Types",
            SelectField::PlasticColor => "Colors",
            SelectField::RimColor => "Rim Colors",
            SelectField::StampFoil => "Foils",
        }
    }

    pub fn value_of<'a>(&self, disc: &'a DiscRecord) -> Option<&'a str> {
        let value = match self {
            SelectField::Mold => disc.mold.as_deref(),
            SelectField::PlasticType => disc.plastic_type.as_deref(),
            SelectField::PlasticColor => disc.plastic_color.as_deref(),
            SelectField::RimColor => disc.rim_color.as_deref(),
            SelectField::StampFoil => disc.stamp_foil.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    /// Text shown on the closed dropdown toggle
    pub fn dropdown_label(&self, selected: &[&str], total: usize) -> String {
        match selected.len() {
            0 => format!("All {}", self.label()),
            n if n == total => format!("All {}", self.label()),
            1 => selected[0].to_string(),
            n => format!("{} selected", n),
        }
    }
}

/// Numeric range fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeField {
    Weight,
    ScaledWeight,
    Flatness,
    Stiffness,
    Price,
}

/// Which end of a range an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RangeEnd {
    Min,
    Max,
}

impl RangeField {
    pub const ALL: [RangeField; 5] = [
        RangeField::Weight,
        RangeField::ScaledWeight,
        RangeField::Flatness,
        RangeField::Stiffness,
        RangeField::Price,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RangeField::Weight => "weight",
            RangeField::ScaledWeight => "scaled_weight",
            RangeField::Flatness => "flatness",
            RangeField::Stiffness => "stiffness",
            RangeField::Price => "price",
        }
    }

    /// `weight_min`, `price_max`, ...
    pub fn bound_key(&self, end: RangeEnd) -> String {
        match end {
            RangeEnd::Min => format!("{}_min", self.key()),
            RangeEnd::Max => format!("{}_max", self.key()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangeField::Weight => "Weight",
            RangeField::ScaledWeight => "Scaled Weight",
            RangeField::Flatness => "Flatness",
            RangeField::Stiffness => "Stiffness",
            RangeField::Price => "Price",
        }
    }

    pub fn value_of(&self, disc: &DiscRecord) -> Option<f64> {
        let value = match self {
            RangeField::Weight => disc.weight,
            RangeField::ScaledWeight => disc.scaled_weight,
            RangeField::Flatness => disc.flatness,
            RangeField::Stiffness => disc.stiffness,
            RangeField::Price => disc.price_value(),
        };
        value.filter(|v| v.is_finite())
    }

    /// Slider limits used before any data is loaded
    pub fn default_track(&self) -> (f64, f64) {
        match self {
            RangeField::Weight => (0.0, 200.0),
            RangeField::ScaledWeight => (0.0, 10.0),
            RangeField::Flatness | RangeField::Stiffness => (1.0, 10.0),
            RangeField::Price => (0.0, 50.0),
        }
    }

    /// Flatness and stiffness are rated 1-10; everything else is non-negative
    pub fn clamp_value(&self, value: f64) -> f64 {
        match self {
            RangeField::Flatness | RangeField::Stiffness => value.clamp(1.0, 10.0),
            _ => value.max(0.0),
        }
    }

    /// Flatness/stiffness bounds at 1 or 10 do not narrow anything
    pub fn is_default_bound(&self, end: RangeEnd, value: f64) -> bool {
        match (self, end) {
            (RangeField::Flatness | RangeField::Stiffness, RangeEnd::Min) => value == 1.0,
            (RangeField::Flatness | RangeField::Stiffness, RangeEnd::Max) => value == 10.0,
            _ => false,
        }
    }

    /// Unit-bearing display ("174g", "$18", "7")
    pub fn format_value(&self, value: f64) -> String {
        match self {
            RangeField::Weight => format!("{}g", format_number(value)),
            RangeField::Price => format!("${}", format_number(value)),
            _ => format_number(value),
        }
    }

    /// Placeholder display of an observed value
    pub fn format_observed(&self, value: f64) -> String {
        match self {
            RangeField::Weight => format!("{}g", format_number(value)),
            RangeField::Price => format!("${:.2}", value),
            _ => format!("{:.1}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_value_of_ignores_empty_strings() {
        let disc = DiscRecord {
            mold: Some("Wraith".into()),
            stamp_foil: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(SelectField::Mold.value_of(&disc), Some("Wraith"));
        assert_eq!(SelectField::StampFoil.value_of(&disc), None);
        assert_eq!(SelectField::RimColor.value_of(&disc), None);
    }

    #[test]
    fn test_dropdown_label() {
        let field = SelectField::PlasticType;
        assert_eq!(field.dropdown_label(&[], 4), "All Plastic Type");
        assert_eq!(field.dropdown_label(&["Star"], 4), "Star");
        assert_eq!(field.dropdown_label(&["Star", "Champion"], 4), "2 selected");
        assert_eq!(field.dropdown_label(&["Star", "Champion"], 2), "All Plastic Type");
    }

    #[test]
    fn test_bound_key() {
        assert_eq!(RangeField::Weight.bound_key(RangeEnd::Min), "weight_min");
        assert_eq!(RangeField::ScaledWeight.bound_key(RangeEnd::Max), "scaled_weight_max");
    }

    #[test]
    fn test_clamp() {
        assert_eq!(RangeField::Flatness.clamp_value(0.0), 1.0);
        assert_eq!(RangeField::Stiffness.clamp_value(12.0), 10.0);
        assert_eq!(RangeField::Weight.clamp_value(-5.0), 0.0);
        assert_eq!(RangeField::Price.clamp_value(25.0), 25.0);
    }

    #[test]
    fn test_format() {
        assert_eq!(RangeField::Weight.format_value(172.0), "172g");
        assert_eq!(RangeField::Price.format_value(15.5), "$15.5");
        assert_eq!(RangeField::Price.format_observed(15.5), "$15.50");
        assert_eq!(RangeField::Flatness.format_observed(7.0), "7.0");
    }
}
