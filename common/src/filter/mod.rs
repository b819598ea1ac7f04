//! Client-side filtering
//!
//! - `predicate`: pure record matching
//! - `state`: canonical filter state and raw control snapshot
//! - `session`: unfiltered set + filters + derived widget data
//! - `widgets`: dropdown open state and debounce policy

mod fields;
mod predicate;
mod session;
mod state;
mod widgets;

pub use fields::{RangeEnd, RangeField, SelectField};
pub use predicate::{distinct_values, filter_all, matches, numeric_extent};
pub use session::{FilterOption, FilterSession, ObservedRange, SliderTrack};
pub use state::{parse_bound, Bounds, FilterControls, FilterState};
pub use widgets::{ChangeKind, DropdownGroup, DEBOUNCE_MS};
