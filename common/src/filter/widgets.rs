//! Widget coordination: dropdown open state and recompute timing

use super::fields::SelectField;

/// Quiet period after the last keystroke before filters are recomputed
pub const DEBOUNCE_MS: u32 = 300;

/// How a filter edit arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Typing in a min/max input
    Keystroke,
    /// Checkbox toggle, slider release, clear button
    Discrete,
}

impl ChangeKind {
    /// `None` means recompute now
    pub fn delay_ms(&self) -> Option<u32> {
        match self {
            ChangeKind::Keystroke => Some(DEBOUNCE_MS),
            ChangeKind::Discrete => None,
        }
    }
}

/// Dropdown checklists; at most one is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownGroup {
    open: Option<SelectField>,
}

impl DropdownGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> Option<SelectField> {
        self.open
    }

    pub fn is_open(&self, field: SelectField) -> bool {
        self.open == Some(field)
    }

    /// Opening one dropdown closes any other
    pub fn toggle(&mut self, field: SelectField) {
        self.open = if self.is_open(field) { None } else { Some(field) };
    }

    /// Outside click
    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_kind_delay() {
        assert_eq!(ChangeKind::Keystroke.delay_ms(), Some(300));
        assert_eq!(ChangeKind::Discrete.delay_ms(), None);
    }

    #[test]
    fn test_dropdown_single_open() {
        let mut group = DropdownGroup::new();
        assert_eq!(group.open(), None);

        group.toggle(SelectField::Mold);
        assert!(group.is_open(SelectField::Mold));

        group.toggle(SelectField::PlasticType);
        assert!(group.is_open(SelectField::PlasticType));
        assert!(!group.is_open(SelectField::Mold));

        group.toggle(SelectField::PlasticType);
        assert_eq!(group.open(), None);
    }

    #[test]
    fn test_dropdown_close_all() {
        let mut group = DropdownGroup::new();
        group.toggle(SelectField::RimColor);
        group.close_all();
        assert!(!group.is_open(SelectField::RimColor));
    }
}
