use std::collections::HashMap;

use shared::domain::MemberName;

use crate::view_control::ViewControl;

/// View controls collected from scanned controllers, keyed by field name.
#[derive(Debug, Default)]
pub struct ViewControlMapping {
    entries: HashMap<MemberName, ViewControl>,
}

impl ViewControlMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` unless `name` is already mapped. Returns whether the
    /// entry was added; an existing entry always wins.
    pub fn record(&mut self, name: MemberName, value: ViewControl) -> bool {
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, value);
        true
    }

    pub fn get(&self, name: &str) -> Option<&ViewControl> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<MemberName> {
        let mut names: Vec<_> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_wins() {
        let mut mapping = ViewControlMapping::new();
        let first = ViewControl::new("first");
        let second = ViewControl::new("second");

        assert!(mapping.record("save_button".into(), first.clone()));
        assert!(!mapping.record("save_button".into(), second));

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("save_button"), Some(&first));
    }

    #[test]
    fn names_are_sorted() {
        let mut mapping = ViewControlMapping::new();
        mapping.record("title".into(), ViewControl::new(1u8));
        mapping.record("cancel_button".into(), ViewControl::new(2u8));

        assert_eq!(
            mapping.names(),
            vec![MemberName::from("cancel_button"), MemberName::from("title")]
        );
        assert!(mapping.contains("title"));
        assert!(!mapping.is_empty());
    }
}
