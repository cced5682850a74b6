use derive_more::Deref;

/// Rendered for any value that has no display name.
pub const UNKNOWN_NAME: &str = "?";

///
/// DisplayNames
///
/// Static value -> display name table used only for rendering.
/// Lookups are exact matches; the first matching entry wins.
///

#[derive(Clone, Copy, Debug, Deref)]
pub struct DisplayNames<V: 'static>(&'static [(V, &'static str)]);

impl<V: 'static> DisplayNames<V> {
    /// Table with no entries; every lookup yields the sentinel.
    pub const EMPTY: Self = Self(&[]);

    #[must_use]
    pub const fn new(entries: &'static [(V, &'static str)]) -> Self {
        Self(entries)
    }

    #[must_use]
    pub const fn entries(&self) -> &'static [(V, &'static str)] {
        self.0
    }
}

impl<V: PartialEq + 'static> DisplayNames<V> {
    /// Display name mapped to `value`, if any.
    #[must_use]
    pub fn name_of(&self, value: &V) -> Option<&'static str> {
        self.0
            .iter()
            .find_map(|(v, name)| (v == value).then_some(*name))
    }

    /// Display name mapped to `value`, or [`UNKNOWN_NAME`].
    #[must_use]
    pub fn render(&self, value: &V) -> &'static str {
        self.name_of(value).unwrap_or(UNKNOWN_NAME)
    }
}

impl<V: Copy + 'static> DisplayNames<V> {
    /// Reverse lookup: the value whose display name is exactly `name`.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<V> {
        self.0
            .iter()
            .find_map(|(v, n)| (*n == name).then_some(*v))
    }
}

impl<V: 'static> Default for DisplayNames<V> {
    fn default() -> Self {
        Self::EMPTY
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: DisplayNames<u8> =
        DisplayNames::new(&[(0, "Off"), (1, "Idle"), (2, "Running"), (2, "Busy")]);

    #[test]
    fn render_known_value() {
        assert_eq!(STATES.render(&1), "Idle");
        assert_eq!(STATES.name_of(&0), Some("Off"));
    }

    #[test]
    fn render_unknown_value_yields_sentinel() {
        assert_eq!(STATES.render(&7), UNKNOWN_NAME);
        assert_eq!(STATES.name_of(&7), None);
    }

    #[test]
    fn first_entry_wins() {
        assert_eq!(STATES.render(&2), "Running");
    }

    #[test]
    fn empty_table_always_renders_sentinel() {
        let empty = DisplayNames::<i32>::EMPTY;

        assert!(empty.is_empty());
        assert_eq!(empty.render(&0), UNKNOWN_NAME);
        assert_eq!(empty.value_of("Off"), None);
    }

    #[test]
    fn reverse_lookup_matches_exact_name() {
        assert_eq!(STATES.value_of("Running"), Some(2));
        assert_eq!(STATES.value_of("running"), None);
        assert_eq!(STATES.len(), 4);
    }
}
