use derive_more::Display;

///
/// Constant
///
/// One declared constant of a user type: the identifier it was declared
/// under and the raw value it stands for.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("{name} = {value}")]
pub struct Constant<V> {
    pub name: &'static str,
    pub value: V,
}

impl<V> Constant<V> {
    #[must_use]
    pub const fn new(name: &'static str, value: V) -> Self {
        Self { name, value }
    }
}

/// First constant in declaration order holding `value`.
#[must_use]
pub fn find_by_value<'a, V: PartialEq>(
    constants: &'a [Constant<V>],
    value: &V,
) -> Option<&'a Constant<V>> {
    constants.iter().find(|c| c.value == *value)
}

/// Constant declared under exactly `name`.
#[must_use]
pub fn find_by_name<'a, V>(constants: &'a [Constant<V>], name: &str) -> Option<&'a Constant<V>> {
    constants.iter().find(|c| c.name == name)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: &[Constant<u8>] = &[
        Constant::new("LOW", 1),
        Constant::new("MID", 5),
        Constant::new("MEDIUM", 5),
        Constant::new("HIGH", 9),
    ];

    #[test]
    fn display_shows_name_and_value() {
        assert_eq!(LEVELS[0].to_string(), "LOW = 1");
    }

    #[test]
    fn value_lookup_prefers_first_declared_alias() {
        let found = find_by_value(LEVELS, &5).unwrap();
        assert_eq!(found.name, "MID");
    }

    #[test]
    fn name_lookup_is_exact() {
        assert_eq!(find_by_name(LEVELS, "HIGH").map(|c| c.value), Some(9));
        assert!(find_by_name(LEVELS, "high").is_none());
        assert!(find_by_value(LEVELS, &2).is_none());
    }
}
