use crate::Error;

/// Compile-time binding between the values of an enum type and their string
/// representations.
///
/// Implementations are generated by the `declare!` macro, the string at each
/// position of `STRINGS` representing the variant at the same position of
/// `VARIANTS`. There is no runtime registration, everything is resolved
/// through the type.
pub trait EnumStrings: Copy + 'static {
    /// The registered strings in declaration order.
    const STRINGS: &'static [&'static str];

    /// All declared variants in declaration order, including a trailing
    /// `End` marker if one is declared.
    const VARIANTS: &'static [Self];

    /// The value's position in declaration order.
    fn index(self) -> usize;
}

/// Returns the number of strings registered for a type. A trailing `End`
/// marker has no string and isn't counted.
///
/// Only types declared through the `declare!` macro can be queried, anything
/// else fails to compile:
///
/// ```compile_fail
/// enum Bare { A, B }
///
/// enum_strings::count::<Bare>();
/// ```
pub fn count<E: EnumStrings>() -> usize {
    E::STRINGS.len()
}

/// Returns the string representation of a value. Might result in
/// Error::OutOfRange if no string is registered at the value's position.
pub fn to_string<E: EnumStrings>(value: E) -> Result<&'static str, Error> {
    let index = value.index();
    E::STRINGS.get(index).copied().ok_or(Error::OutOfRange {
        value: index,
        count: E::STRINGS.len(),
    })
}

/// Returns the value represented by a string. Matching is exact and
/// case-sensitive; if the same string is registered at several positions,
/// the first one wins. Might result in Error::InvalidString if no registered
/// string matches.
pub fn from_string<E: EnumStrings>(string: &str) -> Result<E, Error> {
    E::STRINGS
        .iter()
        .zip(E::VARIANTS)
        .find(|(candidate, _)| **candidate == string)
        .map(|(_, value)| *value)
        .ok_or_else(|| Error::InvalidString(string.to_owned()))
}

/// Returns owned copies of all registered strings in registration order.
pub fn strings<E: EnumStrings>() -> Vec<String> {
    E::STRINGS.iter().copied().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::declare! {
        enum Truncated { A, B } with strings ["only"]
    }

    crate::declare! {
        enum Padded { A } with strings ["first", "second"]
    }

    crate::declare! {
        enum Doubled { A, B } with strings ["same", "same"]
    }

    #[test]
    pub fn test_counts() {
        assert_eq!(count::<Truncated>(), 1);
        assert_eq!(count::<Padded>(), 2);
        assert_eq!(strings::<Truncated>(), ["only"]);
        assert_eq!(strings::<Padded>(), ["first", "second"]);
    }

    #[test]
    pub fn test_missing_string() {
        assert_eq!(
            to_string(Truncated::A).expect("Converting a covered value"),
            "only"
        );
        assert!(matches!(
            to_string(Truncated::B).expect_err("Converting a value without a string"),
            Error::OutOfRange { value: 1, count: 1 }
        ));
    }

    #[test]
    pub fn test_unreachable_string() {
        assert_eq!(
            from_string::<Padded>("first").expect("Parsing the covered string"),
            Padded::A
        );
        assert!(matches!(
            from_string::<Padded>("second").expect_err("Parsing a string without a value"),
            Error::InvalidString(string) if string == "second"
        ));
    }

    #[test]
    pub fn test_duplicate_strings() {
        assert_eq!(
            from_string::<Doubled>("same").expect("Parsing a duplicate string"),
            Doubled::A
        );
        assert_eq!(
            to_string(Doubled::A).expect("Converting the first value"),
            "same"
        );
        assert_eq!(
            to_string(Doubled::B).expect("Converting the second value"),
            "same"
        );
    }

    #[test]
    pub fn test_variant_table() {
        assert_eq!(Truncated::VARIANTS, &[Truncated::A, Truncated::B]);
        assert_eq!(Truncated::A.index(), 0);
        assert_eq!(Truncated::B.index(), 1);
    }
}
