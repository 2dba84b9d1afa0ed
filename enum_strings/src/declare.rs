/// Declares an enum and registers a string representation for each of its
/// variants:
///
/// ```
/// enum_strings::declare! {
///     /// Payload compression applied before encryption.
///     pub enum Compression { None, Gzip } with strings ["none", "gzip"]
/// }
///
/// assert_eq!(enum_strings::count::<Compression>(), 2);
/// assert_eq!(enum_strings::to_string(Compression::Gzip).unwrap(), "gzip");
/// assert_eq!(
///     enum_strings::from_string::<Compression>("none").unwrap(),
///     Compression::None
/// );
/// assert_eq!(format!("{}", Compression::Gzip), "gzip");
/// assert_eq!("none".parse::<Compression>().unwrap(), Compression::None);
/// ```
///
/// Strings are assigned in declaration order and must match the variants in
/// number. The variants cannot carry fields or explicit discriminants, so
/// the values always form a contiguous range starting at zero.
///
/// The following is implemented for the declared type:
///
/// * `Debug`, `Clone`, `Copy`, `PartialEq` and `Eq` are derived. Further
///   derives and attributes in front of the declaration are passed through.
/// * `EnumStrings`, connecting the type to `count`, `to_string`,
///   `from_string` and `strings`.
/// * `Display` and `FromStr` via the registered strings.
/// * Serde `Serialize` and `Deserialize`, representing values by their
///   registered strings.
/// * The stream operations `io::Serialize` and `io::Deserialize`, through
///   their blanket implementations.
///
/// Declaring the last variant as `End` turns the string count into a
/// compile-time check: the marker's position is the number of real values,
/// it gets no string itself and stays out of `count`. A mismatch fails the
/// build:
///
/// ```compile_fail
/// enum_strings::declare! {
///     enum Level { Low, High, End } with strings ["low"]
/// }
/// ```
///
/// Only the trailing position makes `End` a marker, anywhere else it is an
/// ordinary value with a string of its own. Without the marker no automated
/// check is possible, a mismatched declaration then produces
/// Error::OutOfRange or Error::InvalidString at the affected call sites.
/// Registering the same string twice is allowed, `from_string` resolves it
/// to the first matching position.
#[macro_export]
macro_rules! declare {
    {
        $(#[$($meta:tt)*])*
        $visibility:vis enum $name:ident {
            $(
                $(#[$($variant_meta:tt)*])*
                $variant:ident
            ),+ $(,)?
        } with strings [$($string:literal),+ $(,)?]
    } => {
        $(
            #[$($meta)*]
        )*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $visibility enum $name {
            $(
                $(
                    #[$($variant_meta)*]
                )*
                $variant,
            )+
        }

        impl $crate::EnumStrings for $name {
            const STRINGS: &'static [&'static str] = &[$($string),+];
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn index(self) -> usize {
                self as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::to_string(*self).map_err(|_| std::fmt::Error)?)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(string: &str) -> Result<Self, Self::Err> {
                $crate::from_string(string)
            }
        }

        impl $crate::serde::Serialize for $name {
            fn serialize<S: $crate::serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                let string = $crate::to_string(*self).map_err($crate::serde::ser::Error::custom)?;
                serializer.serialize_str(string)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $name {
            fn deserialize<D: $crate::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let string =
                    <std::string::String as $crate::serde::Deserialize<'de>>::deserialize(
                        deserializer,
                    )?;
                $crate::from_string(&string).map_err($crate::serde::de::Error::custom)
            }
        }

        $crate::check_string_count!($name [$($variant)+]);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! check_string_count {
    ($name:ident [$last:ident]) => {
        $crate::check_string_count!(@last $name $last);
    };
    ($name:ident [$head:ident $($rest:ident)+]) => {
        $crate::check_string_count!($name [$($rest)+]);
    };
    (@last $name:ident End) => {
        const _: () = assert!(
            <$name as $crate::EnumStrings>::STRINGS.len() == $name::End as usize,
            "the number of strings doesn't match the number of values before the End marker"
        );
    };
    (@last $name:ident $last:ident) => {};
}
