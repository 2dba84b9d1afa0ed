//! Attaches string representations to enums at compile time. An enum and
//! its strings are declared in one go:
//!
//! ```
//! enum_strings::declare! {
//!     pub enum Compression { None, Gzip } with strings ["none", "gzip"]
//! }
//!
//! assert_eq!(enum_strings::to_string(Compression::None).unwrap(), "none");
//! assert_eq!(
//!     enum_strings::from_string::<Compression>("gzip").unwrap(),
//!     Compression::Gzip
//! );
//! ```
//!
//! The declaration implements the `EnumStrings` trait, making four generic
//! operations available:
//!
//! * `count`: the number of registered strings.
//! * `to_string`: the string registered at the value's position.
//! * `from_string`: the value whose position the string is registered at.
//! * `strings`: owned copies of all registered strings.
//!
//! In addition, `Display`, `FromStr` and the serde traits are implemented
//! via the registered strings, and the `io` module provides operations for
//! whitespace-delimited text streams. Declaring a trailing `End` marker
//! variant turns the string count into a compile-time check.

#![deny(elided_lifetimes_in_paths)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(meta_variable_misuse)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![warn(noop_method_call)]
#![deny(single_use_lifetimes)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
#![deny(unused_import_braces)]
#![deny(unused_lifetimes)]
#![warn(unused_macro_rules)]
#![deny(variant_size_differences)]

mod convert;
mod declare;
mod error;
pub mod io;

pub use convert::*;
pub use error::*;

#[doc(hidden)]
pub use serde;
