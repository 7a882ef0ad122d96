//! Derive macro for dtomap reflection.
//!
//! `#[derive(Reflect)]` implements both `Reflect` and `Introspect` from the
//! struct definition, so the members a type declares and the members its
//! `Reflect` impl answers for come from the same list.
//!
//! # Example
//!
//! ```rust,ignore
//! use dtomap_reflect::Reflect;
//!
//! #[derive(Reflect)]
//! #[reflect(
//!     name = "app::Person",
//!     blank = Person::blank,
//!     getters(full_name),
//!     setters(set_first_name),
//!     try_setters(set_password),
//! )]
//! pub struct Person {
//!     first_name: String,
//!     pub city: String,
//!     #[reflect(skip)]
//!     cache: Vec<u8>,
//! }
//! ```

#![forbid(unsafe_code)]

mod reflect;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derive `Reflect` and `Introspect` for a struct with named fields.
///
/// # Type attributes
///
/// All optional, inside `#[reflect(...)]`:
///
/// - `name = <expr>`: registered identifier. Defaults to the module path
///   followed by the type name.
/// - `blank = <expr>`: function building a blank instance. Defaults to
///   `Default::default`.
/// - `getters(a, b)`: zero-argument methods whose result converts into a
///   `Value`.
/// - `setters(a, b)`: one-argument methods whose argument is `FromValue`.
/// - `try_getters(..)` / `try_setters(..)`: the same, for methods returning
///   `Result<_, E>` with `E: Display`. An `Err` becomes
///   `ReflectError::Failed`.
/// - `crate = "path"`: where the reflection types live, for crates that only
///   depend on a re-exporting crate. Defaults to `::dtomap_reflect`.
///
/// # Field attributes
///
/// - `#[reflect(skip)]`: not declared, not reachable.
/// - `#[reflect(with = module)]`: convert through `module::to_value(&T)` and
///   `module::from_value(Value)` instead of `From`/`FromValue`.
///   `dtomap_serde` provides both for any serde type.
///
/// Field visibility is recorded as declared: `pub` is `Public`, `pub(...)`
/// is `Protected`, anything else `Private`. Listed methods are `Public`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    reflect::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
