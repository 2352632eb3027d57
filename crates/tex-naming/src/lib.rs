//! Identifier normalization for tex templates.
//!
//! Turns freeform names (database columns, JSON keys, template variables)
//! into exported (`FooID`) or unexported (`fooID`) identifiers, recognizing
//! common initialisms however the input capitalized them.
//!
//! # Example
//!
//! ```
//! use tex_naming::{exported_form, unexported_form};
//!
//! assert_eq!(exported_form("api_proxy"), "APIProxy");
//! assert_eq!(unexported_form("UserId"), "userID");
//! ```
//!
//! The pipeline is one pass: [`segment`] splits the name into tokens,
//! [`compose`] rebuilds it, consulting the static [`initialism`] table.

pub mod compose;
pub mod funcs;
pub mod initialism;
pub mod segment;

pub use compose::{compose, Mode, UNDERSCORE_PLACEHOLDER};
pub use funcs::{
    default_func_map, register_funcs, FuncRegistry, Transformer, EXPORTED_FORM, UNEXPORTED_FORM,
};
pub use segment::{segment, Segments, Token, TokenKind};

/// Normalizes `name` for the given `mode`.
pub fn normalize(name: &str, mode: Mode) -> String {
    compose(name, &segment(name), mode)
}

/// Exported form: `foo_bar` becomes `FooBar`, `id` becomes `ID`.
pub fn exported_form(name: &str) -> String {
    normalize(name, Mode::Exported)
}

/// Unexported form: `foo_bar` becomes `fooBar`, `Id` becomes `id`.
pub fn unexported_form(name: &str) -> String {
    normalize(name, Mode::Unexported)
}
