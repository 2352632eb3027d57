//! The function map contributed to template engines.
//!
//! A rendering pipeline owns its own registration mechanism; it implements
//! [`FuncRegistry`] for it and calls [`register_funcs`] to receive the naming
//! transformers.

use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;

use crate::{exported_form, unexported_form};

/// Callable name of [`exported_form`].
pub const EXPORTED_FORM: &str = "exported-form";
/// Callable name of [`unexported_form`].
pub const UNEXPORTED_FORM: &str = "unexported-form";

/// A pure string transformer.
pub type Transformer = fn(&str) -> String;

/// Every entry this crate contributes, in registration order.
pub const FUNCS: &[(&str, Transformer)] = &[
    (EXPORTED_FORM, exported_form as Transformer),
    (UNEXPORTED_FORM, unexported_form as Transformer),
];

/// Something that can bind a name to a transformer.
pub trait FuncRegistry {
    type Error;

    /// Binds `name` to `func`. A later registration of the same name replaces
    /// the earlier one unless the implementation says otherwise.
    fn register(&mut self, name: &'static str, func: Transformer) -> Result<(), Self::Error>;
}

impl FuncRegistry for HashMap<String, Transformer> {
    type Error = Infallible;

    fn register(&mut self, name: &'static str, func: Transformer) -> Result<(), Self::Error> {
        self.insert(name.to_string(), func);
        Ok(())
    }
}

impl FuncRegistry for BTreeMap<String, Transformer> {
    type Error = Infallible;

    fn register(&mut self, name: &'static str, func: Transformer) -> Result<(), Self::Error> {
        self.insert(name.to_string(), func);
        Ok(())
    }
}

/// Registers [`FUNCS`] into `registry`.
pub fn register_funcs<R: FuncRegistry + ?Sized>(registry: &mut R) -> Result<(), R::Error> {
    for &(name, func) in FUNCS {
        registry.register(name, func)?;
    }
    Ok(())
}

/// A fresh map holding only the naming functions.
///
/// Callers layering their own functions on top should insert after this so
/// their entries win.
pub fn default_func_map() -> BTreeMap<String, Transformer> {
    let mut funcs = BTreeMap::new();
    match register_funcs(&mut funcs) {
        Ok(()) => funcs,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_func_map() {
        let funcs = default_func_map();
        assert_eq!(funcs.len(), 2);
        assert_eq!(funcs[EXPORTED_FORM]("foo_id"), "FooID");
        assert_eq!(funcs[UNEXPORTED_FORM]("foo_id"), "fooID");
    }

    #[test]
    fn test_user_funcs_override_defaults() {
        fn shout(s: &str) -> String {
            s.to_uppercase()
        }

        let mut funcs: HashMap<String, Transformer> = HashMap::new();
        register_funcs(&mut funcs).unwrap();
        funcs.register(EXPORTED_FORM, shout).unwrap();

        assert_eq!(funcs[EXPORTED_FORM]("foo_id"), "FOO_ID");
        assert_eq!(funcs[UNEXPORTED_FORM]("foo_id"), "fooID");
    }

    #[test]
    fn test_fallible_registry_stops_at_first_error() {
        struct Refuse(Vec<&'static str>);

        impl FuncRegistry for Refuse {
            type Error = String;

            fn register(&mut self, name: &'static str, _: Transformer) -> Result<(), String> {
                if name == UNEXPORTED_FORM {
                    return Err(format!("refused {name}"));
                }
                self.0.push(name);
                Ok(())
            }
        }

        let mut registry = Refuse(Vec::new());
        let err = register_funcs(&mut registry).unwrap_err();
        assert_eq!(err, "refused unexported-form");
        assert_eq!(registry.0, vec![EXPORTED_FORM]);
    }
}
