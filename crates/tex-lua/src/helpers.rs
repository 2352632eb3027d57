//! Lua bindings for the naming function map.

use mlua::{Lua, Table, Value};
use tex_naming::{FuncRegistry, Transformer};

use crate::error::{HelperError, Result};
use crate::HelperConfig;

/// Registers the helpers table in Lua with the default configuration.
pub fn register_helpers(lua: &Lua) -> Result<()> {
    register_helpers_with(lua, &HelperConfig::default())
}

/// Registers the helpers table in Lua.
///
/// An existing table under the configured name is extended in place, so other
/// helpers a pipeline installed beforehand stay reachable.
pub fn register_helpers_with(lua: &Lua, config: &HelperConfig) -> Result<()> {
    let name = config.table_name();
    validate_table_name(name)?;

    let globals = lua.globals();
    let helpers = match globals.get::<Value>(name)? {
        Value::Table(existing) => existing,
        Value::Nil => lua.create_table()?,
        _ if config.overwrites() => {
            tracing::warn!("replacing non-table global '{}' with helpers table", name);
            lua.create_table()?
        }
        _ => return Err(HelperError::GlobalConflict(name.to_string())),
    };

    let mut registry = LuaFuncTable::new(lua, helpers.clone(), config.aliases());
    tex_naming::register_funcs(&mut registry)?;

    globals.set(name, helpers)?;
    tracing::debug!("registered {} helpers in '{}'", registry.registered(), name);
    Ok(())
}

/// Evaluates a Lua chunk and returns its value as a string.
pub fn eval_string(lua: &Lua, chunk: &str) -> Result<String> {
    Ok(lua.load(chunk).eval::<String>()?)
}

/// A Lua table acting as a function map.
pub struct LuaFuncTable<'lua> {
    lua: &'lua Lua,
    table: Table,
    aliases: bool,
    registered: usize,
}

impl<'lua> LuaFuncTable<'lua> {
    /// Wraps `table`. With `aliases`, hyphenated names are also bound under
    /// their snake_case spelling so Lua can use field syntax.
    pub fn new(lua: &'lua Lua, table: Table, aliases: bool) -> Self {
        Self {
            lua,
            table,
            aliases,
            registered: 0,
        }
    }

    /// Number of keys bound so far, aliases included.
    pub fn registered(&self) -> usize {
        self.registered
    }

    pub fn into_table(self) -> Table {
        self.table
    }

    fn bind(&mut self, key: &str, func: Transformer) -> mlua::Result<()> {
        let function = self
            .lua
            .create_function(move |_, s: String| Ok(func(&s)))?;
        self.table.set(key, function)?;
        self.registered += 1;
        Ok(())
    }
}

impl FuncRegistry for LuaFuncTable<'_> {
    type Error = HelperError;

    fn register(&mut self, name: &'static str, func: Transformer) -> Result<()> {
        self.bind(name, func)?;

        if self.aliases && name.contains('-') {
            self.bind(&name.replace('-', "_"), func)?;
        }

        Ok(())
    }
}

fn validate_table_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(HelperError::InvalidTableName(name.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
