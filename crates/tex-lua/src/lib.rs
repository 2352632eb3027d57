//! Lua helpers for tex templates.
//!
//! Exposes the naming function map of [`tex_naming`] to Lua-driven templates
//! through a global helpers table.
//!
//! # Example
//!
//! ```ignore
//! use mlua::Lua;
//! use tex_lua::{register_helpers_with, HelperConfig};
//!
//! let lua = Lua::new();
//! register_helpers_with(&lua, &HelperConfig::new().table("names"))?;
//!
//! let ident: String = lua.load("names.exported_form('user_id')").eval()?;
//! assert_eq!(ident, "UserID");
//! ```

pub mod error;
pub mod helpers;

pub use error::{HelperError, Result};
pub use helpers::{eval_string, register_helpers, register_helpers_with, LuaFuncTable};

/// Default global the helpers are installed under.
pub const DEFAULT_TABLE: &str = "helpers";

/// Configuration for helper registration.
#[derive(Debug, Clone)]
pub struct HelperConfig {
    table: String,
    aliases: bool,
    overwrite: bool,
}

impl HelperConfig {
    /// Creates a configuration with default settings: the `helpers` table,
    /// snake_case aliases on, existing non-table globals left alone.
    pub fn new() -> Self {
        Self {
            table: DEFAULT_TABLE.to_string(),
            aliases: true,
            overwrite: false,
        }
    }

    /// Sets the global table name.
    pub fn table(mut self, name: &str) -> Self {
        self.table = name.to_string();
        self
    }

    /// Also binds `exported_form` / `unexported_form`.
    pub fn snake_case_aliases(mut self, enabled: bool) -> Self {
        self.aliases = enabled;
        self
    }

    /// Replaces a non-table global of the same name instead of failing.
    pub fn overwrite(mut self, enabled: bool) -> Self {
        self.overwrite = enabled;
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn aliases(&self) -> bool {
        self.aliases
    }

    pub fn overwrites(&self) -> bool {
        self.overwrite
    }
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlua::Lua;

    #[test]
    fn test_config_defaults() {
        let config = HelperConfig::default();
        assert_eq!(config.table_name(), "helpers");
        assert!(config.aliases());
        assert!(!config.overwrites());
    }

    #[test]
    fn test_template_style_usage() {
        let lua = Lua::new();
        register_helpers(&lua).unwrap();

        let result = eval_string(
            &lua,
            r#"
                local out = {}
                for _, column in ipairs({ "user_id", "created_at", "api_key" }) do
                    table.insert(out, helpers.exported_form(column) .. " " .. helpers.unexported_form(column))
                end
                return table.concat(out, "\n")
            "#,
        )
        .unwrap();

        assert_eq!(
            result,
            "UserID userID\nCreatedAt createdAt\nAPIKey apiKey"
        );
    }
}
