use super::{AppContext, PrefsCommand};
use crate::format::OutputFormat;
use crate::output::colorize::{status_line, Status};
use browserino::error::{BrowserinoError, Result};
use browserino::general;
use browserino::import_export::{excluded_keys, exportable_preferences};
use browserino::models::PrefValue;
use browserino::store::PreferenceStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommand {
    pub excluded: bool,
    pub all: bool,
    pub format: OutputFormat,
}

impl PrefsCommand for ListCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        if self.excluded {
            for key in excluded_keys(ctx.store) {
                println!("{}", key);
            }
            return Ok(());
        }

        let preferences = if self.all {
            ctx.store.all()?
        } else {
            exportable_preferences(ctx.store)
        };

        if preferences.is_empty() {
            eprintln!("No preferences stored.");
            return Ok(());
        }
        println!("{}", self.format.render_preferences(&preferences, ctx.no_color)?);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCommand {
    pub key: String,
}

impl PrefsCommand for GetCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        match ctx.store.get(&self.key)? {
            Some(value) => {
                println!("{}", value);
                Ok(())
            }
            None => Err(BrowserinoError::InvalidInput(format!(
                "no preference named '{}'",
                self.key
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCommand {
    pub key: String,
    pub value: String,
}

impl PrefsCommand for SetCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        if self.key.is_empty() {
            return Err(BrowserinoError::InvalidInput(
                "preference key cannot be empty".to_string(),
            ));
        }
        let value = PrefValue::parse_arg(&self.value);
        log::debug!("Setting {} to {} ({})", self.key, value, value.type_name());
        ctx.store.set(&self.key, value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnsetCommand {
    pub key: String,
}

impl PrefsCommand for UnsetCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        ctx.store.remove(&self.key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetCommand {
    pub yes: bool,
}

impl PrefsCommand for ResetCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        if !self.yes {
            return Err(BrowserinoError::InvalidInput(
                "reset removes every preference; pass --yes to confirm".to_string(),
            ));
        }
        let removed = general::reset_preferences(ctx.store)?;
        eprintln!(
            "{}",
            status_line(
                Status::Success,
                &format!("Removed {} preference(s)", removed),
                ctx.no_color
            )
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{context, FakeRegistry};
    use super::*;
    use browserino::config::Config;
    use browserino::store::SqliteStore;
    use rstest::rstest;

    #[rstest]
    #[case("true", PrefValue::Bool(true))]
    #[case("1.5", PrefValue::Float(1.5))]
    #[case("dark", PrefValue::String("dark".to_string()))]
    fn test_set_parses_value(#[case] raw: &str, #[case] expected: PrefValue) {
        let config = Config::default();
        let registry = FakeRegistry::default();
        let store = SqliteStore::init_in_memory().unwrap();

        SetCommand {
            key: "k".to_string(),
            value: raw.to_string(),
        }
        .execute(&context(&store, &registry, &config))
        .unwrap();
        assert_eq!(store.get("k").unwrap(), Some(expected));
    }

    #[test]
    fn test_get_missing_key() {
        let config = Config::default();
        let registry = FakeRegistry::default();
        let store = SqliteStore::init_in_memory().unwrap();

        let result = GetCommand {
            key: "missing".to_string(),
        }
        .execute(&context(&store, &registry, &config));
        assert!(matches!(result, Err(BrowserinoError::InvalidInput(_))));
    }

    #[test]
    fn test_unset() {
        let config = Config::default();
        let registry = FakeRegistry::default();
        let store = SqliteStore::init_in_memory().unwrap();
        store.set("theme", PrefValue::from("dark")).unwrap();

        UnsetCommand {
            key: "theme".to_string(),
        }
        .execute(&context(&store, &registry, &config))
        .unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[rstest]
    #[case(false, 1)]
    #[case(true, 0)]
    fn test_reset_requires_confirmation(#[case] yes: bool, #[case] remaining: usize) {
        let config = Config::default();
        let registry = FakeRegistry::default();
        let store = SqliteStore::init_in_memory().unwrap();
        store.set("theme", PrefValue::from("dark")).unwrap();

        let result = ResetCommand { yes }.execute(&context(&store, &registry, &config));
        assert_eq!(result.is_ok(), yes);
        assert_eq!(store.all().unwrap().len(), remaining);
    }
}
