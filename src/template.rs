use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{GeneratorError, Result};
use crate::models::{BotId, BotSecrets};

const API_SERVER: &str = "api_server";

/// Parsed template document. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct Template {
    root: Map<String, Value>,
}

impl Template {
    /// Load and validate the template file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GeneratorError::TemplateNotFound(path.to_path_buf()),
            _ => GeneratorError::TemplateRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let value: Value = serde_json::from_str(&raw).map_err(|e| GeneratorError::TemplateMalformed {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(GeneratorError::TemplateShape(
                "root must be a JSON object".to_string(),
            ));
        };

        match root.get(API_SERVER) {
            Some(Value::Object(_)) => Ok(Self { root }),
            Some(_) => Err(GeneratorError::TemplateShape(format!(
                "`{}` must be an object",
                API_SERVER
            ))),
            None => Err(GeneratorError::TemplateShape(format!(
                "missing `{}` section",
                API_SERVER
            ))),
        }
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Build the config for one bot with freshly generated secrets
    pub fn instantiate(&self, bot: BotId) -> Value {
        self.instantiate_with(bot, &BotSecrets::generate())
    }

    /// Build the config for one bot from the given secrets.
    /// Works on a deep copy; the template itself is never touched.
    pub fn instantiate_with(&self, bot: BotId, secrets: &BotSecrets) -> Value {
        let mut config = self.root.clone();

        // Checked at load time
        if let Some(Value::Object(api)) = config.get_mut(API_SERVER) {
            api.insert("jwt_secret_key".into(), Value::String(secrets.jwt_secret_key.clone()));
            api.insert("ws_token".into(), Value::String(secrets.ws_token.clone()));
            api.insert("password".into(), Value::String(bot.password()));
        }
        config.insert("bot_name".into(), Value::String(bot.bot_name()));
        config.insert("db_url".into(), Value::String(bot.db_url()));

        Value::Object(config)
    }
}
