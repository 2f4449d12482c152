use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, Result};
use crate::security::{generate_jwt_secret, generate_ws_token};

/// Highest index that still renders losslessly as two digits
pub const MAX_BOT_ID: u32 = 99;

/// Instance index of one bot. Always in 1..=99.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BotId(u32);

impl BotId {
    pub fn new(id: u32) -> Result<Self> {
        if id == 0 || id > MAX_BOT_ID {
            return Err(GeneratorError::InvalidBotId(id));
        }
        Ok(Self(id))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Predictable placeholder, not a secret
    pub fn password(self) -> String {
        format!("bot{}pass", self)
    }

    pub fn bot_name(self) -> String {
        format!("freqtrade-bot-{}", self)
    }

    pub fn db_url(self) -> String {
        format!("sqlite:///user_data/tradesv3-bot-{}.sqlite", self)
    }

    pub fn config_file_name(self) -> String {
        format!("config-bot-{}.json", self)
    }
}

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl TryFrom<u32> for BotId {
    type Error = GeneratorError;

    fn try_from(id: u32) -> Result<Self> {
        Self::new(id)
    }
}

impl From<BotId> for u32 {
    fn from(id: BotId) -> Self {
        id.0
    }
}

/// Random per-bot credentials for the API server section
#[derive(Clone, PartialEq, Eq)]
pub struct BotSecrets {
    pub jwt_secret_key: String,
    pub ws_token: String,
}

impl BotSecrets {
    pub fn generate() -> Self {
        Self {
            jwt_secret_key: generate_jwt_secret(),
            ws_token: generate_ws_token(),
        }
    }
}

impl fmt::Debug for BotSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotSecrets")
            .field("jwt_secret_key", &"<redacted>")
            .field("ws_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_id_bounds() {
        assert!(BotId::new(0).is_err());
        assert!(BotId::new(1).is_ok());
        assert!(BotId::new(99).is_ok());
        assert!(matches!(BotId::new(100), Err(GeneratorError::InvalidBotId(100))));
    }

    #[test]
    fn test_deterministic_fields() {
        let three = BotId::new(3).unwrap();
        let seven = BotId::new(7).unwrap();
        let twelve = BotId::new(12).unwrap();

        assert_eq!(three.password(), "bot03pass");
        assert_eq!(seven.bot_name(), "freqtrade-bot-07");
        assert_eq!(twelve.db_url(), "sqlite:///user_data/tradesv3-bot-12.sqlite");
        assert_eq!(twelve.config_file_name(), "config-bot-12.json");
    }

    #[test]
    fn test_bot_id_deserialize_rejects_out_of_range() {
        let ok: BotId = serde_json::from_str("5").unwrap();
        assert_eq!(ok.get(), 5);
        assert!(serde_json::from_str::<BotId>("0").is_err());
    }

    #[test]
    fn test_secrets_debug_is_redacted() {
        let secrets = BotSecrets::generate();
        let rendered = format!("{:?}", secrets);
        assert!(!rendered.contains(&secrets.jwt_secret_key));
        assert!(!rendered.contains(&secrets.ws_token));
    }
}
