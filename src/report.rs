use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::BotId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedConfig {
    pub bot: BotId,
    pub path: PathBuf,
    /// SHA-256 of the JWT secret, base64
    pub jwt_fingerprint: String,
}

/// Outcome of one generator run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generated: Vec<GeneratedConfig>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl GenerationReport {
    pub fn start() -> Self {
        let now = Utc::now();
        Self {
            generated: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    pub fn record(&mut self, entry: GeneratedConfig) {
        self.generated.push(entry);
    }

    pub fn finish(mut self) -> Self {
        self.finished_at = Utc::now();
        self
    }

    pub fn count(&self) -> usize {
        self.generated.len()
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.finished_at
            .signed_duration_since(self.started_at)
            .num_milliseconds()
    }
}
