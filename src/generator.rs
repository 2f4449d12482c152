use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{GeneratorError, Result};
use crate::models::BotId;
use crate::report::{GeneratedConfig, GenerationReport};
use crate::security::fingerprint;
use crate::template::Template;

pub const REMINDERS: [&str; 3] = [
    "Update exchange API keys and secrets in the config files",
    "Set dry_run: false when ready for live trading",
    "Review and adjust trading parameters as needed",
];

/// Generate every bot config described by `config`.
///
/// The template is loaded and the bot range resolved before any file is
/// written, so a bad template leaves the output directory untouched. Progress
/// lines go to `out`; existing config files are overwritten.
pub fn generate_all<W: Write>(config: &Config, out: &mut W) -> Result<GenerationReport> {
    let bots = config.bot_ids()?;
    let template_path = config.template_path();
    let template = Template::load(&template_path)?;
    info!("Loaded template from {}", template_path.display());

    warn!("api_server.password is derived from the bot number and is not a secret; replace it before exposing the API");

    let mut report = GenerationReport::start();

    for bot in bots {
        let instance = template.instantiate(bot);
        let path = config.output_path(bot);
        write_config(&path, bot, &instance)?;

        let jwt_fingerprint = instance["api_server"]["jwt_secret_key"]
            .as_str()
            .map(fingerprint)
            .unwrap_or_default();
        debug!(bot = %bot, fingerprint = %jwt_fingerprint, "Wrote {}", path.display());

        writeln!(out, "Generated config for bot {}", bot).map_err(GeneratorError::Output)?;

        report.record(GeneratedConfig {
            bot,
            path,
            jwt_fingerprint,
        });
    }

    Ok(report.finish())
}

/// Closing message for the operator
pub fn write_summary<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "All bot configurations generated successfully!")?;
    writeln!(out, "\nIMPORTANT:")?;
    for (i, reminder) in REMINDERS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, reminder)?;
    }
    Ok(())
}

fn write_config(path: &Path, bot: BotId, instance: &Value) -> Result<()> {
    // to_string_pretty indents with two spaces
    let body = serde_json::to_string_pretty(instance).map_err(|e| GeneratorError::Serialize {
        bot: bot.to_string(),
        source: e,
    })?;

    fs::write(path, body).map_err(|e| GeneratorError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}
