use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{base_table, output, CommandOutput};
use crate::domain::models::Config;

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct ConfigView<'a>(&'a Config);

impl CommandOutput for ConfigView<'_> {
    fn to_human(&self) -> String {
        let mut table = base_table(&["Setting", "Value"]);
        table.add_row(vec!["dog_api.base_url".to_string(), self.0.dog_api.base_url.clone()]);
        table.add_row(vec![
            "dog_api.timeout_secs".to_string(),
            self.0.dog_api.timeout_secs.to_string(),
        ]);
        table.add_row(vec!["logging.level".to_string(), self.0.logging.level.clone()]);
        table.add_row(vec!["logging.format".to_string(), self.0.logging.format.clone()]);
        table.add_row(vec![
            "logging.log_dir".to_string(),
            self.0
                .logging
                .log_dir
                .as_ref()
                .map_or_else(|| "-".to_string(), |dir| dir.display().to_string()),
        ]);
        table.add_row(vec!["logging.rotation".to_string(), self.0.logging.rotation.clone()]);
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.0).unwrap_or_default()
    }
}

/// Handle the config command
pub fn execute(config: &Config, json: bool) -> Result<()> {
    output(&ConfigView(config), json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_view() {
        let config = Config::default();
        let view = ConfigView(&config);

        assert!(view.to_human().contains("https://dog.ceo/api"));
        assert_eq!(view.to_json()["dog_api"]["timeout_secs"], 30);
        assert_eq!(view.to_json()["logging"]["level"], "warn");
        assert_eq!(view.to_json()["logging"]["rotation"], "daily");
        assert!(view.to_human().contains("logging.log_dir"));
    }
}
