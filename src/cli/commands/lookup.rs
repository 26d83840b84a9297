use anyhow::{Context, Result};
use comfy_table::Cell;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::adapters::cache::CachingBreedSource;
use crate::cli::output::{base_table, join_sub_breeds, output, CommandOutput};
use crate::cli::types::LookupArgs;
use crate::domain::models::Config;
use crate::domain::ports::BreedSource;
use crate::infrastructure::dog_api::{DogApiBreedSource, DogApiClientConfig};

/// Where a lookup result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupOrigin {
    /// Fetched from the dog API on this call
    Remote,
    /// Answered from the cache
    Cache,
    /// Lookup failed
    Error,
}

impl fmt::Display for LookupOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Cache => write!(f, "cache"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Outcome of one breed lookup
#[derive(Debug, Clone, Serialize)]
pub struct LookupEntry {
    /// Breed name as given
    pub breed: String,
    /// Where the answer came from
    pub origin: LookupOrigin,
    /// Sub-breeds in source order, empty on failure
    pub sub_breeds: Vec<String>,
    /// Error message when the lookup failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// All lookups of one command invocation
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    /// One entry per requested breed, in request order
    pub entries: Vec<LookupEntry>,
    /// Remote calls made by the cache
    pub calls_made: u64,
}

impl LookupReport {
    /// Number of failed lookups
    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.origin == LookupOrigin::Error)
            .count()
    }
}

impl CommandOutput for LookupReport {
    fn to_human(&self) -> String {
        let mut table = base_table(&["Breed", "Sub-breeds", "Source"]);
        for entry in &self.entries {
            let detail = entry
                .error
                .clone()
                .unwrap_or_else(|| join_sub_breeds(&entry.sub_breeds));
            table.add_row(vec![
                Cell::new(&entry.breed),
                Cell::new(detail),
                Cell::new(entry.origin),
            ]);
        }

        format!(
            "{table}\n\n{} lookup{}, {} remote call{}",
            self.entries.len(),
            if self.entries.len() == 1 { "" } else { "s" },
            self.calls_made,
            if self.calls_made == 1 { "" } else { "s" },
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Resolve `breeds` in order through one caching source
///
/// A lookup is attributed to the cache when it did not move the delegation
/// counter.
pub async fn run_lookups<S: BreedSource + 'static>(
    source: &CachingBreedSource<S>,
    breeds: &[String],
) -> LookupReport {
    let mut entries = Vec::with_capacity(breeds.len());

    for breed in breeds {
        let before = source.calls_made();
        let entry = match source.get_sub_breeds(breed).await {
            Ok(sub_breeds) => LookupEntry {
                breed: breed.clone(),
                origin: if source.calls_made() == before {
                    LookupOrigin::Cache
                } else {
                    LookupOrigin::Remote
                },
                sub_breeds,
                error: None,
            },
            Err(err) => LookupEntry {
                breed: breed.clone(),
                origin: LookupOrigin::Error,
                sub_breeds: Vec::new(),
                error: Some(err.to_string()),
            },
        };
        entries.push(entry);
    }

    LookupReport {
        entries,
        calls_made: source.calls_made(),
    }
}

/// Resolve the requested breeds against the configured dog API
///
/// Failed lookups are recorded in the report, not returned as errors.
pub async fn run(args: LookupArgs, config: &Config) -> Result<LookupReport> {
    let mut client_config = DogApiClientConfig::from(&config.dog_api);
    if let Some(base_url) = args.base_url {
        client_config.base_url = base_url;
    }

    let source = DogApiBreedSource::with_config(client_config)
        .context("Failed to create dog API client")?;
    let cache = CachingBreedSource::new(Arc::new(source));

    let report = run_lookups(&cache, &args.breeds).await;
    info!(
        lookups = report.entries.len(),
        calls_made = report.calls_made,
        failures = report.failures(),
        "lookups complete"
    );
    Ok(report)
}

/// Handle the lookup command
///
/// Prints the report as the only stdout output and returns the number of
/// failed lookups; the failure summary goes to stderr.
pub async fn execute(args: LookupArgs, config: &Config, json: bool) -> Result<usize> {
    let report = run(args, config).await?;
    output(&report, json);

    let failures = report.failures();
    if failures > 0 {
        eprintln!(
            "{failures} of {} lookup{} failed",
            report.entries.len(),
            if report.entries.len() == 1 { "" } else { "s" }
        );
    }
    Ok(failures)
}
