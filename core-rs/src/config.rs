/**
 * config.rs
 * Navigator session configuration (YAML format)
 *
 * Format:
 * ```yaml
 * graphId: default
 * endpoint: http://localhost:8080
 * samplingLimit: 10
 * priorityPredicates: "rdf, rdfs, owl"
 * prefixes:
 *   - prefix: ex
 *     uri: http://example.org/
 * ```
 *
 * Every field is optional; missing fields take their defaults.
 */

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::drivers::DEFAULT_GRAPH_ID;
use crate::errors::{NavError, Result};
use crate::navigation::NavigationState;
use crate::prefix::{Prefix, PrefixRegistry};
use crate::priority::{PredicatePriorityResolver, PrioritySet, DEFAULT_PRIORITY_CONFIG};
use crate::query::DEFAULT_SAMPLE_LIMIT;

/// Navigator configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorConfig {
    #[serde(default = "default_graph_id")]
    pub graph_id: String,
    /// Base URL of the REST backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Row limit of the sample query used when no typed entities exist
    #[serde(default = "default_sampling_limit")]
    pub sampling_limit: usize,
    #[serde(default = "default_priority_predicates")]
    pub priority_predicates: String,
    /// Ordered prefix list; the built-in registry is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefixes: Option<Vec<Prefix>>,
}

fn default_graph_id() -> String {
    DEFAULT_GRAPH_ID.to_string()
}

fn default_sampling_limit() -> usize {
    DEFAULT_SAMPLE_LIMIT
}

fn default_priority_predicates() -> String {
    DEFAULT_PRIORITY_CONFIG.to_string()
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            graph_id: default_graph_id(),
            endpoint: None,
            sampling_limit: default_sampling_limit(),
            priority_predicates: default_priority_predicates(),
            prefixes: None,
        }
    }
}

impl NavigatorConfig {
    /// Load configuration from a YAML file
    ///
    /// # Example
    /// ```no_run
    /// use triple_lens::NavigatorConfig;
    ///
    /// let config = NavigatorConfig::load("tlens.yaml")?;
    /// println!("graph: {}", config.graph_id);
    /// # Ok::<(), triple_lens::NavError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(NavError::FileNotFound(path.to_string_lossy().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let config: NavigatorConfig = serde_yaml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Ensures:
    /// - graphId is non-empty
    /// - samplingLimit is at least 1
    /// - every prefix entry has a name and a namespace
    pub fn validate(&self) -> Result<()> {
        if self.graph_id.trim().is_empty() {
            return Err(NavError::Config("graphId cannot be empty".to_string()));
        }

        if self.sampling_limit == 0 {
            return Err(NavError::Config("samplingLimit must be at least 1".to_string()));
        }

        if let Some(prefixes) = &self.prefixes {
            if let Some(bad) = prefixes.iter().find(|p| p.prefix.is_empty() || p.uri.is_empty()) {
                return Err(NavError::Config(format!(
                    "prefix entry '{}' needs both a name and a uri",
                    bad.prefix
                )));
            }
        }

        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path.as_ref(), yaml)?;
        Ok(())
    }

    /// Configured prefixes, or the built-in registry
    pub fn prefix_registry(&self) -> PrefixRegistry {
        match &self.prefixes {
            Some(list) => PrefixRegistry::new(list.clone()),
            None => PrefixRegistry::defaults(),
        }
    }

    pub fn priority_set(&self, prefixes: &PrefixRegistry) -> PrioritySet {
        PredicatePriorityResolver::resolve(&self.priority_predicates, prefixes.prefixes())
    }

    /// Fresh session state seeded from this configuration
    pub fn navigation_state(&self) -> NavigationState {
        let prefixes = self.prefix_registry();
        let priority = self.priority_set(&prefixes);
        NavigationState::new(prefixes, priority).with_sample_limit(self.sampling_limit)
    }
}
