use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::model::Species;
use crate::utils::error::{Result, ShelterError};
use crate::utils::validation::{self, Validate};

/// Scenario file describing a sequence of shelter events, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioMeta,
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    pub action: String,
    pub name: Option<String>,
    pub species: Option<String>,
}

/// A validated scenario event, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioEvent {
    Admit { name: String, species: Species },
    AdoptOldest,
    AdoptBySpecies(Species),
}

impl ScenarioConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShelterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ShelterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Validate every event and convert it into its runnable form, keeping
    /// the original file order.
    pub fn resolve_events(&self) -> Result<Vec<ScenarioEvent>> {
        validation::validate_non_empty("scenario.name", &self.scenario.name)?;

        let mut events = Vec::with_capacity(self.events.len());
        for (index, event) in self.events.iter().enumerate() {
            events.push(event.resolve(index)?);
        }
        Ok(events)
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty("scenario.name", &self.scenario.name)?;
        for (index, event) in self.events.iter().enumerate() {
            event.resolve(index)?;
        }
        Ok(())
    }
}

impl EventConfig {
    fn resolve(&self, index: usize) -> Result<ScenarioEvent> {
        let field = |suffix: &str| format!("events[{}].{}", index, suffix);

        match self.action.as_str() {
            "admit" => {
                let name = self.name.as_deref().ok_or_else(|| {
                    ShelterError::ConfigValidationError {
                        field: field("name"),
                        message: "admit events require a name".to_string(),
                    }
                })?;
                validation::validate_non_empty(&field("name"), name)?;

                let species = self.species.as_deref().ok_or_else(|| {
                    ShelterError::ConfigValidationError {
                        field: field("species"),
                        message: "admit events require a species".to_string(),
                    }
                })?;
                let species = validation::validate_species(&field("species"), species)?;

                Ok(ScenarioEvent::Admit {
                    name: name.to_string(),
                    species,
                })
            }
            "adopt-oldest" => Ok(ScenarioEvent::AdoptOldest),
            "adopt-by-species" => {
                let species = self.species.as_deref().ok_or_else(|| {
                    ShelterError::ConfigValidationError {
                        field: field("species"),
                        message: "adopt-by-species events require a species".to_string(),
                    }
                })?;
                let species = validation::validate_species(&field("species"), species)?;
                Ok(ScenarioEvent::AdoptBySpecies(species))
            }
            other => Err(ShelterError::InvalidConfigValueError {
                field: field("action"),
                value: other.to_string(),
                reason: "expected one of: admit, adopt-oldest, adopt-by-species".to_string(),
            }),
        }
    }
}
