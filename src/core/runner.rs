use serde::Serialize;
use std::path::Path;

use crate::config::scenario::ScenarioEvent;
use crate::core::shelter::Shelter;
use crate::domain::model::{Animal, Species};
use crate::domain::ports::Clock;
use crate::utils::error::Result;

/// Outcome of a single scenario event.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum EventOutcome {
    Admitted {
        name: String,
        species: Species,
    },
    Adopted {
        name: String,
        species: Species,
        requested: Option<Species>,
    },
    NoMatch {
        requested: Option<Species>,
    },
}

/// Summary of a scenario run, serializable as a JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct AdoptionReport {
    pub scenario: String,
    pub admitted: u64,
    pub adopted: u64,
    pub unmatched_requests: u64,
    pub outcomes: Vec<EventOutcome>,
    pub remaining: Vec<Animal>,
}

impl AdoptionReport {
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Drives a [`Shelter`] through a resolved scenario, event by event.
pub struct ScenarioRunner<C: Clock> {
    shelter: Shelter<C>,
}

impl<C: Clock> ScenarioRunner<C> {
    pub fn new(shelter: Shelter<C>) -> Self {
        Self { shelter }
    }

    pub fn run(&mut self, scenario_name: &str, events: &[ScenarioEvent]) -> AdoptionReport {
        tracing::info!(
            "Running scenario '{}' ({} events)",
            scenario_name,
            events.len()
        );

        let mut outcomes = Vec::with_capacity(events.len());
        let mut unmatched_requests = 0;

        for event in events {
            let outcome = match event {
                ScenarioEvent::Admit { name, species } => {
                    let animal = self.shelter.admit(name.clone(), *species);
                    EventOutcome::Admitted {
                        name: animal.name,
                        species: animal.species,
                    }
                }
                ScenarioEvent::AdoptOldest => {
                    self.adoption_outcome(None, &mut unmatched_requests)
                }
                ScenarioEvent::AdoptBySpecies(species) => {
                    self.adoption_outcome(Some(*species), &mut unmatched_requests)
                }
            };
            outcomes.push(outcome);
        }

        let mut remaining: Vec<Animal> = self.shelter.queue().animals().cloned().collect();
        remaining.sort_by_key(|animal| animal.arrival);

        AdoptionReport {
            scenario: scenario_name.to_string(),
            admitted: self.shelter.admitted_total(),
            adopted: self.shelter.adopted_total(),
            unmatched_requests,
            outcomes,
            remaining,
        }
    }

    fn adoption_outcome(
        &mut self,
        requested: Option<Species>,
        unmatched_requests: &mut u64,
    ) -> EventOutcome {
        let adopted = match requested {
            Some(species) => self.shelter.adopt_oldest_by_species(species),
            None => self.shelter.adopt_oldest(),
        };

        match adopted {
            Some(animal) => EventOutcome::Adopted {
                name: animal.name,
                species: animal.species,
                requested,
            },
            None => {
                *unmatched_requests += 1;
                EventOutcome::NoMatch { requested }
            }
        }
    }
}
