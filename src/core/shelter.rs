use crate::core::queue::AdoptionQueue;
use crate::domain::model::{Animal, Species};
use crate::domain::ports::{Clock, SystemClock};

/// Front desk of the shelter: stamps arrival times on admission and hands
/// out animals strictly first-in-first-out, overall or by species.
pub struct Shelter<C: Clock = SystemClock> {
    queue: AdoptionQueue,
    clock: C,
    admitted_total: u64,
    adopted_total: u64,
}

impl Shelter<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Shelter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Shelter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            queue: AdoptionQueue::new(),
            clock,
            admitted_total: 0,
            adopted_total: 0,
        }
    }

    /// Admit an animal under the given name, stamping the current clock time
    /// as its arrival. Returns the admitted animal.
    pub fn admit(&mut self, name: impl Into<String>, species: Species) -> Animal {
        let animal = Animal::new(name, species, self.clock.now());
        tracing::info!(
            "Admitted {} '{}' (arrival: {})",
            animal.species,
            animal.name,
            animal.arrival
        );
        self.queue.admit(animal.clone());
        self.admitted_total += 1;
        animal
    }

    /// Adopt the next animal up regardless of species.
    pub fn adopt_oldest(&mut self) -> Option<Animal> {
        let adopted = self.queue.adopt_oldest();
        self.log_adoption(adopted.as_ref(), None);
        adopted
    }

    /// Adopt the next animal up of the requested species.
    pub fn adopt_oldest_by_species(&mut self, species: Species) -> Option<Animal> {
        let adopted = self.queue.adopt_oldest_by_species(species);
        self.log_adoption(adopted.as_ref(), Some(species));
        adopted
    }

    pub fn adopt_oldest_dog(&mut self) -> Option<Animal> {
        self.adopt_oldest_by_species(Species::Dog)
    }

    pub fn adopt_oldest_cat(&mut self) -> Option<Animal> {
        self.adopt_oldest_by_species(Species::Cat)
    }

    fn log_adoption(&mut self, adopted: Option<&Animal>, requested: Option<Species>) {
        match (adopted, requested) {
            (Some(animal), _) => {
                self.adopted_total += 1;
                tracing::info!(
                    "Adopted {} '{}' (waiting since {})",
                    animal.species,
                    animal.name,
                    animal.arrival
                );
            }
            (None, Some(species)) => {
                tracing::debug!("No {} available for adoption", species);
            }
            (None, None) => {
                tracing::debug!("No animals available for adoption");
            }
        }
    }

    pub fn queue(&self) -> &AdoptionQueue {
        &self.queue
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn admitted_total(&self) -> u64 {
        self.admitted_total
    }

    pub fn adopted_total(&self) -> u64 {
        self.adopted_total
    }
}
