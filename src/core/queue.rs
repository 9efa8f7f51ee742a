use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::domain::model::{Animal, Species};

/// Orders animals by arrival timestamp only. Two animals admitted at the
/// same instant compare equal, so their relative order in the queue is
/// implementation-defined; callers must not rely on it.
#[derive(Debug, Clone)]
struct ByArrival(Animal);

impl PartialEq for ByArrival {
    fn eq(&self, other: &Self) -> bool {
        self.0.arrival == other.0.arrival
    }
}

impl Eq for ByArrival {}

impl PartialOrd for ByArrival {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByArrival {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.arrival.cmp(&other.0.arrival)
    }
}

/// First-in-first-out adoption queue over admitted animals.
///
/// Animals are held in a priority structure keyed on arrival time, earliest
/// first. Adoption removes either the globally oldest animal or the oldest
/// animal of a requested species.
///
/// The queue is single-threaded: every operation takes `&mut self` and
/// completes before returning. Callers that need concurrent access must wrap
/// the whole queue in one mutex, because the species-filtered adoption is a
/// multi-step scan-and-restore that must not interleave with other mutations.
#[derive(Debug, Default)]
pub struct AdoptionQueue {
    heap: BinaryHeap<Reverse<ByArrival>>,
}

impl AdoptionQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Admit an animal. Never fails; the queue grows by one.
    pub fn admit(&mut self, animal: Animal) {
        self.heap.push(Reverse(ByArrival(animal)));
    }

    /// Remove and return the animal with the earliest arrival across all
    /// species, or `None` when the queue is empty.
    pub fn adopt_oldest(&mut self) -> Option<Animal> {
        self.heap.pop().map(|Reverse(ByArrival(animal))| animal)
    }

    /// Remove and return the earliest-arrived animal of the given species,
    /// or `None` when no such animal is present (including an empty queue).
    ///
    /// Non-matching animals popped during the search are parked in a holding
    /// area and reinserted before returning, so the queue afterwards holds
    /// exactly its prior contents minus the one returned animal (or is
    /// unchanged when the result is `None`). Work is proportional to the
    /// number of non-matching animals that arrived before the first match.
    pub fn adopt_oldest_by_species(&mut self, species: Species) -> Option<Animal> {
        let mut holding: Vec<Animal> = Vec::new();
        let mut matched = None;

        while let Some(Reverse(ByArrival(animal))) = self.heap.pop() {
            if animal.species == species {
                matched = Some(animal);
                break;
            }
            holding.push(animal);
        }

        for animal in holding {
            self.heap.push(Reverse(ByArrival(animal)));
        }
        matched
    }

    /// Look at the next animal up for adoption without removing it.
    pub fn peek_oldest(&self) -> Option<&Animal> {
        self.heap.peek().map(|Reverse(ByArrival(animal))| animal)
    }

    /// Iterate over the queued animals in no particular order.
    pub fn animals(&self) -> impl Iterator<Item = &Animal> {
        self.heap.iter().map(|Reverse(ByArrival(animal))| animal)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
