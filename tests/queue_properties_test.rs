use chrono::{DateTime, Duration, Utc};
use shelter_queue::{AdoptionQueue, Animal, Species};
use std::collections::HashMap;

fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(seconds)
}

fn multiset(queue: &AdoptionQueue) -> HashMap<(String, Species), usize> {
    let mut counts = HashMap::new();
    for animal in queue.animals() {
        *counts
            .entry((animal.name.clone(), animal.species))
            .or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_repeated_adopt_oldest_drains_in_arrival_order() {
    let mut queue = AdoptionQueue::new();
    // Admission order deliberately scrambled relative to arrival times.
    queue.admit(Animal::new("Daisy", Species::Dog, at(40)));
    queue.admit(Animal::new("Whiskers", Species::Cat, at(10)));
    queue.admit(Animal::new("Buddy", Species::Dog, at(30)));
    queue.admit(Animal::new("Mittens", Species::Cat, at(20)));
    queue.admit(Animal::new("Rex", Species::Dog, at(50)));

    let mut previous: Option<DateTime<Utc>> = None;
    let mut drained = 0;
    while let Some(animal) = queue.adopt_oldest() {
        if let Some(previous) = previous {
            assert!(animal.arrival >= previous);
        }
        previous = Some(animal.arrival);
        drained += 1;
    }

    assert_eq!(drained, 5);
    assert!(queue.is_empty());
}

#[test]
fn test_filtered_adoption_removes_exactly_the_returned_animal() {
    let mut queue = AdoptionQueue::new();
    queue.admit(Animal::new("Rex", Species::Dog, at(1)));
    queue.admit(Animal::new("Whiskers", Species::Cat, at(2)));
    queue.admit(Animal::new("Buddy", Species::Dog, at(3)));
    queue.admit(Animal::new("Mittens", Species::Cat, at(4)));

    let mut expected = multiset(&queue);
    let adopted = queue.adopt_oldest_by_species(Species::Cat).unwrap();

    let key = (adopted.name.clone(), adopted.species);
    match expected.get_mut(&key) {
        Some(count) if *count > 1 => *count -= 1,
        _ => {
            expected.remove(&key);
        }
    }

    assert_eq!(multiset(&queue), expected);
}

#[test]
fn test_filtered_adoption_on_empty_queue() {
    let mut queue = AdoptionQueue::new();

    assert_eq!(queue.adopt_oldest_by_species(Species::Cat), None);
    assert!(queue.is_empty());
}

#[test]
fn test_filtered_adoption_without_match_preserves_all_animals() {
    let mut queue = AdoptionQueue::new();
    queue.admit(Animal::new("Rex", Species::Dog, at(1)));
    queue.admit(Animal::new("Buddy", Species::Dog, at(2)));
    queue.admit(Animal::new("Daisy", Species::Dog, at(3)));

    let before = multiset(&queue);
    assert_eq!(queue.adopt_oldest_by_species(Species::Cat), None);

    assert_eq!(queue.len(), 3);
    assert_eq!(multiset(&queue), before);
}

#[test]
fn test_cat_adoption_skips_earlier_dogs() {
    // Dog "A" at t1, Cat "B" at t2, Dog "C" at t3.
    let mut queue = AdoptionQueue::new();
    queue.admit(Animal::new("A", Species::Dog, at(1)));
    queue.admit(Animal::new("B", Species::Cat, at(2)));
    queue.admit(Animal::new("C", Species::Dog, at(3)));

    assert_eq!(queue.adopt_oldest_by_species(Species::Cat).unwrap().name, "B");
    assert_eq!(queue.adopt_oldest().unwrap().name, "A");
    assert_eq!(queue.adopt_oldest().unwrap().name, "C");
    assert!(queue.is_empty());
}

#[test]
fn test_unmatched_dog_request_leaves_lone_cat() {
    let mut queue = AdoptionQueue::new();
    queue.admit(Animal::new("X", Species::Cat, at(1)));

    assert_eq!(queue.adopt_oldest_by_species(Species::Dog), None);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.adopt_oldest().unwrap().name, "X");
}

#[test]
fn test_emptiness_is_idempotent() {
    let mut queue = AdoptionQueue::new();

    assert_eq!(queue.adopt_oldest(), None);
    assert_eq!(queue.adopt_oldest(), None);
}

#[test]
fn test_equal_arrivals_preserve_multiset_membership() {
    // Same instant for every animal: relative order is implementation
    // defined, so only multiset equality is checked.
    let mut queue = AdoptionQueue::new();
    queue.admit(Animal::new("Rex", Species::Dog, at(5)));
    queue.admit(Animal::new("Whiskers", Species::Cat, at(5)));
    queue.admit(Animal::new("Buddy", Species::Dog, at(5)));

    let before = multiset(&queue);
    let adopted = queue.adopt_oldest_by_species(Species::Cat).unwrap();
    assert_eq!(adopted.name, "Whiskers");

    let mut expected = before;
    expected.remove(&("Whiskers".to_string(), Species::Cat));
    assert_eq!(multiset(&queue), expected);
}
