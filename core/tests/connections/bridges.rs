use super::fixtures::{letters_index, pantry_index, set};
use rustc_hash::FxHashSet;
use tastetrio_core::{Tier, find_bridges, neighbors};

#[test]
fn test_find_bridges_shared_neighbor() {
    let index = letters_index();

    assert_eq!(find_bridges(&index, "A", "D", "highly").unwrap(), set(&["C"]));
}

#[test]
fn test_find_bridges_matches_neighbor_intersection() {
    let index = pantry_index();
    let ingredients: Vec<&str> = index.ingredients().into_iter().collect();

    for tier in Tier::ALL {
        for &first in &ingredients {
            for &second in &ingredients {
                let first_neighbors = neighbors(&index, first, tier).unwrap();
                let second_neighbors = neighbors(&index, second, tier).unwrap();
                let expected: FxHashSet<String> = first_neighbors
                    .intersection(&second_neighbors)
                    .cloned()
                    .collect();

                assert_eq!(find_bridges(&index, first, second, tier).unwrap(), expected);
            }
        }
    }
}

#[test]
fn test_find_bridges_per_tier() {
    let index = pantry_index();

    assert_eq!(
        find_bridges(&index, "basil", "garlic", "highly").unwrap(),
        set(&["tomato"])
    );
    assert!(find_bridges(&index, "basil", "lemon", "highly").unwrap().is_empty());
    assert_eq!(
        find_bridges(&index, "basil", "lemon", "moderately").unwrap(),
        set(&["chicken"])
    );
}

#[test]
fn test_find_bridges_without_neighbors() {
    let index = letters_index();

    assert!(find_bridges(&index, "A", "unknown", "highly").unwrap().is_empty());
    assert!(find_bridges(&index, "A", "X", "highly").unwrap().is_empty());
}

#[test]
fn test_find_bridges_invalid_tier() {
    let index = letters_index();

    assert!(find_bridges(&index, "A", "D", "spicy").is_err());
}
