use super::fixtures::{letters_index, pantry_index, set};
use tastetrio_core::{Tier, neighbors};

#[test]
fn test_neighbors_of_single_trio_member() {
    let index = letters_index();

    assert_eq!(neighbors(&index, "A", "highly").unwrap(), set(&["B", "C"]));
}

#[test]
fn test_neighbors_union_across_trios() {
    let index = letters_index();

    assert_eq!(
        neighbors(&index, "C", Tier::Highly).unwrap(),
        set(&["A", "B", "D", "E"])
    );
}

#[test]
fn test_neighbors_never_include_self() {
    let index = pantry_index();

    for tier in Tier::ALL {
        for ingredient in index.ingredients() {
            let found = neighbors(&index, ingredient, tier).unwrap();
            assert!(!found.contains(ingredient), "{ingredient} listed as its own neighbor");
        }
    }
}

#[test]
fn test_neighbors_are_tier_specific() {
    let index = pantry_index();

    assert_eq!(
        neighbors(&index, "basil", "highly").unwrap(),
        set(&["tomato", "mozzarella"])
    );
    assert_eq!(
        neighbors(&index, "basil", "moderately").unwrap(),
        set(&["lemon", "chicken"])
    );
    assert!(neighbors(&index, "basil", "compatible").unwrap().is_empty());
}

#[test]
fn test_neighbors_accept_dataset_label() {
    let index = pantry_index();

    assert_eq!(
        neighbors(&index, "apple", "Compatible").unwrap(),
        set(&["cinnamon", "pork"])
    );
}

#[test]
fn test_unknown_ingredient_has_no_neighbors() {
    let index = letters_index();

    assert!(neighbors(&index, "unknown", "highly").unwrap().is_empty());
}

#[test]
fn test_neighbors_invalid_tier() {
    let index = letters_index();

    let error = neighbors(&index, "A", "spicy").unwrap_err();
    assert_eq!(error.value, "spicy");
}

#[test]
fn test_partition_invalid_tier() {
    let index = letters_index();

    assert!(index.partition("spicy").is_err());
    assert_eq!(index.partition("highly").unwrap().len(), 3);
    assert!(index.partition(Tier::Moderately).unwrap().is_empty());
}
