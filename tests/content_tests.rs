// Host-side tests for the static skills content.

use folio_core::content::{
    orbit_items, skill_categories, ADDITIONAL_TECH, ORBIT_TECH, TECH_STACK,
};
use std::collections::HashSet;

#[test]
fn orbit_items_are_evenly_spaced() {
    let items = orbit_items();
    assert_eq!(items.len(), 12);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.base_angle_degrees, i as f64 * 30.0, "{}", item.label);
        assert!(!item.label.trim().is_empty());
        assert!(!item.glyph.is_empty());
    }
    assert_eq!(items[0].label, "React");
    assert_eq!(items[11].label, "Rust");
}

#[test]
fn orbit_covers_the_tech_stack() {
    let stack: HashSet<_> = TECH_STACK.iter().map(|s| s.name).collect();
    for (name, _, _) in ORBIT_TECH {
        assert!(stack.contains(name), "{name} missing from stack");
    }
}

#[test]
fn every_skill_lands_in_exactly_one_category() {
    let categories = skill_categories(&TECH_STACK);
    assert_eq!(categories.len(), 5);
    let total: usize = categories.iter().map(|c| c.skills.len()).sum();
    assert_eq!(total, TECH_STACK.len());
    assert!(categories.iter().all(|c| !c.skills.is_empty()));

    let frontend = &categories[0];
    assert_eq!(frontend.title, "Frontend Development");
    assert_eq!(frontend.skills[0].name, "React");
}

#[test]
fn levels_are_percentages() {
    assert!(TECH_STACK.iter().all(|s| s.level <= 100));
}

#[test]
fn additional_tech_has_no_duplicates() {
    let unique: HashSet<_> = ADDITIONAL_TECH.iter().collect();
    assert_eq!(unique.len(), ADDITIONAL_TECH.len());
}
