// Host-side tests for the project showcase and its detail dialog selection.

use folio_core::projects::{
    find_project, ProjectCategory, ProjectError, ProjectSelection, CARD_TECH_PREVIEW, PROJECTS,
};
use std::collections::HashSet;

#[test]
fn projects_have_unique_ids_and_content() {
    let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PROJECTS.len());
    for p in &PROJECTS {
        assert!(!p.title.is_empty() && !p.long_description.is_empty());
        assert!(!p.features.is_empty(), "{}", p.title);
        assert!(p.github_url.is_some(), "{}", p.title);
    }
}

#[test]
fn card_preview_collapses_extra_technologies() {
    let p = find_project(&PROJECTS, 1).unwrap();
    let (shown, hidden) = p.tech_preview();
    assert_eq!(shown, &["React", "Node.js", "Python"]);
    assert_eq!(shown.len(), CARD_TECH_PREVIEW);
    assert_eq!(hidden, 3);
}

#[test]
fn categories_have_labels_and_glyphs() {
    assert_eq!(ProjectCategory::FullStack.label(), "Full-Stack");
    assert_eq!(ProjectCategory::Iot.label(), "IoT");
    let glyphs: HashSet<_> = PROJECTS.iter().map(|p| p.category.glyph()).collect();
    assert_eq!(glyphs.len(), PROJECTS.len());
}

#[test]
fn selecting_opens_and_close_resets() {
    let mut sel = ProjectSelection::new();
    assert!(!sel.is_open());
    sel.select(&PROJECTS, 3).unwrap();
    assert_eq!(sel.selected(), Some(3));

    // another card replaces the selection
    sel.select(&PROJECTS, 5).unwrap();
    assert_eq!(sel.selected(), Some(5));

    assert!(sel.close());
    assert_eq!(sel.selected(), None);
    assert!(!sel.close());
}

#[test]
fn unknown_project_keeps_selection() {
    let mut sel = ProjectSelection::new();
    sel.select(&PROJECTS, 2).unwrap();
    assert_eq!(
        sel.select(&PROJECTS, 99),
        Err(ProjectError::UnknownProject(99))
    );
    assert_eq!(sel.selected(), Some(2));
}

#[test]
fn escape_closes_an_open_dialog_only() {
    let mut sel = ProjectSelection::new();
    assert!(!sel.handle_key("Escape"));

    sel.select(&PROJECTS, 4).unwrap();
    assert!(!sel.handle_key("Enter"));
    assert!(sel.is_open());
    assert!(sel.handle_key("Escape"));
    assert!(!sel.is_open());
}
