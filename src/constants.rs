// DOM contract shared between the page markup and the wasm frontend.

// Element ids
pub const ORBIT_CONTAINER_ID: &str = "skills-orbit";
pub const SKILL_CATEGORIES_ID: &str = "skill-categories";
pub const ADDITIONAL_TECH_ID: &str = "additional-tech";
pub const BACKGROUND_CANVAS_ID: &str = "bg-canvas";
pub const NAV_ID: &str = "site-nav";
pub const PROJECT_GRID_ID: &str = "project-grid";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";

// Selectors
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const SCROLL_TO_SELECTOR: &str = "[data-scroll-to]";
pub const SCROLL_TO_ATTR: &str = "data-scroll-to";

// Class names
pub const ORBIT_MARKER_CLASS: &str = "orbit-marker";
pub const ORBIT_GLYPH_CLASS: &str = "orbit-glyph";
pub const ORBIT_LABEL_CLASS: &str = "orbit-label";
pub const NAV_HIDDEN_CLASS: &str = "nav-hidden";
pub const REVEALED_CLASS: &str = "revealed";
pub const SKILL_CARD_CLASS: &str = "skill-card";
pub const SKILL_ROW_CLASS: &str = "skill-row";
pub const SKILL_BAR_CLASS: &str = "skill-bar";
pub const SKILL_BAR_FILL_CLASS: &str = "skill-bar-fill";
pub const BADGE_CLASS: &str = "badge";
pub const STATUS_ERROR_CLASS: &str = "status-error";
pub const PROJECT_CARD_CLASS: &str = "project-card";
pub const PROJECT_BACKDROP_CLASS: &str = "project-dialog-backdrop";
pub const PROJECT_DIALOG_CLASS: &str = "project-dialog";
pub const PROJECT_CLOSE_CLASS: &str = "project-dialog-close";
pub const PROJECT_GLYPH_CLASS: &str = "project-glyph";
