//! DOM selectors and names for the markup the showcase binds to.

// Grid
pub const GRID_SELECTOR: &str = ".projects-grid";
pub const CARD_SELECTOR: &str = ".project-card";
pub const FILTER_TAB_SELECTOR: &str = ".filter-tab";
pub const PAGE_PREV_SELECTOR: &str = ".pagination-btn.prev";
pub const PAGE_NEXT_SELECTOR: &str = ".pagination-btn.next";
pub const TOOLBAR_SELECTOR: &str = ".projects-toolbar";
pub const ACTIVE_CLASS: &str = "active";
pub const FILTER_ATTR: &str = "data-filter";

// Card interior
pub const CARD_TITLE_SELECTOR: &str = ".project-content h3";
pub const CARD_SUMMARY_SELECTOR: &str = ".project-content p";
pub const CARD_IMAGE_SELECTOR: &str = ".project-image img";
pub const CARD_STATUS_SELECTOR: &str = ".status-badge";
pub const CARD_BADGE_SELECTOR: &str = ".project-badge";
pub const CARD_TAG_SELECTOR: &str = ".project-tags .tag";

// Modal
pub const MODAL_ID: &str = "projectModal";
pub const MODAL_BACKDROP_SELECTOR: &str = ".modal-backdrop";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close";
pub const MODAL_CONTENT_SELECTOR: &str = ".modal-content";
pub const MODAL_IMAGE_SELECTOR: &str = ".modal-image img";
pub const MODAL_VIDEO_WRAP_SELECTOR: &str = ".modal-video";
pub const MODAL_VIDEO_SELECTOR: &str = ".modal-video video";
pub const MODAL_TITLE_SELECTOR: &str = ".modal-title";
pub const MODAL_DESCRIPTION_SELECTOR: &str = ".modal-description";
pub const MODAL_PREV_SELECTOR: &str = ".modal-prev";
pub const MODAL_NEXT_SELECTOR: &str = ".modal-next";
pub const MODAL_TYPE_BADGE_SELECTOR: &str = ".modal-type-badge";
pub const MODAL_STATUS_BADGE_SELECTOR: &str = ".modal-status-badge";
pub const MODAL_TECHS_SELECTOR: &str = ".modal-techs";
pub const MODAL_LINKS_SELECTOR: &str = ".modal-links";
pub const MODAL_SECTION_SELECTOR: &str = ".modal-section";
pub const SHOW_CLASS: &str = "show";
pub const HIDDEN_CLASS: &str = "hidden";
pub const LINK_ICON_CLASS: &str = "fas fa-external-link-alt";

/// Candidates for the modal focus trap; disabled and hidden ones are
/// filtered out afterwards.
pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button, input, textarea, select, [tabindex]:not([tabindex=\"-1\"])";

/// Host global holding optional JSON config.
pub const CONFIG_GLOBAL: &str = "__SHOWCASE_CONFIG";
