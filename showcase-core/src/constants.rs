/// Number of cards shown per grid page.
pub const PAGE_SIZE: usize = 3;
/// Reserved filter tag meaning "no filter".
pub const ALL_FILTER: &str = "all";
/// Label used for a link entry that has no `Label:` prefix.
pub const DEFAULT_LINK_LABEL: &str = "View Link";
/// Modal title used when the card has no readable title.
pub const FALLBACK_TITLE: &str = "Project";
/// Alt text for gallery images when the modal title is empty.
pub const FALLBACK_IMAGE_ALT: &str = "Project image";

// Card attribute vocabulary
pub const ATTR_CATEGORY: &str = "data-category";
pub const ATTR_OVERVIEW: &str = "data-overview";
pub const ATTR_TECHNOLOGIES: &str = "data-technologies";
pub const ATTR_GALLERY: &str = "data-gallery";
pub const ATTR_VIDEO: &str = "data-video";
pub const ATTR_DATE: &str = "data-date";
pub const ATTR_TIME: &str = "data-time";
pub const ATTR_VENUE: &str = "data-venue";
pub const ATTR_LINKS: &str = "data-links";
pub const ATTR_LINK: &str = "data-link";
