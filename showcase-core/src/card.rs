//! Card model and the attribute parsing that feeds it.
//!
//! A card is read straight from its markup every time the modal opens.
//! All comma-delimited attribute strings and the `Label: url` link syntax
//! are parsed here so the controllers only ever see typed values.

use serde::Serialize;

use crate::constants::*;
use crate::error::Result;

/// Interior parts of a card element that carry display text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPart {
    Title,
    Summary,
    Status,
    Badge,
}

/// Read access to one card in the page markup.
///
/// Attribute reads cannot fail; interior lookups can (e.g. a rejected
/// selector query) and report that as an error.
pub trait CardElement {
    fn attribute(&self, name: &str) -> Option<String>;
    fn text(&self, part: CardPart) -> Result<Option<String>>;
    /// Text of each tag chip already rendered on the card.
    fn tag_texts(&self) -> Result<Vec<String>>;
    fn primary_image(&self) -> Result<Option<String>>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EventMeta {
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    /// Parse one entry of a links attribute.
    ///
    /// `Docs: https://x.test` yields a labelled link; anything else is taken
    /// as a bare href with `default_label`.
    pub fn parse(entry: &str, default_label: &str) -> Link {
        let entry = entry.trim();
        if let Some(idx) = entry.find(':')
            && idx > 0
            && has_http_scheme(&entry[idx + 1..])
        {
            return Link {
                label: entry[..idx].trim().to_string(),
                href: entry[idx + 1..].trim().to_string(),
            };
        }
        Link {
            label: default_label.to_string(),
            href: entry.to_string(),
        }
    }
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.contains("http://") || lower.contains("https://")
}

/// Split a comma-delimited attribute, dropping blank entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_links(raw: &str, default_label: &str) -> Vec<Link> {
    split_list(raw)
        .iter()
        .map(|entry| Link::parse(entry, default_label))
        .collect()
}

fn present(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

fn present_trimmed(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// A project card as declared in the page markup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Card {
    pub category: Option<String>,
    pub title: String,
    pub overview: String,
    pub technologies: Vec<String>,
    pub gallery: Vec<String>,
    pub primary_image: Option<String>,
    pub video: Option<String>,
    pub meta: EventMeta,
    pub links: Vec<Link>,
    pub status: Option<String>,
    pub badge: Option<String>,
}

impl Card {
    pub fn read(el: &impl CardElement, default_link_label: &str) -> Result<Card> {
        let title = el.text(CardPart::Title)?.unwrap_or_default().trim().to_string();
        let overview = match present(el.attribute(ATTR_OVERVIEW)) {
            Some(o) => o,
            None => el.text(CardPart::Summary)?.unwrap_or_default(),
        };
        let technologies = match present(el.attribute(ATTR_TECHNOLOGIES)) {
            Some(raw) => split_list(&raw),
            None => el
                .tag_texts()?
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        };
        let gallery = el
            .attribute(ATTR_GALLERY)
            .map(|raw| split_list(&raw))
            .unwrap_or_default();
        let links_raw = present(el.attribute(ATTR_LINKS))
            .or_else(|| el.attribute(ATTR_LINK))
            .unwrap_or_default();

        Ok(Card {
            category: present(el.attribute(ATTR_CATEGORY)),
            title,
            overview,
            technologies,
            gallery,
            primary_image: present_trimmed(el.primary_image()?),
            video: present_trimmed(el.attribute(ATTR_VIDEO)),
            meta: EventMeta {
                date: present(el.attribute(ATTR_DATE)),
                time: present(el.attribute(ATTR_TIME)),
                venue: present(el.attribute(ATTR_VENUE)),
            },
            links: parse_links(&links_raw, default_link_label),
            status: present_trimmed(el.text(CardPart::Status)?),
            badge: present_trimmed(el.text(CardPart::Badge)?),
        })
    }

    /// Minimal card for the degraded modal: title and overview only.
    ///
    /// Every lookup here is best effort; failures fall back to defaults.
    pub fn fallback(el: &impl CardElement) -> Card {
        let title = present_trimmed(el.text(CardPart::Title).ok().flatten())
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());
        let overview = present(el.attribute(ATTR_OVERVIEW))
            .or_else(|| el.text(CardPart::Summary).ok().flatten())
            .unwrap_or_default();
        Card {
            title,
            overview,
            ..Card::default()
        }
    }

    /// Date row value; the card badge stands in when no date is declared.
    pub fn display_date(&self) -> Option<&str> {
        self.meta.date.as_deref().or(self.badge.as_deref())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ShowcaseError;

    /// In-memory card markup used across the crate's tests.
    #[derive(Clone, Debug, Default)]
    pub struct FakeCard {
        pub attrs: HashMap<String, String>,
        pub title: Option<String>,
        pub summary: Option<String>,
        pub status: Option<String>,
        pub badge: Option<String>,
        pub tags: Vec<String>,
        pub image: Option<String>,
        pub broken: bool,
    }

    impl FakeCard {
        pub fn titled(title: &str) -> Self {
            FakeCard {
                title: Some(title.to_string()),
                ..Default::default()
            }
        }

        pub fn with(mut self, name: &str, value: &str) -> Self {
            self.attrs.insert(name.to_string(), value.to_string());
            self
        }

        fn check(&self) -> Result<()> {
            if self.broken {
                Err(ShowcaseError::Lookup {
                    selector: ".project-tags .tag".into(),
                    reason: "detached".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    impl CardElement for FakeCard {
        fn attribute(&self, name: &str) -> Option<String> {
            self.attrs.get(name).cloned()
        }

        fn text(&self, part: CardPart) -> Result<Option<String>> {
            Ok(match part {
                CardPart::Title => self.title.clone(),
                CardPart::Summary => self.summary.clone(),
                CardPart::Status => self.status.clone(),
                CardPart::Badge => self.badge.clone(),
            })
        }

        fn tag_texts(&self) -> Result<Vec<String>> {
            self.check()?;
            Ok(self.tags.clone())
        }

        fn primary_image(&self) -> Result<Option<String>> {
            Ok(self.image.clone())
        }
    }
}
