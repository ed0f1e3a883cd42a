//! Static page content.
//!
//! Everything the page renders comes from one JSON bundle compiled into the
//! binary. It is parsed and validated once at startup and never mutated.

use std::collections::HashSet;
use std::rc::Rc;

use serde::Deserialize;

use crate::errors::ContentError;

const BUNDLED: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Brand {
    pub mark: String,
    pub name: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// One entry of a responsive `sizes` list. `max_width_px: None` is the
/// fallback width and belongs last.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SizeHint {
    #[serde(default)]
    pub max_width_px: Option<u32>,
    pub width: String,
}

/// Renders hints as an HTML `sizes` attribute value.
pub fn sizes_attr(hints: &[SizeHint]) -> String {
    hints
        .iter()
        .map(|hint| match hint.max_width_px {
            Some(max) => format!("(max-width: {}px) {}", max, hint.width),
            None => hint.width.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ImageSizes {
    pub marquee: Vec<SizeHint>,
    pub logo: Vec<SizeHint>,
    pub work: Vec<SizeHint>,
    pub service: Vec<SizeHint>,
    pub portrait: Vec<SizeHint>,
}

/// An image in the marquee strip. Order is loop order.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct MarqueeItem {
    pub src: String,
    pub alt: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct WorkItem {
    pub title: String,
    pub year: String,
    pub image: String,
    pub slug: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ServiceItem {
    pub number: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Contact {
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub links: Vec<Link>,
    pub socials: Vec<Link>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct About {
    pub heading: String,
    pub bio: String,
    pub portrait: MarqueeItem,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Marquee,
    Brands,
    Work,
    Services,
    About,
    Contact,
}

impl SectionKind {
    /// Stable identifier used as the section's render key.
    pub fn key(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Marquee => "marquee",
            SectionKind::Brands => "brands",
            SectionKind::Work => "work",
            SectionKind::Services => "services",
            SectionKind::About => "about",
            SectionKind::Contact => "contact",
        }
    }
}

/// Copy and section order for one rendition of the home page.
#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Variant {
    pub key: String,
    pub hero: Hero,
    pub work_intro: String,
    pub services_heading: String,
    pub about: About,
    pub sections: Vec<SectionKind>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav_services: Vec<Link>,
    pub image_sizes: ImageSizes,
    pub marquee: Vec<MarqueeItem>,
    pub brand_caption: String,
    pub brand_logos: Vec<MarqueeItem>,
    pub works: Vec<WorkItem>,
    pub services: Vec<ServiceItem>,
    pub stats: Vec<Stat>,
    pub contact: Contact,
    pub variants: Vec<Variant>,
}

/// Handle to the loaded content, shared with every page through context.
#[derive(Clone)]
pub struct SiteContext(pub Rc<SiteContent>);

impl PartialEq for SiteContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SiteContent {
    /// Parses and validates the bundle compiled into the binary.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.marquee.is_empty() {
            return Err(ContentError::EmptyMarquee);
        }
        if self.variants.is_empty() {
            return Err(ContentError::NoVariants);
        }

        let mut slugs = HashSet::new();
        for work in &self.works {
            if work.slug.trim().is_empty() {
                return Err(ContentError::EmptySlug {
                    title: work.title.clone(),
                });
            }
            if !slugs.insert(work.slug.as_str()) {
                return Err(ContentError::DuplicateSlug {
                    slug: work.slug.clone(),
                });
            }
        }

        let mut keys = HashSet::new();
        for variant in &self.variants {
            if !keys.insert(variant.key.as_str()) {
                return Err(ContentError::DuplicateVariant {
                    key: variant.key.clone(),
                });
            }
        }
        Ok(())
    }

    /// Resolves a detail-page slug. `None` means the route is not found.
    pub fn find_work(&self, slug: &str) -> Option<&WorkItem> {
        self.works.iter().find(|work| work.slug == slug)
    }

    /// Every detail route that exists, in display order.
    pub fn work_slugs(&self) -> Vec<&str> {
        self.works.iter().map(|work| work.slug.as_str()).collect()
    }

    /// The first configured variant renders at `/`.
    pub fn default_variant(&self) -> &Variant {
        // validate() guarantees at least one variant
        &self.variants[0]
    }

    pub fn variant(&self, key: &str) -> Option<&Variant> {
        self.variants.iter().find(|variant| variant.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> SiteContent {
        SiteContent::load().expect("bundled content is valid")
    }

    #[test]
    fn finds_work_by_slug() {
        let content = bundled();
        let work = content.find_work("flow-water").expect("flow-water exists");
        assert_eq!(work.title, "Flow Water");
        assert_eq!(work.year, "2025");
        assert_eq!(work.image, "/images/image_37.png");
        assert_eq!(work.slug, "flow-water");
    }

    #[test]
    fn unknown_slug_is_not_found() {
        assert!(bundled().find_work("not-a-real-slug").is_none());
    }

    #[test]
    fn slugs_are_listed_in_display_order() {
        let content = bundled();
        let slugs = content.work_slugs();
        assert_eq!(slugs.len(), 9);
        assert_eq!(slugs[0], "saucony-run-as-one");
        assert_eq!(slugs[8], "group-therapy");
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED).unwrap();
        value["works"][1]["slug"] = serde_json::json!("flow-water");
        let err = SiteContent::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug { ref slug } if slug == "flow-water"));
    }

    #[test]
    fn rejects_empty_slug_and_empty_marquee() {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED).unwrap();
        value["works"][0]["slug"] = serde_json::json!("  ");
        assert!(matches!(
            SiteContent::from_json(&value.to_string()),
            Err(ContentError::EmptySlug { .. })
        ));

        let mut value: serde_json::Value = serde_json::from_str(BUNDLED).unwrap();
        value["marquee"] = serde_json::json!([]);
        assert!(matches!(
            SiteContent::from_json(&value.to_string()),
            Err(ContentError::EmptyMarquee)
        ));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            SiteContent::from_json("{ not json"),
            Err(ContentError::Json(_))
        ));
    }

    #[test]
    fn variants_resolve_by_key() {
        let content = bundled();
        assert_eq!(content.default_variant().key, "personal");
        assert_eq!(content.variant("studio").unwrap().hero.title, "4thtale");
        assert!(content.variant("missing").is_none());
        assert_eq!(content.default_variant().sections.first(), Some(&SectionKind::Hero));
    }

    #[test]
    fn renders_sizes_attribute() {
        let content = bundled();
        assert_eq!(
            sizes_attr(&content.image_sizes.marquee),
            "(max-width: 640px) 256px, (max-width: 768px) 288px, 320px"
        );
        assert_eq!(sizes_attr(&[]), "");
    }
}
