//! Content Records
//!
//! Plain immutable records rendered by the site sections. All text is
//! `'static` because every record is a source-level constant.

use serde::Serialize;

/// Glyphs used across the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    MessageSquareText,
    #[serde(rename = "bar-chart-3")]
    BarChart3,
    #[serde(rename = "share-2")]
    Share2,
    ShieldCheck,
    Menu,
    X,
    Check,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::MessageSquareText => "message-square-text",
            Icon::BarChart3 => "bar-chart-3",
            Icon::Share2 => "share-2",
            Icon::ShieldCheck => "shield-check",
            Icon::Menu => "menu",
            Icon::X => "x",
            Icon::Check => "check",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A product capability shown in the features grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A subscription plan shown in the pricing grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub name: &'static str,

    /// Display price including currency, e.g. `R$499`
    pub price: &'static str,

    /// Billing period suffix rendered after the price
    pub period: &'static str,

    /// Included items, rendered in order
    pub features: &'static [&'static str],

    /// Call-to-action label
    pub cta_text: &'static str,

    /// Call-to-action target route
    pub cta_href: &'static str,

    /// Rendered with the emphasized card variant
    pub highlighted: bool,
}

/// A customer quote
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

/// Blocks composed by the home page, in catalog order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Features,
    Testimonials,
    Pricing,
    Contact,
}

impl SectionId {
    /// Fragment id the section renders, if it is a link target
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            SectionId::Hero => None,
            SectionId::Features => Some("features"),
            SectionId::Testimonials => Some("testimonials"),
            SectionId::Pricing => Some("pricing"),
            SectionId::Contact => Some("contact"),
        }
    }
}

/// Heading and lead paragraph of a section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SectionCopy {
    pub heading: &'static str,
    pub blurb: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_serializes_kebab_case() {
        let json = serde_json::to_string(&Icon::BarChart3).unwrap();
        assert_eq!(json, "\"bar-chart-3\"");
        assert_eq!(Icon::BarChart3.to_string(), "bar-chart-3");
    }

    #[test]
    fn test_hero_has_no_anchor() {
        assert_eq!(SectionId::Hero.anchor(), None);
        assert_eq!(SectionId::Pricing.anchor(), Some("pricing"));
    }
}
