//! Icon glyphs as inline SVG stroke paths on a 24x24 grid.

use crate::core::tree::{Element, Tag};
use crate::domain::model::Icon;

#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    pub name: &'static str,
    pub paths: &'static [&'static str],
}

pub static GITHUB: Glyph = Glyph {
    name: "github",
    paths: &[
        "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
        "M9 18c-4.51 2-5-2-7-2",
    ],
};

pub static LINKEDIN: Glyph = Glyph {
    name: "linkedin",
    paths: &[
        "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
        "M2 9h4v12H2z",
        "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
    ],
};

pub static TWITTER: Glyph = Glyph {
    name: "twitter",
    paths: &[
        "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
    ],
};

pub static EXTERNAL_LINK: Glyph = Glyph {
    name: "external-link",
    paths: &[
        "M15 3h6v6",
        "M10 14 21 3",
        "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
    ],
};

pub static MAIL: Glyph = Glyph {
    name: "mail",
    paths: &[
        "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
        "m22 6-10 7L2 6",
    ],
};

pub static MAP_PIN: Glyph = Glyph {
    name: "map-pin",
    paths: &[
        "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
        "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
    ],
};

/// Glyph for a social icon. Total over [`Icon`]; unknown identifiers are
/// rejected when the portfolio is loaded.
pub fn social_glyph(icon: Icon) -> &'static Glyph {
    match icon {
        Icon::Github => &GITHUB,
        Icon::Linkedin => &LINKEDIN,
        Icon::Twitter => &TWITTER,
    }
}

impl Glyph {
    pub fn element(&self, size: u32) -> Element {
        let size = size.to_string();
        Element::new(Tag::Svg)
            .class(&format!("icon icon-{}", self.name))
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", size.clone())
            .attr("height", size)
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .attr("aria-hidden", "true")
            .children(
                self.paths
                    .iter()
                    .map(|d| Element::new(Tag::Path).attr("d", *d)),
            )
    }
}
