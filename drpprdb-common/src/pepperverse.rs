//! Pepperverse map projection
//!
//! Flavors carrying a `pepperversePosition` are bucketed by body type and
//! drawn at their fixed dataset coordinates. Flavors without a position are
//! left off the map and nowhere else.

use serde::Serialize;

use crate::models::{BodyType, Flavor};

/// Map canvas size
pub const CANVAS_WIDTH: u32 = 1000;
pub const CANVAS_HEIGHT: u32 = 700;

/// Center of the "Master Pepper" core and its orbit rings
const CORE_X: f64 = 500.0;
const CORE_Y: f64 = 350.0;
const CORE_RADIUS: f64 = 50.0;
const ORBIT_RADII: [f64; 2] = [150.0, 250.0];

/// Fixed location of the "Vendor Promotion Cycle" black hole
const BLACK_HOLE_X: f64 = 200.0;
const BLACK_HOLE_Y: f64 = 600.0;
const BLACK_HOLE_RADIUS: f64 = 60.0;

const HOVER_EXCERPT_CHARS: usize = 100;

/// Flavors partitioned by body type, each bucket in dataset order
#[derive(Debug, Clone, Default, Serialize)]
pub struct PepperverseMap<'a> {
    pub planets: Vec<&'a Flavor>,
    pub comets: Vec<&'a Flavor>,
    pub astral: Vec<&'a Flavor>,
    pub black_hole: Vec<&'a Flavor>,
}

impl<'a> PepperverseMap<'a> {
    pub fn project(flavors: &'a [Flavor]) -> Self {
        let mut map = Self::default();
        for flavor in flavors {
            let Some(position) = flavor.pepperverse_position else {
                continue;
            };
            match position.kind {
                BodyType::Planet => map.planets.push(flavor),
                BodyType::Comet => map.comets.push(flavor),
                BodyType::Astral => map.astral.push(flavor),
                BodyType::BlackHole => map.black_hole.push(flavor),
            }
        }
        map
    }

    pub fn bucket(&self, kind: BodyType) -> &[&'a Flavor] {
        match kind {
            BodyType::Planet => &self.planets,
            BodyType::Comet => &self.comets,
            BodyType::Astral => &self.astral,
            BodyType::BlackHole => &self.black_hole,
        }
    }

    /// Number of flavors placed on the map
    pub fn len(&self) -> usize {
        self.planets.len() + self.comets.len() + self.astral.len() + self.black_hole.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        BodyType::ALL
            .iter()
            .any(|kind| self.bucket(*kind).iter().any(|f| f.id == id))
    }
}

/// How a body type is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill: &'static str,
    /// Label baseline distance below the marker center
    pub label_offset: f64,
    pub font_size: u32,
}

pub fn marker_style(kind: BodyType) -> MarkerStyle {
    match kind {
        BodyType::Planet => MarkerStyle {
            radius: 15.0,
            fill: "#60A5FA",
            label_offset: 30.0,
            font_size: 12,
        },
        BodyType::Comet => MarkerStyle {
            radius: 12.0,
            fill: "#4ADE80",
            label_offset: 25.0,
            font_size: 11,
        },
        BodyType::Astral => MarkerStyle {
            radius: 18.0,
            fill: "url(#astralGradient)",
            label_offset: 32.0,
            font_size: 11,
        },
        BodyType::BlackHole => MarkerStyle {
            radius: 10.0,
            fill: "#EF4444",
            label_offset: 20.0,
            font_size: 10,
        },
    }
}

/// First 100 characters of the lore followed by "..."
pub fn hover_excerpt(lore: &str) -> String {
    let excerpt: String = lore.chars().take(HOVER_EXCERPT_CHARS).collect();
    format!("{}...", excerpt)
}

fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the map as a standalone SVG document
///
/// Each marker carries a `<title>` with the flavor name and a lore excerpt,
/// and links to `/flavor/{id}`.
pub fn render_svg(map: &PepperverseMap<'_>, show_labels: bool) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" role=\"img\" aria-label=\"Cosmological map of Dr Pepper flavors\">\n",
        CANVAS_WIDTH, CANVAS_HEIGHT
    ));
    svg.push_str(concat!(
        "  <defs>\n",
        "    <radialGradient id=\"masterGradient\"><stop offset=\"0%\" stop-color=\"#DC2626\"/><stop offset=\"100%\" stop-color=\"#7F1D1D\"/></radialGradient>\n",
        "    <radialGradient id=\"astralGradient\"><stop offset=\"0%\" stop-color=\"#A855F7\"/><stop offset=\"100%\" stop-color=\"#EC4899\"/></radialGradient>\n",
        "  </defs>\n",
    ));

    svg.push_str(&format!(
        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"url(#masterGradient)\"/>\n",
        CORE_X, CORE_Y, CORE_RADIUS
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"white\" font-size=\"20\" font-weight=\"bold\">Master Pepper</text>\n",
        CORE_X,
        CORE_Y + 80.0
    ));
    for radius in ORBIT_RADII {
        svg.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"white\" stroke-width=\"1\" stroke-dasharray=\"5,5\" opacity=\"0.3\"/>\n",
            CORE_X, CORE_Y, radius
        ));
    }

    svg.push_str(&format!(
        "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"black\" stroke=\"white\" stroke-width=\"2\"/>\n",
        BLACK_HOLE_X, BLACK_HOLE_Y, BLACK_HOLE_RADIUS
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"white\" font-size=\"16\" font-weight=\"bold\">The Vendor Promotion Cycle</text>\n",
        BLACK_HOLE_X,
        BLACK_HOLE_Y + 80.0
    ));

    for kind in BodyType::ALL {
        let style = marker_style(kind);
        for flavor in map.bucket(kind) {
            let Some(position) = flavor.pepperverse_position else {
                continue;
            };
            svg.push_str(&format!(
                "  <a href=\"/flavor/{}\"><circle class=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"><title>{} - {}</title></circle>",
                xml_escape(&flavor.id),
                kind.label(),
                position.x,
                position.y,
                style.radius,
                style.fill,
                xml_escape(&flavor.name),
                xml_escape(&hover_excerpt(&flavor.lore)),
            ));
            if show_labels {
                svg.push_str(&format!(
                    "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"white\" font-size=\"{}\">{}</text>",
                    position.x,
                    position.y + style.label_offset,
                    style.font_size,
                    xml_escape(&flavor.short_name()),
                ));
            }
            svg.push_str("</a>\n");
        }
    }

    svg.push_str("</svg>\n");
    svg
}
