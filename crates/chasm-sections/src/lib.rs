//! Static registry of descent sections: ordered anchor points along the
//! depth axis, each with a fixed depth coordinate and display metadata.
//!
//! The registry is compiled in and immutable. Depths are strictly
//! decreasing in declaration order (more negative = deeper), and the two
//! derived bounds [`MAX_DEPTH`] and [`UPPER_BOUND`] delimit the reachable
//! range of the navigation axis.

use serde::{Deserialize, Serialize};

/// Closed set of section identifiers, in descent order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    /// The entry hall at the surface.
    Hero,
    /// The demon king's audience chamber.
    Muzan,
    /// Gallery of the six upper moons.
    UpperMoons,
    /// The impossible-geometry showcase.
    Architecture,
    /// The final battle memorial.
    Battles,
    /// The biwa player's chamber.
    Nakime,
    /// Lore archive at the bottom of the structure.
    Lore,
}

impl SectionId {
    /// All section ids in descent order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::Muzan,
        SectionId::UpperMoons,
        SectionId::Architecture,
        SectionId::Battles,
        SectionId::Nakime,
        SectionId::Lore,
    ];

    /// Zero-based position of this section in descent order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&id| id == self).unwrap_or(0)
    }

    /// Section id at the given descent-order position, if in range.
    /// Used by keyboard-driven jumps (digit keys map to indices).
    #[must_use]
    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }
}

/// An anchor point along the depth axis with display metadata.
///
/// Everything except `id` and `depth` is opaque to the navigation
/// machinery; titles and colors exist for the HUD and scene layers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    /// Unique identifier.
    pub id: SectionId,
    /// Anchor coordinate along the navigation axis (more negative = deeper).
    pub depth: f32,
    /// Display title (native script).
    pub title: &'static str,
    /// Display subtitle (romanized).
    pub subtitle: &'static str,
    /// One-line description for the annotation overlay.
    pub description: &'static str,
    /// Accent color, linear RGB.
    pub color: [f32; 3],
}

/// The complete registry, sorted by strictly decreasing depth.
pub static SECTIONS: [Section; 7] = [
    Section {
        id: SectionId::Hero,
        depth: 0.0,
        title: "無限城",
        subtitle: "Infinity Castle",
        description: "The dimensional fortress of Muzan Kibutsuji.",
        color: [1.0, 0.2, 0.4],
    },
    Section {
        id: SectionId::Muzan,
        depth: -25.0,
        title: "鬼舞辻無惨",
        subtitle: "Muzan Kibutsuji",
        description: "The Demon King who created all demons.",
        color: [0.6, 0.2, 1.0],
    },
    Section {
        id: SectionId::UpperMoons,
        depth: -50.0,
        title: "上弦の鬼",
        subtitle: "Upper Moons",
        description: "The six most powerful demons.",
        color: [1.0, 0.4, 0.2],
    },
    Section {
        id: SectionId::Architecture,
        depth: -75.0,
        title: "建築",
        subtitle: "Architecture",
        description: "Impossible geometry defying physics.",
        color: [0.2, 0.8, 1.0],
    },
    Section {
        id: SectionId::Battles,
        depth: -100.0,
        title: "最終決戦",
        subtitle: "Final Battle",
        description: "The ultimate assault on the castle.",
        color: [1.0, 0.2, 0.2],
    },
    Section {
        id: SectionId::Nakime,
        depth: -125.0,
        title: "鳴女",
        subtitle: "Nakime",
        description: "The Biwa Demon who controls the castle.",
        color: [0.8, 0.4, 1.0],
    },
    Section {
        id: SectionId::Lore,
        depth: -150.0,
        title: "伝承",
        subtitle: "Lore & Secrets",
        description: "Hidden truths about the demon world.",
        color: [1.0, 0.8, 0.2],
    },
];

/// Hard floor of the navigation axis, below the deepest section.
pub const MAX_DEPTH: f32 = -180.0;

/// Shallow ceiling of the navigation axis, above the first section.
pub const UPPER_BOUND: f32 = 10.0;

/// Look up a section by id. Total: the id space is closed.
#[must_use]
pub fn section(id: SectionId) -> &'static Section {
    &SECTIONS[id.index()]
}

/// Find the section nearest to the given depth by absolute difference.
///
/// Linear scan in registry order; on a tie the earlier-declared section
/// wins.
#[must_use]
pub fn nearest(depth: f32) -> &'static Section {
    let mut best = &SECTIONS[0];
    let mut best_dist = f32::INFINITY;
    for section in &SECTIONS {
        let d = (depth - section.depth).abs();
        if d < best_dist {
            best_dist = d;
            best = section;
        }
    }
    best
}

/// Fraction of the full descent completed at the given depth, in `[0, 1]`.
///
/// Measured against the last section's depth, matching the HUD's progress
/// bar.
#[must_use]
pub fn descent_progress(depth: f32) -> f32 {
    let full = SECTIONS[SECTIONS.len() - 1].depth.abs();
    (depth.abs() / full).clamp(0.0, 1.0)
}
