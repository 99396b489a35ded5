// SPDX-License-Identifier: MPL-2.0
//! Static page content: imagery, section structure, and contact data.
//!
//! Views iterate these tables instead of hard-coding rows, so content edits
//! stay in one place. Prose lives in the i18n catalogs; this module only
//! carries the message keys plus data that never gets translated (names,
//! phone numbers, file names).

use iced::widget::image::Handle;
use iced::widget::svg;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded page imagery. Renders and scanned plans go in `assets/images/`
/// under the file names listed in [`CHURCH_IMAGES`] and [`PLAN_IMAGES`];
/// missing files fall back to a labeled placeholder at render time.
#[derive(RustEmbed)]
#[folder = "assets/images/"]
#[exclude = "*.md"]
pub struct ImageAssets;

/// One image shown in the carousel, plans grid, or lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageEntry {
    /// File name inside `assets/images/`.
    pub file: &'static str,
    /// i18n key for the image label.
    pub label_key: &'static str,
}

/// Renders of the completed building, in carousel order.
pub const CHURCH_IMAGES: &[ImageEntry] = &[
    ImageEntry {
        file: "church_1.jpg",
        label_key: "image-church-1",
    },
    ImageEntry {
        file: "church_2.jpg",
        label_key: "image-church-2",
    },
    ImageEntry {
        file: "church_3.jpg",
        label_key: "image-church-3",
    },
];

/// Architectural plan scans, in grid order.
pub const PLAN_IMAGES: &[ImageEntry] = &[
    ImageEntry {
        file: "plan1.jpg",
        label_key: "image-plan-1",
    },
    ImageEntry {
        file: "plan2.jpg",
        label_key: "image-plan-2",
    },
    ImageEntry {
        file: "plan3.jpg",
        label_key: "image-plan-3",
    },
    ImageEntry {
        file: "plan4.jpg",
        label_key: "image-plan-4",
    },
    ImageEntry {
        file: "plan5.jpg",
        label_key: "image-plan-5",
    },
    ImageEntry {
        file: "plan6.jpg",
        label_key: "image-plan-6",
    },
];

/// All lightbox images: carousel renders first, then the plans.
#[must_use]
pub fn lightbox_images() -> Vec<ImageEntry> {
    CHURCH_IMAGES.iter().chain(PLAN_IMAGES).copied().collect()
}

/// Lightbox position of the plan at `plan_index` within [`PLAN_IMAGES`].
#[must_use]
pub fn plan_lightbox_index(plan_index: usize) -> usize {
    CHURCH_IMAGES.len() + plan_index
}

/// Returns the cached widget handle for an embedded image, or `None` when
/// the asset is not shipped.
///
/// Handles are built once and reused so the renderer doesn't re-upload the
/// texture every frame.
pub fn image_handle(file: &str) -> Option<Handle> {
    static HANDLES: OnceLock<HashMap<&'static str, Handle>> = OnceLock::new();
    let handles = HANDLES.get_or_init(|| {
        let mut map = HashMap::new();
        for entry in CHURCH_IMAGES.iter().chain(PLAN_IMAGES) {
            if let Some(content) = ImageAssets::get(entry.file) {
                map.insert(entry.file, Handle::from_bytes(content.data.into_owned()));
            }
        }
        map
    });
    handles.get(file).cloned()
}

/// Embedded branding assets (the vector logo).
#[derive(RustEmbed)]
#[folder = "assets/branding/"]
pub struct BrandingAssets;

/// Returns the cached handle for the organization logo, or `None` when the
/// asset is not shipped (callers fall back to a glyph mark).
pub fn logo_handle() -> Option<svg::Handle> {
    static HANDLE: OnceLock<Option<svg::Handle>> = OnceLock::new();
    HANDLE
        .get_or_init(|| {
            BrandingAssets::get("logo.svg")
                .map(|content| svg::Handle::from_memory(content.data.into_owned()))
        })
        .clone()
}

/// Page sections reachable from the header navigation and footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSection {
    Home,
    Project,
    Building,
    Support,
    Contact,
}

impl PageSection {
    /// All sections in page order.
    pub const ALL: &'static [PageSection] = &[
        PageSection::Home,
        PageSection::Project,
        PageSection::Building,
        PageSection::Support,
        PageSection::Contact,
    ];

    /// i18n key for the navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            PageSection::Home => "nav-home",
            PageSection::Project => "nav-project",
            PageSection::Building => "nav-building",
            PageSection::Support => "nav-support",
            PageSection::Contact => "nav-contact",
        }
    }

    /// Vertical scroll position of the section, as a fraction of the page.
    #[must_use]
    pub fn scroll_fraction(self) -> f32 {
        match self {
            PageSection::Home => 0.0,
            PageSection::Project => 0.18,
            PageSection::Building => 0.42,
            PageSection::Support => 0.68,
            PageSection::Contact => 1.0,
        }
    }
}

/// A quoted verse with its reference, both resolved through i18n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scripture {
    pub quote_key: &'static str,
    pub reference_key: &'static str,
}

/// Verse under the hero heading (Psalm 127:1).
pub const HERO_SCRIPTURE: Scripture = Scripture {
    quote_key: "scripture-hero",
    reference_key: "scripture-hero-ref",
};

/// Verse under the mission section header (Matthew 18:20).
pub const MISSION_SCRIPTURE: Scripture = Scripture {
    quote_key: "scripture-mission",
    reference_key: "scripture-mission-ref",
};

/// Highlight quote closing the mission section (2 Corinthians 9:7).
pub const MISSION_HIGHLIGHT: Scripture = Scripture {
    quote_key: "scripture-cheerful-giver",
    reference_key: "scripture-cheerful-giver-ref",
};

/// Verse under the building section header (Exodus 25:8).
pub const BUILDING_SCRIPTURE: Scripture = Scripture {
    quote_key: "scripture-building",
    reference_key: "scripture-building-ref",
};

/// Highlight quote closing the building section (1 Kings 6:7).
pub const BUILDING_HIGHLIGHT: Scripture = Scripture {
    quote_key: "scripture-temple-stone",
    reference_key: "scripture-temple-stone-ref",
};

/// Verse under the support section header (2 Corinthians 9:6).
pub const SUPPORT_SCRIPTURE: Scripture = Scripture {
    quote_key: "scripture-support",
    reference_key: "scripture-support-ref",
};

/// Highlight quote closing the support section (Luke 6:38).
pub const SUPPORT_HIGHLIGHT: Scripture = Scripture {
    quote_key: "scripture-give",
    reference_key: "scripture-give-ref",
};

/// A card in the mission section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionCard {
    pub title_key: &'static str,
    pub body_key: &'static str,
}

pub const MISSION_CARDS: &[MissionCard] = &[
    MissionCard {
        title_key: "mission-overview-title",
        body_key: "mission-overview-body",
    },
    MissionCard {
        title_key: "mission-vision-title",
        body_key: "mission-vision-body",
    },
    MissionCard {
        title_key: "mission-impact-title",
        body_key: "mission-impact-body",
    },
];

/// A feature of the planned building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingFeature {
    pub title_key: &'static str,
    pub description_key: &'static str,
}

pub const BUILDING_FEATURES: &[BuildingFeature] = &[
    BuildingFeature {
        title_key: "feature-sanctuary-title",
        description_key: "feature-sanctuary-body",
    },
    BuildingFeature {
        title_key: "feature-fellowship-title",
        description_key: "feature-fellowship-body",
    },
    BuildingFeature {
        title_key: "feature-offices-title",
        description_key: "feature-offices-body",
    },
    BuildingFeature {
        title_key: "feature-parking-title",
        description_key: "feature-parking-body",
    },
    BuildingFeature {
        title_key: "feature-landscaping-title",
        description_key: "feature-landscaping-body",
    },
];

/// Delivery status of a timeline phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Completed,
    Current,
    Planned,
}

/// A phase in the construction timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePhase {
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub date_key: &'static str,
    pub status: PhaseStatus,
}

pub const PROJECT_TIMELINE: &[TimelinePhase] = &[
    TimelinePhase {
        title_key: "timeline-planning-title",
        description_key: "timeline-planning-body",
        date_key: "timeline-planning-date",
        status: PhaseStatus::Completed,
    },
    TimelinePhase {
        title_key: "timeline-fundraising-title",
        description_key: "timeline-fundraising-body",
        date_key: "timeline-fundraising-date",
        status: PhaseStatus::Current,
    },
    TimelinePhase {
        title_key: "timeline-foundation-title",
        description_key: "timeline-foundation-body",
        date_key: "timeline-foundation-date",
        status: PhaseStatus::Planned,
    },
    TimelinePhase {
        title_key: "timeline-construction-title",
        description_key: "timeline-construction-body",
        date_key: "timeline-construction-date",
        status: PhaseStatus::Planned,
    },
    TimelinePhase {
        title_key: "timeline-completion-title",
        description_key: "timeline-completion-body",
        date_key: "timeline-completion-date",
        status: PhaseStatus::Planned,
    },
];

/// A way-to-give option in the support section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GivingOption {
    pub title_key: &'static str,
    pub description_key: &'static str,
}

pub const GIVING_OPTIONS: &[GivingOption] = &[
    GivingOption {
        title_key: "giving-once-title",
        description_key: "giving-once-body",
    },
    GivingOption {
        title_key: "giving-monthly-title",
        description_key: "giving-monthly-body",
    },
    GivingOption {
        title_key: "giving-special-title",
        description_key: "giving-special-body",
    },
];

/// A member of the project committee with a direct phone line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitteeContact {
    pub role_key: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
}

pub const COMMITTEE_CONTACTS: &[CommitteeContact] = &[
    CommitteeContact {
        role_key: "contact-chairman-role",
        name: "Pastor Akinbo Samuel",
        phone: "+234 803 439-0941",
    },
    CommitteeContact {
        role_key: "contact-finance-role",
        name: "Sister Omolara",
        phone: "+234 806 937-9048",
    },
    CommitteeContact {
        role_key: "contact-building-role",
        name: "Elder Awodi",
        phone: "+234 803 708-1762",
    },
];

/// Church office contact details shown in the footer.
pub const OFFICE_PHONE: &str = "+234 803 439-0941";
pub const OFFICE_EMAIL: &str = "info@provincialheadquarters.org";
pub const OFFICE_ADDRESS: &str = "Beside Ascension College, Imeke, Badagry, Lagos";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightbox_images_puts_renders_before_plans() {
        let all = lightbox_images();
        assert_eq!(all.len(), CHURCH_IMAGES.len() + PLAN_IMAGES.len());
        assert_eq!(all[0], CHURCH_IMAGES[0]);
        assert_eq!(all[CHURCH_IMAGES.len()], PLAN_IMAGES[0]);
    }

    #[test]
    fn plan_lightbox_index_offsets_past_renders() {
        assert_eq!(plan_lightbox_index(0), CHURCH_IMAGES.len());

        let all = lightbox_images();
        for (i, plan) in PLAN_IMAGES.iter().enumerate() {
            assert_eq!(all[plan_lightbox_index(i)], *plan);
        }
    }

    #[test]
    fn image_files_are_unique() {
        let all = lightbox_images();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.file, b.file);
            }
        }
    }

    #[test]
    fn sections_are_in_scroll_order() {
        let fractions: Vec<f32> = PageSection::ALL
            .iter()
            .map(|s| s.scroll_fraction())
            .collect();
        for pair in fractions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(fractions.first(), Some(&0.0));
        assert_eq!(fractions.last(), Some(&1.0));
    }

    #[test]
    fn timeline_has_exactly_one_current_phase() {
        let current = PROJECT_TIMELINE
            .iter()
            .filter(|p| p.status == PhaseStatus::Current)
            .count();
        assert_eq!(current, 1);
    }

    #[test]
    fn missing_asset_resolves_to_none() {
        assert!(image_handle("not-a-real-file.jpg").is_none());
    }
}
