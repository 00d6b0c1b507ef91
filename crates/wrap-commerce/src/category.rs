//! Canonical category table.
//!
//! The storage layer historically accumulated three overlapping category
//! vocabularies (raw storage strings, curated display names, and a separate
//! build-page mapping). They are consolidated here: one canonical slug per
//! category, one display-name lookup, and one legacy-name mapping applied
//! during record normalization.

/// A canonical catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDef {
    /// Canonical slug stored on products.
    pub slug: &'static str,
    /// Curated display name.
    pub display_name: &'static str,
}

/// The curated category set offered by the admin UI.
pub const CATEGORIES: [CategoryDef; 11] = [
    CategoryDef { slug: "bandages", display_name: "Bandages" },
    CategoryDef { slug: "dressings", display_name: "Dressings & Gauze" },
    CategoryDef { slug: "tape", display_name: "Tape & Wraps" },
    CategoryDef { slug: "antiseptics", display_name: "Antiseptics & Ointments" },
    CategoryDef { slug: "medications", display_name: "Medications" },
    CategoryDef { slug: "instruments", display_name: "Instruments" },
    CategoryDef { slug: "ppe", display_name: "Gloves & PPE" },
    CategoryDef { slug: "burn-care", display_name: "Burn Care" },
    CategoryDef { slug: "cpr-rescue", display_name: "CPR & Rescue" },
    CategoryDef { slug: "eye-care", display_name: "Eye Care" },
    CategoryDef { slug: "kits", display_name: "Starter Kits" },
];

/// Legacy category names still present in older records.
const LEGACY_NAMES: [(&str, &str); 13] = [
    ("band-aids", "bandages"),
    ("adhesive bandages", "bandages"),
    ("gauze", "dressings"),
    ("wound care", "dressings"),
    ("athletic tape", "tape"),
    ("ointments", "antiseptics"),
    ("otc medications", "medications"),
    ("tools", "instruments"),
    ("scissors & tweezers", "instruments"),
    ("gloves", "ppe"),
    ("burn treatment", "burn-care"),
    ("eye wash", "eye-care"),
    ("first aid kits", "kits"),
];

/// Map a raw category string to its canonical slug.
///
/// Accepts canonical slugs, display names, and legacy names,
/// case-insensitively. Unknown categories pass through trimmed and
/// lowercased: the data-layer set is open-ended.
pub fn canonicalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();

    for def in &CATEGORIES {
        if lower == def.slug || lower == def.display_name.to_lowercase() {
            return def.slug.to_string();
        }
    }
    for (legacy, slug) in &LEGACY_NAMES {
        if lower == *legacy {
            return (*slug).to_string();
        }
    }

    lower
}

/// Display name for a canonical slug.
pub fn display_name(slug: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|def| def.slug == slug)
        .map(|def| def.display_name)
}

/// Check whether a slug is part of the curated set.
pub fn is_canonical(slug: &str) -> bool {
    CATEGORIES.iter().any(|def| def.slug == slug)
}
