//! Static webinar catalog.

/// One offerable webinar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    /// Unique stable id referenced by the joined set.
    pub id: &'static str,
    pub title: &'static str,
    /// Display label, not a parsed date.
    pub date: &'static str,
    pub level: &'static str,
}

const WEBINARS: &[CatalogItem] = &[
    CatalogItem {
        id: "w1",
        title: "US legislative changes review (2025)",
        date: "10 Jan",
        level: "Basic",
    },
    CatalogItem {
        id: "w2",
        title: "Privacy and compliance (GDPR/CCPA)",
        date: "18 Jan",
        level: "Intermediate",
    },
    CatalogItem {
        id: "w3",
        title: "Contracts: key terms and risks",
        date: "25 Jan",
        level: "All levels",
    },
];

/// Returns every catalog item in display order.
pub fn catalog() -> &'static [CatalogItem] {
    WEBINARS
}

/// Looks up one catalog item by id.
pub fn find_item(id: &str) -> Option<&'static CatalogItem> {
    WEBINARS.iter().find(|item| item.id == id)
}
