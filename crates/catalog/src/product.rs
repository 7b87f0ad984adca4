use serde::{Deserialize, Serialize};

use varahi_core::ValueObject;

/// One entry of the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Keycap ordinal shown next to the title.
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Relative asset path or absolute URL.
    pub image: &'static str,
}

impl CatalogEntry {
    /// Product context for an order of this entry.
    pub fn context(&self) -> ProductContext {
        ProductContext::new(self.title)
    }
}

/// Products offered through the order modal, in display order.
pub static CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        emoji: "1\u{fe0f}\u{20e3}",
        title: "Biodegradable Carry Bags",
        description: "Perfect for shopping, retail, and industrial use. Decomposes fully in months, leaving no microplastics.",
        image: "IMG/img3.avif",
    },
    CatalogEntry {
        emoji: "2\u{fe0f}\u{20e3}",
        title: "Grocery Bags",
        description: "Durable, leak-proof bags that break down in 120 days. Ideal for supermarkets and homes.",
        image: "IMG/images.jpeg",
    },
    CatalogEntry {
        emoji: "3\u{fe0f}\u{20e3}",
        title: "Compostable Films",
        description: "Versatile films (30-120 microns) for packaging, agriculture, and catering.",
        image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&q=80",
    },
    CatalogEntry {
        emoji: "4\u{fe0f}\u{20e3}",
        title: "Medical Waste Bags",
        description: "Safe, eco-friendly disposal for hospitals and clinics.",
        image: "IMG/img4.jpeg",
    },
    CatalogEntry {
        emoji: "5\u{fe0f}\u{20e3}",
        title: "Biodegradable Aprons",
        description: "Lightweight, compostable aprons for hospitality and healthcare.",
        image: "IMG/download.jpeg",
    },
];

/// Look up a catalog entry by its exact title.
pub fn find_entry(title: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.title == title)
}

/// The product an open order modal applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductContext {
    title: String,
}

impl ValueObject for ProductContext {}

impl ProductContext {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_titles_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn find_entry_matches_exact_title() {
        let entry = find_entry("Grocery Bags").unwrap();
        assert_eq!(entry.image, "IMG/images.jpeg");
        assert!(find_entry("grocery bags").is_none());
    }

    #[test]
    fn entry_context_carries_title() {
        let ctx = CATALOG[3].context();
        assert_eq!(ctx.title(), "Medical Waste Bags");
    }
}
