//! Product Catalog
//!
//! Static demo catalog shown by the products views.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub price_cents: u32,
    pub description: &'static str,
}

const CATALOG: &[Product] = &[
    Product {
        id: 1,
        name: "Canvas Tote",
        category: "Bags",
        price_cents: 2400,
        description: "Heavyweight cotton tote with an inside pocket.",
    },
    Product {
        id: 2,
        name: "Enamel Mug",
        category: "Kitchen",
        price_cents: 1450,
        description: "Speckled enamel mug, 350 ml.",
    },
    Product {
        id: 3,
        name: "Desk Notebook",
        category: "Stationery",
        price_cents: 900,
        description: "A5 dot-grid notebook, 160 pages.",
    },
    Product {
        id: 4,
        name: "Wool Beanie",
        category: "Apparel",
        price_cents: 2999,
        description: "Ribbed merino beanie, one size.",
    },
    Product {
        id: 5,
        name: "Brass Pen",
        category: "Stationery",
        price_cents: 4200,
        description: "Solid brass rollerball that ages with use.",
    },
];

/// All products in display order
pub fn catalog() -> &'static [Product] {
    CATALOG
}

pub fn find_product(id: u32) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Look up by the raw route segment
pub fn find_product_by_segment(segment: &str) -> Option<&'static Product> {
    segment.parse().ok().and_then(find_product)
}

/// `$D.CC`
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
