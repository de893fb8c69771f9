use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::{Builder, Uuid};

use crate::models::Product;

/// Size of the catalogue built at startup.
pub const PRODUCT_COUNT: usize = 10;

static ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible",
    "Fantastic", "Practical", "Sleek", "Awesome", "Generic", "Handcrafted",
    "Handmade", "Licensed", "Refined", "Unbranded", "Tasty", "Heavy-Duty",
    "Lightweight", "Portable",
];

static MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber",
    "Metal", "Soft", "Fresh", "Frozen", "Bronze", "Marble", "Leather",
];

static ITEMS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves",
    "Pants", "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna",
    "Chicken", "Fish", "Cheese", "Bacon", "Pizza", "Salad", "Sausages", "Chips",
];

static SURNAMES: &[&str] = &[
    "Abbott", "Bauch", "Carroll", "Dietrich", "Ernser", "Fahey", "Gislason",
    "Hane", "Ortiz", "Jacobs", "Kuhn", "Lehner", "Marks", "Nolan", "Okuneva",
    "Pfeffer", "Quigley", "Rempel", "Schmitt", "Torphy", "Upton", "Volkman",
    "Walsh", "Yost", "Zieme",
];

static COMPANY_SUFFIXES: &[&str] = &["Inc", "and Sons", "LLC", "Group"];

fn pick<'a>(rng: &mut impl Rng, words: &[&'a str], fallback: &'a str) -> &'a str {
    words.choose(rng).copied().unwrap_or(fallback)
}

/// Adjective + material + item, e.g. "Sleek Granite Keyboard".
fn random_product_name(rng: &mut impl Rng) -> String {
    let adjective = pick(rng, ADJECTIVES, "Generic");
    let material = pick(rng, MATERIALS, "Steel");
    let item = pick(rng, ITEMS, "Chair");
    format!("{} {} {}", adjective, material, item)
}

/// One of the three company shapes: "Kuhn LLC", "Hane - Ortiz",
/// "Abbott, Walsh and Yost".
fn random_company_name(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..3) {
        0 => format!(
            "{} {}",
            pick(rng, SURNAMES, "Smith"),
            pick(rng, COMPANY_SUFFIXES, "Inc")
        ),
        1 => format!(
            "{} - {}",
            pick(rng, SURNAMES, "Smith"),
            pick(rng, SURNAMES, "Jones")
        ),
        _ => format!(
            "{}, {} and {}",
            pick(rng, SURNAMES, "Smith"),
            pick(rng, SURNAMES, "Jones"),
            pick(rng, SURNAMES, "Brown")
        ),
    }
}

/// Version-4 UUID drawn from `rng`, so a seeded generator yields repeatable ids.
fn random_uuid(rng: &mut impl Rng) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Generate `count` products from the given randomness source.
pub fn generate_products(rng: &mut impl Rng, count: usize) -> Vec<Product> {
    (0..count)
        .map(|_| {
            let product_id = random_uuid(rng);
            let product_name = random_product_name(rng);
            let manufacturer = random_company_name(rng);
            Product::new(product_id, product_name, manufacturer)
        })
        .collect()
}

/// Build the startup catalogue of [`PRODUCT_COUNT`] products from OS entropy.
pub fn generate_catalog() -> Vec<Product> {
    let mut rng = StdRng::from_entropy();
    let products = generate_products(&mut rng, PRODUCT_COUNT);
    info!(count = products.len(), "Generated product catalogue");
    products
}
