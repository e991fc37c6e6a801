//! Static dish catalog for the Zero Tamatamaya storefront.
//!
//! The menu is a fixed in-memory table: dishes are never created, mutated, or
//! removed at runtime. The serialized form of this table is embedded verbatim
//! in the chef prompt, which is why [`Dish`] derives [`serde::Serialize`].

use std::sync::LazyLock;

/// A single catalog entry with a bilingual name, unit price, image reference,
/// and category label.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Dish {
    /// Unique catalog identifier.
    pub id: u32,
    /// Dish name in English.
    pub name_en: String,
    /// Dish name in Arabic.
    pub name_ar: String,
    /// Unit price in RM (non-negative).
    pub price: f64,
    /// Remote image reference shown by graphical frontends; unused by the TUI
    /// itself but kept in the serialized catalog sent to the chef.
    pub image: String,
    /// Category label (Breakfast, Main, Dessert).
    pub category: String,
}

/// Build one catalog row.
fn dish(id: u32, name_en: &str, name_ar: &str, price: f64, image: &str, category: &str) -> Dish {
    Dish {
        id,
        name_en: name_en.to_string(),
        name_ar: name_ar.to_string(),
        price,
        image: image.to_string(),
        category: category.to_string(),
    }
}

/// The fixed dish table, built once on first access.
static MENU: LazyLock<Vec<Dish>> = LazyLock::new(|| {
    vec![
        dish(
            1,
            "Egyptian Foul",
            "فول مصري",
            8.50,
            "https://images.unsplash.com/photo-1541518763669-27fef04b14ea?auto=format&fit=crop&w=600",
            "Breakfast",
        ),
        dish(
            2,
            "Egyptian Ta'ameya",
            "طعمية مصري",
            7.00,
            "https://images.unsplash.com/photo-1593001874117-c99c5edbb097?auto=format&fit=crop&w=600",
            "Breakfast",
        ),
        dish(
            3,
            "Sudanese Gorassa",
            "قراصة سودانية",
            15.00,
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=600",
            "Main",
        ),
        dish(
            4,
            "Sudanese Asida",
            "عصيدة سودانية",
            12.50,
            "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?auto=format&fit=crop&w=600",
            "Main",
        ),
        dish(
            5,
            "Palestinian Musakhan",
            "مسخن فلسطينية",
            28.00,
            "https://images.unsplash.com/photo-1626700051175-656a433b1140?auto=format&fit=crop&w=600",
            "Main",
        ),
        dish(
            6,
            "Classic Shawarma",
            "شاورما",
            14.00,
            "https://images.unsplash.com/photo-1633383718081-22ac93e3dbf1?auto=format&fit=crop&w=600",
            "Main",
        ),
        dish(
            7,
            "Kunafa",
            "كنافة",
            10.00,
            "https://images.unsplash.com/photo-1511018556340-d16986a1c194?auto=format&fit=crop&w=600",
            "Dessert",
        ),
        dish(
            8,
            "Basbousa",
            "بسبوسة",
            9.00,
            "https://images.unsplash.com/photo-1590401882046-60824b232677?auto=format&fit=crop&w=600",
            "Dessert",
        ),
    ]
});

/// What: Return the full dish catalog.
///
/// Inputs: None.
///
/// Output:
/// - Slice over the fixed dish table, in menu order.
#[must_use]
pub fn menu() -> &'static [Dish] {
    &MENU
}

/// What: Look up a dish by its catalog identifier.
///
/// Inputs:
/// - `id`: Catalog identifier.
///
/// Output:
/// - `Some(&Dish)` for a known id; `None` otherwise.
#[must_use]
pub fn dish_by_id(id: u32) -> Option<&'static Dish> {
    MENU.iter().find(|d| d.id == id)
}

/// What: Return the unit price for a catalog identifier.
///
/// Inputs:
/// - `id`: Catalog identifier, possibly unknown.
///
/// Output:
/// - The dish price, or `0.0` when the id is absent from the catalog.
///
/// Details:
/// - Unknown ids are deliberately priced at zero rather than rejected; cart
///   entries referencing them count toward the item total but not the price.
#[must_use]
pub fn price_of(id: u32) -> f64 {
    dish_by_id(id).map_or(0.0, |d| d.price)
}
