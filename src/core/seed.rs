use crate::domain::model::{Course, Price, RawEntryInput};

pub const DEFAULT_MENU_TITLE: &str = "Digital Menu";

/// Dishes every session starts with when no config file is given.
pub(crate) const DEFAULT_SEED: [(&str, &str, Course, Price); 6] = [
    (
        "Caesar Salad",
        "Fresh romaine lettuce with parmesan cheese and croutons",
        Course::Starter,
        Price::from_cents(1299),
    ),
    (
        "Grilled Salmon",
        "Atlantic salmon with lemon herb butter and seasonal vegetables",
        Course::Main,
        Price::from_cents(2499),
    ),
    (
        "Chocolate Lava Cake",
        "Warm chocolate cake with molten center and vanilla ice cream",
        Course::Dessert,
        Price::from_cents(899),
    ),
    (
        "Garlic Bread",
        "Toasted artisan bread with garlic butter and herbs",
        Course::Starter,
        Price::from_cents(699),
    ),
    (
        "Beef Tenderloin",
        "8oz tenderloin steak with red wine reduction and mashed potatoes",
        Course::Main,
        Price::from_cents(3299),
    ),
    (
        "Tiramisu",
        "Classic Italian dessert with coffee-soaked ladyfingers and mascarpone",
        Course::Dessert,
        Price::from_cents(999),
    ),
];

/// The built-in seed as raw rows, for config files and round trips.
pub fn default_seed_inputs() -> Vec<RawEntryInput> {
    DEFAULT_SEED
        .iter()
        .map(|(name, description, course, price)| {
            RawEntryInput::new(*name, *description, course.as_str(), price.to_string())
        })
        .collect()
}
