// Adapters layer: concrete output formats for the menu.

pub mod render;
