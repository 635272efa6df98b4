/// Rendering: sidebar and menu bar, the hospital map, and the results table.

pub mod map;
pub mod panels;
pub mod table;
