//! Sheet projectors: one forward pass per sheet from sparse rows to the
//! owned entity tree.

mod air;
mod divisions;
mod fleets;
mod templates;
mod variants;

pub use air::load_air_bases;
pub use divisions::load_division_entities;
pub use fleets::load_fleets;
pub use templates::load_division_templates;
pub use variants::load_equipment_variants;
