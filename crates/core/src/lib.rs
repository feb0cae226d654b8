//! Roster projection for hoi4gen.
//!
//! Turns sparse tabular unit rosters (divisions, equipment variants, fleets,
//! air wings) into the entity graphs emitted as HOI4 unit-history script.
//! The pipeline per sheet: resolve raw headers to canonical field names
//! through the `column_name` substitution category, bind each column to a
//! typed field of the target entity kind, then project the data rows into
//! the owned entity tree — grouping on key columns with carry-forward for
//! blank key cells.
//!
//! Structural problems (missing key columns, unknown fields, duplicate leaf
//! keys, unconvertible cells) are reported as `tracing` warnings and drop
//! only the affected column, cell or row; they never abort a run.

pub mod binder;
pub mod country;
pub mod dictionary;
pub mod error;
pub mod fields;
pub mod model;
pub mod project;

/// Re-export the per-country asset bundle.
pub use country::CountryAssets;
/// Re-export the substitution table.
pub use dictionary::SubstitutionTable;
/// Re-export core error types.
pub use error::{CoreError, CoreResult};
