//! Sparse tabular input for hoi4gen.
//!
//! A worksheet is modelled as an ordered sequence of sparse rows: each row
//! holds only its populated cells, as `(column index, text)` pairs sorted by
//! column. Blank cells are absent rather than zero-length, so downstream
//! grouping logic can treat "no cell" and "blank key" uniformly. By
//! convention the first row of a sheet is its header row.
//!
//! Shared-string and number formatting concerns are handled at the xlsx
//! boundary; everything above it sees plain text.
//!
//! # Examples
//!
//! ```
//! use hoi4gen_sheet::{Row, Sheet};
//!
//! let mut sheet = Sheet::new("fleets");
//! sheet.push_row(Row::from_pairs(0, [(0, "Name"), (2, "NavalBase")]));
//! sheet.push_row(Row::from_pairs(1, [(0, "Home Fleet"), (2, "4180")]));
//!
//! let header = sheet.header().unwrap();
//! assert_eq!(header.text(0), Some("Name"));
//! assert_eq!(header.text(1), None);
//! assert_eq!(sheet.data_rows().len(), 1);
//! ```

mod error;
mod row;
mod workbook;
mod xlsx;

/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export row and cell types.
pub use row::{Cell, Row};
/// Re-export sheet and workbook types.
pub use workbook::{Sheet, Workbook};
