//! The value substitution table: category-scoped raw → id aliasing.

use hoi4gen_sheet::{Sheet, Workbook};
use std::collections::HashMap;
use tracing::warn;

/// Category translating raw spreadsheet headers to canonical field names.
pub const COLUMN_NAME_CATEGORY: &str = "column_name";
/// Category translating unit names in division-template columns.
pub const UNIT_NAME_CATEGORY: &str = "unit_name";
/// Category translating equipment slot names.
pub const EQUIPMENT_SLOT_CATEGORY: &str = "equipment_slot";
/// Category translating equipment model names.
pub const EQUIPMENT_MODEL_CATEGORY: &str = "equipment_model";

/// Two-level lookup from category name to raw value to substituted value.
///
/// Lookup is substitute-if-present: a raw value (or a whole category) with no
/// entry passes through unchanged, so substitution is a fixed point on
/// already-substituted values.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    categories: HashMap<String, HashMap<String, String>>,
}

impl SubstitutionTable {
    /// Create an empty table (every lookup passes through).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one `category[name] = id` entry.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
    ) {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(name.into(), id.into());
    }

    /// Substitute `raw` within `category`, passing through when absent.
    #[must_use]
    pub fn substitute<'a>(&'a self, category: &str, raw: &'a str) -> &'a str {
        self.categories
            .get(category)
            .and_then(|entries| entries.get(raw))
            .map_or(raw, String::as_str)
    }

    /// Load one dictionary sheet into the table.
    ///
    /// The sheet carries `category`, `name` and `id` header cells, in any
    /// order, each required exactly once. Every data row contributes
    /// `category[name] = id`; absent cells read as empty strings, which are
    /// legal keys.
    pub fn load_sheet(&mut self, sheet: &Sheet) {
        let Some(header) = sheet.header() else {
            return;
        };

        let mut category_col = None;
        let mut name_col = None;
        let mut id_col = None;
        for cell in header.cells() {
            let slot = match cell.text.as_str() {
                "category" => &mut category_col,
                "name" => &mut name_col,
                "id" => &mut id_col,
                other => {
                    warn!("unrecognized dictionary header [{other}]");
                    continue;
                }
            };
            if slot.is_some() {
                warn!("duplicate dictionary header [{}]", cell.text);
            } else {
                *slot = Some(cell.col);
            }
        }

        let (Some(category_col), Some(name_col), Some(id_col)) = (category_col, name_col, id_col)
        else {
            warn!(
                "dictionary sheet '{}' is missing a required column (category, name, id)",
                sheet.name()
            );
            return;
        };

        for row in sheet.data_rows() {
            let category = row.text(category_col).unwrap_or("");
            let name = row.text(name_col).unwrap_or("");
            let id = row.text(id_col).unwrap_or("");
            self.insert(category, name, id);
        }
    }

    /// Build a table from every sheet of a dictionary workbook.
    #[must_use]
    pub fn from_workbook(book: &Workbook) -> Self {
        let mut table = Self::new();
        for sheet in book.sheets() {
            table.load_sheet(sheet);
        }
        table
    }
}
