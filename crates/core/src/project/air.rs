use crate::binder::{apply_field, bind_fields, resolve_headers};
use crate::dictionary::SubstitutionTable;
use crate::fields::AIR_WING_FIELDS;
use crate::model::{AirBase, AirWing};
use hoi4gen_sheet::Sheet;
use indexmap::IndexMap;

/// Project an `air_wings` sheet into air bases.
///
/// First pass: one wing per data row, dropping zero-amount wings and
/// carrying a zero/blank location forward from the previous kept wing.
/// Second pass: group the kept wings into bases keyed by location, in
/// first-seen location order.
#[must_use]
pub fn load_air_bases(sheet: &Sheet, table: &SubstitutionTable) -> Vec<AirBase> {
    let Some(header) = sheet.header() else {
        return Vec::new();
    };
    let headers = resolve_headers(header, table);
    let bound = bind_fields(&headers, "AirWing", AIR_WING_FIELDS, &[]);

    let mut wings: Vec<AirWing> = Vec::new();
    for row in sheet.data_rows() {
        if row.is_empty() {
            continue;
        }
        let mut wing = AirWing::default();
        for cell in row.cells() {
            if let Some(def) = bound.get(&cell.col) {
                apply_field(def, &mut wing, &cell.text, table, row.display_number());
            }
        }

        // A zero-amount wing is defined as absent.
        if wing.amount == 0 {
            continue;
        }
        if wing.location == 0 {
            let Some(previous) = wings.last() else {
                continue;
            };
            wing.location = previous.location;
        }
        wings.push(wing);
    }

    let mut bases: IndexMap<i64, AirBase> = IndexMap::new();
    for wing in wings {
        let location = wing.location;
        bases
            .entry(location)
            .or_insert_with(|| AirBase {
                location,
                wings: Vec::new(),
            })
            .wings
            .push(wing);
    }
    bases.into_values().collect()
}
