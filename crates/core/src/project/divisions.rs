use crate::binder::{apply_field, bind_fields, resolve_headers};
use crate::dictionary::SubstitutionTable;
use crate::fields::DIVISION_ENTITY_FIELDS;
use crate::model::DivisionEntity;
use hoi4gen_sheet::Sheet;

/// Project a `division_entities` sheet: flat, one entity per data row.
#[must_use]
pub fn load_division_entities(sheet: &Sheet, table: &SubstitutionTable) -> Vec<DivisionEntity> {
    let Some(header) = sheet.header() else {
        return Vec::new();
    };
    let headers = resolve_headers(header, table);
    let bound = bind_fields(&headers, "DivisionEntity", DIVISION_ENTITY_FIELDS, &[]);

    let mut entities = Vec::new();
    for row in sheet.data_rows() {
        if row.is_empty() {
            continue;
        }
        let mut entity = DivisionEntity::default();
        for cell in row.cells() {
            if let Some(def) = bound.get(&cell.col) {
                apply_field(def, &mut entity, &cell.text, table, row.display_number());
            }
        }
        entities.push(entity);
    }
    entities
}
