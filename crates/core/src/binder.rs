//! Header resolution and column binding, computed once per sheet.

use crate::dictionary::{SubstitutionTable, COLUMN_NAME_CATEGORY};
use crate::fields::{lookup, FieldDef};
use hoi4gen_sheet::Row;
use std::collections::HashMap;
use tracing::warn;

/// Resolve the header row to canonical field names, keyed by column index.
///
/// Blank header cells are absent from the result, so their columns stay
/// unmapped. Unknown raw headers pass through unchanged; whether they bind
/// is decided against a field registry afterwards.
#[must_use]
pub fn resolve_headers(header: &Row, table: &SubstitutionTable) -> HashMap<usize, String> {
    header
        .cells()
        .iter()
        .map(|cell| {
            (
                cell.col,
                table
                    .substitute(COLUMN_NAME_CATEGORY, &cell.text)
                    .to_string(),
            )
        })
        .collect()
}

/// Bind resolved headers to one entity kind's field registry.
///
/// Names missing from the registry are reported as unknown fields and left
/// unmapped, unless they appear in `pseudo` (columns handled specially by
/// the caller, e.g. `Slot`/`Equipment` on variant sheets).
#[must_use]
pub fn bind_fields<T>(
    headers: &HashMap<usize, String>,
    kind: &str,
    defs: &'static [FieldDef<T>],
    pseudo: &[&str],
) -> HashMap<usize, &'static FieldDef<T>> {
    let mut bound = HashMap::new();
    for (&col, name) in headers {
        if let Some(def) = lookup(defs, name) {
            bound.insert(col, def);
        } else if !pseudo.contains(&name.as_str()) {
            warn!("unknown field {kind}.{name}");
        }
    }
    bound
}

/// Substitute and apply one cell to a bound field, isolating conversion
/// failures to that single assignment.
pub fn apply_field<T>(
    def: &FieldDef<T>,
    target: &mut T,
    raw: &str,
    table: &SubstitutionTable,
    row_number: usize,
) {
    let value = table.substitute(def.category, raw);
    if let Err(err) = (def.apply)(target, value) {
        warn!("row {row_number}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::DIVISION_ENTITY_FIELDS;
    use crate::model::DivisionEntity;

    #[test]
    fn headers_resolve_through_column_name_category() {
        let mut table = SubstitutionTable::new();
        table.insert(COLUMN_NAME_CATEGORY, "Standort", "Location");

        let header = Row::from_pairs(0, [(0, "Standort"), (2, "NameOrder")]);
        let headers = resolve_headers(&header, &table);

        assert_eq!(headers.get(&0).map(String::as_str), Some("Location"));
        assert_eq!(headers.get(&1), None);
        assert_eq!(headers.get(&2).map(String::as_str), Some("NameOrder"));
    }

    #[test]
    fn unknown_fields_stay_unmapped() {
        let table = SubstitutionTable::new();
        let header = Row::from_pairs(0, [(0, "Location"), (1, "Morale")]);
        let headers = resolve_headers(&header, &table);
        let bound = bind_fields(&headers, "DivisionEntity", DIVISION_ENTITY_FIELDS, &[]);

        assert!(bound.contains_key(&0));
        assert!(!bound.contains_key(&1));
    }

    #[test]
    fn binding_keys_on_column_index_not_position() {
        // A header row with gaps must bind each name to its true column.
        let table = SubstitutionTable::new();
        let header = Row::from_pairs(0, [(3, "Location"), (7, "NameOrder")]);
        let headers = resolve_headers(&header, &table);
        let bound = bind_fields(&headers, "DivisionEntity", DIVISION_ENTITY_FIELDS, &[]);

        assert_eq!(bound.get(&3).map(|d| d.name), Some("Location"));
        assert_eq!(bound.get(&7).map(|d| d.name), Some("NameOrder"));
    }

    #[test]
    fn apply_field_substitutes_then_converts() {
        let mut table = SubstitutionTable::new();
        table.insert("DivisionEntity.Location", "Berlin", "6521");

        let def = lookup(DIVISION_ENTITY_FIELDS, "Location").unwrap();
        let mut entity = DivisionEntity::default();
        apply_field(def, &mut entity, "Berlin", &table, 2);
        assert_eq!(entity.location, 6521);
    }

    #[test]
    fn apply_field_keeps_row_alive_on_bad_cell() {
        let table = SubstitutionTable::new();
        let def = lookup(DIVISION_ENTITY_FIELDS, "Location").unwrap();
        let mut entity = DivisionEntity {
            location: 3,
            ..Default::default()
        };
        apply_field(def, &mut entity, "not-a-place", &table, 2);
        assert_eq!(entity.location, 3);
    }
}
