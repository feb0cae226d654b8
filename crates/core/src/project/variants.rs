use crate::binder::{apply_field, bind_fields, resolve_headers};
use crate::dictionary::{
    SubstitutionTable, EQUIPMENT_MODEL_CATEGORY, EQUIPMENT_SLOT_CATEGORY,
};
use crate::fields::EQUIPMENT_VARIANT_FIELDS;
use crate::model::EquipmentVariant;
use hoi4gen_sheet::Sheet;
use indexmap::IndexMap;
use tracing::warn;

/// Columns accumulated into the variant's module and upgrade mappings
/// instead of binding to a field.
const PSEUDO_COLUMNS: &[&str] = &["Slot", "Equipment", "UpgradeItem", "UpgradeLevel"];

/// Project an equipment-variant sheet: a single-level hierarchy keyed by
/// variant name.
///
/// A repeated name resolves to the existing variant and keeps accumulating
/// (its rows merge); a blank name carries into the most recently created
/// variant. Each row may additionally contribute one `(Slot, Equipment)`
/// module entry and one `(UpgradeItem, UpgradeLevel)` upgrade entry.
#[must_use]
pub fn load_equipment_variants(
    sheet: &Sheet,
    table: &SubstitutionTable,
) -> Vec<EquipmentVariant> {
    let Some(header) = sheet.header() else {
        return Vec::new();
    };
    let headers = resolve_headers(header, table);
    let bound = bind_fields(
        &headers,
        "EquipmentVariant",
        EQUIPMENT_VARIANT_FIELDS,
        PSEUDO_COLUMNS,
    );

    let Some(name_col) = headers
        .iter()
        .find(|(_, name)| name.as_str() == "Name")
        .map(|(&col, _)| col)
    else {
        warn!(
            "variant sheet '{}' has no Name column; sheet skipped",
            sheet.name()
        );
        return Vec::new();
    };

    let mut variants: Vec<EquipmentVariant> = Vec::new();
    let mut by_name: IndexMap<String, usize> = IndexMap::new();

    for row in sheet.data_rows() {
        let current = match row.text(name_col) {
            // Blank key: carry into the most recently created variant.
            None => match variants.len().checked_sub(1) {
                Some(index) => index,
                None => continue,
            },
            Some(name) => match by_name.get(name) {
                Some(&index) => index,
                None => {
                    variants.push(EquipmentVariant::default());
                    by_name.insert(name.to_string(), variants.len() - 1);
                    variants.len() - 1
                }
            },
        };
        let variant = &mut variants[current];

        let mut slot = None;
        let mut equipment = None;
        let mut upgrade_item = None;
        let mut upgrade_level = None;

        for cell in row.cells() {
            if let Some(def) = bound.get(&cell.col) {
                apply_field(def, variant, &cell.text, table, row.display_number());
                continue;
            }
            match headers.get(&cell.col).map(String::as_str) {
                Some("Slot") => {
                    slot = Some(table.substitute(EQUIPMENT_SLOT_CATEGORY, &cell.text));
                }
                Some("Equipment") => {
                    equipment = Some(table.substitute(EQUIPMENT_MODEL_CATEGORY, &cell.text));
                }
                Some("UpgradeItem") => upgrade_item = Some(cell.text.as_str()),
                Some("UpgradeLevel") => match cell.text.trim().parse::<i64>() {
                    Ok(level) => upgrade_level = Some(level),
                    Err(_) => warn!(
                        "row {}: cannot convert '{}' to integer for UpgradeLevel",
                        row.display_number(),
                        cell.text
                    ),
                },
                _ => {}
            }
        }

        if let (Some(slot), Some(equipment)) = (slot, equipment) {
            variant
                .modules
                .insert(slot.to_string(), equipment.to_string());
        }
        if let (Some(item), Some(level)) = (upgrade_item, upgrade_level) {
            if level > 0 {
                variant.upgrades.insert(item.to_string(), level);
            }
        }
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoi4gen_sheet::Row;

    fn sheet(rows: Vec<Vec<(usize, &str)>>) -> Sheet {
        let mut sheet = Sheet::new("ship_variants");
        for (i, pairs) in rows.into_iter().enumerate() {
            sheet.push_row(Row::from_pairs(i, pairs));
        }
        sheet
    }

    #[test]
    fn modules_accumulate_across_carried_rows() {
        let sheet = sheet(vec![
            vec![(0, "Name"), (1, "Slot"), (2, "Equipment")],
            vec![(0, "V1"), (1, "hull"), (2, "E1")],
            vec![(1, "turret"), (2, "E2")],
        ]);
        let variants = load_equipment_variants(&sheet, &SubstitutionTable::new());

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].modules.get("hull").map(String::as_str), Some("E1"));
        assert_eq!(variants[0].modules.get("turret").map(String::as_str), Some("E2"));
    }

    #[test]
    fn repeated_name_merges_into_the_same_variant() {
        let sheet = sheet(vec![
            vec![(0, "Name"), (1, "Slot"), (2, "Equipment"), (3, "Type")],
            vec![(0, "V1"), (1, "hull"), (2, "E1")],
            vec![(0, "V2"), (3, "light_armor")],
            vec![(0, "V1"), (1, "engine"), (2, "E3")],
        ]);
        let variants = load_equipment_variants(&sheet, &SubstitutionTable::new());

        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].modules.len(), 2);
        assert_eq!(variants[1].variant_type, "light_armor");
    }

    #[test]
    fn module_entry_needs_both_slot_and_equipment() {
        let sheet = sheet(vec![
            vec![(0, "Name"), (1, "Slot"), (2, "Equipment")],
            vec![(0, "V1"), (1, "hull")],
            vec![(2, "E9")],
        ]);
        let variants = load_equipment_variants(&sheet, &SubstitutionTable::new());
        assert!(variants[0].modules.is_empty());
    }

    #[test]
    fn upgrades_require_positive_levels() {
        let sheet = sheet(vec![
            vec![(0, "Name"), (1, "UpgradeItem"), (2, "UpgradeLevel")],
            vec![(0, "V1"), (1, "reliability"), (2, "3")],
            vec![(1, "armor"), (2, "0")],
            vec![(1, "engine"), (2, "lots")],
        ]);
        let variants = load_equipment_variants(&sheet, &SubstitutionTable::new());

        assert_eq!(variants[0].upgrades.len(), 1);
        assert_eq!(variants[0].upgrades.get("reliability"), Some(&3));
    }

    #[test]
    fn slot_and_equipment_are_substituted() {
        let mut table = SubstitutionTable::new();
        table.insert(EQUIPMENT_SLOT_CATEGORY, "Rumpf", "fixed_ship_armor_slot");
        table.insert(EQUIPMENT_MODEL_CATEGORY, "Panzerung I", "ship_armor_1");

        let sheet = sheet(vec![
            vec![(0, "Name"), (1, "Slot"), (2, "Equipment")],
            vec![(0, "V1"), (1, "Rumpf"), (2, "Panzerung I")],
        ]);
        let variants = load_equipment_variants(&sheet, &table);
        assert_eq!(
            variants[0].modules.get("fixed_ship_armor_slot").map(String::as_str),
            Some("ship_armor_1")
        );
    }

    #[test]
    fn leading_blank_keys_are_skipped() {
        let sheet = sheet(vec![
            vec![(0, "Name"), (1, "Slot"), (2, "Equipment")],
            vec![(1, "hull"), (2, "E1")],
            vec![(0, "V1"), (1, "turret"), (2, "E2")],
        ]);
        let variants = load_equipment_variants(&sheet, &SubstitutionTable::new());

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].modules.len(), 1);
    }

    #[test]
    fn missing_name_column_skips_the_sheet() {
        let sheet = sheet(vec![
            vec![(0, "Type"), (1, "Slot")],
            vec![(0, "light_armor"), (1, "hull")],
        ]);
        assert!(load_equipment_variants(&sheet, &SubstitutionTable::new()).is_empty());
    }
}
