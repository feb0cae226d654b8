use crate::dictionary::{SubstitutionTable, COLUMN_NAME_CATEGORY, UNIT_NAME_CATEGORY};
use crate::fields::parse_flag;
use crate::model::DivisionTemplate;
use hoi4gen_sheet::{Row, Sheet};
use std::collections::BTreeMap;
use tracing::warn;

/// Row sentinel separating template blocks within one sheet.
const BLOCK_SEPARATOR: &str = "!";

/// Parse a `division_templates` sheet: a sequence of column-major template
/// blocks.
///
/// Each block is one header row followed by data rows, terminated by a row
/// whose first populated cell is `"!"` (or the end of the sheet). Within a
/// block each column's non-blank cells, top to bottom, form one ordered
/// group: `Regiment` and `Support` columns append their group to the
/// template (outer order = left-to-right among columns of that kind),
/// scalar columns take their first non-blank value. A block with no data
/// rows yields no template; an empty header row ends the sheet.
#[must_use]
pub fn load_division_templates(
    sheet: &Sheet,
    table: &SubstitutionTable,
) -> Vec<DivisionTemplate> {
    let mut templates = Vec::new();
    let mut rows = sheet.rows().iter();

    loop {
        let Some(header) = rows.next() else {
            break;
        };
        if header.is_empty() {
            break;
        }
        let width = header.width();

        let mut columns: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        let mut saw_data = false;
        let mut terminated = false;
        for row in rows.by_ref() {
            if row.first_text() == Some(BLOCK_SEPARATOR) {
                terminated = true;
                break;
            }
            if row.is_empty() {
                continue;
            }
            saw_data = true;
            for cell in row.cells() {
                // Cells beyond the header's width have no column kind.
                if cell.col >= width {
                    continue;
                }
                columns.entry(cell.col).or_default().push(cell.text.clone());
            }
        }

        if saw_data {
            templates.push(build_template(
                templates.len(),
                header,
                &columns,
                table,
            ));
        }
        if !terminated {
            break;
        }
    }

    templates
}

fn build_template(
    id: usize,
    header: &Row,
    columns: &BTreeMap<usize, Vec<String>>,
    table: &SubstitutionTable,
) -> DivisionTemplate {
    let mut template = DivisionTemplate {
        id,
        ..Default::default()
    };

    let substitute_units = |values: &[String]| -> Vec<String> {
        values
            .iter()
            .map(|value| table.substitute(UNIT_NAME_CATEGORY, value).to_string())
            .collect()
    };

    for (&col, values) in columns {
        let Some(raw) = header.text(col) else {
            continue;
        };
        match table.substitute(COLUMN_NAME_CATEGORY, raw) {
            "Regiment" => template.regiments.push(substitute_units(values)),
            "Support" => template.support.push(substitute_units(values)),
            "Name" => {
                if let Some(first) = values.first() {
                    template.name = first.clone();
                }
            }
            "DivisionNamesGroup" => {
                if let Some(first) = values.first() {
                    template.division_names_group = first.clone();
                }
            }
            "IsLocked" => {
                if let Some(first) = values.first() {
                    match parse_flag("DivisionTemplate.IsLocked", first) {
                        Ok(flag) => template.is_locked = flag,
                        Err(err) => warn!("{err}"),
                    }
                }
            }
            other => warn!("unknown template column '{other}'"),
        }
    }

    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoi4gen_sheet::Row;

    fn template_sheet(rows: Vec<Vec<(usize, &str)>>) -> Sheet {
        let mut sheet = Sheet::new("division_templates");
        for (i, pairs) in rows.into_iter().enumerate() {
            sheet.push_row(Row::from_pairs(i, pairs));
        }
        sheet
    }

    #[test]
    fn columns_become_ordered_groups() {
        let sheet = template_sheet(vec![
            vec![(0, "Name"), (1, "Regiment"), (2, "Regiment"), (3, "Support")],
            vec![(0, "1. Division"), (1, "A"), (2, "C"), (3, "D")],
            vec![(1, "B")],
        ]);
        let templates = load_division_templates(&sheet, &SubstitutionTable::new());

        assert_eq!(templates.len(), 1);
        assert_eq!(
            templates[0].regiments,
            vec![
                vec!["A".to_string(), "B".to_string()],
                vec!["C".to_string()],
            ]
        );
        assert_eq!(templates[0].support, vec![vec!["D".to_string()]]);
        assert_eq!(templates[0].name, "1. Division");
    }

    #[test]
    fn scalar_columns_take_first_non_blank() {
        let sheet = template_sheet(vec![
            vec![(0, "Name"), (1, "IsLocked"), (2, "DivisionNamesGroup")],
            vec![(1, "1")],
            vec![(0, "Garde"), (1, "0"), (2, "%d. Garde")],
        ]);
        let templates = load_division_templates(&sheet, &SubstitutionTable::new());

        assert_eq!(templates[0].name, "Garde");
        assert!(templates[0].is_locked);
        assert_eq!(templates[0].division_names_group, "%d. Garde");
    }

    #[test]
    fn separator_rows_split_blocks_and_number_templates() {
        let sheet = template_sheet(vec![
            vec![(0, "Name"), (1, "Regiment")],
            vec![(0, "First"), (1, "A")],
            vec![(0, "!")],
            vec![(0, "Name"), (1, "Regiment")],
            vec![(0, "Second"), (1, "B")],
        ]);
        let templates = load_division_templates(&sheet, &SubstitutionTable::new());

        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].id, 0);
        assert_eq!(templates[0].name, "First");
        assert_eq!(templates[1].id, 1);
        assert_eq!(templates[1].name, "Second");
    }

    #[test]
    fn unit_names_are_substituted() {
        let mut table = SubstitutionTable::new();
        table.insert(UNIT_NAME_CATEGORY, "Infanterie", "infantry");
        table.insert(COLUMN_NAME_CATEGORY, "Brigade", "Regiment");

        let sheet = template_sheet(vec![
            vec![(0, "Name"), (1, "Brigade")],
            vec![(0, "1. Division"), (1, "Infanterie")],
        ]);
        let templates = load_division_templates(&sheet, &table);
        assert_eq!(templates[0].regiments, vec![vec!["infantry".to_string()]]);
    }

    #[test]
    fn block_without_data_rows_yields_no_template() {
        let sheet = template_sheet(vec![
            vec![(0, "Name"), (1, "Regiment")],
            vec![(0, "!")],
            vec![(0, "Name"), (1, "Regiment")],
            vec![(0, "Real"), (1, "A")],
        ]);
        let templates = load_division_templates(&sheet, &SubstitutionTable::new());

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "Real");
    }

    #[test]
    fn empty_header_row_ends_the_sheet() {
        let sheet = template_sheet(vec![
            vec![(0, "Name"), (1, "Regiment")],
            vec![(0, "First"), (1, "A")],
            vec![(0, "!")],
            vec![],
            vec![(0, "Name")],
            vec![(0, "Ignored")],
        ]);
        let templates = load_division_templates(&sheet, &SubstitutionTable::new());
        assert_eq!(templates.len(), 1);
    }

    #[test]
    fn cells_beyond_header_width_are_ignored() {
        let sheet = template_sheet(vec![
            vec![(0, "Name"), (1, "Regiment")],
            vec![(0, "First"), (1, "A"), (5, "stray")],
        ]);
        let templates = load_division_templates(&sheet, &SubstitutionTable::new());
        assert_eq!(templates[0].regiments, vec![vec!["A".to_string()]]);
    }

    #[test]
    fn empty_sheet_is_a_valid_no_template_result() {
        assert!(
            load_division_templates(&Sheet::new("division_templates"), &SubstitutionTable::new())
                .is_empty()
        );
    }
}
