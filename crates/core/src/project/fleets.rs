use crate::binder::{apply_field, resolve_headers};
use crate::dictionary::SubstitutionTable;
use crate::fields::{lookup, FieldDef, FLEET_FIELDS, TASK_FORCE_FIELDS, WAR_SHIP_FIELDS};
use crate::model::{Fleet, TaskForce, WarShip};
use hoi4gen_sheet::Sheet;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use tracing::warn;

const FLEET_KEY: &str = "Name";
const TASK_FORCE_KEY: &str = "TaskForce.Name";
const SHIP_KEY: &str = "TaskForce.Ship.Name";

/// Which level of the naval hierarchy a bound column targets.
enum FleetColumn {
    Fleet(&'static FieldDef<Fleet>),
    TaskForce(&'static FieldDef<TaskForce>),
    Ship(&'static FieldDef<WarShip>),
}

/// Bind a canonical fleet-sheet header by stripping the deepest matching
/// dotted prefix, then resolving the suffix in that kind's registry.
fn bind_fleet_column(name: &str) -> Option<FleetColumn> {
    if let Some(field) = name.strip_prefix("TaskForce.Ship.") {
        return match lookup(WAR_SHIP_FIELDS, field) {
            Some(def) => Some(FleetColumn::Ship(def)),
            None => {
                warn!("unknown field WarShip.{field}");
                None
            }
        };
    }
    if let Some(field) = name.strip_prefix("TaskForce.") {
        return match lookup(TASK_FORCE_FIELDS, field) {
            Some(def) => Some(FleetColumn::TaskForce(def)),
            None => {
                warn!("unknown field TaskForce.{field}");
                None
            }
        };
    }
    match lookup(FLEET_FIELDS, name) {
        Some(def) => Some(FleetColumn::Fleet(def)),
        None => {
            warn!("unknown field Fleet.{name}");
            None
        }
    }
}

/// Project a `fleets` sheet into the Fleet → TaskForce → WarShip tree.
///
/// Fleet and task-force keys are scoped to their parent and merge on
/// repeat; ship names must be unique across the whole owning fleet, and a
/// duplicate discards the row with a warning. A row whose ship key is blank
/// resolves (or creates) its fleet and task force but contributes no field
/// data.
#[must_use]
pub fn load_fleets(sheet: &Sheet, table: &SubstitutionTable) -> Vec<Fleet> {
    let Some(header) = sheet.header() else {
        return Vec::new();
    };
    let headers = resolve_headers(header, table);

    let mut bound: HashMap<usize, FleetColumn> = HashMap::new();
    let mut fleet_key = None;
    let mut task_force_key = None;
    let mut ship_key = None;
    for (&col, name) in &headers {
        match name.as_str() {
            FLEET_KEY => fleet_key = Some(col),
            TASK_FORCE_KEY => task_force_key = Some(col),
            SHIP_KEY => ship_key = Some(col),
            _ => {}
        }
        if let Some(column) = bind_fleet_column(name) {
            bound.insert(col, column);
        }
    }

    let (Some(fleet_key), Some(task_force_key), Some(ship_key)) =
        (fleet_key, task_force_key, ship_key)
    else {
        warn!(
            "fleet sheet '{}' is missing a required key column; sheet skipped",
            sheet.name()
        );
        return Vec::new();
    };

    let mut fleets: Vec<Fleet> = Vec::new();
    let mut fleet_by_name: IndexMap<String, usize> = IndexMap::new();
    // Parallel to `fleets`: task-force keys scoped per fleet, and the
    // fleet-wide ship name set used for duplicate detection.
    let mut task_forces_by_name: Vec<IndexMap<String, usize>> = Vec::new();
    let mut ship_names: Vec<HashSet<String>> = Vec::new();

    for row in sheet.data_rows() {
        let fleet_index = match row.text(fleet_key) {
            // Blank key: carry into the most recently created fleet.
            None => match fleets.len().checked_sub(1) {
                Some(index) => index,
                None => continue,
            },
            Some(name) => match fleet_by_name.get(name) {
                Some(&index) => index,
                None => {
                    fleets.push(Fleet::default());
                    task_forces_by_name.push(IndexMap::new());
                    ship_names.push(HashSet::new());
                    fleet_by_name.insert(name.to_string(), fleets.len() - 1);
                    fleets.len() - 1
                }
            },
        };

        let task_force_index = match row.text(task_force_key) {
            None => match fleets[fleet_index].task_forces.len().checked_sub(1) {
                Some(index) => index,
                None => continue,
            },
            Some(name) => match task_forces_by_name[fleet_index].get(name) {
                Some(&index) => index,
                None => {
                    fleets[fleet_index].task_forces.push(TaskForce::default());
                    let index = fleets[fleet_index].task_forces.len() - 1;
                    task_forces_by_name[fleet_index].insert(name.to_string(), index);
                    index
                }
            },
        };

        let Some(ship_name) = row.text(ship_key) else {
            continue;
        };
        if !ship_names[fleet_index].insert(ship_name.to_string()) {
            warn!(
                "duplicate ship name '{}' at row {}; row discarded",
                ship_name,
                row.display_number()
            );
            continue;
        }

        fleets[fleet_index].task_forces[task_force_index]
            .ships
            .push(WarShip::default());
        let ship_index = fleets[fleet_index].task_forces[task_force_index].ships.len() - 1;

        for cell in row.cells() {
            match bound.get(&cell.col) {
                Some(FleetColumn::Fleet(def)) => apply_field(
                    def,
                    &mut fleets[fleet_index],
                    &cell.text,
                    table,
                    row.display_number(),
                ),
                Some(FleetColumn::TaskForce(def)) => apply_field(
                    def,
                    &mut fleets[fleet_index].task_forces[task_force_index],
                    &cell.text,
                    table,
                    row.display_number(),
                ),
                Some(FleetColumn::Ship(def)) => apply_field(
                    def,
                    &mut fleets[fleet_index].task_forces[task_force_index].ships[ship_index],
                    &cell.text,
                    table,
                    row.display_number(),
                ),
                None => {}
            }
        }
    }

    fleets
}
