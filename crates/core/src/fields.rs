//! Static field descriptor registries: one table per entity kind, mapping a
//! canonical field name to its substitution category and a typed setter.
//!
//! The category is `<Kind>.<Field>` unless the field declares an override;
//! the two overrides (`WarShip.Equipment`, `AirWing.Type`) share the
//! `EquipmentVariant.Type` category so every equipment reference is aliased
//! through one namespace.

use crate::error::{CoreError, CoreResult};
use crate::model::{
    AirWing, DivisionEntity, EquipmentVariant, Fleet, TaskForce, WarShip,
};

/// One settable field of an entity kind.
pub struct FieldDef<T: 'static> {
    /// Canonical field name as it appears in resolved headers.
    pub name: &'static str,
    /// Substitution category applied to values before conversion.
    pub category: &'static str,
    /// Typed setter; fails on unconvertible text without touching the field.
    pub apply: fn(&mut T, &str) -> CoreResult<()>,
}

/// Find a field descriptor by canonical name.
#[must_use]
pub fn lookup<'a, T>(defs: &'a [FieldDef<T>], name: &str) -> Option<&'a FieldDef<T>> {
    defs.iter().find(|def| def.name == name)
}

pub(crate) fn parse_int(field: &'static str, text: &str) -> CoreResult<i64> {
    text.trim()
        .parse()
        .map_err(|_| CoreError::convert(field, "integer", text))
}

pub(crate) fn parse_float(field: &'static str, text: &str) -> CoreResult<f32> {
    text.trim()
        .parse()
        .map_err(|_| CoreError::convert(field, "number", text))
}

/// Parse a flag cell: `true`/`false`, `yes`/`no`, or any integer where
/// nonzero means set.
pub(crate) fn parse_flag(field: &'static str, text: &str) -> CoreResult<bool> {
    match text.trim() {
        "true" | "yes" => Ok(true),
        "false" | "no" => Ok(false),
        other => other
            .parse::<i64>()
            .map(|n| n != 0)
            .map_err(|_| CoreError::convert(field, "flag", text)),
    }
}

pub const DIVISION_ENTITY_FIELDS: &[FieldDef<DivisionEntity>] = &[
    FieldDef {
        name: "Location",
        category: "DivisionEntity.Location",
        apply: |entity, text| {
            entity.location = parse_int("DivisionEntity.Location", text)?;
            Ok(())
        },
    },
    FieldDef {
        name: "StartExperienceFactor",
        category: "DivisionEntity.StartExperienceFactor",
        apply: |entity, text| {
            entity.start_experience_factor =
                parse_float("DivisionEntity.StartExperienceFactor", text)?;
            Ok(())
        },
    },
    FieldDef {
        name: "StartEquipmentFactor",
        category: "DivisionEntity.StartEquipmentFactor",
        apply: |entity, text| {
            entity.start_equipment_factor =
                parse_float("DivisionEntity.StartEquipmentFactor", text)?;
            Ok(())
        },
    },
    FieldDef {
        name: "NameOrder",
        category: "DivisionEntity.NameOrder",
        apply: |entity, text| {
            entity.name_order = parse_int("DivisionEntity.NameOrder", text)?;
            Ok(())
        },
    },
    FieldDef {
        name: "DivisionTemplate",
        category: "DivisionEntity.DivisionTemplate",
        apply: |entity, text| {
            entity.division_template = text.to_string();
            Ok(())
        },
    },
];

pub const EQUIPMENT_VARIANT_FIELDS: &[FieldDef<EquipmentVariant>] = &[
    FieldDef {
        name: "Name",
        category: "EquipmentVariant.Name",
        apply: |variant, text| {
            variant.name = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "Type",
        category: "EquipmentVariant.Type",
        apply: |variant, text| {
            variant.variant_type = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "NameGroup",
        category: "EquipmentVariant.NameGroup",
        apply: |variant, text| {
            variant.name_group = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "Icon",
        category: "EquipmentVariant.Icon",
        apply: |variant, text| {
            variant.icon = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "Obsolete",
        category: "EquipmentVariant.Obsolete",
        apply: |variant, text| {
            variant.obsolete = parse_flag("EquipmentVariant.Obsolete", text)?;
            Ok(())
        },
    },
    FieldDef {
        name: "ParentVersion",
        category: "EquipmentVariant.ParentVersion",
        apply: |variant, text| {
            variant.parent_version = parse_int("EquipmentVariant.ParentVersion", text)?;
            Ok(())
        },
    },
];

pub const FLEET_FIELDS: &[FieldDef<Fleet>] = &[
    FieldDef {
        name: "Name",
        category: "Fleet.Name",
        apply: |fleet, text| {
            fleet.name = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "NavalBase",
        category: "Fleet.NavalBase",
        apply: |fleet, text| {
            fleet.naval_base = parse_int("Fleet.NavalBase", text)?;
            Ok(())
        },
    },
];

pub const TASK_FORCE_FIELDS: &[FieldDef<TaskForce>] = &[
    FieldDef {
        name: "Name",
        category: "TaskForce.Name",
        apply: |task_force, text| {
            task_force.name = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "Location",
        category: "TaskForce.Location",
        apply: |task_force, text| {
            task_force.location = parse_int("TaskForce.Location", text)?;
            Ok(())
        },
    },
];

pub const WAR_SHIP_FIELDS: &[FieldDef<WarShip>] = &[
    FieldDef {
        name: "Name",
        category: "WarShip.Name",
        apply: |ship, text| {
            ship.name = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "Definition",
        category: "WarShip.Definition",
        apply: |ship, text| {
            ship.definition = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "Equipment",
        // Equipment references share the variant type namespace.
        category: "EquipmentVariant.Type",
        apply: |ship, text| {
            ship.equipment = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "VersionName",
        category: "WarShip.VersionName",
        apply: |ship, text| {
            ship.version_name = text.to_string();
            Ok(())
        },
    },
];

pub const AIR_WING_FIELDS: &[FieldDef<AirWing>] = &[
    FieldDef {
        name: "Location",
        category: "AirWing.Location",
        apply: |wing, text| {
            wing.location = parse_int("AirWing.Location", text)?;
            Ok(())
        },
    },
    FieldDef {
        name: "Amount",
        category: "AirWing.Amount",
        apply: |wing, text| {
            wing.amount = parse_int("AirWing.Amount", text)?;
            Ok(())
        },
    },
    FieldDef {
        name: "Type",
        // Wing types share the variant type namespace.
        category: "EquipmentVariant.Type",
        apply: |wing, text| {
            wing.wing_type = text.to_string();
            Ok(())
        },
    },
    FieldDef {
        name: "VersionName",
        category: "AirWing.VersionName",
        apply: |wing, text| {
            wing.version_name = text.to_string();
            Ok(())
        },
    },
];
