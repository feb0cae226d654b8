//! Per-country asset bundle: sheet dispatch plus the four emitted
//! artifacts.

use crate::dictionary::SubstitutionTable;
use crate::model::{AirBase, DivisionEntity, DivisionTemplate, EquipmentVariant, Fleet};
use crate::project::{
    load_air_bases, load_division_entities, load_division_templates, load_equipment_variants,
    load_fleets,
};
use hoi4gen_sheet::Workbook;
use std::fmt::{self, Write};
use tracing::debug;

const GENERATED_HEADER: &str = "# Auto-generated by hoi4gen";

/// Everything projected from one country's workbook.
#[derive(Debug, Clone, Default)]
pub struct CountryAssets {
    pub division_templates: Vec<DivisionTemplate>,
    pub division_entities: Vec<DivisionEntity>,
    pub armor_variants: Vec<EquipmentVariant>,
    pub plane_variants: Vec<EquipmentVariant>,
    pub ship_variants: Vec<EquipmentVariant>,
    pub fleets: Vec<Fleet>,
    pub air_bases: Vec<AirBase>,
}

impl CountryAssets {
    /// Project every recognized sheet of a country workbook.
    #[must_use]
    pub fn from_workbook(book: &Workbook, table: &SubstitutionTable) -> Self {
        let mut assets = CountryAssets::default();
        for sheet in book.sheets() {
            match sheet.name() {
                "division_entities" => {
                    assets.division_entities = load_division_entities(sheet, table);
                }
                "division_templates" => {
                    assets.division_templates = load_division_templates(sheet, table);
                }
                "armor_variants" => assets.armor_variants = load_equipment_variants(sheet, table),
                "plane_variants" => assets.plane_variants = load_equipment_variants(sheet, table),
                "ship_variants" => assets.ship_variants = load_equipment_variants(sheet, table),
                "fleets" => assets.fleets = load_fleets(sheet, table),
                "air_wings" => assets.air_bases = load_air_bases(sheet, table),
                other => debug!("ignoring sheet '{other}'"),
            }
        }
        assets
    }

    /// Emit the land unit history: armor variants, division templates and
    /// deployed divisions.
    pub fn write_land_history<W: Write>(&self, out: &mut W, tag: &str) -> fmt::Result {
        writeln!(out, "{GENERATED_HEADER}")?;

        writeln!(out, "instant_effect = {{")?;
        for variant in &self.armor_variants {
            variant.emit(out)?;
            writeln!(out)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        for template in &self.division_templates {
            template.emit(out, tag)?;
            writeln!(out)?;
        }
        writeln!(out)?;

        writeln!(out, "units = {{")?;
        for division in &self.division_entities {
            division.emit(out)?;
            writeln!(out)?;
        }
        writeln!(out, "}}")
    }

    /// Emit the naval unit history: ship variants and fleets.
    pub fn write_naval_history<W: Write>(&self, out: &mut W, tag: &str) -> fmt::Result {
        writeln!(out, "{GENERATED_HEADER}")?;

        writeln!(out, "instant_effect = {{")?;
        for variant in &self.ship_variants {
            variant.emit(out)?;
            writeln!(out)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "units = {{")?;
        for fleet in &self.fleets {
            fleet.emit(out, tag)?;
            writeln!(out)?;
        }
        writeln!(out, "}}")
    }

    /// Emit the air unit history: plane variants and air bases.
    pub fn write_air_history<W: Write>(&self, out: &mut W, tag: &str) -> fmt::Result {
        writeln!(out, "{GENERATED_HEADER}")?;

        writeln!(out, "instant_effect = {{")?;
        for variant in &self.plane_variants {
            variant.emit(out)?;
            writeln!(out)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;

        writeln!(out, "air_wings = {{")?;
        for base in &self.air_bases {
            base.emit(out, tag)?;
            writeln!(out)?;
        }
        writeln!(out, "}}")
    }

    /// Emit the generated division-name groups for templates that declared
    /// one.
    pub fn write_division_name_groups<W: Write>(&self, out: &mut W, tag: &str) -> fmt::Result {
        for template in &self.division_templates {
            if template.division_names_group.is_empty() {
                continue;
            }
            template.emit_names_group(out, tag)?;
            writeln!(out)?;
        }
        Ok(())
    }
}
