use indexmap::IndexMap;
use std::fmt::{self, Write};

/// One equipment variant, keyed by its name within a variants sheet.
///
/// `modules` and `upgrades` accumulate across every row that carries (or
/// blank-carries into) the variant's key; later rows overwrite earlier
/// entries per slot or upgrade item, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentVariant {
    pub name: String,
    pub variant_type: String,
    pub name_group: String,
    pub icon: String,
    pub obsolete: bool,
    pub parent_version: i64,
    pub modules: IndexMap<String, String>,
    pub upgrades: IndexMap<String, i64>,
}

impl EquipmentVariant {
    /// Emit one `create_equipment_variant` block.
    pub fn emit<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "\tcreate_equipment_variant = {{")?;

        writeln!(out, "\t\tname = \"{}\"", self.name)?;

        writeln!(out, "\t\ttype = {}", self.variant_type)?;

        if !self.name_group.is_empty() {
            writeln!(out, "\t\tname_group = {}", self.name_group)?;
        }

        if !self.icon.is_empty() {
            writeln!(out, "\t\ticon = \"{}\"", self.icon)?;
        }

        writeln!(out, "\t\tparent_version = {}", self.parent_version)?;

        if self.obsolete {
            writeln!(out, "\t\tobsolete = yes")?;
        }

        writeln!(out, "\t\tmodules = {{")?;
        for (slot, equipment) in &self.modules {
            writeln!(out, "\t\t\t{slot} = {equipment}")?;
        }
        writeln!(out, "\t\t}}")?;

        if !self.upgrades.is_empty() {
            writeln!(out, "\t\tupgrades = {{")?;
            for (item, level) in &self.upgrades {
                writeln!(out, "\t\t\t{item} = {level}")?;
            }
            writeln!(out, "\t\t}}")?;
        }

        writeln!(out, "\t}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_block_with_optional_lines() {
        let mut variant = EquipmentVariant {
            name: "Bismarck Class".to_string(),
            variant_type: "ship_hull_heavy_1".to_string(),
            parent_version: 0,
            ..Default::default()
        };
        variant
            .modules
            .insert("fixed_ship_armor_slot".to_string(), "ship_armor_bb_1".to_string());

        let mut out = String::new();
        variant.emit(&mut out).unwrap();
        assert_eq!(
            out,
            "\tcreate_equipment_variant = {\n\
             \t\tname = \"Bismarck Class\"\n\
             \t\ttype = ship_hull_heavy_1\n\
             \t\tparent_version = 0\n\
             \t\tmodules = {\n\
             \t\t\tfixed_ship_armor_slot = ship_armor_bb_1\n\
             \t\t}\n\
             \t}\n"
        );
    }

    #[test]
    fn obsolete_variant_with_upgrades() {
        let mut variant = EquipmentVariant {
            name: "Panzer II".to_string(),
            variant_type: "light_armor".to_string(),
            name_group: "GER_ARMOR".to_string(),
            icon: "gfx/pz2.dds".to_string(),
            obsolete: true,
            parent_version: 1,
            ..Default::default()
        };
        variant.upgrades.insert("tank_reliability_upgrade".to_string(), 3);

        let mut out = String::new();
        variant.emit(&mut out).unwrap();
        assert!(out.contains("\t\tname_group = GER_ARMOR\n"));
        assert!(out.contains("\t\ticon = \"gfx/pz2.dds\"\n"));
        assert!(out.contains("\t\tobsolete = yes\n"));
        assert!(out.contains("\t\tupgrades = {\n\t\t\ttank_reliability_upgrade = 3\n\t\t}\n"));
    }

    #[test]
    fn empty_upgrades_block_is_omitted() {
        let variant = EquipmentVariant::default();
        let mut out = String::new();
        variant.emit(&mut out).unwrap();
        assert!(out.contains("\t\tmodules = {\n\t\t}\n"));
        assert!(!out.contains("upgrades"));
    }
}
