use std::fmt::{self, Write};

/// One deployed division: a location, a template reference and naming data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DivisionEntity {
    pub location: i64,
    pub start_experience_factor: f32,
    pub start_equipment_factor: f32,
    pub name_order: i64,
    pub division_template: String,
}

impl DivisionEntity {
    /// Emit one `division` block.
    pub fn emit<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "\tdivision = {{")?;

        writeln!(out, "\t\tdivision_name = {{")?;
        writeln!(out, "\t\t\tis_name_ordered = yes")?;
        writeln!(out, "\t\t\tname_order = {}", self.name_order)?;
        writeln!(out, "\t\t}}")?;

        writeln!(out, "\t\tlocation = {}", self.location)?;
        writeln!(out, "\t\tdivision_template = \"{}\"", self.division_template)?;
        writeln!(
            out,
            "\t\tstart_experience_factor = {}",
            self.start_experience_factor
        )?;
        writeln!(
            out,
            "\t\tstart_equipment_factor = {}",
            self.start_equipment_factor
        )?;

        writeln!(out, "\t}}")
    }
}

/// A division template: ordered column-groups of regiment and support slots.
///
/// `regiments` and `support` are sequences of sequences: the outer position
/// is the column-group ("x"), the inner position the slot within that group
/// ("y").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionTemplate {
    /// Creation-order index, used to derive the generated name-group id.
    pub id: usize,
    pub name: String,
    pub division_names_group: String,
    pub is_locked: bool,
    pub regiments: Vec<Vec<String>>,
    pub support: Vec<Vec<String>>,
}

impl DivisionTemplate {
    /// Id of the generated division-name group for this template.
    #[must_use]
    pub fn names_group_id(&self, tag: &str) -> String {
        format!("{tag}_GENERATED_{}", self.id)
    }

    /// Emit one `division_template` block.
    ///
    /// A template with a non-empty names group references the generated
    /// group emitted by [`DivisionTemplate::emit_names_group`].
    pub fn emit<W: Write>(&self, out: &mut W, tag: &str) -> fmt::Result {
        writeln!(out, "division_template = {{")?;

        writeln!(out, "\tname = \"{}\"", self.name)?;

        if !self.division_names_group.is_empty() {
            writeln!(out, "\tdivision_names_group = {}", self.names_group_id(tag))?;
        }

        writeln!(out, "\tregiments = {{")?;
        emit_slot_grid(out, &self.regiments)?;
        writeln!(out, "\t}}")?;

        writeln!(out, "\tsupport = {{")?;
        emit_slot_grid(out, &self.support)?;
        writeln!(out, "\t}}")?;

        if self.is_locked {
            writeln!(out, "\tis_locked = yes")?;
        }

        writeln!(out, "}}")
    }

    /// Emit the generated name-group block referenced by [`Self::emit`].
    ///
    /// The raw spreadsheet group value becomes the fallback name pattern.
    pub fn emit_names_group<W: Write>(&self, out: &mut W, tag: &str) -> fmt::Result {
        writeln!(out, "{} = {{", self.names_group_id(tag))?;
        writeln!(out, "\tname = \"{}\"", self.name)?;
        writeln!(out, "\tfor_countries = {{ {tag} }}")?;
        writeln!(out, "\tcan_use = {{ always = yes }}")?;
        writeln!(out, "\tfallback_name = \"{}\"", self.division_names_group)?;
        writeln!(out, "}}")
    }
}

fn emit_slot_grid<W: Write>(out: &mut W, groups: &[Vec<String>]) -> fmt::Result {
    for (x, group) in groups.iter().enumerate() {
        for (y, slot) in group.iter().enumerate() {
            writeln!(out, "\t\t{slot} = {{ x = {x} y = {y} }}")?;
        }
    }
    Ok(())
}
