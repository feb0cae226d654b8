use std::fmt::{self, Write};

/// A fleet: the top grouping level of the naval roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    pub name: String,
    pub naval_base: i64,
    pub task_forces: Vec<TaskForce>,
}

/// A task force within a fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForce {
    pub name: String,
    pub location: i64,
    pub ships: Vec<WarShip>,
}

/// A single ship: the leaf of the naval hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarShip {
    pub name: String,
    pub definition: String,
    pub equipment: String,
    pub version_name: String,
}

impl Fleet {
    /// Emit one `fleet` block, task forces in first-seen order.
    pub fn emit<W: Write>(&self, out: &mut W, owner: &str) -> fmt::Result {
        writeln!(out, "\tfleet = {{")?;

        writeln!(out, "\t\tname = \"{}\"", self.name)?;
        writeln!(out, "\t\tnaval_base = {}", self.naval_base)?;

        for task_force in &self.task_forces {
            task_force.emit(out, owner)?;
            writeln!(out)?;
        }

        writeln!(out, "\t}}")
    }
}

impl TaskForce {
    /// Emit one `task_force` block, ships in first-seen order.
    pub fn emit<W: Write>(&self, out: &mut W, owner: &str) -> fmt::Result {
        writeln!(out, "\t\ttask_force = {{")?;

        writeln!(out, "\t\t\tname = \"{}\"", self.name)?;
        writeln!(out, "\t\t\tlocation = {}", self.location)?;

        for ship in &self.ships {
            ship.emit(out, owner)?;
        }

        writeln!(out, "\t\t}}")
    }
}

impl WarShip {
    /// Emit one single-line `ship` block.
    pub fn emit<W: Write>(&self, out: &mut W, owner: &str) -> fmt::Result {
        writeln!(
            out,
            "\t\t\tship = {{ name = \"{}\" definition = {} equipment = {{ {} = {{ amount = 1 owner = {} version_name = \"{}\" }} }} }}",
            self.name, self.definition, self.equipment, owner, self.version_name
        )
    }
}
