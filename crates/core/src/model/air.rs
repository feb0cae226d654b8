use std::fmt::{self, Write};

/// An air base: every wing stationed at one map location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirBase {
    pub location: i64,
    pub wings: Vec<AirWing>,
}

/// One air wing. A wing with zero amount is defined as absent and never
/// reaches an air base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AirWing {
    pub location: i64,
    pub amount: i64,
    pub wing_type: String,
    pub version_name: String,
}

impl AirBase {
    /// Emit one location block with its wings in input order.
    pub fn emit<W: Write>(&self, out: &mut W, owner: &str) -> fmt::Result {
        writeln!(out, "\t{} = {{", self.location)?;

        for wing in &self.wings {
            wing.emit(out, owner)?;
        }

        writeln!(out, "\t}}")
    }
}

impl AirWing {
    /// Emit one single-line wing entry.
    pub fn emit<W: Write>(&self, out: &mut W, owner: &str) -> fmt::Result {
        writeln!(
            out,
            "\t\t{} = {{ owner = {} amount = {} version_name = \"{}\" }}",
            self.wing_type, owner, self.amount, self.version_name
        )
    }
}
