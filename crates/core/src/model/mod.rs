//! The entity kinds hoi4gen projects rosters into, with their script
//! emitters.
//!
//! Every emitter is a pure function of the entity graph and the owning
//! country tag: it writes newline-delimited key/value block text to a
//! caller-supplied `fmt::Write` and is byte-deterministic for identical
//! input.

mod air;
mod division;
mod equipment;
mod navy;

pub use air::{AirBase, AirWing};
pub use division::{DivisionEntity, DivisionTemplate};
pub use equipment::EquipmentVariant;
pub use navy::{Fleet, TaskForce, WarShip};
