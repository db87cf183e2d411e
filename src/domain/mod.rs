// Domain layer: value types and the calculator port. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
