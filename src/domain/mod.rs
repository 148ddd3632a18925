// Domain layer: the record shape and the dataset port. No dependencies beyond serde.

pub mod model;
pub mod ports;
