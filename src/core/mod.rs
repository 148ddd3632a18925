pub mod projection;
pub mod query;

pub use crate::domain::model::{DinosaurRecord, Field, Mya};
pub use crate::domain::ports::DatasetSource;
pub use crate::utils::error::Result;
pub use query::{dinosaur_description, dinosaurs_alive_at, longest_dinosaur, METERS_TO_FEET};
