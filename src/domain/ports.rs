use crate::domain::model::DinosaurRecord;
use crate::utils::error::Result;

/// Supplies the collection every query runs over.
pub trait DatasetSource: Send + Sync {
    fn load(&self) -> Result<Vec<DinosaurRecord>>;

    /// Short label for logs, e.g. a file path.
    fn describe(&self) -> String;
}
