//! Registration source trait definition.

use crate::error::Result;
use crate::model::{RawRecord, RecordFilter};

/// Trait for collaborators that supply raw registration records.
///
/// Implementations (portal scrapers, CSV readers, databases) own any
/// caching and invalidation; the analytics core never memoizes loads.
pub trait RegistrationSource: Send + Sync {
    /// Source name.
    fn name(&self) -> &str;

    /// Fetch records matching the filter. Records must carry valid dates
    /// and non-negative counts; the core does not re-validate.
    fn fetch(&self, filter: &RecordFilter) -> Result<Vec<RawRecord>>;
}
