//! Game record sources.
//!
//! A [`SourceProvider`] enumerates candidate records and reads one as text.
//! The random choice lives in [`pick_random`], so the extraction pipeline can
//! be driven by an in-memory source in tests.

pub mod directory_source;
pub mod memory_source;

pub use directory_source::DirectorySource;
pub use memory_source::MemorySource;

use crate::{Result, SgfPreviewError};
use rand::prelude::IndexedRandom;

pub trait SourceProvider: Send + Sync {
    /// Identifiers of every readable record
    fn list_available(&self) -> Result<Vec<String>>;

    /// Full text of the record `id`
    fn read(&self, id: &str) -> Result<String>;

    /// Where records come from, for log and error messages
    fn describe(&self) -> String;
}

/// A record chosen by [`pick_random`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedSource {
    pub id: String,
    pub text: String,
}

/// Picks one record uniformly at random and reads it.
pub fn pick_random<R: rand::Rng + ?Sized>(
    provider: &dyn SourceProvider,
    rng: &mut R,
) -> Result<PickedSource> {
    let ids = provider.list_available()?;
    let id = ids
        .choose(rng)
        .ok_or_else(|| SgfPreviewError::NoInputAvailable {
            source_name: provider.describe(),
        })?
        .clone();

    log::debug!("Picked {} out of {} records", id, ids.len());
    let text = provider.read(&id)?;
    Ok(PickedSource { id, text })
}
