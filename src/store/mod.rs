//! Persistence boundary.
//!
//! The model layer only sees the [`Store`] trait: read the job set, read the
//! skill set, write the job set back. Where those collections actually live
//! is an adapter concern — one combined JSON file, two split files, or plain
//! memory for tests.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{Job, Skill};

mod json_file;
mod memory;
mod split_file;

pub use json_file::JsonFileStore;
pub use memory::{MemoryStore, MemoryStoreConfig};
pub use split_file::SplitFileStore;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Write(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "store I/O error: {}", err),
            StoreError::Parse(err) => write!(f, "store parse error: {}", err),
            StoreError::Write(msg) => write!(f, "store write error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Parse(err)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// A readable, optionally writable store holding the two logical collections.
///
/// All operations are synchronous and local. `write_jobs` must either persist
/// the full job set or fail without partial application.
pub trait Store: Send + Sync + 'static {
    fn read_jobs(&self) -> Result<Vec<Job>>;
    fn read_skills(&self) -> Result<HashMap<String, Skill>>;
    fn write_jobs(&self, jobs: &[Job]) -> Result<()>;
}

/// Skills at rest are either a sequence of records (keyed by each record's
/// own `idCode`) or an object mapping code to record. Both normalize to a
/// map; for the object form the key wins over whatever code the record
/// carries.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SkillsAtRest {
    List(Vec<Skill>),
    Map(HashMap<String, Skill>),
}

impl SkillsAtRest {
    pub(crate) fn into_map(self) -> HashMap<String, Skill> {
        match self {
            SkillsAtRest::List(skills) => skills
                .into_iter()
                .map(|skill| (skill.id_code.clone(), skill))
                .collect(),
            SkillsAtRest::Map(map) => map,
        }
    }
}
