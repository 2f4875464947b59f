//! CLI subcommand implementations.

pub mod count;
pub mod filter;
pub mod list;
pub mod query;

use anyhow::{anyhow, Result};
use backoffice_api::{descriptor_by_name, EntityDescriptor, SearchCriteria, ENTITIES};

/// Resolves an entity name given on the command line.
pub(crate) fn entity(name: &str) -> Result<&'static EntityDescriptor> {
    descriptor_by_name(name).ok_or_else(|| {
        let known: Vec<&str> = ENTITIES.iter().map(|e| e.name).collect();
        anyhow!("unknown entity '{}' (known: {})", name, known.join(", "))
    })
}

/// Parses `--criteria` JSON; absent means no constraint.
pub(crate) fn criteria(json: Option<&str>) -> Result<SearchCriteria> {
    match json {
        Some(json) => Ok(SearchCriteria::from_json_str(json)?),
        None => Ok(SearchCriteria::new()),
    }
}
