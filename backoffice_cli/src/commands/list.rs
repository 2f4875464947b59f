use anyhow::Result;
use backoffice_api::{Client, QueryOptions, Resource};
use clap::Args;
use serde_json::Value;

use crate::output::{print_items, OutputFormat};

use super::query::parse_sort;

#[derive(Args)]
pub struct ListArgs {
    /// Entity name: customers, collateral-rolls
    pub entity: String,

    /// Search criteria as a JSON object, e.g. '{"active": true}'
    #[arg(long)]
    pub criteria: Option<String>,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: u64,

    /// Row offset
    #[arg(long, default_value = "0")]
    pub offset: u64,

    /// Sort keys, comma separated: FIELD or FIELD:desc
    #[arg(long, value_delimiter = ',')]
    pub sort: Vec<String>,

    /// Columns to return, comma separated
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Relation expansion depth, e.g. full
    #[arg(long)]
    pub expand_level: Option<String>,
}

pub async fn run(args: &ListArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let entity = super::entity(&args.entity)?;
    let criteria = super::criteria(args.criteria.as_deref())?;

    let mut options = QueryOptions::default()
        .with_limit(args.limit)
        .with_offset(args.offset);
    if let Some(sort) = parse_sort(&args.sort)? {
        options = options.with_sort(sort);
    }
    if !args.fields.is_empty() {
        options = options.with_fields(args.fields.as_slice());
    }
    if let Some(level) = &args.expand_level {
        options = options.with_expand_level(level);
    }

    let resource: Resource<'_, Value> = client.resource(entity);
    let resp = resource.search(&criteria, options).await?;

    match resp.total_count {
        Some(total) => eprintln!(
            "Showing {} of {} {} (offset {})",
            resp.items.len(),
            total,
            entity.name,
            resp.offset.unwrap_or(args.offset)
        ),
        None => eprintln!("Showing {} {}", resp.items.len(), entity.name),
    }

    print_items(&resp.items, format)
}
