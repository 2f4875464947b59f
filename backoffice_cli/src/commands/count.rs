use anyhow::Result;
use backoffice_api::{Client, Resource};
use clap::Args;
use serde_json::Value;

#[derive(Args)]
pub struct CountArgs {
    /// Entity name: customers, collateral-rolls
    pub entity: String,

    /// Search criteria as a JSON object
    #[arg(long)]
    pub criteria: Option<String>,
}

pub async fn run(args: &CountArgs, client: &Client) -> Result<()> {
    let entity = super::entity(&args.entity)?;
    let criteria = super::criteria(args.criteria.as_deref())?;
    let resource: Resource<'_, Value> = client.resource(entity);

    let count = resource.count(Some(&criteria)).await?;
    println!("{}", count);
    Ok(())
}
