use anyhow::Result;
use backoffice_api::criteria::{DoubledQuotes, UpperSnakeCase};
use backoffice_api::CriteriaTranslator;
use clap::Args;

#[derive(Args)]
pub struct FilterArgs {
    /// Search criteria as a JSON object, e.g. '{"code": {"like": "AB*"}}'
    #[arg(long)]
    pub criteria: String,

    /// Entity whose field map resolves column names (customers, collateral-rolls).
    /// Without it, columns are derived as UPPER_SNAKE_CASE.
    #[arg(long)]
    pub entity: Option<String>,

    /// Double single quotes inside string values
    #[arg(long)]
    pub escape_quotes: bool,
}

pub fn run(args: &FilterArgs) -> Result<()> {
    let criteria = super::criteria(Some(args.criteria.as_str()))?;

    let filter = match &args.entity {
        Some(name) => {
            let entity = super::entity(name)?;
            let translator = CriteriaTranslator::new(&entity.columns);
            if args.escape_quotes {
                translator.with_quoting(DoubledQuotes).translate(&criteria)?
            } else {
                translator.translate(&criteria)?
            }
        }
        None => {
            let translator = CriteriaTranslator::new(&UpperSnakeCase);
            if args.escape_quotes {
                translator.with_quoting(DoubledQuotes).translate(&criteria)?
            } else {
                translator.translate(&criteria)?
            }
        }
    };

    match filter {
        Some(filter) => println!("{}", filter),
        None => eprintln!("No constraints; no filter applies"),
    }
    Ok(())
}
