use anyhow::{bail, Result};
use backoffice_api::{build, with_query, QueryOptions, Sort, SortDirection};
use clap::Args;

#[derive(Args)]
pub struct QueryArgs {
    /// Maximum number of rows
    #[arg(long)]
    pub limit: Option<u64>,

    /// Row offset
    #[arg(long)]
    pub offset: Option<u64>,

    /// Columns to return, comma separated
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Sort keys, comma separated: FIELD or FIELD:desc
    #[arg(long, value_delimiter = ',')]
    pub sort: Vec<String>,

    /// Raw filter expression, e.g. "CODE like 'test*'"
    #[arg(long)]
    pub q: Option<String>,

    /// Request a total count
    #[arg(long)]
    pub count: bool,

    /// Relation expansion depth, e.g. full
    #[arg(long)]
    pub expand_level: Option<String>,

    /// Print the query appended to this path instead of the bare query string
    #[arg(long)]
    pub path: Option<String>,
}

pub fn run(args: &QueryArgs) -> Result<()> {
    let mut options = QueryOptions {
        limit: args.limit,
        offset: args.offset,
        q: args.q.clone(),
        expand_level: args.expand_level.clone(),
        sort: parse_sort(&args.sort)?,
        ..Default::default()
    };
    if !args.fields.is_empty() {
        options = options.with_fields(args.fields.as_slice());
    }
    if args.count {
        options = options.with_count(true);
    }

    let query = build(&options);
    match &args.path {
        Some(path) => println!("{}", with_query(path, &query)),
        None => println!("{}", query),
    }
    Ok(())
}

/// Parses `FIELD` / `FIELD:asc` / `FIELD:desc` keys into a [`Sort`].
pub(crate) fn parse_sort(specs: &[String]) -> Result<Option<Sort>> {
    let mut sort = Sort::default();
    for spec in specs.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let (field, direction) = match spec.split_once(':') {
            Some((field, dir)) => match dir.parse::<SortDirection>() {
                Ok(direction) => (field, direction),
                Err(()) => bail!("invalid sort direction '{}' (use asc or desc)", dir),
            },
            None => (spec, SortDirection::Asc),
        };
        if field.is_empty() {
            bail!("empty sort field in '{}'", spec);
        }
        sort = sort.then(field, direction);
    }
    Ok((!sort.is_empty()).then_some(sort))
}
