use anyhow::Result;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a table.
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

pub fn print_items(items: &[Value], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&items),
        OutputFormat::Table => println!("{}", build_table(items)),
        OutputFormat::Markdown => {
            let mut table = build_table(items);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => print_csv(items)?,
    }
    Ok(())
}

/// Column headers: object keys in first-seen order across all items.
/// Items that are not objects are shown under a single `value` column.
fn columns(items: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        match item {
            Value::Object(map) => {
                for key in map.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.clone());
                    }
                }
            }
            _ => {
                if !columns.iter().any(|c| c == "value") {
                    columns.push("value".to_string());
                }
            }
        }
    }
    columns
}

fn build_rows(items: &[Value], columns: &[String]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|column| match item {
                    Value::Object(map) => map.get(column).map(format_cell).unwrap_or_default(),
                    other if column == "value" => format_cell(other),
                    _ => String::new(),
                })
                .collect()
        })
        .collect()
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(format_cell).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

fn build_table(items: &[Value]) -> tabled::Table {
    let columns = columns(items);
    let mut builder = Builder::default();
    builder.push_record(columns.clone());
    for row in build_rows(items, &columns) {
        builder.push_record(row);
    }
    builder.build()
}

fn print_csv(items: &[Value]) -> Result<()> {
    let columns = columns(items);
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(&columns)?;
    for row in build_rows(items, &columns) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
