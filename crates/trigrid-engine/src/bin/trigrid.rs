//! Demo consumer: load a JSON record file, run the pipeline once, print a
//! page. Exercises the same entry points a rendering layer would call.

use std::io::Write;
use std::process::ExitCode;

use tabwriter::TabWriter;
use trigrid_core::record::{status_label, IncidentRecord};
use trigrid_core::source::{LoadError, RecordSource};
use trigrid_core::transform::records_from_raw;
use trigrid_engine::pagination::DEFAULT_PAGE_SIZE;
use trigrid_engine::pipeline::{GridPage, GridPipeline};

/// Record source backed by a JSON file on disk.
#[derive(Debug)]
struct FileRecordSource {
    path: String,
}

impl RecordSource for FileRecordSource {
    fn fetch(&self) -> Result<Vec<IncidentRecord>, LoadError> {
        let body = std::fs::read_to_string(&self.path)
            .map_err(|err| LoadError::Unreachable(err.to_string()))?;
        let raw = serde_json::from_str::<serde_json::Value>(&body)
            .map_err(|err| LoadError::MalformedBody(err.to_string()))?;
        let outcome = records_from_raw(&raw)?;
        for note in &outcome.skipped {
            eprintln!("trigrid: skipped {note}");
        }
        Ok(outcome.records)
    }
}

#[derive(Debug, Default)]
struct CliOptions {
    path: String,
    text_filters: Vec<(String, String)>,
    value_filters: Vec<(String, Vec<String>)>,
    sort_column: Option<String>,
    descending: bool,
    page: usize,
    page_size: usize,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("trigrid: {message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("trigrid: {message}");
            ExitCode::FAILURE
        }
    }
}

const USAGE: &str = "usage: trigrid <records.json> \
[--filter COLUMN=TEXT]... [--values COLUMN=A,B]... \
[--sort COLUMN] [--desc] [--page N] [--page-size N]";

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        page: 1,
        page_size: DEFAULT_PAGE_SIZE,
        ..CliOptions::default()
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--filter" => {
                let (column, text) = split_pair(iter.next(), "--filter")?;
                options.text_filters.push((column, text));
            }
            "--values" => {
                let (column, raw) = split_pair(iter.next(), "--values")?;
                let values = raw.split(',').map(str::to_owned).collect();
                options.value_filters.push((column, values));
            }
            "--sort" => {
                let column = iter
                    .next()
                    .ok_or_else(|| "--sort requires a column key".to_owned())?;
                options.sort_column = Some(column.clone());
            }
            "--desc" => options.descending = true,
            "--page" => options.page = parse_number(iter.next(), "--page")?,
            "--page-size" => options.page_size = parse_number(iter.next(), "--page-size")?,
            other if options.path.is_empty() && !other.starts_with("--") => {
                options.path = other.to_owned();
            }
            other => return Err(format!("unexpected argument {other:?}")),
        }
    }

    if options.path.is_empty() {
        return Err("a records file is required".to_owned());
    }
    Ok(options)
}

fn split_pair(value: Option<&String>, flag: &str) -> Result<(String, String), String> {
    let raw = value.ok_or_else(|| format!("{flag} requires COLUMN=VALUE"))?;
    let Some((column, rest)) = raw.split_once('=') else {
        return Err(format!("{flag} requires COLUMN=VALUE, got {raw:?}"));
    };
    Ok((column.to_owned(), rest.to_owned()))
}

fn parse_number(value: Option<&String>, flag: &str) -> Result<usize, String> {
    let raw = value.ok_or_else(|| format!("{flag} requires a number"))?;
    raw.parse::<usize>()
        .map_err(|_| format!("{flag} requires a number, got {raw:?}"))
}

fn run(options: &CliOptions) -> Result<(), String> {
    let source = FileRecordSource {
        path: options.path.clone(),
    };
    let records = source
        .fetch()
        .map_err(|err| format!("{} ({err})", err.banner_message()))?;

    let mut grid = GridPipeline::new(options.page_size);
    grid.load_records(records);
    for (column, text) in &options.text_filters {
        grid.set_text_filter(column, text);
    }
    for (column, values) in &options.value_filters {
        grid.set_values_filter(column, values);
    }
    if let Some(column) = &options.sort_column {
        grid.handle_header_click(column, false);
        if options.descending {
            grid.handle_header_click(column, false);
        }
    }
    let page = grid.go_to_page(options.page);

    print_page(&page).map_err(|err| err.to_string())
}

fn print_page(page: &GridPage) -> std::io::Result<()> {
    let mut table = TabWriter::new(std::io::stdout());
    writeln!(table, "ID\tKEY\tOWNER\tSTATUS\tEXCEPTION\tCOMMENT")?;
    for row in &page.rows {
        let record = &row.record;
        let status = status_label(&record.status).unwrap_or(record.status.as_str());
        writeln!(
            table,
            "{}\t{}\t{}\t{}\t{}\t{}",
            record.id, record.primary_key, record.owner, status, record.exception, record.comment,
        )?;
    }
    table.flush()?;

    let info = &page.info;
    println!(
        "page {}/{} (items {}-{} of {})",
        info.current_page, info.total_pages, info.start_item, info.end_item, info.total_items,
    );
    Ok(())
}
