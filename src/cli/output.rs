//! Output formatting for CLI commands.

use crate::cli::args::{LexstoreArgs, OutputFormat};
use crate::engine::{NlQueryResponse, QueryResponse};
use crate::error::Result;
use crate::record::Record;

/// Print a single record in the requested format.
pub fn print_record(record: &Record, args: &LexstoreArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(record, args),
        OutputFormat::Human => {
            print_record_human(record);
            Ok(())
        }
    }
}

/// Print a list of records in the requested format.
pub fn print_records(records: &[Record], args: &LexstoreArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(&records, args),
        OutputFormat::Human => {
            if records.is_empty() {
                println!("No records");
                return Ok(());
            }
            for (i, record) in records.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_record_human(record);
            }
            Ok(())
        }
    }
}

/// Print a structured query response.
pub fn print_query_response(response: &QueryResponse, args: &LexstoreArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(response, args),
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!(
                    "Applied filters: {}",
                    serde_json::to_string(&response.filters)?
                );
            }
            println!("{} matching record(s)", response.records.len());
            for record in &response.records {
                println!();
                print_record_human(record);
            }
            Ok(())
        }
    }
}

/// Print a natural-language query response.
pub fn print_nl_query_response(response: &NlQueryResponse, args: &LexstoreArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(response, args),
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("Query: {}", response.query);
                println!(
                    "Derived filters: {}",
                    serde_json::to_string(&response.filters)?
                );
            }
            println!("{} matching record(s)", response.records.len());
            for record in &response.records {
                println!();
                print_record_human(record);
            }
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T, args: &LexstoreArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn print_record_human(record: &Record) {
    println!("id:           {}", record.id);
    println!("value:        {}", record.value);
    println!("length:       {}", record.properties.length);
    println!("palindrome:   {}", record.properties.is_palindrome);
    println!("unique chars: {}", record.properties.unique_characters);
    println!("word count:   {}", record.properties.word_count);
    println!("created at:   {}", record.created_at.to_rfc3339());
}
