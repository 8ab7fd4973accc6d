//! Command implementations for the Lexstore CLI.

use crate::cli::args::*;
use crate::cli::output::*;
use crate::engine::Engine;
use crate::error::Result;
use crate::query::FilterParams;

/// Execute a CLI command.
pub fn execute_command(args: LexstoreArgs) -> Result<()> {
    let engine = match &args.data_file {
        Some(path) => Engine::with_snapshot(path.clone())?,
        None => Engine::new(),
    };

    match &args.command {
        Command::Submit(submit_args) => submit(&engine, submit_args, &args),
        Command::Fetch(fetch_args) => fetch(&engine, fetch_args, &args),
        Command::Remove(remove_args) => remove(&engine, remove_args, &args),
        Command::List => list(&engine, &args),
        Command::Query(query_args) => query(&engine, query_args.clone(), &args),
        Command::Ask(ask_args) => ask(&engine, ask_args, &args),
    }
}

fn submit(engine: &Engine, args: &SubmitArgs, cli_args: &LexstoreArgs) -> Result<()> {
    let record = engine.submit(&args.text)?;
    if cli_args.verbosity() > 1 {
        println!("Stored record {}", record.id);
    }
    print_record(&record, cli_args)
}

fn fetch(engine: &Engine, args: &FetchArgs, cli_args: &LexstoreArgs) -> Result<()> {
    let record = engine.fetch(&args.text)?;
    print_record(&record, cli_args)
}

fn remove(engine: &Engine, args: &RemoveArgs, cli_args: &LexstoreArgs) -> Result<()> {
    engine.remove(&args.text)?;
    if cli_args.verbosity() > 0 {
        println!("Removed");
    }
    Ok(())
}

fn list(engine: &Engine, cli_args: &LexstoreArgs) -> Result<()> {
    let records = engine.store().list_all();
    print_records(&records, cli_args)
}

fn query(engine: &Engine, args: QueryArgs, cli_args: &LexstoreArgs) -> Result<()> {
    let params = FilterParams {
        is_palindrome: args.palindrome,
        min_length: args.min_length,
        max_length: args.max_length,
        word_count: args.word_count,
        contains_character: args.contains_character,
        value_contains: args.value_contains,
    };
    let response = engine.query(params)?;
    print_query_response(&response, cli_args)
}

fn ask(engine: &Engine, args: &AskArgs, cli_args: &LexstoreArgs) -> Result<()> {
    let response = engine.query_natural_language(&args.text)?;
    print_nl_query_response(&response, cli_args)
}
