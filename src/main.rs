//! # chatstat CLI
//!
//! Command-line interface for the chatstat library.

use std::process;

use clap::Parser as ClapParser;
use log::info;

use chatstat::ChatstatError;
use chatstat::analysis::Stopwords;
use chatstat::cli::Args;
use chatstat::parser::TranscriptParser;
use chatstat::report::Analyzer;

fn main() {
    let args = <Args as ClapParser>::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatstatError> {
    let filter = args.view_filter()?;
    let config = args.analysis_config()?;

    let log = TranscriptParser::with_config(args.transcript_config()).parse(&args.input)?;
    info!("parsed {} messages from {}", log.len(), args.input.display());

    let mut analyzer = Analyzer::with_config(config);
    if let Some(ref path) = args.stopwords {
        analyzer = analyzer.with_stopwords(Stopwords::load(path)?);
    }

    let report = analyzer.analyze(&log, &filter);
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}
