use clap::Parser;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scout::{
    best_match_field, load_records, run_query, MatchField, PlatformFilter, PlatformKind,
    QueryState, Record, SearchScope, SortBy,
};

mod cli;
use cli::display::{
    double_footer, double_header, record_card, row, section_bot, section_top, title,
};
use cli::inspect::summarize;
use cli::{present, Cli, Commands, View};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.log_json {
                let error_json = serde_json::json!({
                    "error": true,
                    "message": e.to_string(),
                });
                eprintln!("{}", error_json);
            } else {
                eprintln!("❌ {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_env("SCOUT_LOG").unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: &Cli) -> scout::Result<()> {
    match &cli.command {
        Commands::Search {
            file,
            platform,
            query,
            sort,
            by,
            json,
            explain,
        } => {
            let state = QueryState {
                platform: PlatformFilter::parse(platform),
                search_input: query.clone(),
                sort_by: SortBy::parse(sort),
                scope: SearchScope::parse(by),
            };
            run_search(file, &state, *json, *explain)
        }
        Commands::Platforms => {
            run_platforms();
            Ok(())
        }
        Commands::Inspect { file, json } => run_inspect(file, *json),
    }
}

/// A result row for `--json --explain`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExplainedRecord<'a> {
    #[serde(flatten)]
    record: &'a Record,
    matched_on: Option<MatchField>,
}

fn run_search(file: &Path, state: &QueryState, json: bool, explain: bool) -> scout::Result<()> {
    if state.platform.is_unknown() {
        warn!(platform = %state.platform, "unknown platform, no records will match it");
    }

    let records = load_records(file)?;
    let result = run_query(&records, state);
    let view = present(&records, state, result);

    // Only a real search has a field to explain
    let matched_on = |record: &Record| {
        if explain {
            best_match_field(record, &state.search_input)
        } else {
            None
        }
    };

    if json {
        let out = if explain {
            let rows: Vec<ExplainedRecord> = view
                .records()
                .iter()
                .map(|&record| ExplainedRecord {
                    record,
                    matched_on: matched_on(record),
                })
                .collect();
            serde_json::to_string_pretty(&rows)?
        } else {
            serde_json::to_string_pretty(view.records())?
        };
        println!("{}", out);
        return Ok(());
    }

    double_header();
    title(&format!(
        "platform: {}  search: \"{}\"  sort: {}",
        state.platform, state.search_input, state.sort_by
    ));
    double_footer();

    match &view {
        View::NoMatches => {
            println!("No influencers match \"{}\".", state.search_input);
        }
        View::Everything(_) => {
            println!("Nothing on {}; showing all {} records.", state.platform, records.len());
        }
        View::Results(shown) => {
            println!("{} of {} records", shown.len(), records.len());
        }
    }

    for record in view.records() {
        record_card(record, matched_on(*record));
    }
    Ok(())
}

fn run_platforms() {
    section_top("PLATFORMS");
    row(&format!(" {:<12} {}", PlatformFilter::ALL_SENTINEL, "All"));
    for kind in PlatformKind::ALL {
        row(&format!(" {:<12} {}", kind.as_str(), kind.label()));
    }
    section_bot();
}

fn run_inspect(file: &Path, json: bool) -> scout::Result<()> {
    let records = load_records(file)?;
    let summary = summarize(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    section_top(&format!("COLLECTION: {}", file.display()));
    row(&format!(" records:              {}", summary.total));
    row(&format!(" without primary tag:  {}", summary.without_primary_tag));
    row(&format!(" without tags:         {}", summary.without_tags));
    if let (Some(min), Some(max)) = (summary.min_followers, summary.max_followers) {
        row(&format!(" followers:            {} – {}", min, max));
    }
    section_bot();

    section_top("BY PLATFORM");
    for platform in &summary.platforms {
        row(&format!(" {:<12} {:>8}", platform.label, platform.count));
    }
    section_bot();
    Ok(())
}
