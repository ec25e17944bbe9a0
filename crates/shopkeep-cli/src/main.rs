//! Shopkeep CLI - conversational catalog assistant
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        reason = "Allow for tests"
    )
)]

use std::io::{stdin, stdout};

use anyhow::Result;
use clap::Parser as _;
use cli::Cli;

mod cli;
mod handlers;

fn main() -> Result<()> {
    let cli = Cli::parse();
    handlers::init_logging(cli.verbose);

    let config = handlers::load_config(&cli)?;
    let router = handlers::build_router(&config)?;

    let mut output = stdout().lock();
    if cli.queries.is_empty() {
        handlers::run_session(&router, stdin().lock(), &mut output)
    } else {
        handlers::answer_queries(&router, &cli.queries, &mut output)
    }
}
