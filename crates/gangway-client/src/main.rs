mod output;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use gangway_client::boot::{eager_initializers, standard_initializers};
use gangway_client::page::Page;
use gangway_core::gate::ReadyGate;
use gangway_core::location::Location;
use gangway_core::orchestrator::{self, BootReport};

/// Headless driver for the client boot sequence: builds the standard page,
/// delivers the readiness signal, and prints the boot report. Load the page
/// with `--search '?_ui_performance_trace=1'` to get per-initializer timing.
#[derive(Parser)]
#[command(
    name = "gangway",
    about = "Run the client boot sequence headlessly and report its cost",
    version
)]
struct Cli {
    /// Raw query string of the page being booted (e.g. "?_ui_performance_trace=1")
    #[arg(long, default_value = "", env = "GANGWAY_SEARCH")]
    search: String,

    /// Output the boot report as JSON
    #[arg(long, short = 'j')]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let page = Page::new(Location::new(&cli.search));
    let gate = ReadyGate::new();

    for init in eager_initializers(&page) {
        init.run()?;
    }

    // Play the host's part: register the gated pass, then deliver readiness.
    let slot: Rc<RefCell<Option<gangway_core::Result<BootReport>>>> = Rc::default();
    {
        let page = page.clone();
        let slot = slot.clone();
        gate.on_ready(move || {
            let sequence = standard_initializers(&page);
            *slot.borrow_mut() = Some(orchestrator::run_all(page.location(), sequence));
        });
    }
    gate.signal_ready();

    let report = slot
        .borrow_mut()
        .take()
        .context("readiness gate did not fire")??;

    if cli.json {
        output::print_json(&report)?;
    } else {
        output::print_report(&report);
    }

    Ok(())
}
