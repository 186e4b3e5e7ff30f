//! Bulletin demo shell — minimal CLI around the announcement core.
//!
//! Usage:
//!   bulletin <url> [<owner>=<url> ...]   run once against the given feeds
//!   bulletin --encode-sample             print a sample record as wire JSON
//!
//! The real presentation shell lives in the host application; this binary
//! just prints the selected message's plain text.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bulletin::text::{ClickAction, RichText, Span};
use bulletin::{Announcement, Config, Orchestrator, RunState};

/// Enable compact tracing logs in development only.
/// Activation requires BULLETIN_DEV_LOG=1.
fn enable_dev_tracing() {
    let dev_flag = std::env::var("BULLETIN_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");
    if !dev_flag {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bulletin=debug,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn main() -> Result<()> {
    enable_dev_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--encode-sample") {
        println!("{}", sample_record().to_json());
        return Ok(());
    }

    // "owner=url" pairs, or bare URLs owned by "cli".
    let candidates: Vec<(String, String)> = args
        .iter()
        .map(|arg| match arg.split_once('=') {
            Some((owner, url)) => (owner.to_string(), url.to_string()),
            None => ("cli".to_string(), arg.clone()),
        })
        .collect();

    let orchestrator = Orchestrator::new(Config::from_env());
    let mut state = RunState::new();
    let shown = orchestrator.apply(&mut state, candidates, None, |_, record| Some(record));

    match shown {
        Some(record) => println!("{}", record.message.plain_text()),
        None => println!("no new announcements"),
    }
    Ok(())
}

/// Sample styled record with a click-action link, for feed authors.
fn sample_record() -> Announcement {
    let message = RichText::Sequence(vec![
        RichText::plain("Help the Ukrainians "),
        RichText::span(
            Span::new("here")
                .color("blue")
                .underlined(true)
                .on_click(
                    ClickAction::OpenUrl,
                    "https://donate.redcross.org.uk/appeal/ukraine-crisis-appeal",
                ),
        ),
    ]);
    Announcement {
        uuid: uuid::Uuid::new_v4(),
        message,
        locale: None,
        from: None,
        expire: None,
    }
}
