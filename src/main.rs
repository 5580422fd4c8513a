use chrono::Utc;
use deckwright::content::{self, OUTPUT_PATH};
use deckwright::{Layout, PresentationReader};
use std::process::ExitCode;

fn run() -> deckwright::Result<()> {
    let mut builder = content::build_deck(Layout::wide())?;
    let mut metadata = builder.deck().metadata().clone();
    metadata.created = Some(Utc::now());
    builder = builder.with_metadata(metadata);

    builder.save(OUTPUT_PATH)?;

    let reader = PresentationReader::open(OUTPUT_PATH)?;
    log::info!(
        "{}: {} slides by {}",
        OUTPUT_PATH,
        reader.slide_count(),
        reader.author().unwrap_or("unknown")
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{} failed: {}", err.stage(), err);
            ExitCode::FAILURE
        },
    }
}
