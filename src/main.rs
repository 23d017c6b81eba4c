use clap::Parser;

use trello_sweep_lib::api::TrelloClient;
use trello_sweep_lib::config::Credentials;
use trello_sweep_lib::filter::{completed_check_items, filter_checklists};

/// The checklist this tool sweeps. Only the card is configurable.
const TARGET_CHECKLIST: &str = "Other";

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the credentials file (JSON with Key, Token, CardID)
    #[arg(short, long, default_value = "credentials.json")]
    credentials: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::init();
    let args = Args::parse();

    let creds = Credentials::load(&args.credentials)?;
    let client = TrelloClient::new(creds);

    let checklists = client.get_checklists().await?;
    let check_items = filter_checklists(TARGET_CHECKLIST, &checklists);
    let targets = completed_check_items(check_items);
    log::info!(
        "{} of {} items in '{}' are complete",
        targets.len(),
        check_items.len(),
        TARGET_CHECKLIST
    );

    client.clean_checklists(&targets).await?;

    Ok(())
}
