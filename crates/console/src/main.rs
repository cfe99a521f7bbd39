use anyhow::Context;

use stockroom_console::Session;
use stockroom_infra::{Config, FileInventoryStore};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    stockroom_observability::init(config.log_format);

    tracing::info!(data_file = %config.data_file.display(), "starting stockroom");
    let store = FileInventoryStore::new(&config.data_file);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let session = Session::start(store, stdin.lock(), stdout.lock())
        .context("failed to start console session")?;
    let inventory = session.run().context("console session failed")?;

    tracing::info!(
        titles = inventory.catalog().size(),
        customers = inventory.customers().size(),
        "session ended"
    );
    Ok(())
}
