use std::io;

use anyhow::Context;

use stockbook_infra::{CsvFileStore, InventoryService, StoreConfig};

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let config = StoreConfig::from_env();
    tracing::info!(path = %config.path.display(), "using inventory file");

    let service = InventoryService::new(CsvFileStore::from_config(&config));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    stockbook_cli::run(&service, stdin.lock(), &mut stdout).context("command loop failed")?;

    Ok(())
}
