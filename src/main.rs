use anyhow::Context;
use clap::Parser;
use fireworks_inventory::{cli, config, prompt, report, session};
use cli::{Cli, Commands};
use config::Config;
use fireworks_inventory_common::ViewMode;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // log クレート経由の出力も取り込まれる
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load().context("failed to load config")?;

    match cli.command {
        Commands::Brands => {
            let store = session::open_store(&config)?;
            println!("Brands\n");
            report::print_brands(store.brands(), store.records());
        }

        Commands::List { brand, search } => {
            let mut store = session::open_store(&config)?;

            // ブランド選択で検索語はリセットされるため、ブランドを先に設定する
            store.set_selected_brand(brand);
            if let Some(query) = search {
                store.set_search_query(query);
            }

            let heading = match store.view_mode() {
                ViewMode::Brands => "All items".to_string(),
                ViewMode::Items => store.heading(),
            };
            report::print_records(&heading, store.filtered());
        }

        Commands::Edit { item, name, price } => {
            let mut store = session::open_store(&config)?;

            let current = store
                .records()
                .iter()
                .find(|r| r.item_name == item)
                .cloned()
                .ok_or_else(|| fireworks_inventory_common::Error::NotFound(item.clone()))?;
            store.set_editing_target(Some(current.clone()));

            let update = prompt::record_update(&current, name, price)?;
            store
                .update_record(&item, update)
                .with_context(|| format!("Failed to update item {}", item))?;

            println!("✔ Updated: {}", item);
        }

        Commands::Add { brand, item, price, dr } => {
            let mut store = session::open_store(&config)?;
            store.set_adding_target(true);

            // 必須項目をすべて引数で指定した場合はDRを尋ねない
            let interactive = brand.is_none() || item.is_none() || price.is_none();
            let new_record = prompt::new_record(brand, item, price, dr, interactive)?;
            let item_name = new_record.item_name.clone();

            store.add_record(new_record).context("Failed to add new item")?;
            let id = store.records().last().map(|r| r.id).unwrap_or_default();
            println!("✔ Added: {} (id {})", item_name, id);
        }

        Commands::Import { file } => {
            let mut store = session::create_store(&config)?;
            let count = session::import_file(&mut store, &file)?;
            println!("✔ Imported {} items from {}", count, file.display());
            println!("  Brands: {}", store.brands().len());
        }

        Commands::Export { output } => {
            let store = session::open_store(&config)?;
            let path = session::export_path(output.as_deref(), &config.export_file_name);
            session::export_file(&store, &path)?;
            println!("✔ Exported {} items: {}", store.records().len(), path.display());
        }

        Commands::Config { set_bundled, set_data_dir, show } => {
            if let Some(path) = set_bundled {
                config.set_bundled_path(path)?;
                println!("✔ Bundled inventory file updated");
            }

            if let Some(dir) = set_data_dir {
                config.set_data_dir(dir)?;
                println!("✔ Data directory updated");
            }

            if show {
                let data_dir = config.resolve_data_dir()?;
                println!("Config:");
                println!("  Data directory: {}", data_dir.display());
                println!("  Storage key: {}", config.storage_key);
                println!("  Bundled file: {}", config.bundled_path.display());
                println!("  Export file name: {}", config.export_file_name);
            }
        }
    }

    Ok(())
}
