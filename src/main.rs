use clap::Parser;
use dialoguer::MultiSelect;
use otb_helper::{cli, client, config, error, logging, output};
use otb_helper_common::{
    build_checkout_plan, csv_filename_today, export_csv, AddOutcome, CartStore, DiscRecord,
    DiscView, FilterSession, JsonFileStorage, Notice, SearchRequest,
};
use cli::{CartAction, Cli, Commands, FilterArgs};
use client::SearchClient;
use config::Config;
use error::Result;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            output::print_notice(&Notice::error(e.to_string()));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    match cli.command {
        Commands::Search { name, max_results, filters, view, export, pick } => {
            let base_url = config.resolve_base_url(cli.base_url.as_deref());
            let request = SearchRequest::new(&name, max_results.unwrap_or(config.max_results))?;
            let client = SearchClient::new(base_url, Duration::from_secs(config.timeout_seconds))?;

            println!("🥏 otb-helper - search\n");
            let pb = output::spinner(format!("Searching OTB for \"{}\"...", request.product_name));
            let result = client.search(&request).await;
            pb.finish_and_clear();
            let outcome = result?;
            println!("{}", outcome.info_line());

            let mut session = FilterSession::new();
            session.replace_records(outcome.records);
            apply_filters(&mut session, &filters);

            let mode = view.unwrap_or_else(|| config.view_mode());
            println!();
            output::print_results(session.filtered(), mode);

            if let Some(path) = export {
                export_results(session.filtered(), &path)?;
            }

            if pick {
                pick_into_cart(session.filtered())?;
            }
        }

        Commands::Health => {
            let base_url = config.resolve_base_url(cli.base_url.as_deref());
            let client = SearchClient::new(base_url, Duration::from_secs(config.timeout_seconds))?;
            let message = client.health().await?;
            output::print_notice(&Notice::success(format!("{} ({})", message, client.base_url())));
        }

        Commands::Cart { action } => {
            let mut store = open_cart()?;
            match action.unwrap_or(CartAction::List) {
                CartAction::List => output::print_cart(store.items()),
                CartAction::Remove { key } => {
                    let removed = store.remove(&key)?;
                    output::print_notice(&Notice::removal(removed));
                }
                CartAction::Clear => {
                    store.clear()?;
                    output::print_notice(&Notice::cart_cleared());
                }
            }
        }

        Commands::Checkout => {
            let store = open_cart()?;
            let plan = build_checkout_plan(store.items())?;
            println!("🛒 Quick Add to OTB Cart\n");
            println!("{}", output::render_checkout(&plan));
        }

        Commands::Config { set_base_url, set_view, show } => {
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(&url)?;
                changed = true;
                println!("✔ Base URL set to {}", config.base_url);
            }

            if let Some(view) = set_view {
                config.set_view(&view)?;
                changed = true;
                println!("✔ Default view set to {}", config.view);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("Settings:");
                println!("  Base URL: {}", config.base_url);
                println!("  Max results: {}", config.max_results);
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  View: {}", config.view_mode().as_str());
                println!("  Config file: {}", Config::config_path()?.display());
                println!("  Cart file: {}", Config::cart_path()?.display());
            }
        }
    }

    Ok(())
}

fn apply_filters(session: &mut FilterSession, filters: &FilterArgs) {
    let mut controls = filters.to_controls();
    if !controls.normalize_ranges().is_empty() {
        output::print_notice(&Notice::ranges_adjusted());
    }
    session.apply_controls(&controls);

    if session.filters().is_meaningful() {
        println!("{}", session.filters().summary());
        println!("{}", session.results_info());
    }
}

fn export_results(discs: &[DiscRecord], path: &Path) -> Result<()> {
    let csv = match export_csv(discs) {
        Ok(csv) => csv,
        Err(otb_helper_common::Error::EmptyExport) => {
            output::print_notice(&Notice::nothing_to_export());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let target: PathBuf = if path.is_dir() {
        path.join(csv_filename_today())
    } else {
        path.to_path_buf()
    };
    std::fs::write(&target, csv)?;
    tracing::info!(path = %target.display(), count = discs.len(), "exported csv");
    output::print_notice(&Notice::exported(discs.len()));
    println!("  {}", target.display());
    Ok(())
}

fn pick_into_cart(discs: &[DiscRecord]) -> Result<()> {
    if discs.is_empty() {
        return Ok(());
    }

    let labels: Vec<String> = discs
        .iter()
        .map(|d| {
            let view = DiscView::from_record(d);
            format!(
                "{} - {} {} {}",
                view.name,
                view.plastic_color.as_deref().unwrap_or("N/A"),
                view.weight,
                view.price.as_deref().unwrap_or("")
            )
        })
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Add to cart (space to select, enter to confirm)")
        .items(&labels)
        .interact()?;

    let mut store = open_cart()?;
    for index in picked {
        let disc = &discs[index];
        let notice = match store.add(disc)? {
            AddOutcome::Added => Notice::added_to_cart(&disc.display_name()),
            AddOutcome::Duplicate => Notice::duplicate_in_cart(),
        };
        output::print_notice(&notice);
    }
    println!("🛒 {} item(s) in cart", store.len());
    Ok(())
}

fn open_cart() -> Result<CartStore<JsonFileStorage>> {
    let path = Config::cart_path()?;
    tracing::debug!(path = %path.display(), "opening cart");
    Ok(CartStore::load(JsonFileStorage::new(path)))
}
