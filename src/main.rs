use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, ValueHint};
use marketplace_sort::api::Api;
use marketplace_sort::config::{self, Config};
use marketplace_sort::models::PageQuery;
use marketplace_sort::sort::SortColumn;
use marketplace_sort::view::catalog::{
    ContractColumn, InvoiceColumn, MilestoneColumn, ProjectColumn, ProposalColumn, ViewKind,
};
use marketplace_sort::view::{ListView, latest_refetch};
use tokio::sync::mpsc;
use tracing::info;

mod cli;
mod errors;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    errors::init()?;

    // Enhance the help message for the config argument
    let def = config::get_config_path();
    let help = format!("Path to config file (default: {})", def.display());
    let cmd = cli::Args::command()
        .mut_arg("config", |a| a.help(help).value_hint(ValueHint::FilePath).next_line_help(true));
    let args = cli::Args::from_arg_matches(&cmd.get_matches())?;

    let config = Config::new(args.config.clone())?;
    logging::init(&config)?;

    match args.view {
        ViewKind::Projects => run::<ProjectColumn>(&args, &config).await,
        ViewKind::Contracts => run::<ContractColumn>(&args, &config).await,
        ViewKind::Proposals => run::<ProposalColumn>(&args, &config).await,
        ViewKind::Milestones => run::<MilestoneColumn>(&args, &config).await,
        ViewKind::Invoices => run::<InvoiceColumn>(&args, &config).await,
    }
}

async fn run<C: SortColumn>(args: &cli::Args, config: &Config) -> Result<()> {
    let name = args.view.to_string();
    let view_config = config.view(&name);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let mut view = ListView::<C>::mount(&name, &view_config, args.single)?.with_action_tx(action_tx);
    let initial = view.sort_param().clone();
    view.toggle_tokens(&args.toggles)?;

    println!("{}", view.render_header());
    for token in view.sort_param() {
        println!("{token}");
    }
    // closes the action channel
    drop(view);

    let sort = latest_refetch(&mut action_rx, initial).await;
    if !args.fetch {
        return Ok(());
    }

    let path = view_config.path.unwrap_or(name);
    info!("fetching `{}` page {} sorted by [{}]", path, args.page, sort);
    let api = Api::new(config)?;
    let query = PageQuery::new(args.page, config.page_size, sort);
    let page = api.fetch_page::<serde_json::Value>(&path, &query).await?;
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
