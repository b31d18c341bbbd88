use super::render::{print_messages, render_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use grocify::api::{self, ConfigAction, GrocifyApi};
use grocify::error::Result;
use grocify::init::{initialize, GrocifyContext};
use grocify::model::Price;
use grocify::store::fs::FileStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const ENV_LOG: &str = "GROCIFY_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = initialize(cli.ledger)?;

    match cli.command {
        Some(Commands::Add {
            name,
            price,
            quantity,
        }) => handle_add(&ctx, &name, price, quantity),
        Some(Commands::View { raw }) => handle_view(&ctx, raw),
        Some(Commands::Reset) => handle_reset(&ctx),
        Some(Commands::Init { force }) => handle_init(&ctx, force),
        Some(Commands::Paths) => handle_paths(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_view(&ctx, false),
    }
}

/// Logs go to stderr so they never mix with list output.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "grocify=debug,info"
        } else {
            "grocify=warn"
        })
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

fn open(ctx: &GrocifyContext) -> Result<GrocifyApi<FileStore>> {
    GrocifyApi::open(ctx.store(), ctx.paths.clone())
}

fn handle_add(ctx: &GrocifyContext, name: &str, price: Price, quantity: u64) -> Result<()> {
    let mut api = open(ctx)?;
    let result = api.add_item(name, price, quantity)?;
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_view(ctx: &GrocifyContext, raw: bool) -> Result<()> {
    let api = open(ctx)?;
    let result = api.view(raw)?;
    match result.ledger_text {
        Some(text) => print!("{}", text),
        None => print!(
            "{}",
            render_list(
                &result.items,
                result.totals.unwrap_or_default(),
                &ctx.config.currency_symbol
            )?
        ),
    }
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_reset(ctx: &GrocifyContext) -> Result<()> {
    let mut api = open(ctx)?;
    let result = api.reset()?;
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_init(ctx: &GrocifyContext, force: bool) -> Result<()> {
    let result = api::init(&mut ctx.store(), force)?;
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_paths(ctx: &GrocifyContext) -> Result<()> {
    let result = api::paths(&ctx.paths)?;
    if let Some(paths) = &result.paths {
        println!("ledger: {}", paths.ledger.display());
        println!("config: {}", paths.config_dir.display());
    }
    print_messages(&result.messages)?;
    Ok(())
}

fn handle_config(ctx: &GrocifyContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config(&ctx.paths, action)?;
    for (k, v) in &result.config_values {
        println!("{} = {}", k, v);
    }
    print_messages(&result.messages)?;
    Ok(())
}
