use clap::Parser;
use directories::ProjectDirs;
use fitcrm::api::{AssumeYes, ConfigAction, FitcrmApi, FitcrmPaths};
use fitcrm::commands::{detail::DetailView, form::FormState};
use fitcrm::config::FitcrmConfig;
use fitcrm::enrich::remote::WgerSource;
use fitcrm::enrich::{Enrichment, ExerciseSource, OfflineSource};
use fitcrm::error::{FitcrmError, Result};
use fitcrm::model::ClientForm;
use fitcrm::store::fs::FileStore;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{ClientArgs, Cli, Commands};
use cli::print::{
    print_client, print_config, print_enrichment, print_listing, print_loading, print_messages,
};
use cli::prompt::StdinConfirm;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: FitcrmApi<FileStore>,
    config: FitcrmConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Add(fields)) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, id, fields),
        Some(Commands::View { id, offline }) => handle_view(&ctx, id, offline),
        Some(Commands::Delete { id, search, yes }) => handle_delete(&mut ctx, id, search, yes),
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os("FITCRM_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "fitcrm", "fitcrm")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FitcrmError::Config("Could not determine data dir".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    debug!(data_dir = %data_dir.display(), "resolved data dir");

    let config = FitcrmConfig::load_or_default(&data_dir);

    let store = FileStore::new(data_dir.clone()).with_slot(&config.storage_slot);
    let api = FitcrmApi::new(store, FitcrmPaths { data_dir });
    Ok(AppContext { api, config })
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let listing = ctx.api.list_clients(search.as_deref().unwrap_or(""))?;
    print_listing(&listing);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: ClientArgs) -> Result<()> {
    let mut form = ClientForm::default();
    fields.apply_to(&mut form);

    let result = ctx.api.submit_form(None, form)?;
    print_messages(&result.messages);
    if let Some(listing) = &result.listing {
        print_listing(listing);
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: String, fields: ClientArgs) -> Result<()> {
    let mut form = match ctx.api.open_form(Some(&id))? {
        FormState::Prefilled(form) => form,
        FormState::NotFound(id) => {
            println!("Client not found: {}", id);
            return Ok(());
        }
        FormState::Blank => ClientForm::default(),
    };
    fields.apply_to(&mut form);

    let result = ctx.api.submit_form(Some(&id), form)?;
    print_messages(&result.messages);
    if let Some(listing) = &result.listing {
        print_listing(listing);
    }
    Ok(())
}

fn handle_view(ctx: &AppContext, id: String, offline: bool) -> Result<()> {
    let client = match ctx.api.view_client(&id)? {
        DetailView::Found(client) => client,
        DetailView::NotFound(_) => {
            println!("Client not found.");
            return Ok(());
        }
    };

    print_client(&client);
    print_loading(&Enrichment::Loading);

    let source = exercise_source(&ctx.config, offline);
    let panel = ctx.api.exercise_suggestions(&client, source.as_ref());
    print_enrichment(&panel);
    Ok(())
}

fn exercise_source(config: &FitcrmConfig, offline: bool) -> Box<dyn ExerciseSource> {
    if offline {
        return Box::new(OfflineSource);
    }
    match WgerSource::new(config) {
        Ok(source) => Box::new(source),
        Err(e) => {
            warn!(error = %e, "exercise API client unavailable");
            Box::new(OfflineSource)
        }
    }
}

fn handle_delete(
    ctx: &mut AppContext,
    id: String,
    search: Option<String>,
    yes: bool,
) -> Result<()> {
    let filter = search.unwrap_or_default();
    let result = if yes {
        ctx.api.delete_client(&id, &filter, &mut AssumeYes)?
    } else {
        ctx.api.delete_client(&id, &filter, &mut StdinConfirm)?
    };

    print_messages(&result.messages);
    if let Some(listing) = &result.listing {
        print_listing(listing);
    }
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if result.has_errors() {
        let reason = result
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(FitcrmError::Config(reason));
    }
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
