use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use msgwiz_application::{
    CustomerDirectoryUseCase, GenerateMessageUseCase, GenerationOutcome, Notifier, SkipReason,
    WizardSummary, confirm_and_reset,
};
use msgwiz_core::WizardError;
use msgwiz_core::config::{BackendMode, WizardConfig};
use msgwiz_core::customer::CustomerService;
use msgwiz_core::generation::GenerationBackend;
use msgwiz_core::persona::{CatalogRepository, PersonaCatalog};
use msgwiz_core::wizard::{SharedWizardStore, SimulationPatch, WizardStore};
use msgwiz_infrastructure::{
    ConfigService, PresetCatalogRepository, TomlCatalogRepository, WizardPaths,
};
use msgwiz_interaction::{build_customer_service, build_generation_backend};

mod commands;
mod console_notifier;
mod helper;
mod render;

use commands::Command;
use console_notifier::ConsoleNotifier;
use helper::CliHelper;

#[derive(Parser)]
#[command(name = "msgwiz")]
#[command(about = "MSGWIZ - persona-driven marketing message wizard", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/msgwiz/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides `backend.mode`
    #[arg(long)]
    backend: Option<BackendMode>,

    /// Overrides `backend.base_url`
    #[arg(long)]
    api_base_url: Option<String>,
}

fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| format!("msgwiz={level}").into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Explicit `catalog.path`, then the user catalog file if it exists.
fn catalog_path(config: &WizardConfig, user_catalog: Option<PathBuf>) -> Option<PathBuf> {
    config
        .catalog
        .path
        .clone()
        .or_else(|| user_catalog.filter(|path| path.is_file()))
}

async fn load_catalog(config: &WizardConfig) -> Result<PersonaCatalog> {
    let catalog = match catalog_path(config, WizardPaths::catalog_file().ok()) {
        Some(path) => TomlCatalogRepository::new(path).load().await?,
        None => PresetCatalogRepository.load().await?,
    };
    Ok(catalog)
}

/// Everything a REPL command may touch.
struct App {
    store: SharedWizardStore,
    generation: GenerateMessageUseCase,
    directory: CustomerDirectoryUseCase,
    notifier: Arc<dyn Notifier>,
}

impl App {
    fn new(
        store: SharedWizardStore,
        backend: Arc<dyn GenerationBackend>,
        customers: Arc<dyn CustomerService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            generation: GenerateMessageUseCase::new(
                store.clone(),
                backend,
                customers.clone(),
                notifier.clone(),
            ),
            directory: CustomerDirectoryUseCase::new(store.clone(), customers),
            store,
            notifier,
        }
    }

    async fn execute(&self, command: Command) -> Result<()> {
        match command {
            Command::Help => render::print_help(),
            Command::Personas => render::print_personas(self.store.read().await.state()),
            Command::Persona(Some(id)) => {
                let mut store = self.store.write().await;
                if !store.state().personas.iter().any(|p| p.id == id) {
                    return Err(WizardError::not_found("Persona", id).into());
                }
                store.toggle_persona(&id);
            }
            Command::Persona(None) => self.store.write().await.select_persona(None),
            Command::Customers => {
                self.directory.refresh().await?;
                render::print_customers(self.store.read().await.state());
            }
            Command::Customer(id) => self.directory.select(id.as_deref()).await?,
            Command::Intention(intention) => self.store.write().await.set_intention(intention),
            Command::Brand(enabled) => self.store.write().await.set_brand_targeting(enabled),
            Command::Target(brand) => self.store.write().await.set_target_brand(brand),
            Command::Channel(channel) => self.store.write().await.set_selected_channel(channel),
            Command::Options => {
                let store = self.store.read().await;
                render::print_options(store.state(), store.catalog());
            }
            Command::Tone(tone) => self.apply(SimulationPatch::preferred_tone(tone)).await?,
            Command::SkinTypes(values) => self.apply(SimulationPatch::skin_type(values)).await?,
            Command::Concerns(values) => self.apply(SimulationPatch::skin_concerns(values)).await?,
            Command::Keywords(values) => self.apply(SimulationPatch::keywords(values)).await?,
            Command::Status => self.print_status().await,
            Command::Generate => {
                self.generate().await;
            }
            Command::Reset => {
                if confirm_and_reset(&self.store, self.notifier.as_ref()).await {
                    println!("{}", "Wizard reset.".bright_green());
                }
            }
            Command::Quit => {}
        }
        Ok(())
    }

    async fn apply(&self, patch: SimulationPatch) -> Result<()> {
        self.store.write().await.apply_simulation_patch_checked(patch)?;
        Ok(())
    }

    async fn print_status(&self) {
        let summary = WizardSummary::from_state(self.store.read().await.state());
        render::print_summary(&summary);
    }

    /// Runs generation once intention, persona and channel are all set.
    async fn generate(&self) -> Option<GenerationOutcome> {
        if !self.store.read().await.is_ready() {
            println!(
                "{}",
                "Set an intention, a persona and a channel first.".bright_black()
            );
            return None;
        }
        println!("{}", "Generating...".yellow());
        let outcome = self.generation.generate().await;
        match &outcome {
            GenerationOutcome::Completed(_) => self.print_status().await,
            GenerationOutcome::Skipped(SkipReason::InFlight) => {
                println!("{}", "A message is already being generated.".bright_black());
            }
            GenerationOutcome::Skipped(_) => {
                println!("{}", "Select a persona and a channel first.".bright_black());
            }
            // Already alerted by the notifier
            GenerationOutcome::Failed(_) => {}
        }
        Some(outcome)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let mut config = config_service.get_config()?;
    if let Some(mode) = cli.backend {
        config.backend.mode = mode;
    }
    if let Some(url) = cli.api_base_url {
        config.backend.base_url = url;
    }
    init_logging(&config.logging.level);

    // ===== Composition =====
    let catalog = load_catalog(&config).await?;
    let store = WizardStore::shared(Arc::new(catalog));
    let app = App::new(
        store.clone(),
        build_generation_backend(&config.backend),
        build_customer_service(&config),
        Arc::new(ConsoleNotifier::default()),
    );
    if let Err(e) = app.directory.refresh().await {
        tracing::warn!(error = %e, "[main] could not load customers");
    }

    let mut updates = store.read().await.subscribe();

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    println!("{}", "=== MSGWIZ ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Backend: {}. Type /help for commands, /quit to exit.", config.backend.mode).bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        match rl.readline("msgwiz> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match commands::parse(trimmed) {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e.to_string().red());
                        continue;
                    }
                };
                if command == Command::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if let Err(e) = app.execute(command).await {
                    eprintln!("{}", e.to_string().red());
                }

                if updates.has_changed().unwrap_or(false) {
                    let progress = msgwiz_core::wizard::WizardProgress::from_state(&updates.borrow_and_update());
                    println!("{}", render::progress_bar(&progress).bright_black());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type /quit to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgwiz_application::TracingNotifier;
    use msgwiz_core::persona::get_default_catalog;
    use msgwiz_core::wizard::Channel;
    use msgwiz_infrastructure::InMemoryCustomerService;
    use msgwiz_interaction::MockGenerationBackend;
    use std::time::Duration;

    fn app() -> App {
        App::new(
            WizardStore::shared(Arc::new(get_default_catalog())),
            Arc::new(MockGenerationBackend::new(Duration::ZERO)),
            Arc::new(InMemoryCustomerService::default()),
            Arc::new(TracingNotifier::default()),
        )
    }

    #[tokio::test]
    async fn test_generate_waits_for_intention() {
        let app = app();
        app.execute(Command::Persona(Some("glow_hunter".to_string())))
            .await
            .unwrap();
        app.execute(Command::Channel(Some(Channel::Email))).await.unwrap();

        assert!(app.generate().await.is_none());
        app.execute(Command::Generate).await.unwrap();
        let state = app.store.read().await.state().clone();
        assert!(state.generated_result.is_none());
        assert!(!state.is_generating);

        app.execute(Command::Intention(Some("Spring Sale".to_string())))
            .await
            .unwrap();
        let outcome = app.generate().await.unwrap();
        assert!(outcome.is_completed());
        let state = app.store.read().await.state().clone();
        assert!(state.generated_result.unwrap().contains("Spring Sale"));
    }

    #[test]
    fn test_catalog_path_resolution() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let user_catalog = temp_dir.path().join("catalog.toml");
        let mut config = WizardConfig::default();

        // Missing user file falls through to the preset
        assert_eq!(catalog_path(&config, Some(user_catalog.clone())), None);

        std::fs::write(&user_catalog, "").unwrap();
        assert_eq!(
            catalog_path(&config, Some(user_catalog.clone())),
            Some(user_catalog.clone())
        );

        let explicit = temp_dir.path().join("team.toml");
        config.catalog.path = Some(explicit.clone());
        assert_eq!(catalog_path(&config, Some(user_catalog)), Some(explicit));
    }

    #[tokio::test]
    async fn test_unknown_persona_is_rejected() {
        let app = app();
        let err = app
            .execute(Command::Persona(Some("nobody".to_string())))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("nobody"));
        assert!(app.store.read().await.state().selected_persona_id.is_none());
    }
}
