use clap::Parser;
use foody::{
    load_config, ConfigOverrides, DisplaySettings, Jp2aRenderer, Session, SessionOutcome,
    SourceRegistry, StdTerminal,
};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

/// Search for recipes and pick one interactively
#[derive(Parser, Debug)]
#[command(name = "foody", version, about)]
struct Cli {
    /// Choice of recipe source: edamam, spoonacular or csv
    #[arg(long, env = "SOURCE")]
    source: Option<String>,

    /// App key for spoonacular
    #[arg(long, env = "SPOONACULAR_APP_KEY", hide_env_values = true)]
    spoonacular_app_key: Option<String>,

    /// App id for edamam
    #[arg(long, env = "EDAMAM_APP_ID", hide_env_values = true)]
    edamam_app_id: Option<String>,

    /// App key for edamam
    #[arg(long, env = "EDAMAM_APP_KEY", hide_env_values = true)]
    edamam_app_key: Option<String>,

    /// File location for recipe csv
    #[arg(long, env = "CSV_LOCATION")]
    csv_location: Option<PathBuf>,

    /// Config file to read instead of ./foody.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

impl From<&Cli> for ConfigOverrides {
    fn from(cli: &Cli) -> Self {
        ConfigOverrides {
            source: cli.source.clone(),
            spoonacular_app_key: cli.spoonacular_app_key.clone(),
            edamam_app_id: cli.edamam_app_id.clone(),
            edamam_app_key: cli.edamam_app_key.clone(),
            csv_location: cli.csv_location.clone(),
        }
    }
}

fn run(cli: Cli) -> foody::Result<()> {
    let config = load_config(cli.config.as_deref(), ConfigOverrides::from(&cli))?;
    let settings = DisplaySettings::try_from(&config.display)?;
    let source = SourceRegistry::create(&config)?;

    let mut session = Session::new(
        StdTerminal::new(),
        Jp2aRenderer::new(settings.image_width),
        settings,
    );

    match session.run(source.as_ref())? {
        SessionOutcome::Chosen(recipe) => info!("chose '{}'", recipe.name),
        SessionOutcome::InputClosed => info!("input closed, exiting"),
        SessionOutcome::Declined | SessionOutcome::NoResults { .. } => {}
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
