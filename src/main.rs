use clap::Parser;
use hisui_research::app::{offline, server};
use hisui_research::core::{CatalogProvider, ConfigProvider};
use hisui_research::utils::{logger, validation::Validate};
use hisui_research::{
    CliConfig, CsvCatalogProvider, JsonResearchDecoder, ResearchError, ResearchReader, TomlConfig,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let toml = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(toml) => toml,
        Err(e) => exit_with(&e),
    };

    let verbose = cli.verbose || toml.as_ref().is_some_and(|t| t.verbose());
    if cli.log_json || toml.as_ref().is_some_and(|t| t.json_logs()) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting hisui-research");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match &toml {
        Some(toml) => run(toml, cli.save.as_deref()).await,
        None => run(&cli, cli.save.as_deref()).await,
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => exit_with(&e),
    }

    Ok(())
}

/// Returns the process exit code.
async fn run<C: ConfigProvider + Validate>(config: &C, save: Option<&str>) -> hisui_research::Result<i32> {
    config.validate()?;

    let provider = match config.catalog_path() {
        Some(path) => CsvCatalogProvider::from_path(path),
        None => CsvCatalogProvider::bundled(),
    };
    let catalog = Arc::new(provider.hisuidex()?);
    let reader = ResearchReader::new(catalog, JsonResearchDecoder);

    if let Some(path) = save {
        let response = offline::read_save_file(&reader, path)?;
        let (json, code) = offline::render(&response)?;
        println!("{}", json);
        return Ok(code);
    }

    let addr = hisui_research::utils::validation::validate_socket_addr("bind", config.bind_address())?;
    let listener = server::bind(addr).await?;
    let router = server::router(Arc::new(reader), config.max_upload_bytes());
    server::serve(listener, router).await?;
    Ok(0)
}

fn exit_with(e: &ResearchError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
