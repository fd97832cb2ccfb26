use brand_forge::core::ConfigProvider;
use brand_forge::utils::{logger, validation::Validate};
use brand_forge::{
    BrandError, BrandHandler, BrandIdentity, CliConfig, FormController, HttpGateway,
    LocalEndpoint, RemoteEndpoint, TomlConfig,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    config.resolve_api_key();

    tracing::info!("Starting brand-forge CLI");
    if config.verbose {
        tracing::debug!(
            "CLI config: view={:?}, endpoint={:?}, config={:?}, model={}, api key set={}",
            config.view,
            config.endpoint,
            config.config,
            config.model(),
            config.api_key.is_some()
        );
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(3);
    }

    let result = match (&config.endpoint, &config.config) {
        (Some(url), _) => {
            let mut endpoint = RemoteEndpoint::new(url.as_str());
            if let Some(token) = &config.endpoint_token {
                endpoint = endpoint.with_bearer_token(token.as_str());
            }
            FormController::new(endpoint)
                .submit(&config.brand_idea, config.industry.as_deref(), config.view)
                .await
        }
        (None, Some(path)) => {
            let mut file_config = TomlConfig::from_file(path)?;
            config.apply_overrides(&mut file_config);
            file_config.validate()?;
            submit_in_process(file_config, &config).await
        }
        (None, None) => submit_in_process(config.clone(), &config).await,
    };

    match result {
        Ok(identity) => {
            tracing::info!("✅ Brand identity generated");
            if config.json {
                println!("{}", serde_json::to_string_pretty(&identity)?);
            } else {
                println!("{}", config.view.render(&identity));
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Brand generation failed: {} (status {})",
                e,
                e.status_code()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match &e {
                BrandError::FormError { .. } | BrandError::InvalidInput { .. } => 1,
                e if e.is_retryable() => 2,
                _ => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn submit_in_process<C: ConfigProvider>(
    provider: C,
    cli: &CliConfig,
) -> brand_forge::Result<BrandIdentity> {
    let gateway = HttpGateway::new(provider.gateway_url());
    let handler = BrandHandler::new(gateway, provider);
    FormController::new(LocalEndpoint::new(handler))
        .submit(&cli.brand_idea, cli.industry.as_deref(), cli.view)
        .await
}
