#[cfg(feature = "lambda")]
use brand_forge::config::lambda::{LambdaConfig, ProxyRequest, ProxyResponse};
#[cfg(feature = "lambda")]
use brand_forge::core::handler::{error_response, BrandHandler};
#[cfg(feature = "lambda")]
use brand_forge::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use brand_forge::HttpGateway;
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &BrandHandler<HttpGateway, LambdaConfig>,
    event: LambdaEvent<ProxyRequest>,
) -> Result<ProxyResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Handling generate-brand request");

    let response = match event.payload.into_http_request() {
        Ok(request) => handler.handle(request).await,
        Err(e) => {
            tracing::error!("generate-brand error: {}", e);
            error_response(&e)
        }
    };

    tracing::info!(status = response.status.as_u16(), "generate-brand request completed");
    Ok(response.into())
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入一次配置
    let config = LambdaConfig::from_env();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let gateway = HttpGateway::new(config.gateway_url.clone());
    let handler = BrandHandler::new(gateway, config);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<ProxyRequest>| async move {
        function_handler(handler, event).await
    }))
    .await
}
