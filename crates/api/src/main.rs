use anyhow::Context;

use prodclean_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    prodclean_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let addr = config.bind_addr();
    let max_bulk_products = config.max_bulk_products;

    let app = prodclean_api::app::build_app(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        max_bulk_products,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
