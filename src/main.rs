use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use github_showcase::adapters::render::{render_dashboard, render_unavailable};
use github_showcase::adapters::{
    FileKeyValueStore, GitHubRestSource, InMemoryKeyValueStore, RedisKeyValueStore, SystemClock,
};
use github_showcase::application::ProfileDataAggregator;
use github_showcase::config::{AppConfig, CacheBackend, CacheConfig};
use github_showcase::ports::{Clock, KeyValueError, KeyValueStore};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate().and_then(|_| config.logging.init()) {
        eprintln!("Invalid configuration: {e}");
        return ExitCode::FAILURE;
    }

    let store = match build_store(&config.cache).await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Cache backend unavailable");
            println!("{}", render_unavailable());
            return ExitCode::FAILURE;
        }
    };
    let source = match GitHubRestSource::new(config.github.to_rest_config()) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "Failed to build GitHub client");
            println!("{}", render_unavailable());
            return ExitCode::FAILURE;
        }
    };
    let clock = Arc::new(SystemClock);

    let aggregator = ProfileDataAggregator::new(
        config.github.username.clone(),
        Arc::new(source),
        store,
        clock.clone(),
    );

    let result = if config.cache.force_refresh {
        info!("Forced refresh requested");
        aggregator.refresh().await
    } else {
        aggregator.get_data().await
    };

    match result {
        Ok(snapshot) => {
            println!("{}", render_dashboard(&snapshot, clock.now()));
            ExitCode::SUCCESS
        }
        Err(_) => {
            println!("{}", render_unavailable());
            ExitCode::FAILURE
        }
    }
}

async fn build_store(config: &CacheConfig) -> Result<Arc<dyn KeyValueStore>, KeyValueError> {
    let store: Arc<dyn KeyValueStore> = match config.backend {
        CacheBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        CacheBackend::File => Arc::new(FileKeyValueStore::new(&config.directory)),
        CacheBackend::Redis => {
            let url = config.redis_url.as_deref().unwrap_or_default();
            Arc::new(
                RedisKeyValueStore::connect(url)
                    .await?
                    .with_namespace("github-showcase"),
            )
        }
    };
    Ok(store)
}
