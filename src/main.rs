// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use ritaglio::config::settings::Settings;
use ritaglio::domain::services::extraction_service::ArticleExtractor;
use ritaglio::domain::services::tag_classifier::{KeywordTagClassifier, TagClassifier};
use ritaglio::engines::proxy_fetch::ProxyFetchEngine;
use ritaglio::engines::traits::PageFetcher;
use ritaglio::infrastructure::cache::{MediaUrlCache, SystemClock};
use ritaglio::infrastructure::storage::create_signed_url_resolver;
use ritaglio::presentation::routes;
use ritaglio::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting ritaglio...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize signed URL resolution and its cache
    let resolver = create_signed_url_resolver(&settings.storage, &settings.media_cache)
        .map_err(|e| anyhow::anyhow!("Storage initialization failed: {}", e))?;
    let media_cache = Arc::new(MediaUrlCache::new(
        resolver,
        Arc::new(SystemClock),
        Duration::from_secs(settings.media_cache.cache_duration_secs),
    ));
    media_cache.start_sweeper(Duration::from_secs(settings.media_cache.sweep_interval_secs));
    info!("Media URL cache initialized");

    // 4. Initialize extraction pipeline
    let fetcher: Arc<dyn PageFetcher> = Arc::new(ProxyFetchEngine::new(&settings.proxy)?);
    let extractor = Arc::new(ArticleExtractor::new(fetcher));
    let classifier: Arc<dyn TagClassifier> = Arc::new(KeywordTagClassifier);
    info!("Extraction pipeline initialized");

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(Extension(extractor))
        .layer(Extension(media_cache))
        .layer(Extension(classifier))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
