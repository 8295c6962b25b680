// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::domain::repositories::media_storage::{ResolutionError, SignedUrlResolver};
use crate::infrastructure::cache::clock::Clock;

/// 缓存条目
#[derive(Debug, Clone)]
struct CacheEntry {
    url: String,
    resolved_at: Instant,
}

/// 缓存统计信息
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStats {
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

/// 签名URL缓存
///
/// 以对象键为键缓存已解析的签名URL。缓存时长必须低于
/// 签名本身的有效期，留出安全边际，保证命中返回的URL
/// 在消费端仍然可用。
pub struct MediaUrlCache {
    resolver: Arc<dyn SignedUrlResolver>,
    clock: Arc<dyn Clock>,
    entries: DashMap<String, CacheEntry>,
    cache_duration: Duration,
    stats: CacheStats,
}

impl MediaUrlCache {
    /// 创建新的签名URL缓存
    pub fn new(
        resolver: Arc<dyn SignedUrlResolver>,
        clock: Arc<dyn Clock>,
        cache_duration: Duration,
    ) -> Self {
        Self {
            resolver,
            clock,
            entries: DashMap::new(),
            cache_duration,
            stats: CacheStats::default(),
        }
    }

    /// 解析对象键为可用URL
    ///
    /// # 参数
    ///
    /// * `key` - 对象存储键，或已是完整URL的字符串
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 可直接访问的URL
    /// * `Err(ResolutionError)` - 解析失败，失败结果不会被缓存
    pub async fn resolve(&self, key: &str) -> Result<String, ResolutionError> {
        // Absolute URLs pass through untouched and never enter the cache
        if key.starts_with("http://") || key.starts_with("https://") {
            return Ok(key.to_string());
        }

        let now = self.clock.now();
        if let Some(entry) = self.entries.get(key) {
            if now.duration_since(entry.resolved_at) < self.cache_duration {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Signed URL cache hit for key: {}", key);
                return Ok(entry.url.clone());
            }
        }

        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        let url = self.resolver.signed_url(key).await?;
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                url: url.clone(),
                resolved_at: now,
            },
        );
        debug!("Signed URL resolved and cached for key: {}", key);
        Ok(url)
    }

    /// 使指定键的缓存条目失效
    pub fn invalidate(&self, key: &str) {
        self.entries.remove(key);
    }

    /// 处理消费端报告的加载失败
    ///
    /// 缓存的URL可能在条目过期前就已失效（例如签名被提前撤销）。
    /// 收到失败报告后逐出条目并重新解析一次，不做进一步重试。
    pub async fn handle_load_failure(&self, key: &str) -> Result<String, ResolutionError> {
        warn!("Reported load failure for media key: {}", key);
        self.invalidate(key);
        self.resolve(key).await
    }

    /// 清理过期条目
    ///
    /// # 返回值
    ///
    /// * 被逐出的条目数量
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        // Counted inside the closure: handlers may insert concurrently,
        // so comparing map sizes before and after would miscount.
        let mut evicted = 0;
        self.entries.retain(|_, entry| {
            let fresh = now.duration_since(entry.resolved_at) < self.cache_duration;
            if !fresh {
                evicted += 1;
            }
            fresh
        });
        if evicted > 0 {
            debug!("Swept {} expired signed URL entries", evicted);
        }
        evicted
    }

    /// 启动后台清理任务
    pub fn start_sweeper(self: &Arc<Self>, interval: Duration) {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                cache.sweep();
            }
        });
        info!("Signed URL cache sweeper started, interval: {:?}", interval);
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::clock::test_support::ManualClock;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    /// 每次调用返回不同URL的计数解析器
    struct CountingResolver {
        calls: AtomicUsize,
    }

    impl CountingResolver {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SignedUrlResolver for CountingResolver {
        async fn signed_url(&self, key: &str) -> Result<String, ResolutionError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(format!("https://cdn.example.com/{}?sig={}", key, n))
        }
    }

    struct FailingResolver;

    #[async_trait]
    impl SignedUrlResolver for FailingResolver {
        async fn signed_url(&self, _key: &str) -> Result<String, ResolutionError> {
            Err(ResolutionError::Storage("bucket unavailable".to_string()))
        }
    }

    fn cache_with(
        resolver: Arc<CountingResolver>,
        clock: Arc<ManualClock>,
        duration: Duration,
    ) -> MediaUrlCache {
        MediaUrlCache::new(resolver, clock, duration)
    }

    #[tokio::test]
    async fn test_fresh_hit_avoids_second_resolution() {
        let resolver = Arc::new(CountingResolver::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(resolver.clone(), clock, Duration::from_secs(840));

        let first = cache.resolve("img/a.jpg").await.unwrap();
        let second = cache.resolve("img/a.jpg").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(resolver.calls(), 1);
        assert_eq!(cache.stats().hits(), 1);
        assert_eq!(cache.stats().misses(), 1);
    }

    #[tokio::test]
    async fn test_stale_entry_triggers_fresh_resolution() {
        let resolver = Arc::new(CountingResolver::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(resolver.clone(), clock.clone(), Duration::from_secs(840));

        let first = cache.resolve("img/a.jpg").await.unwrap();
        clock.advance(Duration::from_secs(841));
        let second = cache.resolve("img/a.jpg").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(resolver.calls(), 2);
    }

    #[tokio::test]
    async fn test_absolute_urls_pass_through_uncached() {
        let resolver = Arc::new(CountingResolver::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(resolver.clone(), clock, Duration::from_secs(840));

        let url = "https://static.example.com/logo.png";
        assert_eq!(cache.resolve(url).await.unwrap(), url);
        let http_url = "http://static.example.com/logo.png";
        assert_eq!(cache.resolve(http_url).await.unwrap(), http_url);

        assert_eq!(resolver.calls(), 0);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_evicts_and_resolves_exactly_once() {
        let resolver = Arc::new(CountingResolver::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(resolver.clone(), clock, Duration::from_secs(840));

        let first = cache.resolve("img/a.jpg").await.unwrap();
        let refreshed = cache.handle_load_failure("img/a.jpg").await.unwrap();

        assert_ne!(first, refreshed);
        assert_eq!(resolver.calls(), 2);

        // The refreshed URL is now the cached one
        assert_eq!(cache.resolve("img/a.jpg").await.unwrap(), refreshed);
        assert_eq!(resolver.calls(), 2);
    }

    #[tokio::test]
    async fn test_sweep_evicts_only_expired_entries() {
        let resolver = Arc::new(CountingResolver::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(resolver.clone(), clock.clone(), Duration::from_secs(840));

        cache.resolve("img/old.jpg").await.unwrap();
        clock.advance(Duration::from_secs(500));
        cache.resolve("img/recent.jpg").await.unwrap();
        clock.advance(Duration::from_secs(400));

        // old is 900s stale, recent only 400s
        assert_eq!(cache.sweep(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(resolver.calls(), 2);

        cache.resolve("img/recent.jpg").await.unwrap();
        assert_eq!(resolver.calls(), 2);
    }

    #[tokio::test]
    async fn test_sweep_count_is_exact_when_entries_are_added_after_expiry() {
        let resolver = Arc::new(CountingResolver::new());
        let clock = Arc::new(ManualClock::new());
        let cache = cache_with(resolver.clone(), clock.clone(), Duration::from_secs(840));

        cache.resolve("img/stale-1.jpg").await.unwrap();
        cache.resolve("img/stale-2.jpg").await.unwrap();
        cache.resolve("img/stale-3.jpg").await.unwrap();
        clock.advance(Duration::from_secs(900));

        // Fresh entries resolved after the old ones expired must not
        // distort the eviction count
        cache.resolve("img/fresh-1.jpg").await.unwrap();
        cache.resolve("img/fresh-2.jpg").await.unwrap();

        assert_eq!(cache.sweep(), 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.sweep(), 0);
    }

    #[tokio::test]
    async fn test_resolver_failure_is_not_cached() {
        let clock = Arc::new(ManualClock::new());
        let cache = MediaUrlCache::new(
            Arc::new(FailingResolver),
            clock,
            Duration::from_secs(840),
        );

        let err = cache.resolve("img/a.jpg").await.unwrap_err();
        assert!(matches!(err, ResolutionError::Storage(_)));
        assert!(cache.is_empty());
    }
}
