//! Section classification with a bounded memo cache
//!
//! Classifying an identifier is a cheap parse, but assessments look the
//! same identifiers up thousands of times while grouping and
//! cross-referencing, so results are memoized. The cache is bounded and
//! evicts in strict insertion order (FIFO); a hit does not refresh an
//! entry's position. Unparseable identifiers are cached negatively so a
//! malformed document cannot force repeated re-parsing.
//!
//! Each classifier owns its counters and cache. Two classifiers never
//! share state, so tests and embedded instances cannot contaminate each
//! other's metrics.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::core::identifier::section_prefix;
use crate::section::code::Section;

/// Default cache capacity, sized for a few dozen concurrent documents
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Ratio-based health findings need at least this many lookups
const MIN_LOOKUPS_FOR_RATIOS: u64 = 100;
/// Hit ratios below this suggest the cache is thrashing or misused
const HIT_RATIO_FLOOR: f64 = 0.20;
/// Invalid ratios above this suggest a malformed source document
const INVALID_RATIO_CEILING: f64 = 0.10;

/// Runtime thresholds for [`SectionClassifier::check_health`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitoringConfig {
    /// Evictions tolerated within one window before the cache is unhealthy
    pub eviction_threshold: u64,
    /// Sliding window over which evictions are counted
    pub window: Duration,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            eviction_threshold: 100,
            window: Duration::from_secs(60),
        }
    }
}

/// Point-in-time counter snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Lookups that resolved to no known section (counted per lookup,
    /// cached or not)
    pub invalid: u64,
    pub entries: usize,
    pub capacity: usize,
}

impl CacheMetrics {
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hits per lookup, 0.0 before the first lookup
    pub fn hit_ratio(&self) -> f64 {
        if self.lookups() == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups() as f64
        }
    }
}

/// One reason a cache was judged unhealthy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealthFinding {
    /// More evictions inside the sliding window than the threshold allows
    ExcessiveEvictions {
        observed: u64,
        threshold: u64,
        window: Duration,
    },
    /// Hit ratio below the floor after sufficient volume
    LowHitRatio { ratio: f64 },
    /// Too many lookups resolving to no known section
    HighInvalidRatio { ratio: f64 },
}

impl std::fmt::Display for HealthFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthFinding::ExcessiveEvictions {
                observed,
                threshold,
                window,
            } => write!(
                f,
                "{} evictions in the last {}s (threshold {})",
                observed,
                window.as_secs(),
                threshold
            ),
            HealthFinding::LowHitRatio { ratio } => {
                write!(f, "hit ratio {:.1}% is below {:.0}%", ratio * 100.0, HIT_RATIO_FLOOR * 100.0)
            }
            HealthFinding::HighInvalidRatio { ratio } => {
                write!(f, "invalid lookup ratio {:.1}% is above {:.0}%", ratio * 100.0, INVALID_RATIO_CEILING * 100.0)
            }
        }
    }
}

/// Result of a health check
#[derive(Debug, Clone, PartialEq)]
pub struct CacheHealth {
    pub healthy: bool,
    pub findings: Vec<HealthFinding>,
}

struct CacheState {
    entries: HashMap<String, Option<Section>>,
    /// Insertion-ordered keys; the front is always the next eviction victim
    order: VecDeque<String>,
    hits: u64,
    misses: u64,
    evictions: u64,
    invalid: u64,
    eviction_times: VecDeque<Instant>,
    monitoring: MonitoringConfig,
}

impl CacheState {
    fn new(monitoring: MonitoringConfig) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            hits: 0,
            misses: 0,
            evictions: 0,
            invalid: 0,
            eviction_times: VecDeque::new(),
            monitoring,
        }
    }

    fn evict_oldest(&mut self, now: Instant) {
        if let Some(oldest) = self.order.pop_front() {
            self.entries.remove(&oldest);
            self.evictions += 1;
            self.eviction_times.push_back(now);
            self.prune_eviction_times(now);
        }
    }

    fn prune_eviction_times(&mut self, now: Instant) {
        let window = self.monitoring.window;
        while let Some(&front) = self.eviction_times.front() {
            if now.duration_since(front) > window {
                self.eviction_times.pop_front();
            } else {
                break;
            }
        }
    }
}

/// Maps question identifiers to sections, memoizing results
///
/// All lookups are infallible: an identifier either resolves to one of
/// the 13 sections or to `None`. Failures of any kind are expressed as
/// `None` plus an incremented `invalid` counter, never as an error.
pub struct SectionClassifier {
    capacity: usize,
    state: Mutex<CacheState>,
    debug: AtomicBool,
}

impl SectionClassifier {
    /// Create a classifier with the given cache capacity (at least 1)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: Mutex::new(CacheState::new(MonitoringConfig::default())),
            debug: AtomicBool::new(false),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resolve an identifier's section, consulting the cache first.
    ///
    /// The map lookup, counter updates, and eviction all happen under one
    /// lock acquisition, so the key ring and the entry map cannot drift
    /// apart under concurrent use.
    pub fn classify(&self, id: &str) -> Option<Section> {
        let mut state = self.lock_state();

        let cached = state.entries.get(id).copied();
        if let Some(result) = cached {
            state.hits += 1;
            if result.is_none() {
                state.invalid += 1;
            }
            if self.debug_mode() {
                debug!(identifier = id, result = ?result, "section cache hit");
            }
            return result;
        }

        state.misses += 1;
        let resolved = section_prefix(id).and_then(Section::from_code);
        if resolved.is_none() {
            state.invalid += 1;
        }

        if state.entries.len() >= self.capacity {
            state.evict_oldest(Instant::now());
        }
        state.entries.insert(id.to_string(), resolved);
        state.order.push_back(id.to_string());

        if self.debug_mode() {
            debug!(identifier = id, result = ?resolved, "section cache miss");
        }

        resolved
    }

    /// Snapshot the counters
    pub fn metrics(&self) -> CacheMetrics {
        let state = self.lock_state();
        CacheMetrics {
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
            invalid: state.invalid,
            entries: state.entries.len(),
            capacity: self.capacity,
        }
    }

    /// Judge cache health against the monitoring thresholds.
    ///
    /// Ratio findings only apply once enough lookups have accumulated;
    /// a cold cache is healthy by definition.
    pub fn check_health(&self) -> CacheHealth {
        let mut state = self.lock_state();
        let now = Instant::now();
        state.prune_eviction_times(now);

        let mut findings = Vec::new();

        let windowed = state.eviction_times.len() as u64;
        if windowed > state.monitoring.eviction_threshold {
            findings.push(HealthFinding::ExcessiveEvictions {
                observed: windowed,
                threshold: state.monitoring.eviction_threshold,
                window: state.monitoring.window,
            });
        }

        let lookups = state.hits + state.misses;
        if lookups >= MIN_LOOKUPS_FOR_RATIOS {
            let hit_ratio = state.hits as f64 / lookups as f64;
            if hit_ratio < HIT_RATIO_FLOOR {
                findings.push(HealthFinding::LowHitRatio { ratio: hit_ratio });
            }

            let invalid_ratio = state.invalid as f64 / lookups as f64;
            if invalid_ratio > INVALID_RATIO_CEILING {
                findings.push(HealthFinding::HighInvalidRatio {
                    ratio: invalid_ratio,
                });
            }
        }

        CacheHealth {
            healthy: findings.is_empty(),
            findings,
        }
    }

    /// Toggle verbose per-lookup logging at runtime
    pub fn set_debug_mode(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn debug_mode(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Replace the monitoring thresholds at runtime
    pub fn configure_monitoring(&self, config: MonitoringConfig) {
        let mut state = self.lock_state();
        state.monitoring = config;
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, CacheState> {
        // A panic while holding the lock leaves plain counters behind;
        // the poisoned state is still valid to use.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for SectionClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for SectionClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let metrics = self.metrics();
        f.debug_struct("SectionClassifier")
            .field("capacity", &self.capacity)
            .field("entries", &metrics.entries)
            .field("hits", &metrics.hits)
            .field("misses", &metrics.misses)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_sections() {
        let classifier = SectionClassifier::new(16);
        assert_eq!(classifier.classify("7.3"), Some(Section::CrossBorderTransfers));
        assert_eq!(
            classifier.classify("2.6 Does the org process EU data?"),
            Some(Section::DataInventory)
        );
    }

    #[test]
    fn test_classify_invalid_identifiers() {
        let classifier = SectionClassifier::new(16);
        assert_eq!(classifier.classify("appendix"), None);
        assert_eq!(classifier.classify("99.1"), None);
        assert_eq!(classifier.metrics().invalid, 2);
    }

    #[test]
    fn test_hit_and_miss_counters() {
        let classifier = SectionClassifier::new(16);
        classifier.classify("1.1");
        classifier.classify("1.1");
        classifier.classify("1.1");
        classifier.classify("2.1");

        let metrics = classifier.metrics();
        assert_eq!(metrics.misses, 2);
        assert_eq!(metrics.hits, 2);
        assert_eq!(metrics.entries, 2);
    }

    #[test]
    fn test_negative_results_are_cached() {
        let classifier = SectionClassifier::new(16);
        classifier.classify("not-a-question");
        classifier.classify("not-a-question");

        let metrics = classifier.metrics();
        assert_eq!(metrics.misses, 1);
        assert_eq!(metrics.hits, 1);
        // Both lookups resolved to no section
        assert_eq!(metrics.invalid, 2);
    }

    #[test]
    fn test_eviction_is_fifo_not_lru() {
        let classifier = SectionClassifier::new(2);
        classifier.classify("1.1");
        classifier.classify("2.1");
        // Touch the oldest entry; FIFO must NOT refresh its position
        classifier.classify("1.1");
        classifier.classify("3.1");

        let metrics = classifier.metrics();
        assert_eq!(metrics.evictions, 1);
        assert_eq!(metrics.entries, 2);

        // "1.1" was evicted despite being recently used
        let before = classifier.metrics().misses;
        classifier.classify("1.1");
        assert_eq!(classifier.metrics().misses, before + 1);

        // "2.1" survived
        let before = classifier.metrics().hits;
        classifier.classify("2.1");
        assert_eq!(classifier.metrics().hits, before + 1);
    }

    #[test]
    fn test_eviction_keeps_map_and_ring_aligned() {
        let classifier = SectionClassifier::new(3);
        for i in 0..50 {
            classifier.classify(&format!("{}.1", i % 14));
        }
        let metrics = classifier.metrics();
        assert!(metrics.entries <= 3);
        assert_eq!(metrics.lookups(), 50);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let classifier = SectionClassifier::new(0);
        assert_eq!(classifier.capacity(), 1);
        classifier.classify("1.1");
        classifier.classify("2.1");
        assert_eq!(classifier.metrics().entries, 1);
    }

    #[test]
    fn test_metrics_hit_ratio() {
        let classifier = SectionClassifier::new(16);
        assert_eq!(classifier.metrics().hit_ratio(), 0.0);

        classifier.classify("1.1");
        classifier.classify("1.1");
        classifier.classify("1.1");
        classifier.classify("1.1");
        assert_eq!(classifier.metrics().hit_ratio(), 0.75);
    }

    #[test]
    fn test_cold_cache_is_healthy() {
        let classifier = SectionClassifier::new(16);
        let health = classifier.check_health();
        assert!(health.healthy);
        assert!(health.findings.is_empty());
    }

    #[test]
    fn test_low_volume_never_triggers_ratio_findings() {
        let classifier = SectionClassifier::new(16);
        // 10 invalid lookups: terrible ratios, but below the volume bar
        for i in 0..10 {
            classifier.classify(&format!("junk-{i}"));
        }
        assert!(classifier.check_health().healthy);
    }

    #[test]
    fn test_unhealthy_ratios_after_volume() {
        let classifier = SectionClassifier::new(256);
        for i in 0..100 {
            classifier.classify(&format!("junk-{i}"));
        }

        let health = classifier.check_health();
        assert!(!health.healthy);
        assert!(
            health
                .findings
                .iter()
                .any(|f| matches!(f, HealthFinding::LowHitRatio { .. }))
        );
        assert!(
            health
                .findings
                .iter()
                .any(|f| matches!(f, HealthFinding::HighInvalidRatio { .. }))
        );
    }

    #[test]
    fn test_healthy_workload() {
        let classifier = SectionClassifier::new(256);
        for _ in 0..100 {
            classifier.classify("4.2");
        }
        assert!(classifier.check_health().healthy);
    }

    #[test]
    fn test_eviction_threshold_from_monitoring_config() {
        let classifier = SectionClassifier::new(1);
        classifier.configure_monitoring(MonitoringConfig {
            eviction_threshold: 2,
            window: Duration::from_secs(3600),
        });

        // 3 evictions within the window, threshold allows 2
        for code in 1..=4 {
            classifier.classify(&format!("{code}.1"));
        }

        let health = classifier.check_health();
        assert!(!health.healthy);
        assert!(
            health
                .findings
                .iter()
                .any(|f| matches!(f, HealthFinding::ExcessiveEvictions { observed: 3, .. }))
        );
    }

    #[test]
    fn test_debug_mode_toggle() {
        let classifier = SectionClassifier::new(16);
        assert!(!classifier.debug_mode());
        classifier.set_debug_mode(true);
        assert!(classifier.debug_mode());
        classifier.set_debug_mode(false);
        assert!(!classifier.debug_mode());
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let a = SectionClassifier::new(16);
        let b = SectionClassifier::new(16);
        a.classify("1.1");

        assert_eq!(a.metrics().misses, 1);
        assert_eq!(b.metrics().misses, 0);
    }

    #[test]
    fn test_concurrent_lookups_stay_consistent() {
        use std::sync::Arc;

        let classifier = Arc::new(SectionClassifier::new(8));
        let mut handles = Vec::new();
        for t in 0..4 {
            let classifier = Arc::clone(&classifier);
            handles.push(std::thread::spawn(move || {
                for i in 0..250 {
                    classifier.classify(&format!("{}.{}", (t + i) % 16, i % 9));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let metrics = classifier.metrics();
        assert_eq!(metrics.lookups(), 1000);
        assert!(metrics.entries <= 8);
    }
}
