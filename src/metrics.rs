//! Catalog observability: fallback-rate metrics for the lookup path.
//!
//! The formatter is the server's error-reporting path, so the interesting
//! health signal is how often lookups degrade: an unknown-identifier
//! fallback means a code was raised that no catalog registered, and a
//! formatting fallback means a catalog entry disagrees with its call sites.
//! Counters are relaxed atomics; this is trend data, not accounting.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global catalog metrics singleton.
pub struct CatalogMetrics {
    /// Total lookups through the process-wide formatter entry points
    lookups: AtomicUsize,

    /// Lookups that fell back because the identifier was never registered
    unknown_ids: AtomicUsize,

    /// Lookups that fell back because substitution failed
    format_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<CatalogMetrics> = OnceLock::new();

impl CatalogMetrics {
    /// Get the global catalog metrics instance.
    pub fn global() -> &'static CatalogMetrics {
        METRICS.get_or_init(|| CatalogMetrics {
            lookups: AtomicUsize::new(0),
            unknown_ids: AtomicUsize::new(0),
            format_failures: AtomicUsize::new(0),
        })
    }

    /// Record a lookup through the formatter.
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an unknown-identifier fallback.
    pub fn record_unknown_id(&self) {
        self.unknown_ids.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a formatting fallback (placeholder/argument mismatch).
    pub fn record_format_failure(&self) {
        self.format_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Current lookup count.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Current unknown-identifier fallback count.
    pub fn unknown_ids(&self) -> usize {
        self.unknown_ids.load(Ordering::Relaxed)
    }

    /// Current formatting fallback count.
    pub fn format_failures(&self) -> usize {
        self.format_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let unknown_ids = self.unknown_ids();
        let format_failures = self.format_failures();
        let fallbacks = unknown_ids + format_failures;
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport { lookups, unknown_ids, format_failures, fallback_rate }
    }

    /// Reset all counters to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.unknown_ids.store(0, Ordering::Relaxed);
        self.format_failures.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current catalog lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups through the formatter
    pub lookups: usize,

    /// Unknown-identifier fallbacks
    pub unknown_ids: usize,

    /// Formatting fallbacks
    pub format_failures: usize,

    /// Share of lookups that degraded to a fallback, as a percentage (0-100)
    pub fallback_rate: f64,
}
