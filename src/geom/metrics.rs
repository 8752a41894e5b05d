//! Opt-in timing hooks for strip evaluation.
//!
//! Timing is collected only when the `mesh_engine_metrics` feature is enabled
//! and the target is not `wasm32` (`std::time::Instant` is unavailable there).
//! Otherwise every call is a pass-through and [`GeomMetrics::end`] returns `None`.
//!
//! ```ignore
//! let mut metrics = GeomMetrics::default();
//! metrics.begin();
//! let area = metrics.time(TimingBucket::SurfaceArea, || strip.surface_area());
//! if let Some(report) = metrics.end() {
//!     println!("area: {} ns", report.surface_area_ns);
//! }
//! ```

/// Phases of a strip evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingBucket {
    /// Grid construction and field evaluation.
    Sampling,
    /// Surface area integration.
    SurfaceArea,
    /// Boundary arc-length integration.
    EdgeLength,
    /// Triangulated export.
    Triangulation,
}

/// Cumulative nanoseconds per bucket.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeomTimingReport {
    pub sampling_ns: u64,
    pub surface_area_ns: u64,
    pub edge_length_ns: u64,
    pub triangulation_ns: u64,
}

impl GeomTimingReport {
    #[must_use]
    pub fn total_ns(&self) -> u64 {
        self.sampling_ns
            .saturating_add(self.surface_area_ns)
            .saturating_add(self.edge_length_ns)
            .saturating_add(self.triangulation_ns)
    }

    /// Total in milliseconds, for display.
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.total_ns() as f64 / 1_000_000.0
    }
}

#[derive(Debug, Default)]
pub struct GeomMetrics {
    #[cfg(all(feature = "mesh_engine_metrics", not(target_arch = "wasm32")))]
    report: GeomTimingReport,
}

impl GeomMetrics {
    /// Resets all counters.
    pub fn begin(&mut self) {
        #[cfg(all(feature = "mesh_engine_metrics", not(target_arch = "wasm32")))]
        {
            self.report = GeomTimingReport::default();
        }
    }

    /// The accumulated report, or `None` if metrics are compiled out.
    #[must_use]
    pub fn end(&self) -> Option<GeomTimingReport> {
        #[cfg(all(feature = "mesh_engine_metrics", not(target_arch = "wasm32")))]
        {
            Some(self.report.clone())
        }
        #[cfg(not(all(feature = "mesh_engine_metrics", not(target_arch = "wasm32"))))]
        {
            None
        }
    }

    /// Runs `f`, adding its wall time to `bucket` when metrics are enabled.
    pub fn time<R>(&mut self, bucket: TimingBucket, f: impl FnOnce() -> R) -> R {
        #[cfg(all(feature = "mesh_engine_metrics", not(target_arch = "wasm32")))]
        {
            let start = std::time::Instant::now();
            let result = f();
            let nanos = start.elapsed().as_nanos().min(u128::from(u64::MAX)) as u64;
            self.add_to_bucket(bucket, nanos);
            result
        }

        #[cfg(not(all(feature = "mesh_engine_metrics", not(target_arch = "wasm32"))))]
        {
            let _ = bucket;
            f()
        }
    }

    #[cfg(all(feature = "mesh_engine_metrics", not(target_arch = "wasm32")))]
    fn add_to_bucket(&mut self, bucket: TimingBucket, nanos: u64) {
        let slot = match bucket {
            TimingBucket::Sampling => &mut self.report.sampling_ns,
            TimingBucket::SurfaceArea => &mut self.report.surface_area_ns,
            TimingBucket::EdgeLength => &mut self.report.edge_length_ns,
            TimingBucket::Triangulation => &mut self.report.triangulation_ns,
        };
        *slot = slot.saturating_add(nanos);
    }
}
