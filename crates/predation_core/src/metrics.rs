//! Run metrics and the per-tick data collector.
//!
//! [`Metrics`] tracks tick throughput and lifecycle counters and reports
//! through `tracing`. [`DataCollector`] is the passive observer that records
//! one [`TickSample`] per tick for export.

use predation_data::{DeathCause, LiveEvent, TickSample};
use std::collections::BTreeMap;
use std::io::Write;
use std::time::{Duration, Instant};

/// Simulation statistics for a run.
#[derive(Debug)]
pub struct Metrics {
    tick_count: u64,
    last_tick: Duration,
    log_interval: u64,
    counters: BTreeMap<String, u64>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Metrics {
    /// Creates a collector that logs a summary every `log_interval` ticks.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: 0,
            last_tick: Duration::ZERO,
            log_interval,
            counters: BTreeMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&mut self, duration: Duration, sample: &TickSample) {
        self.tick_count += 1;
        self.last_tick = duration;

        if self.log_interval > 0 && self.tick_count % self.log_interval == 0 {
            tracing::info!(
                tick = sample.tick,
                wolves = sample.wolves,
                sheep = sample.sheep,
                grass_energy = sample.grass_energy,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Bumps the lifecycle counters for a tick's events.
    pub fn record_events(&mut self, events: &[LiveEvent]) {
        for event in events {
            match event {
                LiveEvent::Birth { .. } => self.increment_counter("births"),
                LiveEvent::Death {
                    cause: DeathCause::Predation,
                    ..
                } => self.increment_counter("deaths.predation"),
                LiveEvent::Death {
                    cause: DeathCause::Starvation,
                    ..
                } => self.increment_counter("deaths.starvation"),
                LiveEvent::Extinction { breed, tick } => {
                    tracing::info!(breed = %breed, tick = *tick, "Breed extinct");
                    self.increment_counter("extinctions");
                }
            }
        }
    }

    /// Increments a named counter.
    pub fn increment_counter(&mut self, name: &str) {
        *self.counters.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Current value of a named counter, zero if never incremented.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn last_tick_duration(&self) -> Duration {
        self.last_tick
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs the end-of-run summary.
    pub fn log_summary(&self, sample: &TickSample) {
        tracing::info!(
            ticks = self.tick_count,
            wolves = sample.wolves,
            sheep = sample.sheep,
            grass_energy = sample.grass_energy,
            births = self.counter("births"),
            predations = self.counter("deaths.predation"),
            starvations = self.counter("deaths.starvation"),
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Run finished"
        );
    }
}

/// Per-tick series of live counts and grass energy.
#[derive(Debug, Clone, Default)]
pub struct DataCollector {
    samples: Vec<TickSample>,
}

impl DataCollector {
    pub const CSV_HEADER: &'static str = "tick,wolves,sheep,grass_energy";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: TickSample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[TickSample] {
        &self.samples
    }

    pub fn latest(&self) -> Option<&TickSample> {
        self.samples.last()
    }

    /// Values of one series, keyed by its chart label.
    pub fn series(&self, label: &str) -> Option<Vec<i64>> {
        let samples = self.samples.iter();
        let values = match label {
            "Wolves" => samples.map(|s| s.wolves as i64).collect(),
            "Sheep" => samples.map(|s| s.sheep as i64).collect(),
            "Grass Energy" => samples.map(|s| s.grass_energy).collect(),
            _ => return None,
        };
        Some(values)
    }

    pub fn write_csv<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", Self::CSV_HEADER)?;
        for s in &self.samples {
            writeln!(writer, "{},{},{},{}", s.tick, s.wolves, s.sheep, s.grass_energy)?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predation_data::{Breed, EntityId};

    fn sample(tick: u64) -> TickSample {
        TickSample {
            tick,
            wolves: 3,
            sheep: 7,
            grass_energy: 12,
        }
    }

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new(10);
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.counter("births"), 0);
    }

    #[test]
    fn test_record_tick() {
        let mut metrics = Metrics::new(1);
        metrics.record_tick(Duration::from_millis(2), &sample(1));
        assert_eq!(metrics.tick_count(), 1);
        assert_eq!(metrics.last_tick_duration(), Duration::from_millis(2));
    }

    #[test]
    fn test_record_events_counts_by_cause() {
        let mut metrics = Metrics::default();
        let death = |cause| LiveEvent::Death {
            id: EntityId(1),
            breed: Breed::Herbivore,
            cause,
            tick: 1,
        };
        metrics.record_events(&[
            death(DeathCause::Predation),
            death(DeathCause::Predation),
            death(DeathCause::Starvation),
            LiveEvent::Extinction {
                breed: Breed::Herbivore,
                tick: 1,
            },
        ]);
        assert_eq!(metrics.counter("deaths.predation"), 2);
        assert_eq!(metrics.counter("deaths.starvation"), 1);
        assert_eq!(metrics.counter("extinctions"), 1);
    }

    #[test]
    fn test_collector_csv() {
        let mut collector = DataCollector::new();
        collector.push(sample(1));
        collector.push(sample(2));
        let mut out = Vec::new();
        collector.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "tick,wolves,sheep,grass_energy\n1,3,7,12\n2,3,7,12\n");
    }

    #[test]
    fn test_series_by_label() {
        let mut collector = DataCollector::new();
        collector.push(sample(1));
        assert_eq!(collector.series("Sheep"), Some(vec![7]));
        assert_eq!(collector.series("Grass Energy"), Some(vec![12]));
        assert_eq!(collector.series("Rabbits"), None);
        assert_eq!(collector.latest().map(|s| s.tick), Some(1));
    }
}
