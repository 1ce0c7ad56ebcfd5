use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::config::AppConfig;
use crate::model::data::{EntityView, LiveEvent, TickSample};
use crate::model::world::World;

/// JSON form of a finished run's series.
#[derive(Serialize, Debug)]
pub struct SeriesExport<'a> {
    pub seed: u64,
    pub fingerprint: String,
    pub ticks: u64,
    pub samples: &'a [TickSample],
}

/// JSON form of the final entity views.
#[derive(Serialize, Debug)]
pub struct SnapshotExport {
    pub tick: u64,
    pub width: u16,
    pub height: u16,
    pub entities: Vec<EntityView>,
}

/// Headless runner: owns the world and the events of the run.
pub struct App {
    pub world: World,
    pub events: Vec<LiveEvent>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let world = World::new(config)?;
        Ok(Self {
            world,
            events: Vec::new(),
        })
    }

    /// Reads a TOML configuration. A missing file yields the defaults.
    pub fn load_config(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        AppConfig::from_toml(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Advances the world `steps` ticks, collecting every event.
    pub fn run(&mut self, steps: u64) -> Result<&TickSample> {
        let events = self.world.run(steps).context("Simulation step failed")?;
        self.events.extend(events);
        self.world
            .collector()
            .latest()
            .context("No ticks were run")
    }

    pub fn series_export(&self) -> SeriesExport<'_> {
        SeriesExport {
            seed: self.world.seed(),
            fingerprint: self.world.config.fingerprint(),
            ticks: self.world.tick(),
            samples: self.world.collector().samples(),
        }
    }

    pub fn snapshot_export(&self) -> SnapshotExport {
        SnapshotExport {
            tick: self.world.tick(),
            width: self.world.width(),
            height: self.world.height(),
            entities: self.world.entity_views(),
        }
    }

    /// Writes the series as JSON when the path ends in `.json`, CSV otherwise.
    pub fn write_series(&self, path: &Path) -> Result<()> {
        let writer = create(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::to_writer_pretty(writer, &self.series_export())?;
        } else {
            self.world.collector().write_csv(writer)?;
        }
        tracing::info!(path = %path.display(), "Series written");
        Ok(())
    }

    pub fn write_snapshot(&self, path: &Path) -> Result<()> {
        let writer = create(path)?;
        serde_json::to_writer_pretty(writer, &self.snapshot_export())?;
        tracing::info!(path = %path.display(), "Snapshot written");
        Ok(())
    }

    /// Writes the run's events, one JSON object per line.
    pub fn write_events(&self, path: &Path) -> Result<()> {
        let mut writer = create(path)?;
        for event in &self.events {
            let json = serde_json::to_string(event)?;
            writeln!(writer, "{}", json)?;
        }
        writer.flush()?;
        tracing::info!(path = %path.display(), count = self.events.len(), "Events written");
        Ok(())
    }
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
