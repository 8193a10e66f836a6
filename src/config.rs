use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// How the snapshot is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Widest usage bar a config may ask for.
pub const MAX_BAR_WIDTH: usize = 200;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Pause between the two CPU tick samples.
    pub sample_interval_ms: u64,
    /// Mount path whose usage is reported in the disk section.
    pub disk_path: PathBuf,
    /// Where procfs is mounted.
    pub proc_root: PathBuf,
    /// Percentages strictly above this render in the warning color.
    pub warn_threshold_percent: f64,
    /// Glyphs per usage bar.
    pub bar_width: usize,
    pub format: OutputFormat,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 200,
            disk_path: PathBuf::from("/"),
            proc_root: PathBuf::from("/proc"),
            warn_threshold_percent: 80.0,
            bar_width: 20,
            format: OutputFormat::Text,
        }
    }
}

impl SnapshotConfig {
    /// Reads the TOML file named by `CONFIG_FILE`, or returns defaults when unset.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => {
                let s = std::fs::read_to_string(&path)?;
                Self::load_from_str(&s)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: SnapshotConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.sample_interval_ms > 0,
            "sample_interval_ms must be > 0, got {}",
            self.sample_interval_ms
        );
        anyhow::ensure!(
            !self.disk_path.as_os_str().is_empty(),
            "disk_path must be non-empty"
        );
        anyhow::ensure!(
            !self.proc_root.as_os_str().is_empty(),
            "proc_root must be non-empty"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.warn_threshold_percent),
            "warn_threshold_percent must be between 0 and 100, got {}",
            self.warn_threshold_percent
        );
        anyhow::ensure!(
            self.bar_width > 0 && self.bar_width <= MAX_BAR_WIDTH,
            "bar_width must be between 1 and {MAX_BAR_WIDTH}, got {}",
            self.bar_width
        );
        Ok(())
    }
}
