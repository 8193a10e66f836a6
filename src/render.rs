// Text rendering of a Snapshot. Pure: takes values and a style, returns text.

use crate::config::SnapshotConfig;
use crate::models::Snapshot;
use crate::normalize::{bytes_to_gib, format_boot_time, format_uptime};
use crossterm::style::{Color, StyledContent, Stylize};
use std::fmt;

const FILLED_GLYPH: char = '█';
const EMPTY_GLYPH: char = '░';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Header,
    Label,
    Normal,
    Warning,
    Port,
}

impl Style {
    pub fn color(self) -> Color {
        match self {
            Style::Header => Color::Cyan,
            Style::Label => Color::White,
            Style::Normal | Style::Port => Color::Green,
            Style::Warning => Color::Red,
        }
    }
}

pub fn styled<D: fmt::Display>(value: D, style: Style) -> StyledContent<D> {
    crossterm::style::style(value).with(style.color())
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub bar_width: usize,
    pub warn_threshold_percent: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bar_width: 20,
            warn_threshold_percent: 80.0,
        }
    }
}

impl From<&SnapshotConfig> for RenderOptions {
    fn from(config: &SnapshotConfig) -> Self {
        Self {
            bar_width: config.bar_width,
            warn_threshold_percent: config.warn_threshold_percent,
        }
    }
}

/// Fixed-width usage bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub filled: usize,
    pub width: usize,
    pub level: Style,
}

impl Bar {
    /// `filled` is `percent / 100 * width` rounded to the nearest glyph.
    /// Anything strictly above `threshold` is a warning.
    pub fn new(percent: f64, width: usize, threshold: f64) -> Self {
        let ratio = if percent.is_finite() {
            percent.clamp(0.0, 100.0) / 100.0
        } else {
            0.0
        };
        let filled = ((ratio * width as f64).round() as usize).min(width);
        let level = if percent > threshold {
            Style::Warning
        } else {
            Style::Normal
        };
        Self {
            filled,
            width,
            level,
        }
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.width {
            let glyph = if i < self.filled {
                FILLED_GLYPH
            } else {
                EMPTY_GLYPH
            };
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

/// Renders the five-section text report.
pub fn render_report(snapshot: &Snapshot, options: &RenderOptions) -> String {
    Report::new(snapshot, *options).to_string()
}

/// The five-section text report. Render with `to_string()` or `{}`.
pub struct Report<'a> {
    snapshot: &'a Snapshot,
    options: RenderOptions,
}

impl<'a> Report<'a> {
    pub fn new(snapshot: &'a Snapshot, options: RenderOptions) -> Self {
        Self { snapshot, options }
    }

    fn header(&self, f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f, "{}", styled(title, Style::Header))
    }

    fn info(&self, f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
        writeln!(f, "{}", styled(format!("  {label:<10}: {value}"), Style::Label))
    }

    fn usage(&self, f: &mut fmt::Formatter<'_>, label: &str, percent: f64) -> fmt::Result {
        let bar = Bar::new(
            percent,
            self.options.bar_width,
            self.options.warn_threshold_percent,
        );
        writeln!(
            f,
            "{}{}",
            styled(format!("  {label:<10}: "), Style::Label),
            styled(format!("{bar} {percent:.2}%"), bar.level)
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.snapshot;

        self.header(f, "[1] Host Overview")?;
        self.info(f, "Hostname", &s.host.hostname)?;
        self.info(f, "OS", format!("{} {}", s.host.platform, s.host.architecture))?;
        self.info(f, "Version", &s.host.platform_version)?;
        self.info(f, "Kernel", &s.host.kernel_version)?;
        self.info(f, "Arch", &s.host.architecture)?;
        self.info(
            f,
            "Boot time",
            format!(
                "{} (up {} hours)",
                format_boot_time(s.host.boot_time.timestamp()),
                format_uptime(s.host.uptime)
            ),
        )?;

        writeln!(f)?;
        self.header(f, "[2] CPU Status")?;
        self.info(f, "Model", &s.cpu.model_name)?;
        self.info(f, "Cores", format!("{} Cores", s.cpu.core_count))?;
        self.usage(f, "CPU usage", s.cpu.usage_percent)?;

        writeln!(f)?;
        self.header(f, "[3] Memory Status")?;
        self.info(f, "Total", format!("{:.2} GiB", bytes_to_gib(s.memory.total_bytes)))?;
        self.usage(f, "Mem usage", s.memory.used_percent())?;

        writeln!(f)?;
        self.header(f, "[4] Disk Space (root)")?;
        self.info(f, "Total", format!("{:.2} GiB", bytes_to_gib(s.disk.total_bytes)))?;
        self.info(f, "Free", format!("{:.2} GiB", bytes_to_gib(s.disk.free_bytes)))?;
        self.usage(f, "Disk usage", s.disk.used_percent())?;

        writeln!(f)?;
        self.header(f, "[5] Listening Ports")?;
        write!(f, "{}", styled(format!("  {:<10}: ", "TCP ports"), Style::Label))?;
        if s.ports.is_empty() {
            write!(f, "{}", styled("none", Style::Label))?;
        }
        for port in &s.ports {
            write!(f, "{}", styled(format!("[{port}] "), Style::Port))?;
        }
        writeln!(f)
    }
}
