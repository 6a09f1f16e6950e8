use anyhow::{Context, Result};
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Per-pixel kernel durations in nanoseconds, in render order.
#[derive(Debug, Clone, Default)]
pub struct Timings {
    samples: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; zero when there is only one sample.
    pub stdev: f64,
    pub min: u64,
    pub max: u64,
}

impl Timings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Timings {
            samples: Vec::with_capacity(n),
        }
    }

    pub fn record(&mut self, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.samples.push(nanos);
    }

    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn summary(&self) -> Option<TimingSummary> {
        let count = self.samples.len();
        if count == 0 {
            return None;
        }

        let mean = self.samples.iter().map(|&s| s as f64).sum::<f64>() / count as f64;
        let stdev = if count > 1 {
            let var = self
                .samples
                .iter()
                .map(|&s| {
                    let d = s as f64 - mean;
                    d * d
                })
                .sum::<f64>()
                / (count - 1) as f64;
            var.sqrt()
        } else {
            0.
        };

        Some(TimingSummary {
            count,
            mean,
            stdev,
            min: *self.samples.iter().min()?,
            max: *self.samples.iter().max()?,
        })
    }

    /// One sample per line, for plotting elsewhere.
    pub fn write_samples(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        let mut file = BufWriter::new(file);
        for s in &self.samples {
            writeln!(file, "{}", s)?;
        }
        file.flush()
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}
