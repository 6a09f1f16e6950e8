use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sphere-caster")]
#[command(about = "Cast one ray per pixel at a lit sphere and time every pixel")]
pub struct Args {
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Pixels rendered between two host yields
    #[arg(long, short = 'b', default_value_t = 200, value_parser = clap::value_parser!(u32).range(1..))]
    pub batch_size: u32,

    /// Write a snapshot every N batches (0 keeps only the final one)
    #[arg(long, default_value_t = 1000)]
    pub snapshot_every: u64,

    /// Directory for numbered snapshot files
    #[arg(long, default_value = ".")]
    pub snapshot_dir: PathBuf,

    /// Final image, PPM
    #[arg(short, long, default_value = "render.ppm")]
    pub output: PathBuf,

    /// Dump raw per-pixel nanosecond samples here, one per line
    #[arg(long)]
    pub timings: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["sphere-caster"]).unwrap();
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.batch_size, 200);
        assert_eq!(args.snapshot_every, 1000);
        assert_eq!(args.output, PathBuf::from("render.ppm"));
        assert!(args.timings.is_none());
    }

    #[test]
    fn zero_batch_rejected() {
        assert!(Args::try_parse_from(["sphere-caster", "--batch-size", "0"]).is_err());
    }
}
