use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::Ordering;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use sphere_caster::driver::{RenderDriver, RenderState, SnapshotSink};
use sphere_caster::image::Image;
use sphere_caster::scene::Scene;

/// Writes `<dir>/<seq>.ppm`.
struct PpmSnapshots {
    dir: PathBuf,
}

impl SnapshotSink<Image> for PpmSnapshots {
    fn snapshot(&mut self, seq: u64, frame: &Image) -> Result<()> {
        let path = self.dir.join(format!("{}.ppm", seq));
        frame.to_ppm(&path)?;
        info!("snapshot saved as {}", path.display());
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.debug_level.into());

    let scene = Scene::with_resolution(args.width as usize, args.height as usize);
    info!(
        "sphere at {:?} r={}, light at {:?}",
        scene.sphere.center, scene.sphere.r, scene.shader.light
    );

    let mut driver = RenderDriver::new(scene)?.snapshot_every(args.snapshot_every);

    let keep_going = driver.continue_flag();
    ctrlc::set_handler(move || keep_going.store(false, Ordering::SeqCst))
        .context("installing Ctrl-C handler")?;

    fs::create_dir_all(&args.snapshot_dir)
        .with_context(|| format!("creating {}", args.snapshot_dir.display()))?;
    let mut snapshots = PpmSnapshots {
        dir: args.snapshot_dir.clone(),
    };

    let batch_size = args.batch_size as usize;
    let total = driver.pixel_count();
    let report_every = ((total / batch_size) / 10).max(1) as u64;

    let state = loop {
        match driver.step(batch_size, &mut snapshots) {
            RenderState::Running => {
                if driver.batches() % report_every == 0 {
                    let progress = driver.next_index() as f64 / total as f64 * 100.;
                    info!("{:.0}%", progress);
                }
            }
            state => break state,
        }
    };
    if state == RenderState::Cancelled {
        warn!(
            "stopped early, {} of {} pixels rendered",
            driver.next_index(),
            total
        );
    }

    driver.finish(&mut snapshots);
    driver.frame().to_ppm(&args.output)?;
    info!("image saved as {}", args.output.display());

    match driver.timings().summary() {
        Some(s) => info!(
            "per-pixel ns: mean={:.2} stdev={:.2} min={} max={} N={}",
            s.mean, s.stdev, s.min, s.max, s.count
        ),
        None => info!("no pixels timed"),
    }

    if let Some(path) = &args.timings {
        driver.timings().write_samples(path)?;
        info!("timing samples saved as {}", path.display());
    }

    Ok(())
}
