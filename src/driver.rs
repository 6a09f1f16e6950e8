use anyhow::Result;
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::error::DriverError;
use crate::image::{FrameSink, Image};
use crate::scene::Scene;
use crate::timing::Timings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Running,
    Done,
    Cancelled,
}

/// Receives framebuffer snapshots from the driver, tagged with a rising sequence number.
pub trait SnapshotSink<F> {
    fn snapshot(&mut self, seq: u64, frame: &F) -> Result<()>;
}

/// Drops every snapshot.
pub struct NoSnapshots;

impl<F> SnapshotSink<F> for NoSnapshots {
    fn snapshot(&mut self, _seq: u64, _frame: &F) -> Result<()> {
        Ok(())
    }
}

/// Incremental, single-threaded renderer.
///
/// The host calls [`RenderDriver::step`] in its own loop; each call renders one batch
/// of pixels in raster order and returns, so the host can poll events and present
/// between batches. Once every pixel is rendered the driver stays `Done` and later
/// steps do nothing.
pub struct RenderDriver<F: FrameSink = Image> {
    scene: Scene,
    frame: F,
    timings: Timings,
    next_index: usize,
    batches: u64,
    snapshot_every: u64,
    state: RenderState,
    keep_going: Arc<AtomicBool>,
    finished: bool,
    degenerate: u64,
}

impl RenderDriver<Image> {
    pub fn new(scene: Scene) -> Result<Self, DriverError> {
        let frame = Image::new(scene.screen.width, scene.screen.height);
        Self::with_frame(scene, frame)
    }
}

impl<F: FrameSink> RenderDriver<F> {
    pub const DEFAULT_SNAPSHOT_EVERY: u64 = 1000;

    pub fn with_frame(scene: Scene, frame: F) -> Result<Self, DriverError> {
        let screen = scene.screen;
        if screen.pixel_count() == 0 {
            return Err(DriverError::EmptyScreen);
        }
        if (frame.width(), frame.height()) != (screen.width, screen.height) {
            return Err(DriverError::FrameSize {
                screen_w: screen.width,
                screen_h: screen.height,
                frame_w: frame.width(),
                frame_h: frame.height(),
            });
        }

        Ok(RenderDriver {
            scene,
            frame,
            timings: Timings::with_capacity(screen.pixel_count()),
            next_index: 0,
            batches: 0,
            snapshot_every: Self::DEFAULT_SNAPSHOT_EVERY,
            state: RenderState::Idle,
            keep_going: Arc::new(AtomicBool::new(true)),
            finished: false,
            degenerate: 0,
        })
    }

    /// Offer a snapshot after batch `j` whenever `j % every == 0`. Zero disables
    /// periodic snapshots; the final one from [`RenderDriver::finish`] still happens.
    pub fn snapshot_every(mut self, every: u64) -> Self {
        self.snapshot_every = every;
        self
    }

    /// Shared "continue requested" flag. Storing `false` cancels the render at the
    /// next batch boundary.
    pub fn continue_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.keep_going)
    }

    pub fn cancel(&self) {
        self.keep_going.store(false, Ordering::SeqCst);
    }

    pub fn step(&mut self, batch_size: usize, snapshots: &mut dyn SnapshotSink<F>) -> RenderState {
        match self.state {
            RenderState::Done | RenderState::Cancelled => return self.state,
            RenderState::Idle | RenderState::Running => {}
        }

        if !self.keep_going.load(Ordering::SeqCst) {
            self.state = RenderState::Cancelled;
            info!(
                "render cancelled at pixel {}/{} after {} batches",
                self.next_index,
                self.pixel_count(),
                self.batches
            );
            return self.state;
        }

        if self.state == RenderState::Idle {
            info!(
                "rendering {}x{} in batches of {}",
                self.scene.screen.width, self.scene.screen.height, batch_size
            );
            self.state = RenderState::Running;
        }

        let end = self
            .next_index
            .saturating_add(batch_size)
            .min(self.pixel_count());
        for index in self.next_index..end {
            self.render_pixel(index);
        }
        self.next_index = end;

        let seq = self.batches;
        self.batches += 1;
        if self.snapshot_every > 0 && seq % self.snapshot_every == 0 {
            self.offer_snapshot(seq, snapshots);
        }

        if self.next_index == self.pixel_count() {
            self.state = RenderState::Done;
            info!(
                "render done: {} pixels in {} batches ({} degenerate)",
                self.next_index, self.batches, self.degenerate
            );
        }

        self.state
    }

    /// Final snapshot, tagged with the number of batches run. Only the first call
    /// does anything.
    pub fn finish(&mut self, snapshots: &mut dyn SnapshotSink<F>) {
        if self.finished {
            return;
        }
        self.finished = true;
        let seq = self.batches;
        self.offer_snapshot(seq, snapshots);
    }

    fn render_pixel(&mut self, index: usize) {
        let (x, y) = self.scene.screen.coords(index);
        let ray = self.scene.screen.ray_for_pixel(x, y);

        let start = Instant::now();
        let col = self.scene.color_of_ray(&ray);
        self.timings.record(start.elapsed());

        let col = col.unwrap_or_else(|e| {
            debug!("pixel ({}, {}): {}, using miss color", x, y, e);
            self.degenerate += 1;
            self.scene.shader.miss
        });
        self.frame.put(x, y, col);
    }

    fn offer_snapshot(&self, seq: u64, snapshots: &mut dyn SnapshotSink<F>) {
        debug!("snapshot {} at pixel {}", seq, self.next_index);
        if let Err(e) = snapshots.snapshot(seq, &self.frame) {
            warn!("snapshot {} failed: {:#}", seq, e);
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn pixel_count(&self) -> usize {
        self.scene.screen.pixel_count()
    }

    pub fn batches(&self) -> u64 {
        self.batches
    }

    /// Pixels whose shading hit a zero-length vector and fell back to the miss color.
    pub fn degenerate_pixels(&self) -> u64 {
        self.degenerate
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn frame(&self) -> &F {
        &self.frame
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn into_parts(self) -> (F, Timings) {
        (self.frame, self.timings)
    }
}
