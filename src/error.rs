use thiserror::Error;

/// Failures of the geometric kernel.
///
/// A ray missing the sphere is not one of these; see [`crate::object::Intersection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("screen is {screen_w}x{screen_h} but framebuffer is {frame_w}x{frame_h}")]
    FrameSize {
        screen_w: usize,
        screen_h: usize,
        frame_w: usize,
        frame_h: usize,
    },
    #[error("screen has no pixels")]
    EmptyScreen,
}
