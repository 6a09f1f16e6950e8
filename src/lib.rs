//! Single-sphere ray caster.
//!
//! One orthographic ray per pixel against one sphere, shaded by one point light.
//! [`driver::RenderDriver`] renders the grid a batch at a time so a host loop can
//! poll events and present between batches, and records how long each pixel took.

pub mod driver;
pub mod error;
pub mod image;
pub mod object;
pub mod ray;
pub mod scene;
pub mod shader;
pub mod timing;
pub mod vec3;
