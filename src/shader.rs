use crate::error::GeomError;
use crate::image::Color;
use crate::vec3::*;

/// Where a ray met the surface, with the outward unit normal there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub point: Point3,
    pub normal: Vec3,
}

/// Single-channel diffuse shading from one point light.
///
/// Only the red channel carries light; it never drops below `ambient_floor`.
/// No specular term and no shadow test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambert {
    pub light: Point3,
    pub ambient_floor: u8,
    pub miss: Color,
}

impl Lambert {
    pub const MISS_COLOR: Color = Color::of_rgb(100, 100, 100);
    pub const AMBIENT_FLOOR: u8 = 30;

    pub fn new(light: Point3) -> Self {
        Lambert {
            light,
            ambient_floor: Self::AMBIENT_FLOOR,
            miss: Self::MISS_COLOR,
        }
    }

    pub fn shade(&self, surface: Option<&SurfacePoint>) -> Result<Color, GeomError> {
        let surface = match surface {
            Some(s) => s,
            None => return Ok(self.miss),
        };

        let light_dir = (self.light - surface.point).normalize()?;
        let intensity = surface.normal.dot(&light_dir);

        let red = (intensity * Color::MAX_VAL as f64)
            .round()
            .clamp(self.ambient_floor as f64, Color::MAX_VAL as f64) as u8;

        Ok(Color::of_rgb(red, 0, 0))
    }
}
