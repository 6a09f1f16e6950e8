use crate::error::GeomError;
use crate::image::Color;
use crate::object::{Intersection, Sphere};
use crate::ray::Ray;
use crate::shader::{Lambert, SurfacePoint};
use crate::vec3;
use crate::vec3::Vec3;

/// Orthographic mapping from pixel grid to a rectangle on the `z = 0` plane.
///
/// Every pixel casts along +z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: usize,
    pub height: usize,
    pub world_width: f64,
    pub world_height: f64,
}

impl Screen {
    pub const WORLD_WIDTH: f64 = 8.;
    pub const WORLD_HEIGHT: f64 = 6.;

    pub fn new(width: usize, height: usize) -> Self {
        Screen {
            width,
            height,
            world_width: Self::WORLD_WIDTH,
            world_height: Self::WORLD_HEIGHT,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Row-major index to `(x, y)`.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let origin = vec3!(
            self.world_width * x as f64 / self.width as f64,
            self.world_height * y as f64 / self.height as f64,
            0.
        );
        Ray::new(origin, Vec3::new(0., 0., 1.))
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::new(800, 600)
    }
}

/// The fixed scene: one sphere, one light, one screen. Built once per session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub sphere: Sphere,
    pub shader: Lambert,
    pub screen: Screen,
}

impl Scene {
    pub fn new(sphere: Sphere, shader: Lambert, screen: Screen) -> Self {
        Scene {
            sphere,
            shader,
            screen,
        }
    }

    /// Default sphere and light on a screen of the given resolution.
    pub fn with_resolution(width: usize, height: usize) -> Self {
        Scene {
            screen: Screen::new(width, height),
            ..Scene::default()
        }
    }

    pub fn color_of_ray(&self, ray: &Ray) -> Result<Color, GeomError> {
        match self.sphere.intersect(ray) {
            Intersection::Miss => self.shader.shade(None),
            Intersection::Hit(point) => {
                let normal = self.sphere.get_normal(&point)?;
                self.shader.shade(Some(&SurfacePoint { point, normal }))
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new(
            Sphere::new(vec3!(4., 3., 10.), 2.),
            Lambert::new(vec3!(8., 0., 7.)),
            Screen::default(),
        )
    }
}
