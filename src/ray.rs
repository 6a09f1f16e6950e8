use crate::vec3::{Point3, Vec3};

/// Half-line `origin + t * dir`.
///
/// `dir` is expected to be unit length. [`crate::object::Sphere::intersect`]
/// relies on it and returns wrong distances otherwise; nothing here checks.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, dir: Vec3) -> Ray {
        Ray { origin, dir }
    }

    pub fn cast(&self, t: f64) -> Point3 {
        self.origin + self.dir * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    #[test]
    fn cast_walks_along_dir() {
        let ray = Ray::new(vec3!(1., 2., 3.), vec3!(0., 0., 1.));
        assert_eq!(ray.cast(0.), vec3!(1., 2., 3.));
        assert_eq!(ray.cast(2.5), vec3!(1., 2., 5.5));
        assert_eq!(ray.cast(-1.), vec3!(1., 2., 2.));
    }
}
