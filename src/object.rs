use crate::error::GeomError;
use crate::ray::*;
use crate::vec3::*;

/// Outcome of casting a ray at a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    Hit(Point3),
    Miss,
}

impl Intersection {
    pub fn point(&self) -> Option<Point3> {
        match self {
            Intersection::Hit(p) => Some(*p),
            Intersection::Miss => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub r: f64,
}

impl Sphere {
    /// Negative radii are clamped to zero.
    pub fn new(center: Point3, r: f64) -> Self {
        Sphere {
            center,
            r: r.max(0.),
        }
    }

    /// Quarter of the discriminant of `t^2 + 2 sp t + c = 0`, valid for a unit `ray.dir`.
    pub fn discriminant(&self, ray: &Ray) -> f64 {
        let diff = ray.origin - self.center;
        let sp = ray.dir.dot(&diff);
        sp * sp - (diff.mag_squared() - self.r * self.r)
    }

    /// Nearer of the two roots along `ray`.
    ///
    /// The smaller `t` is taken unconditionally, so an origin inside the sphere or a
    /// sphere behind the origin still reports a hit at negative `t`.
    pub fn intersect(&self, ray: &Ray) -> Intersection {
        // https://en.wikipedia.org/wiki/Line%E2%80%93sphere_intersection
        let diff = ray.origin - self.center;
        let sp = ray.dir.dot(&diff);

        let delta = 4. * self.discriminant(ray);
        if delta < 0. {
            return Intersection::Miss;
        }

        let half_root = delta.sqrt() / 2.;
        let t = (-sp + half_root).min(-sp - half_root);

        Intersection::Hit(ray.cast(t))
    }

    pub fn get_normal(&self, point: &Point3) -> Result<Vec3, GeomError> {
        (*point - self.center).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn unit_z_ray(origin: Point3) -> Ray {
        Ray::new(origin, vec3!(0., 0., 1.))
    }

    #[test]
    fn head_on_hit_is_near_surface() {
        let sphere = Sphere::new(vec3!(0., 0., 10.), 2.);
        let hit = sphere.intersect(&unit_z_ray(vec3!(0., 0., 0.)));
        assert_eq!(hit, Intersection::Hit(vec3!(0., 0., 8.)));
    }

    #[test]
    fn aimed_at_center_hits_at_distance_minus_radius() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let center = vec3!(
                rng.gen_range(-50.0..50.),
                rng.gen_range(-50.0..50.),
                rng.gen_range(-50.0..50.)
            );
            let r = rng.gen_range(0.1..5.);
            let offset = vec3!(
                rng.gen_range(-1.0..1.),
                rng.gen_range(-1.0..1.),
                rng.gen_range(-1.0..1.)
            );
            if offset.mag() < 1e-3 {
                continue;
            }
            let origin = center + offset.normalize().unwrap() * rng.gen_range(r + 0.5..100.);
            let dir = (center - origin).normalize().unwrap();
            let sphere = Sphere::new(center, r);

            let expected = (origin - center).mag() - r;
            let point = sphere
                .intersect(&Ray::new(origin, dir))
                .point()
                .expect("ray aimed at center must hit");
            let got = (point - origin).mag();
            assert!((got - expected).abs() < 1e-6, "{} vs {}", got, expected);
        }
    }

    #[test]
    fn lateral_ray_misses() {
        let sphere = Sphere::new(vec3!(4., 3., 10.), 2.);
        let ray = unit_z_ray(vec3!(0., 3., 0.));
        assert!(sphere.discriminant(&ray) < 0.);
        assert_eq!(sphere.intersect(&ray), Intersection::Miss);
    }

    #[test]
    fn tangent_ray_hits() {
        let sphere = Sphere::new(vec3!(0., 0., 10.), 2.);
        let ray = unit_z_ray(vec3!(2., 0., 0.));
        assert_eq!(sphere.discriminant(&ray), 0.);
        assert_eq!(sphere.intersect(&ray), Intersection::Hit(vec3!(2., 0., 10.)));
    }

    #[test]
    fn miss_iff_negative_discriminant() {
        let sphere = Sphere::new(vec3!(4., 3., 10.), 2.);
        for i in 0..80 {
            for j in 0..60 {
                let ray = unit_z_ray(vec3!(i as f64 / 10., j as f64 / 10., 0.));
                let negative = sphere.discriminant(&ray) < 0.;
                let missed = sphere.intersect(&ray) == Intersection::Miss;
                assert_eq!(negative, missed, "ray {:?}", ray);
            }
        }
    }

    // The smaller root is kept even when it lies behind the origin.
    #[test]
    fn origin_inside_reports_root_behind() {
        let sphere = Sphere::new(vec3!(0., 0., 10.), 2.);
        let hit = sphere.intersect(&unit_z_ray(vec3!(0., 0., 10.)));
        assert_eq!(hit, Intersection::Hit(vec3!(0., 0., 8.)));
    }

    #[test]
    fn sphere_behind_origin_still_hits() {
        let sphere = Sphere::new(vec3!(0., 0., 10.), 2.);
        let hit = sphere.intersect(&unit_z_ray(vec3!(0., 0., 20.)));
        assert_eq!(hit, Intersection::Hit(vec3!(0., 0., 8.)));
    }

    #[test]
    fn normal_is_unit() {
        let mut rng = StdRng::seed_from_u64(5);
        let sphere = Sphere::new(vec3!(1., -2., 3.), 4.);
        for _ in 0..500 {
            let p = vec3!(
                rng.gen_range(-10.0..10.),
                rng.gen_range(-10.0..10.),
                rng.gen_range(-10.0..10.)
            );
            let n = sphere.get_normal(&p).unwrap();
            assert!((n.mag() - 1.).abs() < 1e-12);
        }
        assert_eq!(
            sphere.get_normal(&vec3!(1., -2., 7.)),
            Ok(vec3!(0., 0., 1.))
        );
    }

    #[test]
    fn normal_at_center_is_degenerate() {
        let sphere = Sphere::new(vec3!(1., 1., 1.), 1.);
        assert_eq!(
            sphere.get_normal(&vec3!(1., 1., 1.)),
            Err(GeomError::DegenerateVector)
        );
    }

    #[test]
    fn negative_radius_clamped() {
        assert_eq!(Sphere::new(vec3!(0., 0., 0.), -3.).r, 0.);
    }
}
