//! Procedural starfield: deterministic star placement in a cube around the
//! planet, kept clear of a minimum radius.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use saturn_math::{Point3, Scalar};

/// Generates a deterministic set of star positions from a seed.
///
/// Stars sit on the integer lattice inside `[-half_extent, half_extent)³`.
/// Candidates closer than `min_distance / 2` to the origin are redrawn, then a
/// single correction pass doubles every star still closer than
/// `min_distance`. After that pass every star is at least `min_distance` from
/// the origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarfieldGenerator {
    seed: u64,
    star_count: u32,
    half_extent: i32,
    min_distance: i32,
}

impl StarfieldGenerator {
    /// Create a new generator. `half_extent` must be positive.
    pub fn new(seed: u64, star_count: u32, half_extent: i32, min_distance: i32) -> Self {
        Self {
            seed,
            star_count,
            half_extent: half_extent.max(1),
            min_distance: min_distance.max(0),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn star_count(&self) -> u32 {
        self.star_count
    }

    pub fn min_distance(&self) -> i32 {
        self.min_distance
    }

    /// Generate the star positions. Deterministic for a given seed.
    pub fn generate<S: Scalar>(&self) -> Vec<Point3<S>> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let min_sq = i64::from(self.min_distance).pow(2);

        // Redraw threshold: (min / 2)², unless the cube corners themselves are
        // that close, in which case nothing could ever be accepted.
        let corner_sq = 3 * i64::from(self.half_extent).pow(2);
        let redraw_below_sq = if corner_sq * 4 > min_sq { min_sq } else { 0 };

        let mut lattice: Vec<[i32; 3]> = (0..self.star_count)
            .map(|_| loop {
                let candidate = [
                    rng.random_range(-self.half_extent..self.half_extent),
                    rng.random_range(-self.half_extent..self.half_extent),
                    rng.random_range(-self.half_extent..self.half_extent),
                ];
                if distance_squared(candidate) * 4 >= redraw_below_sq {
                    break candidate;
                }
            })
            .collect();

        let mut corrected = 0;
        for star in lattice.iter_mut() {
            if distance_squared(*star) < min_sq {
                *star = star.map(|c| c * 2);
                corrected += 1;
            }
        }

        log::debug!(
            "Generated {} stars (seed {}, {} pushed outward)",
            lattice.len(),
            self.seed,
            corrected
        );

        lattice
            .into_iter()
            .map(|[x, y, z]| Point3::from_ints(x, y, z))
            .collect()
    }
}

fn distance_squared([x, y, z]: [i32; 3]) -> i64 {
    let (x, y, z) = (i64::from(x), i64::from(y), i64::from(z));
    x * x + y * y + z * z
}

#[cfg(test)]
mod tests {
    use super::*;
    use saturn_math::Fixed;

    fn distance(p: Point3<f32>) -> f32 {
        (p.x * p.x + p.y * p.y + p.z * p.z).sqrt()
    }

    #[test]
    fn test_star_count() {
        let stars = StarfieldGenerator::new(42, 100, 200, 50).generate::<f32>();
        assert_eq!(stars.len(), 100);
    }

    #[test]
    fn test_every_star_clears_minimum_distance() {
        for seed in 0..20 {
            let stars = StarfieldGenerator::new(seed, 500, 200, 50).generate::<f32>();
            for (i, star) in stars.iter().enumerate() {
                assert!(
                    distance(*star) >= 50.0,
                    "seed {seed}: star {i} at {star} is too close"
                );
            }
        }
    }

    #[test]
    fn test_minimum_holds_when_cube_is_tight() {
        // Half the draws land inside the minimum radius before correction.
        let stars = StarfieldGenerator::new(7, 1000, 40, 50).generate::<f32>();
        assert!(stars.iter().all(|s| distance(*s) >= 50.0));
    }

    #[test]
    fn test_stars_stay_on_lattice_within_doubled_cube() {
        let stars = StarfieldGenerator::new(3, 1000, 200, 50).generate::<f32>();
        for star in &stars {
            for c in [star.x, star.y, star.z] {
                assert_eq!(c.fract(), 0.0);
                assert!((-200.0..200.0).contains(&c), "coordinate {c} outside cube");
            }
        }
    }

    #[test]
    fn test_distribution_covers_all_octants() {
        let stars = StarfieldGenerator::new(42, 4000, 200, 50).generate::<f32>();
        let mut octant_counts = [0u32; 8];
        for s in &stars {
            let octant = ((s.x >= 0.0) as usize)
                | (((s.y >= 0.0) as usize) << 1)
                | (((s.z >= 0.0) as usize) << 2);
            octant_counts[octant] += 1;
        }
        for (i, &count) in octant_counts.iter().enumerate() {
            assert!(
                (300..=700).contains(&count),
                "Octant {i} has {count} stars, expected roughly 500"
            );
        }
    }

    #[test]
    fn test_same_seed_produces_same_starfield() {
        let a = StarfieldGenerator::new(123, 300, 200, 50).generate::<Fixed>();
        let b = StarfieldGenerator::new(123, 300, 200, 50).generate::<Fixed>();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_produces_different_starfield() {
        let a = StarfieldGenerator::new(1, 300, 200, 50).generate::<f32>();
        let b = StarfieldGenerator::new(9999, 300, 200, 50).generate::<f32>();
        let differences = a.iter().zip(b.iter()).filter(|(a, b)| a != b).count();
        assert!(differences > 250, "only {differences}/300 stars differed");
    }

    #[test]
    fn test_fixed_and_float_agree() {
        let generator = StarfieldGenerator::new(5, 200, 200, 50);
        let fixed = generator.generate::<Fixed>();
        let float = generator.generate::<f32>();
        for (a, b) in fixed.iter().zip(float.iter()) {
            assert_eq!(a.x.to_f32(), b.x);
            assert_eq!(a.y.to_f32(), b.y);
            assert_eq!(a.z.to_f32(), b.z);
        }
    }

    #[test]
    fn test_zero_minimum_disables_correction() {
        let generator = StarfieldGenerator::new(11, 50, 10, 0);
        let stars = generator.generate::<f32>();
        assert!(stars.iter().all(|s| s.x.abs() < 10.0));
    }
}
