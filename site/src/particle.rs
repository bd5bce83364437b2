use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::Serialize;

pub const PARTICLE_COUNT: usize = 15;

// one floating dot in the hero background
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub id: usize,
    // px
    pub size: f64,
    // percent of the hero box
    pub x: f64,
    pub y: f64,
    // seconds
    pub duration: f64,
    pub delay: f64,
}

// the same seed always lays out the same dots
pub fn scatter(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..count)
        .map(|id| Particle {
            id,
            size: rng.random_range(2.0..8.0),
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            duration: rng.random_range(10.0..20.0),
            delay: rng.random_range(0.0..5.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_in_range() {
        for seed in [0, 1, 42, u64::MAX] {
            let particles = scatter(PARTICLE_COUNT, seed);
            assert_eq!(particles.len(), PARTICLE_COUNT);

            for (i, p) in particles.iter().enumerate() {
                assert_eq!(p.id, i);
                assert!((2.0..8.0).contains(&p.size));
                assert!((0.0..100.0).contains(&p.x));
                assert!((0.0..100.0).contains(&p.y));
                assert!((10.0..20.0).contains(&p.duration));
                assert!((0.0..5.0).contains(&p.delay));
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(scatter(5, 7), scatter(5, 7));
        assert_ne!(scatter(5, 7), scatter(5, 8));
    }
}
