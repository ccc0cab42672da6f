use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Fixed spawn pose: NED position and heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedStartConfig {
    pub position: Vector3<f64>,
    pub yaw_deg: f64,
}

impl Default for FixedStartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            yaw_deg: 0.0,
        }
    }
}

/// Randomized spawn pose: a seeded draw of ground position within a radius
/// of the origin and a uniform heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomStartConfig {
    pub seed: u64,
    pub radius: f64,
}

impl Default for RandomStartConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            radius: 10.0,
        }
    }
}

impl RandomStartConfig {
    /// Generates the spawn position (NED, on the ground) and heading.
    pub fn generate(&self) -> (Vector3<f64>, f64) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let x = rng.gen_range(-self.radius..=self.radius);
        let y = rng.gen_range(-self.radius..=self.radius);
        let yaw_deg = rng.gen_range(-180.0..180.0);
        (Vector3::new(x, y, 0.0), yaw_deg)
    }
}

/// Where the vehicle starts a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StartConfig {
    Fixed(FixedStartConfig),
    Random(RandomStartConfig),
}

impl Default for StartConfig {
    fn default() -> Self {
        StartConfig::Fixed(FixedStartConfig::default())
    }
}

impl StartConfig {
    pub fn pose(&self) -> (Vector3<f64>, f64) {
        match self {
            StartConfig::Fixed(fixed) => (fixed.position, fixed.yaw_deg),
            StartConfig::Random(random) => random.generate(),
        }
    }
}
