// Particle cloud generation and the per-frame field state.
//
// The GPU evaluates the displacement for every point each frame; the same
// math lives here so the web frontend and host tests agree on it.

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
use rand::prelude::*;

use super::config::SceneConfig;
use super::constants::{
    HOVER_DAMPING, ROTATION_STEP, SHADER_TIME_SCALE, WOBBLE_MAX, WOBBLE_MIN, Z_FLATTEN,
};

/// One point of the cloud. Immutable after generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Base position inside the unit ball, before `spread` is applied.
    pub position: Vec3,
    /// Phase/amplitude seeds, each in `[0, 1)`.
    pub seed: Vec4,
    pub color: [f32; 3],
}

/// Sample a point inside the unit ball.
///
/// Cube candidates are rejected when outside the ball or exactly at the
/// origin; survivors are pulled inward by `cbrt(u)`.
pub fn sample_unit_ball<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
        );
        let len_sq = p.length_squared();
        if len_sq > 1.0 || len_sq == 0.0 {
            continue;
        }
        let r = rng.gen::<f32>().cbrt();
        if r == 0.0 {
            continue;
        }
        return p * r;
    }
}

pub fn generate_particles<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Vec<Particle> {
    (0..config.count)
        .map(|_| {
            let position = sample_unit_ball(rng);
            let seed = Vec4::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
            let color = config
                .palette
                .choose(rng)
                .copied()
                .unwrap_or([1.0, 1.0, 1.0]);
            Particle {
                position,
                seed,
                color,
            }
        })
        .collect()
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn wobble(time: f32, rate: f32, phase: f32, amp: f32) -> f32 {
    (time * rate + std::f32::consts::TAU * phase).sin() * mix(WOBBLE_MIN, WOBBLE_MAX, amp)
}

/// Per-axis oscillation added after the model transform.
pub fn displacement(seed: Vec4, time: f32) -> Vec3 {
    Vec3::new(
        wobble(time, seed.z, seed.w, seed.x),
        wobble(time, seed.y, seed.x, seed.w),
        wobble(time, seed.w, seed.y, seed.z),
    )
}

/// Object-space position once `spread` and the depth flattening are applied.
pub fn spread_position(base: Vec3, spread: f32) -> Vec3 {
    let p = base * spread;
    Vec3::new(p.x, p.y, p.z * Z_FLATTEN)
}

/// World-space position of a particle at shader time `time`.
pub fn world_position(particle: &Particle, spread: f32, model: Mat4, time: f32) -> Vec3 {
    model.transform_point3(spread_position(particle.position, spread))
        + displacement(particle.seed, time)
}

/// Rendered point diameter in pixels for a point `view_distance` from the eye.
pub fn point_size(base_size: f32, size_randomness: f32, seed_x: f32, view_distance: f32) -> f32 {
    if size_randomness == 0.0 {
        base_size
    } else {
        base_size * (1.0 + size_randomness * (seed_x - 0.5)) / view_distance.max(f32::EPSILON)
    }
}

/// Animated state of the whole cloud: time accumulator, origin, rotation.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    /// Kept in f64 so the fixed step stays exact on long-lived pages.
    pub elapsed: f64,
    pub origin: Vec2,
    pub rotation_y: f32,
    frames: u64,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one rendered frame. `pointer` is in normalized device units
    /// (`-1..1`, +y up) and only used when hover coupling is enabled.
    pub fn step(&mut self, config: &SceneConfig, pointer: Vec2) {
        self.elapsed += config.speed as f64;
        self.frames += 1;
        if config.move_on_hover {
            let target = pointer * config.hover_factor;
            self.origin += (target - self.origin) * HOVER_DAMPING;
        }
        if config.rotate {
            // Wrapped so the step stays representable after hours of frames
            self.rotation_y = (self.rotation_y + ROTATION_STEP) % std::f32::consts::TAU;
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time fed to the displacement function.
    pub fn shader_time(&self) -> f32 {
        (self.elapsed * SHADER_TIME_SCALE as f64) as f32
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_rotation_y(self.rotation_y),
            self.origin.extend(0.0),
        )
    }
}
