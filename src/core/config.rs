// Static scene configuration for the particle hero.
//
// A [`SceneConfig`] is built once (normally from [`SceneConfig::default`])
// and validated before mount. Nothing mutates it while the animation runs.

use super::constants::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    NoParticles,
    #[error("{name} must be finite and non-negative, got {value}")]
    OutOfRange { name: &'static str, value: f32 },
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("invalid hex color {0:?}")]
    BadColor(String),
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub count: usize,
    pub spread: f32,
    pub speed: f32,
    pub palette: Vec<[f32; 3]>,
    pub base_size: f32,
    pub size_randomness: f32,
    pub alpha_particles: bool,
    pub move_on_hover: bool,
    pub hover_factor: f32,
    pub rotate: bool,
    pub camera_distance: f32,
    pub fov_deg: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            spread: PARTICLE_SPREAD,
            speed: PARTICLE_SPEED,
            // The built-in palette is well-formed; fall back to white rather than panic.
            palette: parse_palette(&PARTICLE_COLORS).unwrap_or_else(|_| vec![[1.0, 1.0, 1.0]]),
            base_size: PARTICLE_BASE_SIZE,
            size_randomness: SIZE_RANDOMNESS,
            alpha_particles: ALPHA_PARTICLES,
            move_on_hover: MOVE_ON_HOVER,
            hover_factor: HOVER_FACTOR,
            rotate: ROTATE,
            camera_distance: CAMERA_DISTANCE,
            fov_deg: CAMERA_FOV_DEG,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (name, value) in [
            ("spread", self.spread),
            ("speed", self.speed),
            ("size_randomness", self.size_randomness),
            ("hover_factor", self.hover_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }
        for (name, value) in [
            ("base_size", self.base_size),
            ("camera_distance", self.camera_distance),
            ("fov_deg", self.fov_deg),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}

/// Parse `#rgb` or `#rrggbb` (leading `#` optional) into 0..1 channels.
pub fn hex_to_rgb(hex: &str) -> Result<[f32; 3], ConfigError> {
    let digits = hex.trim().trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(ConfigError::BadColor(hex.to_string())),
    };
    if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::BadColor(hex.to_string()));
    }
    let int =
        u32::from_str_radix(&expanded, 16).map_err(|_| ConfigError::BadColor(hex.to_string()))?;
    Ok([
        ((int >> 16) & 255) as f32 / 255.0,
        ((int >> 8) & 255) as f32 / 255.0,
        (int & 255) as f32 / 255.0,
    ])
}

pub fn parse_palette(colors: &[&str]) -> Result<Vec<[f32; 3]>, ConfigError> {
    colors.iter().map(|c| hex_to_rgb(c)).collect()
}
