// Shared visual tuning constants used by the particle hero and the timeline.

// Particle field
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_SPREAD: f32 = 10.0; // world-space radius of the cloud
pub const PARTICLE_SPEED: f32 = 0.1; // elapsed-time step per rendered frame
pub const SHADER_TIME_SCALE: f32 = 0.05; // elapsed -> shader time
pub const Z_FLATTEN: f32 = 10.0; // extra depth scale applied after spread
pub const PARTICLE_BASE_SIZE: f32 = 130.0; // CSS pixels before perspective division
pub const SIZE_RANDOMNESS: f32 = 1.0;
pub const ALPHA_PARTICLES: bool = false;
pub const MOVE_ON_HOVER: bool = false;
pub const HOVER_FACTOR: f32 = 1.0;
pub const ROTATE: bool = true;

// Default palette, warm copper tones
pub const PARTICLE_COLORS: [&str; 4] = ["#B77466", "#FFE1AF", "#E2B59A", "#957C62"];

// Displacement amplitude range, mixed by a seed component
pub const WOBBLE_MIN: f32 = 0.1;
pub const WOBBLE_MAX: f32 = 1.5;

// Per-frame motion
pub const HOVER_DAMPING: f32 = 0.1; // fraction of the gap closed each frame
pub const ROTATION_STEP: f32 = 0.0005; // radians per frame around +Y

// Camera
pub const CAMERA_DISTANCE: f32 = 20.0;
pub const CAMERA_FOV_DEG: f32 = 15.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Timeline reveal band, as fractions of viewport height measured from the top
pub const REVEAL_START: f32 = 0.85;
pub const REVEAL_END: f32 = 0.5;
pub const REVEAL_OFFSET_PERCENT: f32 = 100.0;
pub const REVEAL_SCALE_FROM: f32 = 0.8;

// Card tilt
pub const TILT_MAX_DEG: f32 = 15.0;
pub const TILT_HOVER_SCALE: f32 = 1.03;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

// Hero gate
pub const HERO_RETURN_SCROLL_Y: f64 = 5.0; // scrolling above this while going up brings the hero back
pub const HERO_LEAVE_MS: i32 = 2200;
pub const HERO_RETURN_MS: i32 = 2200;
