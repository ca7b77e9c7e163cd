// Shared layout/animation tuning constants used by the web frontend.

// Orbit layout
pub const ORBIT_OUTER_RADIUS: f64 = 120.0; // even-indexed items
pub const ORBIT_INNER_RADIUS: f64 = 90.0; // odd-indexed items

// Orbit rotation
pub const ORBIT_TICK_MS: u64 = 50; // ~20 ticks per second
pub const ORBIT_STEP_DEGREES: f64 = 1.0; // one revolution every 18 s

// Floating object camera
pub const CAMERA_FOV_Y_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Floating object geometry
pub const OUTER_CUBE_SIZE: f32 = 2.0;
pub const INNER_CUBE_SIZE: f32 = 1.5;
pub const CUBE_COLOR: [f32; 3] = [0.0, 0.4, 1.0]; // #0066ff
pub const OUTER_CUBE_OPACITY: f32 = 0.3;
pub const INNER_CUBE_OPACITY: f32 = 0.1;

// Floating object motion, per animation frame
pub const OUTER_SPIN_PER_FRAME: f32 = 0.005;
pub const INNER_SPIN_PER_FRAME: f32 = -0.003;
pub const FLOAT_AMPLITUDE: f32 = 0.3;
pub const FLOAT_RATE_PER_MS: f64 = 0.001;
pub const POINTER_SPIN_GAIN: f32 = 0.01;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: [f32; 3] = [10.0, 10.0, 5.0];

// Scroll effects
pub const REVEAL_START_FRACTION: f64 = 0.8; // "top 80%"
pub const SMOOTH_SCROLL_DURATION_SEC: f64 = 1.2;

// Contact form
pub const CONTACT_SIMULATED_DELAY_MS: u64 = 2000;
