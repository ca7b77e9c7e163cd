pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod lifecycle;
pub mod orbit;
pub mod projects;
pub mod rotation;
pub mod scene;
pub mod schedule;
pub mod scroll;

pub use config::*;
pub use constants::*;
pub use orbit::*;
pub use rotation::*;
pub use schedule::*;

pub static FLOATING_WGSL: &str = include_str!("../shaders/floating.wgsl");
