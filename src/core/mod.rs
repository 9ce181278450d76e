pub mod constants;
pub mod deform;
pub mod input;
pub mod mesh;
pub mod rig;
pub mod sections;
pub mod sim;
pub mod timeline;

pub use constants::*;
pub use input::{InputEvent, InputState};
pub use sim::{section_position, SceneSim};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
