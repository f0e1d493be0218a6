// src/rendering_lib/mod.rs

pub mod frame;
pub mod renderer;
pub mod shader;
pub mod vertex;

pub use frame::FrameBuilder;
pub use renderer::Renderer;
pub use shader::WGSL_SHADER_SOURCE;
