// src/lib.rs

pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod intersection;
pub mod scene;
pub mod session;
pub mod visibility;

pub use config::{FanColoring, RaycasterConfig, SceneConfig};
pub use error::GeometryError;
pub use geometry::{Point2, Segment, Triangle};
pub use scene::{LightScene, SceneStats};
pub use visibility::{Ray, Raycaster, RenderTarget, Snapshot};
