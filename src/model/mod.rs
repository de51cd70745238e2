//! Character model: box geometry and how the skin texture wraps onto it

mod atlas;
mod character;
mod geometry;
mod uv;

pub use character::{bounds, humanoid, BodyPart};
pub use geometry::{BoxMesh, FACE_ORDER};
pub use uv::BoxFace;
