//! Stroke, drip and snapshot engine for the graffiti wall.
//!
//! Nothing here touches a platform API: front-ends feed pixel paths and style
//! values in, call [`Scene::tick`] once per frame, and read strokes and drips
//! back out denormalized to whatever size the canvas is now.

pub mod codec;
pub mod constants;
pub mod drip;
pub mod error;
pub mod geometry;
pub mod hand;
pub mod scene;
pub mod spawn;
pub mod store;
pub mod stroke;

pub use codec::*;
pub use constants::*;
pub use drip::*;
pub use error::*;
pub use geometry::*;
pub use hand::*;
pub use scene::*;
pub use spawn::*;
pub use store::*;
pub use stroke::*;
