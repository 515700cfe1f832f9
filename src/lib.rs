//! Ray tracer for a small animated scene of dancing ornaments.
//!
//! One frame is an immutable [`Scene`] snapshot built for an animation time
//! `t`, rendered by [`render_frame`] into a [`FrameBuf`].

pub mod aggregate;
pub mod animation;
pub mod camera;
pub mod config;
pub mod error;
pub mod framebuf;
pub mod geom;
pub mod light;
pub mod material;
pub mod metrics;
pub mod output;
pub mod prims;
pub mod render;
pub mod scene;
pub mod shading;
pub mod shape;
pub mod texture;
pub mod types;
pub mod util;
pub mod vector;

pub use self::aggregate::*;
pub use self::camera::*;
pub use self::config::*;
pub use self::error::*;
pub use self::framebuf::*;
pub use self::geom::*;
pub use self::light::*;
pub use self::material::*;
pub use self::prims::*;
pub use self::render::*;
pub use self::scene::*;
pub use self::shading::*;
pub use self::shape::*;
pub use self::types::*;
pub use self::vector::*;
