//! Two OpenGL demos drawing the Sierpinski triangle: the chaos game and
//! recursive subdivision.

#[macro_use]
extern crate glium;

pub mod chaos;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod opengl;
pub mod scene;
pub mod shader;
pub mod subdivision;

pub use error::Error;
