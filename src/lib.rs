#![no_std]
pub mod geometry;
pub mod layout;
pub mod render;
pub mod state;
pub mod transform;

pub use state::{InputMode, VectorState};

#[cfg(test)]
extern crate std;
