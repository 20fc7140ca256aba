#![warn(clippy::all)]

mod engine;
mod geometry;
mod gui;
mod pattern;

pub use engine::{LifeEngine, Seed};
pub use geometry::{GridGeometry, NARROW_VIEWPORT_THRESHOLD, PADDING};
pub use gui::{App, Config};
