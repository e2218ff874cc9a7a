//! Procedural menu-bar icon: a pair of controller halves with stick and
//! button cutouts, rendered at 1x and 2x and saved as PNG.

pub mod canvas;
pub mod config;
pub mod error;
pub mod icon;
pub mod layout;
pub mod logger;

pub use config::{GeneratorConfig, IconTarget};
pub use error::IconError;
pub use icon::{generate, generate_icon, render};
