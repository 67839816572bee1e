pub mod bug;
pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod layer;
pub mod world;
