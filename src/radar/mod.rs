pub mod assets;
pub mod config;
pub mod error;
pub mod frame;
pub mod ticker;
pub mod view;
