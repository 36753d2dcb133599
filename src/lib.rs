//! Hui Zhi's Pizza Co. ターミナル版

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
