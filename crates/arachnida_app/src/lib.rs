//! Command-line front ends: `spider` (image crawler) and `scorpion` (file inspector).
pub mod cli;
pub mod logging;
pub mod report;
pub mod scorpion;
pub mod spider;
