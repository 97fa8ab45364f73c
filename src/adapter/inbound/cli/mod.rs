//! CLI module graph.

pub mod command;
pub mod config;
pub mod evaluate;
pub mod items;
pub mod output;
pub mod paths;
pub mod run;
