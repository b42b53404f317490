pub mod catalog;
pub mod command;
pub mod config;
pub mod content;
pub mod controller;
pub mod environment;
pub mod filter;
pub mod shortcuts;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
#[cfg(target_arch = "wasm32")]
mod web;
