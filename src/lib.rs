pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod models;
pub mod output;
pub mod page;
pub mod state;
pub mod views;
