pub mod city;
pub mod config;
pub mod filter;
pub mod loader;
pub mod output;
pub mod prompt;
pub mod session;
pub mod stats;
pub mod trip;
