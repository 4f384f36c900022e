pub mod backend;
pub mod cli;
pub mod config;
pub mod flow;
pub mod headless;
pub mod logging;
pub mod mvi;
pub mod sdk;
pub mod ui;
