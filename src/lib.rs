pub mod cli;
pub mod collab;
pub mod config;
pub mod flow;
pub mod logging;
pub mod mvi;
pub mod projection;
pub mod screens;
