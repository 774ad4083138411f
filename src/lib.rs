pub mod application;
pub mod config;
pub mod responder;
pub mod server;
