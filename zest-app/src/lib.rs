pub mod config;
pub mod controller;
pub mod demo;
pub mod scheduler;

pub use config::AppConfig;
pub use controller::SessionController;
