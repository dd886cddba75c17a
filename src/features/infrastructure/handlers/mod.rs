mod infrastructure_handler;

pub use infrastructure_handler::*;
