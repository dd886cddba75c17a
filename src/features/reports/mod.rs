pub mod dtos;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod routes;
pub mod services;
pub mod workers;

pub use services::ReportService;
pub use workers::ChangeRelay;
