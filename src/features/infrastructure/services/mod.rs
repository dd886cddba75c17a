mod infrastructure_service;

pub use infrastructure_service::InfrastructureService;
