mod infrastructure_type;

pub use infrastructure_type::InfrastructureType;
