mod infrastructure_dto;

pub use infrastructure_dto::InfrastructureTypeResponseDto;
