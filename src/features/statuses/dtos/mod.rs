mod status_dto;

pub use status_dto::StatusResponseDto;
