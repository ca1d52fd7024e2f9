pub mod device_token_dto;
