pub mod client_repository;
pub mod company_config_repository;
pub mod delivery_note_repository;
