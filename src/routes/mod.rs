pub mod client_routes;
pub mod company_config_routes;
pub mod delivery_note_routes;
pub mod statistics_routes;
