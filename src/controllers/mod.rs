pub mod client_controller;
pub mod company_config_controller;
pub mod delivery_note_controller;
pub mod statistics_controller;
