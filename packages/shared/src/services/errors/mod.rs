pub mod board_service_errors;
pub mod game_service_errors;
