pub mod board;
pub mod game;
pub mod requests;
pub mod responses;
pub mod round;
