pub mod audio;
pub mod config;
pub mod game;
pub mod input;
pub mod point;
pub mod snake;
pub mod spawn;
pub mod term;
