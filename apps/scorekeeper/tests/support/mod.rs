#![allow(dead_code)]

pub mod sessions;

pub use sessions::{doubles_session, play, play_script, singles_session};
