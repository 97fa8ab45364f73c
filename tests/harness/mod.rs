#![allow(dead_code)]

pub mod recording_dispatcher;
pub mod scripted_market;
pub mod stub_server;
