//! Hard Times Toolkit: an AI side hustle coach and a community grocery
//! price board sharing one transient terminal session.

pub mod ai;
pub mod board;
pub mod cli;
pub mod error;
pub mod geo;
pub mod models;
pub mod output;
pub mod session;
