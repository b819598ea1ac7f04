//! Backend calls

pub mod health;
pub mod search;
