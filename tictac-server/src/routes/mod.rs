//! HTTP route handlers

pub mod ai;
pub mod algorithm;
pub mod status;
