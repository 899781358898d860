//! HTTP request handlers

pub mod mars_weather;
pub mod root;
