pub mod api_utils;
pub mod busy;
pub mod components;
pub mod config;
pub mod download;
pub mod icons;
pub mod notify;
