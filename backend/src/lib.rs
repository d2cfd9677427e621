//! Minimal backend scaffold: a validated environment configuration, an
//! authentication provider bound to the database pool, and a placeholder
//! HTTP surface that echoes request metadata.

pub mod auth;
pub mod config;
pub mod db;
pub mod env_file;
pub mod error;
pub mod web_server;
