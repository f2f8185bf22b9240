//! # Video Analytics Backend
//!
//! Storage and chart preparation for per-video person-count analytics.
//!
//! Videos are processed by an external detection pipeline that reports a
//! sparse per-second person count. This crate keeps the resulting records and
//! turns each signal into a bounded, readable chart series with labeled axis
//! ticks, whatever the video length.
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) shared by every layer
//! - [`services`]: Timeline downsampling, tick generation, label formatting, reports
//! - [`db`]: Repository pattern and in-memory storage
//! - [`config`]: TOML and environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types

pub mod api;

pub mod config;

pub mod db;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
