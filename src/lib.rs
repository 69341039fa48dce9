// src/lib.rs

pub mod aggregate;
pub mod api;
pub mod cli;
pub mod core;
pub mod dataset;
pub mod ingest;
pub mod repository;
pub mod service;
