//! Configuration management for the database connection.

pub mod database;
