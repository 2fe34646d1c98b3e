//! Core business logic - framework-agnostic account, catalog, and purchase
//! operations. Every function takes a database handle and returns a typed
//! `Result`; the request boundary that calls these is out of scope here.

pub mod account;
pub mod category;
pub mod product;
pub mod purchase;
