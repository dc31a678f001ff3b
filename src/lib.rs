//! Offline-first point-of-sale order ledger.
//!
//! Persists products, customers, and orders as whole-document JSON blobs in
//! a local key-value store and owns the order-lifecycle rules: create-or-merge
//! per customer, close/reopen side effects on the customer directory, and the
//! age-based retention sweep. The presentation layer calls the functions in
//! [`services`] with a [`state::Ledger`] and renders whatever comes back.

pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
