//! # Domain Models
//!
//! This crate contains the pure domain types of Taco Cloud: the ingredient
//! catalog, tacos, orders and their validation rules.
//! Keep it lean: no I/O, networking, or HTTP concerns, just data and simple helpers.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod ingredient;
pub mod order;
pub mod taco;
pub mod validation;
