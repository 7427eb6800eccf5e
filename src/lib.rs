//! Property price estimation for the Hyderabad housing market.
//!
//! [`domain::estimate`] turns a [`domain::PropertyAttributes`] record into a
//! rupee figure; [`infra::PredictionStore`] keeps saved figures per user on
//! any [`infra::KeyValueStore`]; [`infra::SessionManager`] tracks who is
//! signed in. The Dioxus front-end in the binary wires these together.

pub mod domain;
pub mod infra;
pub mod util;
