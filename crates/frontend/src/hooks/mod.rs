//! Custom hooks for the application

pub mod use_auth_actions;

pub use use_auth_actions::{ActionState, use_auth_actions};
