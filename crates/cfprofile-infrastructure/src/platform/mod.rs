//! Platform binding sources
//!
//! Implementations of [`cfprofile_domain::ports::ServiceBindingSource`].

pub mod cloud_foundry;

pub use cloud_foundry::CloudFoundryBindingSource;
