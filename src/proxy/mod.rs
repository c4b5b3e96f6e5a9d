//! Low level dbus proxies for the parts of the secret service API used by this crate.

pub mod collection;
pub mod prompt;
pub mod service;
