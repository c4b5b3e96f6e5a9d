// Copyright 2022 secret-service-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Ensure a Secret Service collection exists for an alias.
//!
//! Talks to a running secret service daemon (gnome-keyring, KeePassXC, ...)
//! over the dbus session bus, resolves an alias such as `default` and creates
//! the collection when the alias is not set.
//!
//! ```no_run
//! use ensure_default_collection::blocking::SecretService;
//! use ensure_default_collection::{ensure_collection, EnsureOptions, EnsureOutcome};
//!
//! # fn main() -> Result<(), ensure_default_collection::Error> {
//! let ss = SecretService::connect()?;
//! match ensure_collection(&ss, &EnsureOptions::default())? {
//!     EnsureOutcome::Created { label } => println!("Created collection {label}"),
//!     EnsureOutcome::Existing { .. } | EnsureOutcome::Missing => {}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Creating a collection usually makes the daemon show a prompt (to pick a
//! password for it); the call blocks until the prompt is completed or
//! dismissed.

pub mod blocking;
mod ensure;
mod error;
pub mod proxy;
pub mod ss;
mod util;

pub use ensure::{ensure_collection, CollectionStore, EnsureOptions, EnsureOutcome};
pub use error::Error;
