// Copyright 2022 secret-service-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Make sure a collection exists for an alias, creating it when the alias is unset.

use crate::blocking::{Collection, SecretService};
use crate::ss::{DEFAULT_ALIAS, DEFAULT_LABEL};
use crate::Error;
use tracing::{debug, info, warn};

/// The collection operations needed to ensure an alias resolves.
///
/// Implemented by [SecretService]; anything else speaking the same
/// contract can be driven by [ensure_collection].
pub trait CollectionStore {
    type Handle;

    /// Resolve an alias, `None` when it is not set.
    fn find_by_alias(&self, alias: &str) -> Result<Option<Self::Handle>, Error>;

    /// Create a collection and point `alias` at it.
    fn create(&self, label: &str, alias: &str) -> Result<Self::Handle, Error>;

    /// Display label of a collection.
    fn label(&self, handle: &Self::Handle) -> Result<String, Error>;
}

impl CollectionStore for SecretService<'_> {
    type Handle = Collection;

    fn find_by_alias(&self, alias: &str) -> Result<Option<Collection>, Error> {
        self.find_collection_by_alias(alias)
    }

    fn create(&self, label: &str, alias: &str) -> Result<Collection, Error> {
        self.create_collection(label, alias)
    }

    fn label(&self, handle: &Collection) -> Result<String, Error> {
        handle.get_label()
    }
}

/// What [ensure_collection] should make sure of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsureOptions {
    /// Alias that must resolve to a collection. Must not be empty.
    pub alias: String,
    /// Label given to the collection if one has to be created.
    pub label: String,
    /// Report a missing collection instead of creating it.
    pub dry_run: bool,
}

impl Default for EnsureOptions {
    fn default() -> Self {
        EnsureOptions {
            alias: DEFAULT_ALIAS.to_owned(),
            label: DEFAULT_LABEL.to_owned(),
            dry_run: false,
        }
    }
}

/// Result of a successful [ensure_collection] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The alias already resolved; nothing was changed.
    ///
    /// `label` is `None` when the existing collection's label could not be read.
    Existing { label: Option<String> },
    /// A collection was created. The label is read back from the new collection.
    Created { label: String },
    /// Dry run and the alias is unset.
    Missing,
}

/// Resolve `options.alias`, creating the collection if it is missing.
///
/// An empty alias is rejected before the store is touched: the daemon would
/// create an unaliased collection that no later lookup finds.
pub fn ensure_collection<S: CollectionStore>(
    store: &S,
    options: &EnsureOptions,
) -> Result<EnsureOutcome, Error> {
    let alias = options.alias.as_str();
    if alias.is_empty() {
        return Err(Error::EmptyAlias);
    }

    if let Some(existing) = store.find_by_alias(alias)? {
        // the label is informational only, a failed read must not fail the skip path
        let label = match store.label(&existing) {
            Ok(label) => {
                debug!(alias, label = label.as_str(), "collection already exists");
                Some(label)
            }
            Err(e) => {
                warn!(
                    alias,
                    error = %e,
                    "collection already exists, but its label could not be read"
                );
                None
            }
        };
        return Ok(EnsureOutcome::Existing { label });
    }

    if options.dry_run {
        info!(alias, "collection missing, dry run so not creating");
        return Ok(EnsureOutcome::Missing);
    }

    info!(alias, label = options.label.as_str(), "creating collection");
    let created = store.create(&options.label, alias)?;
    let label = store.label(&created)?;
    Ok(EnsureOutcome::Created { label })
}
