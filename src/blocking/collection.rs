// Copyright 2022 secret-service-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::error::Error;
use crate::proxy::collection::CollectionProxyBlocking;
use crate::ss::{NO_OBJECT_PATH, SS_DBUS_NAME};
use crate::util::exec_prompt_blocking;

use tracing::info;
use zbus::{proxy::CacheProperties, zvariant::OwnedObjectPath};

// Collection struct.
// Should always be created from the SecretService entry point,
// whether through a new collection or an alias lookup
pub struct Collection {
    conn: zbus::blocking::Connection,
    pub collection_path: OwnedObjectPath,
    collection_proxy: CollectionProxyBlocking<'static>,
}

impl Collection {
    pub(crate) fn new(
        conn: zbus::blocking::Connection,
        collection_path: OwnedObjectPath,
    ) -> Result<Self, Error> {
        let collection_proxy = CollectionProxyBlocking::builder(&conn)
            .destination(SS_DBUS_NAME)?
            .path(collection_path.clone())?
            .cache_properties(CacheProperties::No)
            .build()?;
        Ok(Collection {
            conn,
            collection_path,
            collection_proxy,
        })
    }

    pub fn is_locked(&self) -> Result<bool, Error> {
        Ok(self.collection_proxy.locked()?)
    }

    pub fn ensure_unlocked(&self) -> Result<(), Error> {
        if self.is_locked()? {
            Err(Error::Locked)
        } else {
            Ok(())
        }
    }

    /// Deletes dbus object, but struct instance still exists (current implementation)
    pub fn delete(&self) -> Result<(), Error> {
        self.ensure_unlocked()?;
        let prompt_path = self.collection_proxy.delete()?;

        if prompt_path.as_str() != NO_OBJECT_PATH {
            exec_prompt_blocking(self.conn.clone(), &prompt_path)?;
        }

        info!(path = self.collection_path.as_str(), "deleted collection");
        Ok(())
    }

    pub fn get_label(&self) -> Result<String, Error> {
        Ok(self.collection_proxy.label()?)
    }
}

#[cfg(test)]
mod test {
    use crate::blocking::*;

    #[test_with::env(DBUS_SESSION_BUS_ADDRESS)]
    #[test]
    fn should_check_if_collection_locked() {
        let ss = SecretService::connect().unwrap();
        for collection in ss.get_all_collections().unwrap() {
            let _ = collection.is_locked().unwrap();
        }
    }

    #[test_with::env(DBUS_SESSION_BUS_ADDRESS)]
    #[test]
    fn should_get_collection_labels() {
        let ss = SecretService::connect().unwrap();
        for collection in ss.get_all_collections().unwrap() {
            let _ = collection.get_label().unwrap();
        }
    }

    #[test]
    #[ignore] // needs a default collection, which is not guaranteed on a fresh session
    fn should_get_default_collection_label() {
        let ss = SecretService::connect().unwrap();
        let collection = ss.get_default_collection().unwrap();
        assert!(!collection.get_label().unwrap().is_empty());
    }
}
