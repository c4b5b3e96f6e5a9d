// Copyright 2022 secret-service-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A blocking secret service API.
//!
//! This `SecretService` will block the current thread when making requests to the
//! secret service server instead of returning futures.
//!
//! It is important to not call this these functions in an async context or otherwise the runtime
//! may stall. See [zbus's blocking documentation] for more details.
//!
//! [zbus's blocking documentation]: https://docs.rs/zbus/latest/zbus/blocking/index.html

use crate::proxy::service::ServiceProxyBlocking;
use crate::ss::{DEFAULT_ALIAS, NO_OBJECT_PATH, SS_COLLECTION_LABEL};
use crate::util;
use crate::Error;
use std::collections::HashMap;
use tracing::{debug, info};
use zbus::zvariant::{ObjectPath, OwnedObjectPath, Value};

mod collection;
pub use collection::Collection;

/// Secret Service Struct.
///
/// This the main entry point for usage of the library.
///
/// No session is negotiated: collections are looked up and created without
/// transferring any secrets.
pub struct SecretService<'a> {
    conn: zbus::blocking::Connection,
    service_proxy: ServiceProxyBlocking<'a>,
}

impl SecretService<'_> {
    /// Create a new `SecretService` instance
    pub fn connect() -> Result<Self, Error> {
        let conn = zbus::blocking::Connection::session().map_err(util::handle_conn_error)?;
        let service_proxy = ServiceProxyBlocking::new(&conn).map_err(util::handle_conn_error)?;
        debug!("connected to secret service");

        Ok(SecretService {
            conn,
            service_proxy,
        })
    }

    /// Get all collections
    pub fn get_all_collections(&self) -> Result<Vec<Collection>, Error> {
        let collections = self
            .service_proxy
            .collections()
            .map_err(util::handle_conn_error)?;
        collections
            .into_iter()
            .map(|object_path| Collection::new(self.conn.clone(), object_path))
            .collect()
    }

    /// Look up a collection by alias, `None` if the alias is not set.
    pub fn find_collection_by_alias(&self, alias: &str) -> Result<Option<Collection>, Error> {
        let object_path = self
            .service_proxy
            .read_alias(alias)
            .map_err(util::handle_conn_error)?;

        if object_path.as_str() == NO_OBJECT_PATH {
            debug!(alias, "alias not set");
            Ok(None)
        } else {
            debug!(alias, path = object_path.as_str(), "alias resolved");
            Collection::new(self.conn.clone(), object_path).map(Some)
        }
    }

    /// Get collection by alias.
    ///
    /// Most common would be the `default` alias, but there
    /// is also a specific method for getting the collection
    /// by default alias.
    pub fn get_collection_by_alias(&self, alias: &str) -> Result<Collection, Error> {
        self.find_collection_by_alias(alias)?.ok_or(Error::NoResult)
    }

    /// Get default collection.
    /// (The collection whos alias is `default`)
    pub fn get_default_collection(&self) -> Result<Collection, Error> {
        self.get_collection_by_alias(DEFAULT_ALIAS)
    }

    /// Creates a new collection with a label and an alias.
    ///
    /// The daemon may answer with a prompt (for example to choose a password
    /// for the new collection); it is executed and waited on.
    pub fn create_collection(&self, label: &str, alias: &str) -> Result<Collection, Error> {
        let mut properties: HashMap<&str, Value> = HashMap::new();
        properties.insert(SS_COLLECTION_LABEL, label.into());

        let created_collection = self
            .service_proxy
            .create_collection(properties, alias)
            .map_err(util::handle_conn_error)?;

        let collection_path: OwnedObjectPath = {
            let created_path = created_collection.collection;

            // "/" means the daemon wants a prompt completed first
            if created_path.as_str() == NO_OBJECT_PATH {
                let prompt_path = created_collection.prompt;

                let prompt_res = util::exec_prompt_blocking(self.conn.clone(), &prompt_path)?;
                let path: ObjectPath<'static> = prompt_res.try_into()?;
                path.into()
            } else {
                created_path
            }
        };

        info!(label, alias, path = collection_path.as_str(), "created collection");
        Collection::new(self.conn.clone(), collection_path)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test_with::env(DBUS_SESSION_BUS_ADDRESS)]
    #[test]
    fn should_create_secret_service() {
        SecretService::connect().unwrap();
    }

    #[test_with::env(DBUS_SESSION_BUS_ADDRESS)]
    #[test]
    fn should_return_none_if_alias_doesnt_exist() {
        let ss = SecretService::connect().unwrap();
        let collection = ss
            .find_collection_by_alias("definitely_defintely_does_not_exist")
            .unwrap();
        assert!(collection.is_none());
    }

    #[test_with::env(DBUS_SESSION_BUS_ADDRESS)]
    #[test]
    fn should_return_error_if_collection_doesnt_exist() {
        let ss = SecretService::connect().unwrap();

        match ss.get_collection_by_alias("definitely_defintely_does_not_exist") {
            Err(Error::NoResult) => {}
            _ => panic!(),
        };
    }

    #[test]
    #[ignore] // creates a collection, and most daemons prompt for a password
    fn should_create_and_delete_collection() {
        let ss = SecretService::connect().unwrap();
        let count_before = ss.get_all_collections().unwrap().len();

        let test_collection = ss.create_collection("Test", "").unwrap();
        assert_eq!(test_collection.get_label().unwrap(), "Test");
        assert_eq!(ss.get_all_collections().unwrap().len(), count_before + 1);

        test_collection.delete().unwrap();
        assert_eq!(ss.get_all_collections().unwrap().len(), count_before);
    }

    #[test]
    #[ignore] // creates a collection, and most daemons prompt for a password
    fn should_resolve_alias_of_created_collection() {
        let ss = SecretService::connect().unwrap();
        let alias = "ensure_default_collection_test";

        let created = ss.create_collection("Alias Test", alias).unwrap();
        let found = ss.get_collection_by_alias(alias).unwrap();
        assert_eq!(found.collection_path, created.collection_path);

        created.delete().unwrap();
        assert!(ss.find_collection_by_alias(alias).unwrap().is_none());
    }
}
