//Copyright 2016 secret-service-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

// Definitions for secret service interactions

// DBus Name
pub const SS_DBUS_NAME: &str = "org.freedesktop.secrets";

// Returned in place of a collection or prompt path when there is none
pub const NO_OBJECT_PATH: &str = "/";

// Collection properties
pub const SS_COLLECTION_LABEL: &str = "org.freedesktop.Secret.Collection.Label";

// Well known aliases
pub const DEFAULT_ALIAS: &str = "default";
pub const DEFAULT_LABEL: &str = "Default";
