// Copyright 2022 secret-service-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Errors returned when talking to the secret service.

/// An error that could occur interacting with the secret service dbus interface.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An error occurred sending or receiving a dbus message.
    #[error("zbus error: {0}")]
    Zbus(#[from] zbus::Error),
    /// A value returned by the daemon had an unexpected type.
    #[error("zbus variant error: {0}")]
    Zvariant(#[from] zbus::zvariant::Error),
    /// The object must be unlocked before this action can be carried out.
    #[error("SS Error: object locked")]
    Locked,
    /// No object was found for the object for the request.
    #[error("SS error: result not returned from SS API")]
    NoResult,
    /// The prompt request to unlock or create an object was dismissed.
    #[error("SS error: prompt dismissed")]
    Prompt,
    /// An alias is required; the daemon treats an empty one as "no alias".
    #[error("SS error: alias must not be empty")]
    EmptyAlias,
    /// The secret service provider, or dbus session, was not found on the system.
    #[error("no secret service provider or dbus session found")]
    Unavailable,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_describe_unavailable_service() {
        assert_eq!(
            Error::Unavailable.to_string(),
            "no secret service provider or dbus session found"
        );
    }

    #[test]
    fn should_wrap_zbus_errors() {
        let err: Error = zbus::Error::Unsupported.into();
        assert!(matches!(err, Error::Zbus(zbus::Error::Unsupported)));
        assert!(err.to_string().starts_with("zbus error: "));
    }
}
