//Copyright 2022 secret-service-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

// Contains helpers for:
//   exec_prompt
//   mapping connection failures

use crate::error::Error;
use crate::proxy::prompt::{Completed, PromptProxyBlocking};
use crate::ss::SS_DBUS_NAME;

use tracing::debug;
use zbus::zvariant::{ObjectPath, OwnedValue};

const DBUS_SERVICE_UNKNOWN: &str = "org.freedesktop.DBus.Error.ServiceUnknown";
const DBUS_NAME_HAS_NO_OWNER: &str = "org.freedesktop.DBus.Error.NameHasNoOwner";

pub(crate) fn exec_prompt_blocking(
    conn: zbus::blocking::Connection,
    prompt: &ObjectPath<'_>,
) -> Result<OwnedValue, Error> {
    let prompt_proxy = PromptProxyBlocking::builder(&conn)
        .destination(SS_DBUS_NAME)?
        .path(prompt)?
        .build()?;

    // subscribe before prompting, otherwise the signal could be missed
    let mut receive_completed_iter = prompt_proxy.receive_completed()?;

    debug!(prompt = prompt.as_str(), "executing prompt");
    prompt_proxy.prompt("")?;

    let signal = receive_completed_iter.next().ok_or(Error::Prompt)?;
    handle_signal(signal)
}

fn handle_signal(signal: Completed) -> Result<OwnedValue, Error> {
    let args = signal.args()?;
    if args.dismissed {
        debug!("prompt dismissed");
        Err(Error::Prompt)
    } else {
        Ok(args.result.try_to_owned()?)
    }
}

pub(crate) fn handle_conn_error(e: zbus::Error) -> Error {
    debug!(error = %e, "secret service connection failed");
    if is_unavailable(&e) {
        Error::Unavailable
    } else {
        e.into()
    }
}

fn is_unavailable(e: &zbus::Error) -> bool {
    match e {
        zbus::Error::InterfaceNotFound | zbus::Error::Address(_) | zbus::Error::InputOutput(_) => {
            true
        }
        zbus::Error::MethodError(name, _, _) => {
            let name = name.as_str();
            name == DBUS_SERVICE_UNKNOWN || name == DBUS_NAME_HAS_NO_OWNER
        }
        zbus::Error::FDO(fdo) => matches!(
            **fdo,
            zbus::fdo::Error::ServiceUnknown(_) | zbus::fdo::Error::NameHasNoOwner(_)
        ),
        _ => false,
    }
}
