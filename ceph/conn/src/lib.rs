// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interfaces used to issue administrative commands against a Ceph cluster.
//!
//! Callers build command lines and hand them to a [CephConnection]. In
//! production that is a connection to a real cluster; under test it is a
//! simulated one which records what it was asked to do.

mod connection;
mod error;
mod input;
mod output;

pub use connection::*;
pub use error::*;
pub use input::*;
pub use output::*;

pub const CEPH: &str = "ceph";
