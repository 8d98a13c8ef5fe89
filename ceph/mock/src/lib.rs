// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A deterministic stand-in for the `ceph` administrative CLI.
//!
//! [CephMockConnection] implements [ceph_conn::CephConnection] without any
//! network or process execution. Commands are matched against a fixed set
//! of shapes and applied to an in-memory [ClusterState], so tests can
//! assert on both the command lines code under test builds and their
//! effects.

mod cli;
mod config;
mod connection;
mod state;

pub use cli::{CommandKind, Interpreter};
pub use config::{LoadError, MockConfig};
pub use connection::CephMockConnection;
pub use state::{ClusterState, CommandHistory, SINGLE_REPLICA_SIZE};
