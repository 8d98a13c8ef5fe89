// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Emulates pool management.
//!
//! Only pool existence is tracked. Every pool reports a size of
//! [SINGLE_REPLICA_SIZE], and property changes are accepted without being
//! stored.

use crate::state::{ClusterState, SINGLE_REPLICA_SIZE};

use ceph_conn::CommandOutput;
use itertools::Itertools;

fn does_not_exist(name: &str) -> String {
    format!("pool '{name}' does not exist")
}

/// `ceph osd pool ls`
pub(super) fn ls(state: &mut ClusterState, _args: &[&str]) -> CommandOutput {
    CommandOutput::success().set_stdout(state.pools().iter().join("\n"))
}

/// `ceph osd pool create <name> ...`
pub(super) fn create(
    state: &mut ClusterState,
    args: &[&str],
) -> CommandOutput {
    let name = args[0];
    if !state.add_pool(name) {
        return CommandOutput::success()
            .set_stdout(format!("pool '{name}' already exists"));
    }
    CommandOutput::success().set_stdout(format!("pool '{name}' created"))
}

/// `ceph osd pool set <name> ...`
///
/// Accepted for any pool name, existing or not.
pub(super) fn set(
    _state: &mut ClusterState,
    _args: &[&str],
) -> CommandOutput {
    CommandOutput::success()
}

/// `ceph osd pool get <name> size`
pub(super) fn get_size(
    state: &mut ClusterState,
    args: &[&str],
) -> CommandOutput {
    let name = args[0];
    if !state.pools().contains(name) {
        return CommandOutput::failure().set_stderr(does_not_exist(name));
    }
    CommandOutput::success().set_stdout(format!("size: {SINGLE_REPLICA_SIZE}"))
}

/// `ceph osd pool delete <name> ...`
///
/// Deleting a missing pool still succeeds, unlike `crush rule rm`.
pub(super) fn delete(
    state: &mut ClusterState,
    args: &[&str],
) -> CommandOutput {
    let name = args[0];
    if !state.remove_pool(name) {
        return CommandOutput::success().set_stderr(does_not_exist(name));
    }
    CommandOutput::success().set_stdout(format!("pool '{name}' removed"))
}

/// `ceph osd pool application enable ...`
pub(super) fn application_enable(
    _state: &mut ClusterState,
    _args: &[&str],
) -> CommandOutput {
    CommandOutput::success().set_stdout("enabled")
}
