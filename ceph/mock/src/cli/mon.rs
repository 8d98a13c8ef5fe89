// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::state::ClusterState;

use ceph_conn::CommandOutput;

/// `ceph config set mon <key> <value>`
pub(super) fn config_set(
    state: &mut ClusterState,
    args: &[&str],
) -> CommandOutput {
    state.set_config(args[0], args[1]);
    CommandOutput::success()
}
