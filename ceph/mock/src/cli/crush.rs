// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Emulates placement rule management.

use crate::state::ClusterState;

use ceph_conn::CommandOutput;
use itertools::Itertools;

/// `ceph osd crush rule ls`
pub(super) fn ls(state: &mut ClusterState, _args: &[&str]) -> CommandOutput {
    CommandOutput::success().set_stdout(state.crush_rules().iter().join("\n"))
}

/// `ceph osd crush rule create-simple <name> ...`
///
/// Creating a rule which already exists succeeds, with a notice on stderr.
pub(super) fn create_simple(
    state: &mut ClusterState,
    args: &[&str],
) -> CommandOutput {
    let name = args[0];
    if !state.add_crush_rule(name) {
        return CommandOutput::success()
            .set_stderr(format!("rule {name} already exists"));
    }
    CommandOutput::success()
}

/// `ceph osd crush rule rm <name>`
pub(super) fn rm(state: &mut ClusterState, args: &[&str]) -> CommandOutput {
    let name = args[0];
    if !state.remove_crush_rule(name) {
        return CommandOutput::failure()
            .set_stderr(format!("rule '{name}' does not exist"));
    }
    CommandOutput::success()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ls_in_creation_order() {
        let mut state = ClusterState::new();
        assert_eq!(ls(&mut state, &[]).stdout, "");

        create_simple(&mut state, &["zeta"]);
        create_simple(&mut state, &["alpha"]);
        let output = ls(&mut state, &[]);
        assert!(output.is_success());
        assert_eq!(output.stdout, "zeta\nalpha");
    }

    #[test]
    fn create_is_idempotent() {
        let mut state = ClusterState::new();
        let output = create_simple(&mut state, &["myrule"]);
        assert_eq!(output, CommandOutput::success());

        let output = create_simple(&mut state, &["myrule"]);
        assert!(output.is_success());
        assert_eq!(output.stderr, "rule myrule already exists");
        assert_eq!(state.crush_rules().len(), 1);
    }

    #[test]
    fn rm_requires_existing_rule() {
        let mut state = ClusterState::new();
        let output = rm(&mut state, &["missing_rule"]);
        assert_eq!(output.status, 1);
        assert!(output.stderr.contains("missing_rule"));

        state.add_crush_rule("removerule");
        assert!(rm(&mut state, &["removerule"]).is_success());
        assert!(state.crush_rules().is_empty());
    }
}
