// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interfaces for parsing configuration files for a mock connection

use camino::{Utf8Path, Utf8PathBuf};
use ceph_conn::CEPH;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Configuration for a [crate::CephMockConnection]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MockConfig {
    /// Program every recognized command line must invoke. Anything before
    /// it on the line (`sudo`, `timeout 60`, ...) is ignored.
    pub program: String,
    /// Number of command lines kept in history. Unbounded if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_history_size: Option<NonZeroUsize>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            program: CEPH.to_string(),
            max_history_size: None,
        }
    }
}

impl MockConfig {
    /// Load a `MockConfig` from the given TOML file
    pub fn from_file(path: &Utf8Path) -> Result<MockConfig, LoadError> {
        let file_contents = std::fs::read_to_string(path)
            .map_err(|err| LoadError::Io { path: path.into(), err })?;
        Self::from_toml_str(&file_contents)
            .map_err(|err| LoadError::Parse { path: path.into(), err })
    }

    pub fn from_toml_str(
        contents: &str,
    ) -> Result<MockConfig, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error reading \"{path}\": {err}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        err: std::io::Error,
    },
    #[error("error parsing \"{path}\": {err}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        err: toml::de::Error,
    },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = MockConfig::from_toml_str("").unwrap();
        assert_eq!(config, MockConfig::default());
        assert_eq!(config.program, "ceph");
        assert_eq!(config.max_history_size, None);
    }

    #[test]
    fn partial_config() {
        let config = MockConfig::from_toml_str(
            r#"
            program = "/usr/bin/ceph"
            max_history_size = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.program, "/usr/bin/ceph");
        assert_eq!(config.max_history_size, NonZeroUsize::new(1000));
    }

    #[test]
    fn bad_configs_are_rejected() {
        MockConfig::from_toml_str("max_history_size = 0").unwrap_err();
        MockConfig::from_toml_str("splorch = true").unwrap_err();
    }

    #[test]
    fn from_file() {
        let dir = camino_tempfile::tempdir().unwrap();
        let path = dir.path().join("mock.toml");
        std::fs::write(&path, "program = \"rbd\"\n").unwrap();
        let config = MockConfig::from_file(&path).unwrap();
        assert_eq!(config.program, "rbd");

        std::fs::write(&path, "program = 3\n").unwrap();
        let err = MockConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "{err}");

        let missing = dir.path().join("missing.toml");
        let err = MockConfig::from_file(&missing).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "{err}");
        assert!(err.to_string().contains("missing.toml"));
    }
}
