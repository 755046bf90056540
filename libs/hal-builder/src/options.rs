//! Build options

use serde::{Deserialize, Serialize};

/// What to do with a link whose template references a variable the instance
/// does not have
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnresolvedVariablePolicy {
    /// Drop the link and log a warning
    #[default]
    Omit,
    /// Fail the build with `UnresolvedVariable`
    Fail,
    /// Keep the partially expanded href
    Partial,
}

/// Default bound on embedding depth
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub unresolved_variables: UnresolvedVariablePolicy,
    /// Deepest embedding level accepted before failing with `CycleDetected`
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            unresolved_variables: UnresolvedVariablePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BuildOptions {
    pub fn with_unresolved_variables(mut self, policy: UnresolvedVariablePolicy) -> Self {
        self.unresolved_variables = policy;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
