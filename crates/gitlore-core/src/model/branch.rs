use std::collections::HashSet;
use std::str::FromStr;

use crate::error::CoreError;

/// Which branches an indexing run starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BranchFilter {
    #[default]
    All,
    Named(HashSet<String>),
}

impl BranchFilter {
    /// No names, or a single empty name, selects every branch.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        match names.as_slice() {
            [] => Self::All,
            [only] if only.is_empty() => Self::All,
            _ => Self::Named(names.into_iter().collect()),
        }
    }

    pub fn matches(&self, branch: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(names) => names.contains(branch),
        }
    }
}

/// Where the walk for a selected branch starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkMode {
    /// Walk each selected branch from its own tip.
    #[default]
    BranchTips,
    /// Walk the repository HEAD once per selected branch. Only the first
    /// selected branch contributes records.
    Head,
}

impl FromStr for WalkMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tips" => Ok(Self::BranchTips),
            "head" => Ok(Self::Head),
            other => Err(CoreError::Config(format!(
                "unknown walk mode '{other}' (expected 'tips' or 'head')"
            ))),
        }
    }
}
