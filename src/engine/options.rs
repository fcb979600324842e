use log::warn;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`PlannerOptions::from_env`].
pub const DANGLING_POLICY_ENV: &str = "TASK_SCHEDULER_DANGLING";

/// What to do with a dependency id that has no task in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingDependencyPolicy {
    /// Fail planning with `MissingDependency`.
    #[default]
    Reject,
    /// Treat the dependency as already satisfied.
    Ignore,
}

impl DanglingDependencyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DanglingDependencyPolicy::Reject => "reject",
            DanglingDependencyPolicy::Ignore => "ignore",
        }
    }
}

impl FromStr for DanglingDependencyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(DanglingDependencyPolicy::Reject),
            "ignore" => Ok(DanglingDependencyPolicy::Ignore),
            other => Err(format!("unknown dangling dependency policy '{}'", other)),
        }
    }
}

impl fmt::Display for DanglingDependencyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Handling of dependency ids missing from the task set
    pub dangling: DanglingDependencyPolicy,
}

impl PlannerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, overridden by `TASK_SCHEDULER_DANGLING` when it is set.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(raw) = std::env::var(DANGLING_POLICY_ENV) {
            match raw.parse() {
                Ok(policy) => options.dangling = policy,
                Err(e) => warn!("{}: {}, using '{}'", DANGLING_POLICY_ENV, e, options.dangling),
            }
        }
        options
    }

    pub fn with_dangling(mut self, value: DanglingDependencyPolicy) -> Self {
        self.dangling = value;
        self
    }
}
