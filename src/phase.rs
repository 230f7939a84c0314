//! Pipeline phase passed by the host through `--phase`.

use std::fmt;

pub const PRE_INITIALIZE: &str = "pre-initialize";
pub const INITIALIZE: &str = "initialize";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PreInitialize,
    Initialize,
}

impl Phase {
    /// Only the literal "pre-initialize" is special; anything else, including
    /// a missing flag, runs the initialize branch.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(PRE_INITIALIZE) => Phase::PreInitialize,
            _ => Phase::Initialize,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::PreInitialize => PRE_INITIALIZE,
            Phase::Initialize => INITIALIZE,
        }
    }

    /// Variables are resolved by the host only after pre-initialize.
    pub fn requires_variables(&self) -> bool {
        matches!(self, Phase::Initialize)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
