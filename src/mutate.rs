//! Phase-conditional resource injection.
//!
//! The selected jobs are merged into `resources.jobs` with shallow override
//! semantics: each injected job replaces any prior value under the same name
//! wholesale, and every other key in the document is left alone.

use crate::phase::Phase;
use crate::resources;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MutateError {
    #[error("configuration must be a JSON object")]
    NotAnObject,

    #[error("\"variables\" must be present and non-empty in phase {phase}")]
    MissingVariables { phase: Phase },

    #[error("{path} must be a JSON object")]
    NotAMapping { path: &'static str },
}

/// Which job keys an `apply` call touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationSummary {
    pub inserted: Vec<String>,
    pub replaced: Vec<String>,
}

/// Inject the jobs for `phase` into `config` in place.
pub fn apply(config: &mut Value, phase: Phase) -> anyhow::Result<MutationSummary> {
    let root = config.as_object_mut().ok_or(MutateError::NotAnObject)?;

    if phase.requires_variables() && !root.get("variables").is_some_and(is_truthy) {
        return Err(MutateError::MissingVariables { phase }.into());
    }

    let injected = resources::injected_jobs(phase)?;

    let resources = child_mapping(root, "resources", "resources")?;
    let jobs = child_mapping(resources, "jobs", "resources.jobs")?;

    let mut summary = MutationSummary::default();
    for (name, job) in injected {
        // Map::insert keeps the position of an existing key.
        if jobs.insert(name.clone(), job).is_some() {
            debug!(job = %name, "replaced job");
            summary.replaced.push(name);
        } else {
            debug!(job = %name, "inserted job");
            summary.inserted.push(name);
        }
    }

    Ok(summary)
}

/// Fetch `parent[key]` as a mapping, creating it when absent or null.
fn child_mapping<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
    path: &'static str,
) -> Result<&'a mut Map<String, Value>, MutateError> {
    let slot = parent
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if slot.is_null() {
        *slot = Value::Object(Map::new());
    }
    slot.as_object_mut()
        .ok_or(MutateError::NotAMapping { path })
}

/// Dynamic-language truthiness: null, false, zero and empty containers are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        // Out-of-range literals such as 1e400 have no f64 and are non-zero.
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
