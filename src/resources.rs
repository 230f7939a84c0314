//! Fixed job definitions injected into `resources.jobs`.
//!
//! JSON shape of a single job:
//! {
//!   "tasks": [
//!     {
//!       "existing_cluster_id": "abc",
//!       "notebook_task": { "notebook_path": "/Workspace/foo" },
//!       "task_key": "print_hello"
//!     }
//!   ]
//! }

use crate::phase::Phase;
use serde::Serialize;
use serde_json::{Map, Value};

pub const NOTEBOOK_PATH: &str = "/Workspace/foo";
pub const TASK_KEY: &str = "print_hello";

pub const PRE_INITIALIZE_CLUSTER: &str = "abc";
pub const INITIALIZE_CLUSTER: &str = "cde";

#[derive(Debug, Clone, Serialize)]
pub struct JobSpec {
    pub tasks: Vec<TaskSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskSpec {
    pub existing_cluster_id: String,
    pub notebook_task: NotebookTask,
    pub task_key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotebookTask {
    pub notebook_path: String,
}

impl JobSpec {
    /// One `print_hello` notebook task bound to an existing cluster.
    pub fn hello(cluster_id: &str) -> Self {
        Self {
            tasks: vec![TaskSpec {
                existing_cluster_id: cluster_id.to_string(),
                notebook_task: NotebookTask {
                    notebook_path: NOTEBOOK_PATH.to_string(),
                },
                task_key: TASK_KEY.to_string(),
            }],
        }
    }
}

/// Jobs to merge for the given phase, in insertion order.
pub fn injected_jobs(phase: Phase) -> anyhow::Result<Map<String, Value>> {
    let jobs = match phase {
        Phase::PreInitialize => vec![("my_job", JobSpec::hello(PRE_INITIALIZE_CLUSTER))],
        // Initialize both rewrites my_job and generates a second job.
        Phase::Initialize => vec![
            ("my_job", JobSpec::hello(INITIALIZE_CLUSTER)),
            ("my_job_2", JobSpec::hello(INITIALIZE_CLUSTER)),
        ],
    };

    let mut out = Map::new();
    for (name, job) in jobs {
        out.insert(name.to_string(), serde_json::to_value(job)?);
    }
    Ok(out)
}
