//! GitHub Actions adapter
//!
//! Inputs come from `INPUT_*` variables and the delete-event payload.
//! Diagnostics are written as workflow commands so they show up as
//! annotations on the run.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use secrecy::SecretString;
use serde::Deserialize;

use crate::app::options::PurgeOptions;
use crate::errors::PurgeError;
use crate::purge::reporter::{success_message, Reporter};

/// Event the action must be triggered by
pub const DELETE_EVENT: &str = "delete";

/// Output name carrying the deleted uids
pub const DELETED_IDS_OUTPUT: &str = "deleted-ids";

/// Inputs resolved from the Actions environment
#[derive(Debug, Clone)]
pub struct ActionInputs {
    pub target_branch: String,
    pub token: SecretString,
    pub project_id: String,
}

impl ActionInputs {
    /// Resolve the inputs through `lookup`, usually `std::env::var(..).ok()`
    ///
    /// Fails with [`PurgeError::WrongTriggerEvent`] unless the workflow was
    /// triggered by a branch deletion.
    pub fn resolve<F>(lookup: F) -> Result<Self, PurgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let event_name = lookup("GITHUB_EVENT_NAME").unwrap_or_default();
        if event_name != DELETE_EVENT {
            return Err(PurgeError::WrongTriggerEvent {
                expected: DELETE_EVENT.to_string(),
                actual: event_name,
            });
        }

        let target_branch = match input(&lookup, "target-branch") {
            Some(branch) => branch,
            None => {
                let path = lookup("GITHUB_EVENT_PATH").ok_or_else(|| {
                    PurgeError::ConfigError(
                        "no target-branch input and GITHUB_EVENT_PATH is unset".to_string(),
                    )
                })?;
                deleted_branch(Path::new(&path))?
            }
        };

        let token = input(&lookup, "vercel-token")
            .ok_or_else(|| PurgeError::ConfigError("input vercel-token is required".to_string()))?;

        Ok(Self {
            target_branch,
            token: SecretString::from(token),
            project_id: input(&lookup, "vercel-project-id").unwrap_or_default(),
        })
    }

    /// Fill the resolved inputs into `base`
    pub fn into_options(self, base: PurgeOptions) -> PurgeOptions {
        PurgeOptions {
            target_branch: self.target_branch,
            token: self.token,
            project_id: self.project_id,
            ..base
        }
    }
}

/// Read an action input the way the runner exports it
fn input<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let upper = name.to_uppercase().replace(' ', "_");
    lookup(&format!("INPUT_{}", upper))
        .or_else(|| lookup(&format!("INPUT_{}", upper.replace('-', "_"))))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Deserialize)]
struct DeleteEventPayload {
    #[serde(rename = "ref")]
    git_ref: String,
    ref_type: String,
}

/// Branch name from a delete-event payload file
fn deleted_branch(path: &Path) -> Result<String, PurgeError> {
    let raw = fs::read_to_string(path)?;
    let payload: DeleteEventPayload = serde_json::from_str(&raw)?;
    if payload.ref_type != "branch" {
        return Err(PurgeError::WrongTriggerEvent {
            expected: "branch deletion".to_string(),
            actual: format!("{} deletion", payload.ref_type),
        });
    }
    Ok(payload.git_ref)
}

/// Escape a workflow command message
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Reporter emitting GitHub Actions workflow commands
pub struct ActionsReporter {
    out: Mutex<Box<dyn Write + Send>>,
    output_file: Option<PathBuf>,
}

impl ActionsReporter {
    /// Reporter writing to stdout and to `GITHUB_OUTPUT` when set
    pub fn from_env() -> Self {
        Self::new(
            Box::new(std::io::stdout()),
            std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
        )
    }

    pub fn new(out: Box<dyn Write + Send>, output_file: Option<PathBuf>) -> Self {
        Self {
            out: Mutex::new(out),
            output_file,
        }
    }

    fn emit(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), PurgeError> {
        let Some(path) = &self.output_file else {
            return Ok(());
        };
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}={}", name, value)?;
        Ok(())
    }
}

impl Reporter for ActionsReporter {
    fn info(&self, message: &str) {
        self.emit(message);
    }

    fn error(&self, message: &str) {
        self.emit(&format!("::error::{}", escape_data(message)));
    }

    fn success(&self, deleted_ids: &[String]) {
        self.emit(&success_message(deleted_ids));
        if let Err(e) = self.set_output(DELETED_IDS_OUTPUT, &deleted_ids.join(",")) {
            self.emit(&format!(
                "::warning::{}",
                escape_data(&format!("Unable to write action output: {}", e))
            ));
        }
    }

    fn fail(&self, err: &PurgeError) {
        self.emit(&format!("::error::{}", escape_data(&err.to_string())));
    }
}
