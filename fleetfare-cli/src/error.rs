//! Error types emitted by the fleetfare CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use fleetfare_core::PlanError;
use fleetfare_data::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the fleetfare CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the journey file failed.
    #[error("failed to open journey at {path:?}: {source}")]
    OpenJourney {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Journey JSON could not be decoded.
    #[error("failed to parse journey JSON at {path:?}: {source}")]
    ParseJourney {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Constructing the fleet source failed.
    #[error("failed to build fleet source for {base_url:?}: {source}")]
    BuildFleetSource {
        base_url: String,
        #[source]
        source: ProviderBuildError,
    },
    /// The planner could not produce a plan.
    #[error("planning failed: {0}")]
    Plan(#[source] PlanError),
    /// Serialising the journey plan failed.
    #[error("failed to serialise journey plan: {0}")]
    SerialisePlan(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
