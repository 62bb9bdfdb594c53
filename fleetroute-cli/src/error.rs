//! Error types emitted by the fleetroute CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use fleetroute_core::RouteError;
use thiserror::Error;

/// Errors emitted by the fleetroute CLI.
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
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A required positional argument is missing after configuration merging.
    #[error("missing <{field}> argument (pass it positionally or set {env})")]
    MissingPositional {
        /// Value name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option the path came from.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option the path came from.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option the path came from.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the plan request file failed.
    #[error("failed to open plan request at {path:?}: {source}")]
    OpenPlanRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Plan request JSON could not be decoded.
    #[error("failed to parse plan request JSON at {path:?}: {source}")]
    ParsePlanRequest {
        /// Request file path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// A coordinate option was not of the form `LAT,LON`.
    #[error("{field} value {value:?} is not a LAT,LON coordinate")]
    ParseCoordinate {
        /// Option the value came from.
        field: &'static str,
        /// Raw value as supplied.
        value: String,
    },
    /// Speed or radius overrides are unusable.
    #[error("invalid planner configuration: {0}")]
    InvalidPlannerConfig(#[source] RouteError),
    /// The planner rejected the request contents.
    #[error("failed to plan request in {path:?}: {source}")]
    Plan {
        /// Request file path.
        path: Utf8PathBuf,
        /// Planner failure.
        #[source]
        source: RouteError,
    },
    /// The distance could not be computed.
    #[error("failed to compute distance: {0}")]
    Distance(#[source] RouteError),
    /// Serializing the plan failed.
    #[error("failed to serialize plan: {0}")]
    SerializePlan(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
