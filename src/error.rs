//! Error types for Eco Inspector.

use crate::model::NodeId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a whole-model analysis request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The walk produced no node ids, so there is nothing to analyse.
    #[error("the model contains no elements to analyse")]
    EmptyModel,
}

/// Failure of a single property fetch.
///
/// Never escalated out of an analysis: the node is simply excluded from
/// every aggregate it would have contributed to.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The property service knows nothing about this node.
    #[error("no properties available for node {id}")]
    NotFound { id: NodeId },

    /// The property service failed while answering.
    #[error("property service failed for node {id}: {message}")]
    Service { id: NodeId, message: String },
}

/// Errors that can occur when loading a scene snapshot.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the snapshot file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid snapshot JSON.
    #[error("invalid snapshot JSON: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },

    /// The JSON parsed but describes an inconsistent scene graph.
    #[error("invalid snapshot: {message}")]
    InvalidSnapshot { message: String },
}

/// Errors raised while turning assistant output into typed commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command name is not part of the supported command set.
    #[error("unknown command: {name}")]
    Unknown { name: String },

    /// The command exists but its parameters do not match its shape.
    #[error("invalid parameters for '{name}': {source}")]
    InvalidParams {
        name: String,
        source: serde_json::Error,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
