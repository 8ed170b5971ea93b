// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("cluster {0:?} configuration not found")]
    UnknownCluster(String),

    #[error("could not build client for cluster {cluster:?}: {reason}")]
    ClientBuildError { cluster: String, reason: String },

    #[error("service account {namespace}/{name} references {count} secrets, expected exactly one")]
    ServiceAccountSecretCount {
        namespace: String,
        name: String,
        count: usize,
    },

    #[error("service account {namespace}/{name} secret reference has no name")]
    UnnamedSecretReference { namespace: String, name: String },

    #[error("secret {secret} is missing {field}")]
    MissingSecretField { secret: String, field: &'static str },

    #[error("secret {secret} token is not valid UTF-8")]
    InvalidToken { secret: String },

    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, MeshError>;
