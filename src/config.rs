// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

use crate::constants::mesh;

/// Run configuration, built once from parsed command-line arguments and
/// passed by parameter from there on
#[derive(Debug, Clone)]
pub struct Settings {
    /// Explicit kubeconfig file; default resolution applies when unset
    pub kubeconfig: Option<PathBuf>,
    /// Context override for the loaded kubeconfig
    pub context: Option<String>,
    /// Context names of the clusters to join
    pub clusters: Vec<String>,
    /// Namespace holding the control-plane service account and secrets
    pub namespace: String,
    /// Service account whose credential is copied between clusters
    pub service_account: String,
}

impl Settings {
    pub fn new(
        kubeconfig: Option<PathBuf>,
        context: Option<String>,
        clusters: Vec<String>,
        namespace: Option<String>,
    ) -> Self {
        Settings {
            kubeconfig,
            context,
            clusters,
            namespace: namespace.unwrap_or_else(|| mesh::CONTROL_PLANE_NAMESPACE.to_string()),
            service_account: mesh::PILOT_SERVICE_ACCOUNT.to_string(),
        }
    }
}
