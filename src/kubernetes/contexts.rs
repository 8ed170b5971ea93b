// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Local kubeconfig loading and context/cluster lookups

use crate::error::{MeshError, Result};
use kube::config::Kubeconfig;
use std::path::Path;
use tracing::debug;

/// One configured context and what it points at
#[derive(Debug, Clone)]
pub struct ContextInfo {
    pub name: String,
    pub cluster: String,
    pub user: String,
    pub namespace: String,
}

/// Load the local kubeconfig.
///
/// An explicit path is used when it names a non-empty file; otherwise the
/// default chain applies (KUBECONFIG environment variable, then
/// `~/.kube/config`). A context override replaces the file's current
/// context.
pub fn load_kubeconfig(path: Option<&Path>, context: Option<&str>) -> Result<Kubeconfig> {
    let mut kubeconfig = read_kubeconfig(path)?;

    if let Some(context) = context {
        kubeconfig.current_context = Some(context.to_string());
    }

    Ok(kubeconfig)
}

fn read_kubeconfig(path: Option<&Path>) -> Result<Kubeconfig> {
    if let Some(path) = path {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > 0 => {
                return Kubeconfig::read_from(path).map_err(|e| {
                    MeshError::KubeconfigError(format!("{}: {}", path.display(), e))
                });
            }
            _ => {
                // Missing or empty explicit path falls back to the default chain
                debug!(
                    "kubeconfig {} missing or empty, using default resolution",
                    path.display()
                );
            }
        }
    }

    Kubeconfig::read().map_err(|e| MeshError::KubeconfigError(e.to_string()))
}

/// Enumerate the configured contexts
pub fn list_contexts(kubeconfig: &Kubeconfig) -> Vec<ContextInfo> {
    kubeconfig
        .contexts
        .iter()
        .map(|named| {
            let context = named.context.as_ref();
            ContextInfo {
                name: named.name.clone(),
                cluster: context.map(|c| c.cluster.clone()).unwrap_or_default(),
                user: context.and_then(|c| c.user.clone()).unwrap_or_default(),
                namespace: context
                    .and_then(|c| c.namespace.clone())
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// Check that every cluster identifier names a configured context
pub fn ensure_contexts_exist(kubeconfig: &Kubeconfig, clusters: &[String]) -> Result<()> {
    for cluster in clusters {
        if !kubeconfig.contexts.iter().any(|c| &c.name == cluster) {
            return Err(MeshError::UnknownCluster(cluster.clone()));
        }
    }
    Ok(())
}

/// Resolve the cluster name a context points at
pub fn cluster_name(kubeconfig: &Kubeconfig, context: &str) -> Result<String> {
    kubeconfig
        .contexts
        .iter()
        .find(|c| c.name == context)
        .and_then(|c| c.context.as_ref())
        .map(|c| c.cluster.clone())
        .ok_or_else(|| MeshError::UnknownCluster(context.to_string()))
}

/// Resolve a named cluster's API server endpoint
pub fn cluster_server(kubeconfig: &Kubeconfig, cluster: &str) -> Result<String> {
    kubeconfig
        .clusters
        .iter()
        .find(|c| c.name == cluster)
        .and_then(|c| c.cluster.as_ref())
        .and_then(|c| c.server.clone())
        .ok_or_else(|| {
            MeshError::KubeconfigError(format!("no server endpoint for cluster {cluster:?}"))
        })
}
