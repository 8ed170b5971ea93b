// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-cluster client construction from the local kubeconfig

use crate::error::{MeshError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::future::Future;
use tracing::debug;

/// Source of authenticated per-cluster clients. This is the seam the
/// exchanger goes through, so tests can substitute canned API responses.
pub trait ClusterClients {
    /// Build an administrative client for the named cluster context
    fn client_for(&self, cluster: &str) -> impl Future<Output = Result<Client>>;
}

/// Builds one client per context out of the locally-loaded kubeconfig
pub struct KubeconfigClients {
    kubeconfig: Kubeconfig,
}

impl KubeconfigClients {
    pub fn new(kubeconfig: Kubeconfig) -> Self {
        Self { kubeconfig }
    }
}

impl ClusterClients for KubeconfigClients {
    async fn client_for(&self, cluster: &str) -> Result<Client> {
        client_for_context(&self.kubeconfig, cluster).await
    }
}

/// Build an authenticated client for a named kubeconfig context
pub async fn client_for_context(kubeconfig: &Kubeconfig, context: &str) -> Result<Client> {
    debug!("building client for context {}", context);

    let options = KubeConfigOptions {
        context: Some(context.to_string()),
        ..Default::default()
    };

    let config = Config::from_custom_kubeconfig(kubeconfig.clone(), &options)
        .await
        .map_err(|e| MeshError::ClientBuildError {
            cluster: context.to_string(),
            reason: e.to_string(),
        })?;

    Client::try_from(config).map_err(|e| MeshError::ClientBuildError {
        cluster: context.to_string(),
        reason: e.to_string(),
    })
}
