// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Synthesized minimal kubeconfig granting access to one cluster

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

use crate::error::{MeshError, Result};

/// Minimal kubeconfig document embedded in a cross-cluster secret: one
/// cluster entry, one bearer-token user, and one context tying them
/// together, all keyed by the cluster name.
#[derive(Debug, Serialize)]
pub struct RemoteAccessDescriptor {
    #[serde(rename = "apiVersion")]
    api_version: String,
    kind: String,
    clusters: Vec<NamedCluster>,
    contexts: Vec<NamedContext>,
    #[serde(rename = "current-context")]
    current_context: String,
    preferences: Preferences,
    users: Vec<NamedUser>,
}

#[derive(Debug, Serialize)]
struct NamedCluster {
    name: String,
    cluster: ClusterEndpoint,
}

#[derive(Debug, Serialize)]
struct ClusterEndpoint {
    #[serde(rename = "certificate-authority-data")]
    certificate_authority_data: String,
    server: String,
}

#[derive(Debug, Serialize)]
struct NamedContext {
    name: String,
    context: ContextBinding,
}

#[derive(Debug, Serialize)]
struct ContextBinding {
    cluster: String,
    user: String,
}

#[derive(Debug, Serialize)]
struct NamedUser {
    name: String,
    user: UserToken,
}

#[derive(Debug, Serialize)]
struct UserToken {
    token: String,
}

#[derive(Debug, Serialize)]
struct Preferences {}

impl RemoteAccessDescriptor {
    /// Build the descriptor from a cluster's endpoint and the credential
    /// extracted from its control-plane service account. The CA
    /// certificate arrives as raw bytes and is base64-encoded here.
    pub fn new(cluster_name: &str, server: &str, ca_data: &[u8], token: &str) -> Self {
        RemoteAccessDescriptor {
            api_version: "v1".to_string(),
            kind: "Config".to_string(),
            clusters: vec![NamedCluster {
                name: cluster_name.to_string(),
                cluster: ClusterEndpoint {
                    certificate_authority_data: STANDARD.encode(ca_data),
                    server: server.to_string(),
                },
            }],
            contexts: vec![NamedContext {
                name: cluster_name.to_string(),
                context: ContextBinding {
                    cluster: cluster_name.to_string(),
                    user: cluster_name.to_string(),
                },
            }],
            current_context: cluster_name.to_string(),
            preferences: Preferences {},
            users: vec![NamedUser {
                name: cluster_name.to_string(),
                user: UserToken {
                    token: token.to_string(),
                },
            }],
        }
    }

    /// Serialize to the YAML form carried in the cross-cluster secret
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            MeshError::KubeconfigError(format!("failed to serialize access kubeconfig: {}", e))
        })
    }
}
