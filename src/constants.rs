// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Names fixed by the Istio control-plane installation
pub mod mesh {
    /// Namespace where the control plane and cross-cluster secrets live
    pub const CONTROL_PLANE_NAMESPACE: &str = "istio-system";
    /// Service account whose bound credential is exchanged between clusters
    pub const PILOT_SERVICE_ACCOUNT: &str = "istio-pilot-service-account";
}

/// Cross-cluster secret naming and labeling
pub mod secrets {
    /// Name prefix for secrets carrying another cluster's credential
    pub const CROSS_CLUSTER_PREFIX: &str = "istio-mc";
    /// Label key marking a secret as a mesh-join credential
    pub const MULTI_CLUSTER_LABEL: &str = "istio/multiCluster";
    /// Value of the mesh-join label
    pub const MULTI_CLUSTER_LABEL_VALUE: &str = "true";
    /// CA certificate key in a service-account token secret
    pub const CA_CERT_KEY: &str = "ca.crt";
    /// Bearer token key in a service-account token secret
    pub const TOKEN_KEY: &str = "token";
}
