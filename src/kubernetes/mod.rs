// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client construction and local kubeconfig utilities.

pub mod client;
pub mod contexts;

pub use client::{client_for_context, ClusterClients, KubeconfigClients};
pub use contexts::{
    cluster_name, cluster_server, ensure_contexts_exist, list_contexts, load_kubeconfig,
    ContextInfo,
};
