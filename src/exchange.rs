// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pairwise credential exchange between configured clusters.

use k8s_openapi::api::core::v1::{Secret, ServiceAccount};
use k8s_openapi::ByteString;
use kube::api::{ObjectMeta, Patch, PatchParams, PostParams};
use kube::config::Kubeconfig;
use kube::{Api, Client};
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::Settings;
use crate::constants::secrets;
use crate::descriptor::RemoteAccessDescriptor;
use crate::error::{MeshError, Result};
use crate::kubernetes::{cluster_name, cluster_server, ensure_contexts_exist, ClusterClients};

/// CA certificate and bearer token bound to a control-plane service account
#[derive(Debug, Clone)]
pub struct ServiceAccountCredential {
    pub ca_data: Vec<u8>,
    pub token: String,
}

/// Copy control-plane service-account credentials between every ordered
/// pair of configured clusters.
///
/// For each pair (source, destination) the source's credential is wrapped
/// in a labeled secret and written to the destination's control-plane
/// namespace. The first failure aborts the run; completed pairs are not
/// rolled back.
pub async fn join_clusters(
    clients: &impl ClusterClients,
    kubeconfig: &Kubeconfig,
    settings: &Settings,
) -> Result<()> {
    // Every identifier must name a configured context before any API call
    ensure_contexts_exist(kubeconfig, &settings.clusters)?;

    for dst in &settings.clusters {
        let dst_client = clients.client_for(dst).await?;

        for src in &settings.clusters {
            // skip self
            if src == dst {
                continue;
            }
            info!("joining {} to {}", src, dst);

            let src_client = clients.client_for(src).await?;
            let credential = fetch_service_account_credential(
                &src_client,
                &settings.namespace,
                &settings.service_account,
            )
            .await?;

            // The destination addresses the copied credential by its own
            // cluster name and endpoint, resolved from the local
            // kubeconfig rather than queried from the cluster.
            let cluster = cluster_name(kubeconfig, dst)?;
            let server = cluster_server(kubeconfig, &cluster)?;

            let descriptor =
                RemoteAccessDescriptor::new(&cluster, &server, &credential.ca_data, &credential.token);
            let secret = cross_cluster_secret(src, &settings.namespace, &descriptor.to_yaml()?);

            upsert_secret(&dst_client, &settings.namespace, &secret).await?;
        }
    }

    Ok(())
}

/// Read the credential bound to a service account. The account must
/// reference exactly one secret, and that secret must carry both a CA
/// certificate and a token.
pub async fn fetch_service_account_credential(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<ServiceAccountCredential> {
    let accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);
    let account = accounts.get(name).await?;

    let references = account.secrets.unwrap_or_default();
    if references.len() != 1 {
        return Err(MeshError::ServiceAccountSecretCount {
            namespace: namespace.to_string(),
            name: name.to_string(),
            count: references.len(),
        });
    }
    let secret_name =
        references[0]
            .name
            .clone()
            .ok_or_else(|| MeshError::UnnamedSecretReference {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })?;

    debug!("reading service account secret {}/{}", namespace, secret_name);
    let secrets_api: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let secret = secrets_api.get(&secret_name).await?;

    let data = secret.data.unwrap_or_default();
    let ca_data = data
        .get(secrets::CA_CERT_KEY)
        .ok_or_else(|| MeshError::MissingSecretField {
            secret: secret_name.clone(),
            field: secrets::CA_CERT_KEY,
        })?
        .0
        .clone();
    let token = data
        .get(secrets::TOKEN_KEY)
        .ok_or_else(|| MeshError::MissingSecretField {
            secret: secret_name.clone(),
            field: secrets::TOKEN_KEY,
        })?;
    let token = String::from_utf8(token.0.clone()).map_err(|_| MeshError::InvalidToken {
        secret: secret_name.clone(),
    })?;

    Ok(ServiceAccountCredential { ca_data, token })
}

/// Build the labeled secret carrying one source cluster's credential
fn cross_cluster_secret(source: &str, namespace: &str, descriptor_yaml: &str) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(format!("{}-{}", secrets::CROSS_CLUSTER_PREFIX, source)),
            namespace: Some(namespace.to_string()),
            labels: Some(BTreeMap::from([(
                secrets::MULTI_CLUSTER_LABEL.to_string(),
                secrets::MULTI_CLUSTER_LABEL_VALUE.to_string(),
            )])),
            ..Default::default()
        },
        data: Some(BTreeMap::from([(
            source.to_string(),
            ByteString(descriptor_yaml.as_bytes().to_vec()),
        )])),
        ..Default::default()
    }
}

/// Create the secret on the destination, falling back to a strategic
/// merge-patch when an object of that name already exists
async fn upsert_secret(client: &Client, namespace: &str, secret: &Secret) -> Result<()> {
    let api: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let name = secret.metadata.name.as_deref().unwrap_or_default();

    match api.create(&PostParams::default(), secret).await {
        Ok(_) => {
            info!("created secret {}/{}", namespace, name);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 409 => {
            info!("secret {}/{} exists, patching", namespace, name);
            api.patch(name, &PatchParams::default(), &Patch::Strategic(secret))
                .await?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
