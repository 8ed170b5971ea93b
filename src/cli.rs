// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line surface: context listing and the mesh join command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use comfy_table::{presets, Table};

use crate::config::Settings;
use crate::error::{MeshError, Result};
use crate::exchange::join_clusters;
use crate::kubernetes::{list_contexts, load_kubeconfig, KubeconfigClients};

#[derive(Debug, Parser)]
#[command(name = "meshjoin", version, about = "Setup a multi-cluster mesh")]
pub struct Cli {
    /// kubeconfig file
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// current context
    #[arg(long, global = true)]
    pub context: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List available clusters
    List,
    /// Join clusters together in a mesh
    Join(JoinOpt),
}

#[derive(Debug, Args)]
pub struct JoinOpt {
    /// Cluster context to join; give the flag once per cluster
    #[arg(long = "clusters", value_name = "CONTEXT")]
    pub clusters: Vec<String>,

    /// Control-plane namespace
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::List => {
                let settings = Settings::new(self.kubeconfig, self.context, Vec::new(), None);
                run_list(&settings)
            }
            Command::Join(opt) => {
                let settings =
                    Settings::new(self.kubeconfig, self.context, opt.clusters, opt.namespace);
                run_join(&settings).await
            }
        }
    }
}

fn run_list(settings: &Settings) -> Result<()> {
    let kubeconfig = load_kubeconfig(settings.kubeconfig.as_deref(), settings.context.as_deref())?;

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_header(vec!["NAME", "CLUSTER", "AUTHINFO", "NAMESPACE"]);
    for context in list_contexts(&kubeconfig) {
        table.add_row(vec![context.name, context.cluster, context.user, context.namespace]);
    }
    println!("{table}");

    Ok(())
}

async fn run_join(settings: &Settings) -> Result<()> {
    if settings.clusters.len() != 2 {
        return Err(MeshError::ConfigError(format!(
            "only two clusters supported - {} clusters specified",
            settings.clusters.len()
        )));
    }

    let kubeconfig = load_kubeconfig(settings.kubeconfig.as_deref(), settings.context.as_deref())?;
    let clients = KubeconfigClients::new(kubeconfig.clone());

    join_clusters(&clients, &kubeconfig, settings).await
}
