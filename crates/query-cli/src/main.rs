/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::pin::Pin;
use std::sync::Arc;

use cfg::cli_options::{CliCommand, CliOptions};
use cfg::file_config::{ClientOverrides, get_config_from_file, resolve_client_config};
use clap::CommandFactory;
use query_shim::{CancellationToken, HttpServiceClient, Shim, TerminalConfirm};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::errors::QueryCliError;

mod async_write;
mod cfg;
mod cli_output;
mod errors;
mod invoke;
mod named_query;
mod notebook;
mod operation_table;
mod query_execution;
mod session;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = CliOptions::load();
    if config.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Log level is set from, in order of preference:
    // 1. `--debug N` on cmd line
    // 2. RUST_LOG environment variable
    // 3. Level::Info
    let mut env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
        .add_directive("rustls=warn".parse()?)
        .add_directive("hyper=info".parse()?)
        .add_directive("hyper_util=info".parse()?)
        .add_directive("reqwest=info".parse()?);
    if config.debug != 0 {
        env_filter = env_filter.add_directive(
            match config.debug {
                1 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
            .into(),
        );
    }
    tracing_subscriber::registry()
        .with(fmt::Layer::default().compact().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()?;

    let command = match config.commands {
        None => {
            return Ok(CliOptions::command().print_long_help()?);
        }
        Some(s) => s,
    };

    // The operation table is static; listing it must work even when the
    // client configuration is broken.
    if let CliCommand::Operations(args) = command {
        let mut output_file = get_output_file_or_stdout(config.output.as_deref()).await?;
        operation_table::cmds::show(args, &mut output_file, config.format).await?;
        return Ok(());
    }

    let file_config = get_config_from_file()?;
    let client_config = resolve_client_config(
        ClientOverrides {
            endpoint_url: config.endpoint_url,
            region: config.region,
            timeout_secs: config.timeout_secs,
        },
        file_config.as_ref(),
    );
    tracing::debug!(
        endpoint = %client_config.endpoint_url,
        region = %client_config.region,
        "Using service endpoint"
    );
    let client = HttpServiceClient::new(client_config).map_err(QueryCliError::from)?;
    let shim = Shim::new(Arc::new(client), Arc::new(TerminalConfirm));

    // Ctrl-C cancels whatever invocation is in flight.
    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling");
            ctrl_c_token.cancel();
        }
    });

    let ctx = RuntimeContext {
        shim: Arc::new(shim),
        cancel,
        config: RuntimeConfig {
            format: config.format,
        },
        output_file: get_output_file_or_stdout(config.output.as_deref()).await?,
    };

    match command {
        CliCommand::NamedQuery(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::Notebook(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::QueryExecution(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::Session(cmd) => cmd.dispatch(ctx).await?,
        CliCommand::Operations(_) => unreachable!("handled before client setup"),
    }

    Ok(())
}

pub async fn get_output_file_or_stdout(
    output_filename: Option<&str>,
) -> Result<Pin<Box<dyn tokio::io::AsyncWrite>>, QueryCliError> {
    if let Some(filename) = output_filename {
        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(filename)
            .await?;
        Ok(Box::pin(file))
    } else {
        Ok(Box::pin(tokio::io::stdout()))
    }
}
