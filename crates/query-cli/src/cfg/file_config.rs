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

use std::path::Path;
use std::time::Duration;
use std::{env, fs, io};

use query_shim::ClientConfig;
use query_shim::client::options::DEFAULT_REGION;
use serde::Deserialize;

use crate::errors::{QueryCliError, QueryCliResult};

pub const CONFIG_FILE: &str = ".config/query_cli.json";

#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub endpoint_url: Option<String>,
    pub region: Option<String>,
    pub target_prefix: Option<String>,
}

// ClientOverrides are the client settings that came from the command
// line or its env vars.
#[derive(Debug, Default)]
pub struct ClientOverrides {
    pub endpoint_url: Option<String>,
    pub region: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub fn get_config_from_file() -> QueryCliResult<Option<FileConfig>> {
    match env::var("HOME") {
        Ok(home) => load_config_file(&Path::new(&home).join(CONFIG_FILE)),
        Err(_) => Ok(None),
    }
}

/// A missing file is not an error. A file that exists but cannot be
/// read or parsed is.
pub fn load_config_file(path: &Path) -> QueryCliResult<Option<FileConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let config_error = |reason: String| QueryCliError::ConfigFile {
        path: path.display().to_string(),
        reason,
    };

    let file = fs::File::open(path).map_err(|e| config_error(e.to_string()))?;
    let reader = io::BufReader::new(file);
    let file_config: FileConfig =
        serde_json::from_reader(reader).map_err(|e| config_error(e.to_string()))?;

    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(Some(file_config))
}

pub fn get_region(region: Option<String>, file_config: Option<&FileConfig>) -> String {
    // First from command line, second env var.
    if let Some(region) = region {
        return region;
    }

    // Third config file
    if let Some(file_config) = file_config
        && let Some(region) = file_config.region.as_ref()
    {
        return region.clone();
    }

    DEFAULT_REGION.to_string()
}

pub fn get_endpoint_url(
    endpoint_url: Option<String>,
    region: &str,
    file_config: Option<&FileConfig>,
) -> String {
    if let Some(endpoint_url) = endpoint_url {
        return endpoint_url;
    }

    if let Some(file_config) = file_config
        && let Some(endpoint_url) = file_config.endpoint_url.as_ref()
    {
        return endpoint_url.clone();
    }

    // Otherwise the public endpoint of the region.
    ClientConfig::default_endpoint(region)
}

pub fn resolve_client_config(
    overrides: ClientOverrides,
    file_config: Option<&FileConfig>,
) -> ClientConfig {
    let region = get_region(overrides.region, file_config);
    let endpoint_url = get_endpoint_url(overrides.endpoint_url, &region, file_config);

    let mut config = ClientConfig::new(endpoint_url).with_region(region);
    if let Some(prefix) = file_config.and_then(|f| f.target_prefix.as_ref()) {
        config = config.with_target_prefix(prefix.clone());
    }
    if let Some(secs) = overrides.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}
