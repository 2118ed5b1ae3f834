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

// src/errors.rs
// Error type for everything the CLI does around an invocation.

use query_shim::{ClientError, ShimError};

#[derive(thiserror::Error, Debug)]
pub enum QueryCliError {
    #[error(transparent)]
    Invocation(#[from] ShimError),

    #[error("Unable to set up the service client: {0}")]
    ClientSetupFailed(#[from] ClientError),

    #[error("Unable to read config file {path}: {reason}")]
    ConfigFile { path: String, reason: String },

    #[error("Error while handling json: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Error while handling yaml: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("I/O error. Does the file exist? {0}")]
    IOError(#[from] std::io::Error),

    #[error("Generic Error: {0}")]
    GenericError(String),
}

pub type QueryCliResult<T> = Result<T, QueryCliError>;
