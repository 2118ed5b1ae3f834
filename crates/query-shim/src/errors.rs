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
// Error types surfaced by a single invocation of the shim.

use thiserror::Error;

use crate::client::ClientError;

// ShimError covers every way an invocation can end without
// producing an Outcome. Declined confirmations are NOT errors,
// they come back as Outcome::Declined.
#[derive(Error, Debug)]
pub enum ShimError {
    // MissingRequiredParameter is raised before any network I/O.
    // explicitly_null tells apart "never supplied" from "supplied
    // as null/empty", which also gets an advisory warning.
    #[error("{}", missing_parameter_message(.operation, .parameter, .explicitly_null))]
    MissingRequiredParameter {
        operation: String,
        parameter: String,
        explicitly_null: bool,
    },
    // InvalidSelector occurs when an output selector names a
    // response field or parameter the operation does not have.
    #[error("Invalid output selector '{selector}' for {operation}: {reason}")]
    InvalidSelector {
        operation: String,
        selector: String,
        reason: String,
    },
    // ParameterKindMismatch occurs when a bound value does not fit
    // the parameter's declared kind (e.g. a list for a string).
    #[error("Parameter {parameter} of {operation} expects {expected}")]
    ParameterKindMismatch {
        operation: String,
        parameter: String,
        expected: &'static str,
    },
    // EndpointResolution occurs when the transport could not resolve
    // or reach the remote endpoint. Fixable by reconfiguration.
    #[error(
        "Unable to reach the service endpoint {endpoint}: {reason}. Check --endpoint-url, --region or the endpoint_url setting in the config file."
    )]
    EndpointResolution { endpoint: String, reason: String },
    // Service is any other failure surfaced by the remote call,
    // passed through as-is.
    #[error("{operation} failed: {source}")]
    Service {
        operation: String,
        #[source]
        source: ClientError,
    },
    // Cancelled occurs when the invocation's cancellation token
    // fired before the remote call resolved.
    #[error("{operation} was cancelled before it completed")]
    Cancelled { operation: String },
    // ConfirmationFailed occurs when the confirmation prompt itself
    // could not be shown or read.
    #[error("Unable to read confirmation: {0}")]
    ConfirmationFailed(#[from] std::io::Error),
    // RuntimeError occurs when the blocking bridge cannot start
    // its runtime.
    #[error("Unable to start runtime for blocking invocation: {0}")]
    RuntimeError(String),
}

fn missing_parameter_message(operation: &str, parameter: &str, explicitly_null: &bool) -> String {
    if *explicitly_null {
        format!("Required parameter {parameter} of {operation} was passed an empty value")
    } else {
        format!("Missing required parameter {parameter} for {operation}")
    }
}

impl ShimError {
    pub fn missing_parameter(
        operation: impl Into<String>,
        parameter: impl Into<String>,
        explicitly_null: bool,
    ) -> Self {
        Self::MissingRequiredParameter {
            operation: operation.into(),
            parameter: parameter.into(),
            explicitly_null,
        }
    }

    pub fn invalid_selector(
        operation: impl Into<String>,
        selector: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidSelector {
            operation: operation.into(),
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    // Normalize a client failure into one of the two transport kinds.
    pub fn from_client(operation: impl Into<String>, err: ClientError) -> Self {
        match err {
            ClientError::EndpointResolution { endpoint, reason } => {
                Self::EndpointResolution { endpoint, reason }
            }
            other => Self::Service {
                operation: operation.into(),
                source: other,
            },
        }
    }

    // is_validation is true for failures raised before any network
    // contact was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredParameter { .. }
                | Self::InvalidSelector { .. }
                | Self::ParameterKindMismatch { .. }
        )
    }
}
