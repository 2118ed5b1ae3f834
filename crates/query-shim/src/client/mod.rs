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

// src/client/mod.rs
// The seam between the shim and whatever actually talks to the service.

pub mod http;
pub mod options;

use async_trait::async_trait;
pub use http::HttpServiceClient;
pub use options::ClientConfig;
use thiserror::Error;

use crate::params::{RequestValue, ResponseValue};

// ClientError is what a transport reports back. The shim only
// distinguishes "could not reach the endpoint" from everything else.
#[derive(Error, Debug)]
pub enum ClientError {
    // EndpointResolution occurs when the endpoint could not be
    // resolved, connected to, or was malformed.
    #[error("endpoint {endpoint} unreachable: {reason}")]
    EndpointResolution { endpoint: String, reason: String },
    // Service occurs for any failure the service (or the transport
    // after connecting) reported.
    #[error("{}", service_message(.code, .message, .status))]
    Service {
        code: Option<String>,
        message: String,
        status: Option<u16>,
    },
}

fn service_message(code: &Option<String>, message: &str, status: &Option<u16>) -> String {
    let mut out = String::new();
    if let Some(code) = code {
        out.push_str(code);
        out.push_str(": ");
    }
    out.push_str(message);
    if let Some(status) = status {
        out.push_str(&format!(" (HTTP {status})"));
    }
    out
}

impl ClientError {
    pub fn endpoint_resolution(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EndpointResolution {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn service(code: Option<&str>, message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Service {
            code: code.map(str::to_string),
            message: message.into(),
            status,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => code.as_deref(),
            Self::EndpointResolution { .. } => None,
        }
    }
}

/// A handle to the remote service.
///
/// The shim only ever reads through this handle, so one client can be
/// created up front and shared by every invocation in the process.
#[async_trait]
pub trait ServiceClient: Send + Sync + std::fmt::Debug {
    /// Issue one operation. Implementations must not retry on the shim's
    /// behalf, and must be safe to drop mid-flight (that is how
    /// cancellation reaches them).
    async fn call(
        &self,
        operation: &str,
        request: RequestValue,
    ) -> Result<ResponseValue, ClientError>;
}
