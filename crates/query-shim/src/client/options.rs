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

// src/client/options.rs
// Configuration for the HTTP service client.

use std::time::Duration;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TARGET_PREFIX: &str = "AmazonAthena";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

// ClientConfig carries everything HttpServiceClient needs. Only
// endpoint_url is mandatory, the rest fall back to the consts above.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    // endpoint_url is the base URL every operation is POSTed to.
    pub endpoint_url: String,
    // region is informational for the transport, and is what the
    // default endpoint is derived from.
    pub region: String,
    // target_prefix is joined with the operation name to form the
    // X-Amz-Target header, e.g. AmazonAthena.GetNamedQuery.
    pub target_prefix: String,
    pub user_agent: String,
    // timeout is the transport's own deadline. The shim never
    // enforces one itself.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            region: DEFAULT_REGION.to_string(),
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
            user_agent: format!("query-shim/{}", env!("CARGO_PKG_VERSION")),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// The public endpoint for a region.
    pub fn default_endpoint(region: &str) -> String {
        format!("https://athena.{region}.amazonaws.com")
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = prefix.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn target_for(&self, operation: &str) -> String {
        format!("{}.{operation}", self.target_prefix)
    }
}
