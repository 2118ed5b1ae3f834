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

// src/client/http.rs
// JSON-over-HTTP service client. One POST per operation, the operation
// named by the X-Amz-Target header.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{StatusCode, Url};
use serde_json::Value;

use super::{ClientConfig, ClientError, ServiceClient};
use crate::params::{RequestValue, ResponseValue};

pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
pub const TARGET_HEADER: &str = "x-amz-target";

#[derive(Debug, Clone)]
pub struct HttpServiceClient {
    http: reqwest::Client,
    endpoint: Url,
    config: ClientConfig,
}

impl HttpServiceClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let endpoint = Url::parse(&config.endpoint_url).map_err(|e| {
            ClientError::endpoint_resolution(&config.endpoint_url, format!("invalid URL: {e}"))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::service(None, e.to_string(), None))?;

        Ok(Self {
            http,
            endpoint,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn map_send_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_connect() || err.is_builder() {
            ClientError::endpoint_resolution(self.endpoint.as_str(), error_chain(&err))
        } else {
            ClientError::service(None, error_chain(&err), None)
        }
    }
}

#[async_trait]
impl ServiceClient for HttpServiceClient {
    async fn call(
        &self,
        operation: &str,
        request: RequestValue,
    ) -> Result<ResponseValue, ClientError> {
        let amz_target = self.config.target_for(operation);
        tracing::debug!(
            endpoint = %self.endpoint,
            %amz_target,
            region = %self.config.region,
            "Sending request"
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .header(TARGET_HEADER, amz_target)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::service(None, error_chain(&e), Some(status.as_u16())))?;

        tracing::debug!(%status, bytes = body.len(), "Received response");

        if !status.is_success() {
            return Err(service_error(status, &body));
        }
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Default::default()));
        }
        serde_json::from_slice(&body).map_err(|e| {
            ClientError::service(
                None,
                format!("undecodable response body: {e}"),
                Some(status.as_u16()),
            )
        })
    }
}

// service_error builds a Service error out of an error response body of
// the form {"__type": "ns#Code", "Message": "..."}. Bodies that do not
// look like that still produce an error, just a less specific one.
fn service_error(status: StatusCode, body: &[u8]) -> ClientError {
    let parsed: Option<Value> = serde_json::from_slice(body).ok();

    let code = parsed
        .as_ref()
        .and_then(|v| v.get("__type"))
        .and_then(Value::as_str)
        .map(|t| t.rsplit('#').next().unwrap_or(t));

    let message = parsed
        .as_ref()
        .and_then(|v| v.get("Message").or_else(|| v.get("message")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                text
            }
        });

    ClientError::service(code, message, Some(status.as_u16()))
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
