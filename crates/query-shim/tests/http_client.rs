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
// tests/http_client.rs
// HttpServiceClient against a mock HTTP server, and end to end through
// the shim.

use std::sync::Arc;
use std::time::Duration;

use mockito::Matcher;
use query_shim::operations;
use query_shim::{
    BoundParameters, CancellationToken, ClientConfig, ClientError, ConfirmationRequest,
    HttpServiceClient, InvocationOptions, Outcome, OutputSelector, Selected, ServiceClient, Shim,
    ShimError,
};
use serde_json::json;

fn client_for(url: &str) -> HttpServiceClient {
    HttpServiceClient::new(ClientConfig::new(url).with_timeout(Duration::from_secs(5)))
        .expect("valid client config")
}

fn request(value: serde_json::Value) -> query_shim::RequestValue {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn test_posts_target_header_and_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-amz-target", "AmazonAthena.GetNamedQuery")
        .match_header("content-type", "application/x-amz-json-1.1")
        .match_body(Matcher::Json(json!({"NamedQueryId": "q-123"})))
        .with_status(200)
        .with_header("content-type", "application/x-amz-json-1.1")
        .with_body(r#"{"NamedQuery":{"NamedQueryId":"q-123","Name":"daily"}}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let response = client
        .call("GetNamedQuery", request(json!({"NamedQueryId": "q-123"})))
        .await
        .unwrap();

    assert_eq!(response["NamedQuery"]["Name"], "daily");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_custom_target_prefix() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-amz-target", "QueryService.TerminateSession")
        .with_status(200)
        .with_body(r#"{"State":"TERMINATING"}"#)
        .create_async()
        .await;

    let client = HttpServiceClient::new(
        ClientConfig::new(server.url()).with_target_prefix("QueryService"),
    )
    .unwrap();
    let response = client
        .call("TerminateSession", request(json!({"SessionId": "s-1"})))
        .await
        .unwrap();

    assert_eq!(response, json!({"State": "TERMINATING"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let response = client_for(&server.url())
        .call("DeleteNamedQuery", request(json!({"NamedQueryId": "q-1"})))
        .await
        .unwrap();

    assert_eq!(response, json!({}));
}

#[tokio::test]
async fn test_error_body_maps_to_service_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(400)
        .with_body(
            r#"{"__type":"com.amazonaws.athena#InvalidRequestException","Message":"NamedQueryId q-404 not found"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let err = client_for(&server.url())
        .call("GetNamedQuery", request(json!({"NamedQueryId": "q-404"})))
        .await
        .unwrap_err();

    match err {
        ClientError::Service {
            code,
            message,
            status,
        } => {
            assert_eq!(code.as_deref(), Some("InvalidRequestException"));
            assert_eq!(message, "NamedQueryId q-404 not found");
            assert_eq!(status, Some(400));
        }
        other => panic!("expected Service, got {other:?}"),
    }
    // Exactly one request: no retries.
    mock.assert_async().await;
}

#[tokio::test]
async fn test_undecodable_success_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body("<html>proxy page</html>")
        .create_async()
        .await;

    let err = client_for(&server.url())
        .call("GetNamedQuery", request(json!({"NamedQueryId": "q-1"})))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Service { .. }));
    assert!(err.to_string().contains("undecodable"));
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    // Nothing listens on port 1.
    let err = client_for("http://127.0.0.1:1")
        .call("GetNamedQuery", request(json!({"NamedQueryId": "q-1"})))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::EndpointResolution { .. }));
}

#[tokio::test]
async fn test_shim_end_to_end_over_http() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-amz-target", "AmazonAthena.TerminateSession")
        .match_body(Matcher::Json(json!({"SessionId": "s-1"})))
        .with_status(200)
        .with_body(r#"{"State":"TERMINATED"}"#)
        .create_async()
        .await;

    let shim = Shim::new(
        Arc::new(client_for(&server.url())),
        Arc::new(|_: &ConfirmationRequest| true),
    );
    let outcome = shim
        .invoke(
            &operations::TERMINATE_SESSION,
            BoundParameters::new().with("session_id", "s-1"),
            &OutputSelector::Default,
            InvocationOptions::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Completed(Selected::Value(json!("TERMINATED"))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_shim_maps_unreachable_endpoint() {
    let shim = Shim::new(
        Arc::new(client_for("http://127.0.0.1:1")),
        Arc::new(|_: &ConfirmationRequest| true),
    );
    let err = shim
        .invoke(
            &operations::GET_NAMED_QUERY,
            BoundParameters::new().with("named_query_id", "q-1"),
            &OutputSelector::Default,
            InvocationOptions::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ShimError::EndpointResolution { .. }));
}
