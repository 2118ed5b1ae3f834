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

// src/lib.rs
// Main exports for the query-shim library: a single generic executor
// that runs any remote query-service operation described in the
// operation table.

pub mod client;
pub mod confirm;
pub mod descriptor;
pub mod errors;
pub mod operations;
pub mod params;
pub mod selector;
pub mod shim;

pub use client::{ClientConfig, ClientError, HttpServiceClient, ServiceClient};
pub use confirm::{Confirm, ConfirmationRequest, TerminalConfirm};
pub use descriptor::{DefaultOutput, OperationDescriptor, ParameterKind, ParameterSpec};
pub use errors::ShimError;
pub use params::{BoundParameters, ParameterValue, RequestValue, ResponseValue};
pub use selector::{OutputSelector, ResolvedSelector, Selected};
pub use shim::{InvocationOptions, InvocationState, Outcome, Shim};
pub use tokio_util::sync::CancellationToken;
