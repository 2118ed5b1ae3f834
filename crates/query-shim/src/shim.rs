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

// src/shim.rs
// The invocation shim: one generic executor for every operation in the
// table. validate -> (confirm) -> call -> select.

use std::fmt;
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::client::ServiceClient;
use crate::confirm::{Confirm, ConfirmationRequest};
use crate::descriptor::OperationDescriptor;
use crate::errors::ShimError;
use crate::params::{BoundParameters, Presence};
use crate::selector::{OutputSelector, ResolvedSelector, Selected};

/// Per-invocation switches supplied by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvocationOptions {
    /// Skip the confirmation step of destructive operations.
    pub force: bool,
    /// Report what a destructive operation would do, and stop there.
    pub what_if: bool,
}

/// How an invocation ended, when it did not fail.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Completed(Selected),
    /// Confirmation was withheld. Nothing was called, nothing to report.
    Declined,
    /// Dry run of a destructive operation; carries what would have run.
    WhatIf(ConfirmationRequest),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvocationState {
    Created,
    Validated,
    Confirmed,
    Declined,
    Calling,
    Completed,
    Cancelled,
    Failed,
}

impl InvocationState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InvocationState::Declined
                | InvocationState::Completed
                | InvocationState::Cancelled
                | InvocationState::Failed
        )
    }
}

impl fmt::Display for InvocationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// InvocationContext is owned by exactly one call and dropped with it.
struct InvocationContext<'a> {
    descriptor: &'a OperationDescriptor,
    bound: BoundParameters,
    selector: ResolvedSelector,
    state: InvocationState,
}

impl<'a> InvocationContext<'a> {
    fn new(
        descriptor: &'a OperationDescriptor,
        bound: BoundParameters,
        selector: &OutputSelector,
    ) -> Result<Self, ShimError> {
        Ok(Self {
            descriptor,
            bound,
            selector: selector.resolve(descriptor)?,
            state: InvocationState::Created,
        })
    }

    fn transition(&mut self, next: InvocationState) {
        debug_assert!(
            !self.state.is_terminal(),
            "invocation already ended in {}",
            self.state
        );
        tracing::debug!(
            operation = self.descriptor.name,
            from = %self.state,
            to = %next,
            "Invocation state change"
        );
        self.state = next;
    }

    // validate fails on the first required parameter without a value.
    // One that was explicitly bound to an empty value additionally gets
    // an advisory warning, so the caller can tell it from a typo'd name.
    fn validate(&mut self) -> Result<(), ShimError> {
        for spec in self.descriptor.required_params() {
            match self.bound.presence(spec) {
                Presence::Supplied => {}
                Presence::Omitted => {
                    self.transition(InvocationState::Failed);
                    return Err(ShimError::missing_parameter(
                        self.descriptor.name,
                        spec.request_field,
                        false,
                    ));
                }
                Presence::SuppliedEmpty => {
                    tracing::warn!(
                        operation = self.descriptor.name,
                        parameter = spec.request_field,
                        "You are passing an empty value for parameter {} which is marked as required",
                        spec.request_field
                    );
                    self.transition(InvocationState::Failed);
                    return Err(ShimError::missing_parameter(
                        self.descriptor.name,
                        spec.request_field,
                        true,
                    ));
                }
            }
        }
        self.transition(InvocationState::Validated);
        Ok(())
    }
}

/// Shim runs operations against one client handle, asking `confirm`
/// before anything destructive.
#[derive(Clone)]
pub struct Shim {
    client: Arc<dyn ServiceClient>,
    confirm: Arc<dyn Confirm>,
}

impl fmt::Debug for Shim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shim")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl Shim {
    pub fn new(client: Arc<dyn ServiceClient>, confirm: Arc<dyn Confirm>) -> Self {
        Self { client, confirm }
    }

    // ask runs the confirmation on its own thread so a blocking prompt
    // cannot starve the runtime, and gives up when `cancel` fires. The
    // thread is detached; an abandoned prompt dies with the process.
    async fn ask(
        &self,
        request: ConfirmationRequest,
        cancel: &CancellationToken,
    ) -> Result<bool, ShimError> {
        let operation = request.operation.clone();
        let confirm = Arc::clone(&self.confirm);
        let (tx, rx) = oneshot::channel();
        std::thread::Builder::new()
            .name("confirm".to_string())
            .spawn(move || {
                // The receiver is gone when the invocation was cancelled.
                let _ = tx.send(confirm.confirm(&request));
            })?;

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ShimError::Cancelled { operation }),
            answer = rx => answer.map_err(|_| {
                ShimError::RuntimeError("confirmation ended without an answer".to_string())
            })?,
        }
    }

    /// Run one operation to completion, decline, or failure.
    ///
    /// Nothing is retried. Cancelling `cancel` while the remote call is in
    /// flight drops the call and reports `ShimError::Cancelled`; the caller
    /// never sees a partial response.
    #[tracing::instrument(level = "debug", skip_all, fields(operation = descriptor.name))]
    pub async fn invoke(
        &self,
        descriptor: &OperationDescriptor,
        bound: BoundParameters,
        selector: &OutputSelector,
        options: InvocationOptions,
        cancel: &CancellationToken,
    ) -> Result<Outcome, ShimError> {
        let mut ctx = InvocationContext::new(descriptor, bound, selector)?;
        ctx.validate()?;

        if descriptor.destructive {
            let request = ConfirmationRequest::for_invocation(descriptor, &ctx.bound);
            if options.what_if {
                tracing::info!("What if: {request}");
                ctx.transition(InvocationState::Declined);
                return Ok(Outcome::WhatIf(request));
            }
            if !options.force {
                let confirmed = match self.ask(request, cancel).await {
                    Ok(confirmed) => confirmed,
                    Err(e) => {
                        ctx.transition(match e {
                            ShimError::Cancelled { .. } => InvocationState::Cancelled,
                            _ => InvocationState::Failed,
                        });
                        return Err(e);
                    }
                };
                if !confirmed {
                    ctx.transition(InvocationState::Declined);
                    return Ok(Outcome::Declined);
                }
            }
            ctx.transition(InvocationState::Confirmed);
        }

        let request = match ctx.bound.to_request(descriptor) {
            Ok(request) => request,
            Err(e) => {
                ctx.transition(InvocationState::Failed);
                return Err(e);
            }
        };

        ctx.transition(InvocationState::Calling);
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                ctx.transition(InvocationState::Cancelled);
                return Err(ShimError::Cancelled {
                    operation: descriptor.name.to_string(),
                });
            }
            result = self.client.call(descriptor.name, request) => result,
        };

        match result {
            Ok(response) => {
                ctx.transition(InvocationState::Completed);
                Ok(Outcome::Completed(
                    ctx.selector.apply(descriptor, &ctx.bound, response),
                ))
            }
            Err(e) => {
                ctx.transition(InvocationState::Failed);
                Err(ShimError::from_client(descriptor.name, e))
            }
        }
    }

    /// Blocking bridge for callers without a runtime of their own. Must
    /// not be called from inside an async context.
    pub fn invoke_blocking(
        &self,
        descriptor: &OperationDescriptor,
        bound: BoundParameters,
        selector: &OutputSelector,
        options: InvocationOptions,
        cancel: &CancellationToken,
    ) -> Result<Outcome, ShimError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ShimError::RuntimeError(e.to_string()))?;
        runtime.block_on(self.invoke(descriptor, bound, selector, options, cancel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        for state in [
            InvocationState::Declined,
            InvocationState::Completed,
            InvocationState::Cancelled,
            InvocationState::Failed,
        ] {
            assert!(state.is_terminal(), "{state} should be terminal");
        }
        for state in [
            InvocationState::Created,
            InvocationState::Validated,
            InvocationState::Confirmed,
            InvocationState::Calling,
        ] {
            assert!(!state.is_terminal(), "{state} should not be terminal");
        }
    }
}
