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

// src/confirm.rs
// Confirmation for destructive operations.

use std::fmt;

use crate::descriptor::OperationDescriptor;
use crate::errors::ShimError;
use crate::params::BoundParameters;

/// What is about to happen, and to which resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub command: String,
    pub operation: String,
    pub target: String,
}

impl ConfirmationRequest {
    pub fn for_invocation(descriptor: &OperationDescriptor, bound: &BoundParameters) -> Self {
        let target = descriptor
            .confirm_target
            .and_then(|name| descriptor.param(name))
            .and_then(|spec| bound.lookup(spec))
            .map(|value| match value.to_json() {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .unwrap_or_default();

        Self {
            command: descriptor.command.to_string(),
            operation: descriptor.name.to_string(),
            target,
        }
    }
}

impl fmt::Display for ConfirmationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Performing the operation \"{} ({})\" on target \"{}\".",
            self.command, self.operation, self.target
        )
    }
}

/// Confirm decides whether a destructive operation may proceed.
///
/// Any `Fn(&ConfirmationRequest) -> bool` is a Confirm, which is what
/// tests and non-interactive callers usually want.
pub trait Confirm: Send + Sync {
    fn confirm(&self, request: &ConfirmationRequest) -> Result<bool, ShimError>;
}

impl<F> Confirm for F
where
    F: Fn(&ConfirmationRequest) -> bool + Send + Sync,
{
    fn confirm(&self, request: &ConfirmationRequest) -> Result<bool, ShimError> {
        Ok(self(request))
    }
}

/// TerminalConfirm prompts on stderr and reads the answer from the
/// terminal. Without a terminal there is nobody to ask, so it declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, request: &ConfirmationRequest) -> Result<bool, ShimError> {
        let term = console::Term::stderr();
        if !term.is_term() {
            tracing::warn!(
                operation = request.operation,
                "Not attached to a terminal, declining. Use --force to skip confirmation"
            );
            return Ok(false);
        }

        term.write_line(&format!(
            "{}\n{}",
            console::style("Are you sure you want to perform this action?").yellow(),
            request
        ))?;
        term.write_str("Continue? [y/N]: ")?;
        let answer = term.read_line()?;
        Ok(is_yes(&answer))
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
