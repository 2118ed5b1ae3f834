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

// src/invoke.rs
// The one place where a parsed command turns into a shim invocation,
// and where its outcome turns into output.

use clap::Parser;
use query_shim::{
    BoundParameters, InvocationOptions, OperationDescriptor, Outcome, OutputSelector, Selected,
};
use serde_json::Value;

use crate::cfg::runtime::RuntimeContext;
use crate::cli_output::write_value;
use crate::errors::QueryCliResult;

// SelectArgs is flattened into every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct SelectArgs {
    #[clap(
        short,
        long,
        help = "What to output: * for the whole response, a response field name, or ^Param to echo a parameter"
    )]
    pub select: Option<OutputSelector>,
}

impl SelectArgs {
    pub fn selector(&self) -> OutputSelector {
        self.select.clone().unwrap_or_default()
    }
}

// ConfirmArgs is flattened into destructive commands only.
#[derive(Parser, Debug, Clone, Default)]
pub struct ConfirmArgs {
    #[clap(long, help = "Skip the confirmation prompt")]
    pub force: bool,

    #[clap(long, help = "Show what would happen without doing it")]
    pub what_if: bool,
}

impl From<&ConfirmArgs> for InvocationOptions {
    fn from(args: &ConfirmArgs) -> Self {
        InvocationOptions {
            force: args.force,
            what_if: args.what_if,
        }
    }
}

/// Invocation is a fully parsed command, ready to hand to the shim.
#[derive(Debug)]
pub struct Invocation {
    pub descriptor: &'static OperationDescriptor,
    pub bound: BoundParameters,
    pub selector: OutputSelector,
    pub options: InvocationOptions,
}

impl Invocation {
    pub fn new(descriptor: &'static OperationDescriptor, select: &SelectArgs) -> Self {
        Self {
            descriptor,
            bound: BoundParameters::new(),
            selector: select.selector(),
            options: InvocationOptions::default(),
        }
    }

    pub fn bind_if_supplied<T: Into<query_shim::ParameterValue>>(
        mut self,
        name: &str,
        value: Option<T>,
    ) -> Self {
        self.bound.bind_if_supplied(name, value);
        self
    }

    pub fn confirming(mut self, confirm: &ConfirmArgs) -> Self {
        self.options = confirm.into();
        self
    }
}

/// What, if anything, an outcome puts on the output.
pub fn render_outcome(outcome: Outcome) -> Option<Value> {
    match outcome {
        Outcome::Completed(Selected::Value(value)) => Some(value),
        Outcome::Completed(Selected::Nothing) => None,
        Outcome::Declined => {
            tracing::info!("Operation declined, nothing was done");
            None
        }
        // Dry runs are reported on stderr, the output stays empty.
        Outcome::WhatIf(request) => {
            eprintln!("What if: {request}");
            None
        }
    }
}

pub async fn run(invocation: Invocation, ctx: &mut RuntimeContext) -> QueryCliResult<()> {
    let Invocation {
        descriptor,
        bound,
        selector,
        options,
    } = invocation;

    let outcome = ctx
        .shim
        .invoke(descriptor, bound, &selector, options, &ctx.cancel)
        .await?;

    if let Some(value) = render_outcome(outcome) {
        write_value(&mut ctx.output_file, ctx.config.format, &value).await?;
    }
    Ok(())
}
