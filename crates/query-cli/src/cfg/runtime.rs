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

use std::pin::Pin;
use std::sync::Arc;

use query_shim::{CancellationToken, Shim};

use crate::cli_output::OutputFormat;

// RuntimeConfig holds the global options that shape how results are
// written, as opposed to how the service is reached.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeConfig {
    pub format: OutputFormat,
}

pub struct RuntimeContext {
    pub shim: Arc<Shim>,
    // cancel is tripped by Ctrl-C. One CLI run is one invocation, so the
    // token is shared with that invocation directly.
    pub cancel: CancellationToken,
    pub config: RuntimeConfig,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
}
