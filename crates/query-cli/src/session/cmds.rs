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

use query_shim::operations;

use super::args::TerminateSession;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::QueryCliResult;
use crate::invoke::{self, Invocation};

pub fn terminate_invocation(args: TerminateSession) -> Invocation {
    Invocation::new(&operations::TERMINATE_SESSION, &args.select)
        .bind_if_supplied("session_id", args.session_id)
        .confirming(&args.confirm)
}

pub async fn terminate(args: TerminateSession, ctx: &mut RuntimeContext) -> QueryCliResult<()> {
    invoke::run(terminate_invocation(args), ctx).await
}
