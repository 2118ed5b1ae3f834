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

use super::args::{BatchGetNamedQuery, DeleteNamedQuery, GetNamedQuery};
use crate::cfg::runtime::RuntimeContext;
use crate::errors::QueryCliResult;
use crate::invoke::{self, Invocation};

pub fn get_invocation(args: GetNamedQuery) -> Invocation {
    Invocation::new(&operations::GET_NAMED_QUERY, &args.select)
        .bind_if_supplied("named_query_id", args.named_query_id)
}

// An empty list is left unbound, so the shim reports it missing rather
// than sending an empty batch.
pub fn batch_get_invocation(args: BatchGetNamedQuery) -> Invocation {
    let ids = (!args.named_query_ids.is_empty()).then_some(args.named_query_ids);
    Invocation::new(&operations::BATCH_GET_NAMED_QUERY, &args.select)
        .bind_if_supplied("named_query_ids", ids)
}

pub fn delete_invocation(args: DeleteNamedQuery) -> Invocation {
    Invocation::new(&operations::DELETE_NAMED_QUERY, &args.select)
        .bind_if_supplied("named_query_id", args.named_query_id)
        .confirming(&args.confirm)
}

pub async fn get(args: GetNamedQuery, ctx: &mut RuntimeContext) -> QueryCliResult<()> {
    invoke::run(get_invocation(args), ctx).await
}

pub async fn batch_get(args: BatchGetNamedQuery, ctx: &mut RuntimeContext) -> QueryCliResult<()> {
    invoke::run(batch_get_invocation(args), ctx).await
}

pub async fn delete(args: DeleteNamedQuery, ctx: &mut RuntimeContext) -> QueryCliResult<()> {
    invoke::run(delete_invocation(args), ctx).await
}
