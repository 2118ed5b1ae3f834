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

use clap::Parser;

use crate::invoke::{ConfirmArgs, SelectArgs};

#[derive(Parser, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Cmd {
    #[clap(about = "Show a single named query")]
    Get(GetNamedQuery),
    #[clap(about = "Show several named queries, and the IDs that could not be fetched")]
    BatchGet(BatchGetNamedQuery),
    #[clap(about = "Delete a named query")]
    Delete(DeleteNamedQuery),
}

#[derive(Parser, Debug, Clone)]
pub struct GetNamedQuery {
    #[clap(help = "Named query ID")]
    pub named_query_id: Option<String>,

    #[clap(flatten)]
    pub select: SelectArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct BatchGetNamedQuery {
    #[clap(help = "Named query IDs, space separated")]
    pub named_query_ids: Vec<String>,

    #[clap(flatten)]
    pub select: SelectArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteNamedQuery {
    #[clap(help = "Named query ID to delete")]
    pub named_query_id: Option<String>,

    #[clap(flatten)]
    pub confirm: ConfirmArgs,

    #[clap(flatten)]
    pub select: SelectArgs,
}
