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

// src/async_write.rs
// writeln-style helpers for the boxed AsyncWrite every command writes
// its output to. Callers need tokio::io::AsyncWriteExt in scope.

#[macro_export]
macro_rules! async_writeln {
    ($dst:expr) => {{ $dst.write_all(b"\n").await }};
    ($dst:expr, $($arg:tt)*) => {{
        let line = format!("{}\n", format_args!($($arg)*));
        $dst.write_all(line.as_bytes()).await
    }};
}

/// Render a prettytable Table as CSV and write it out. Evaluates to an
/// io::Result like async_writeln.
#[macro_export]
macro_rules! async_write_table_as_csv {
    ($dst:expr, $table:expr) => {{
        match $table
            .to_csv(Vec::<u8>::new())
            .map_err(|e| std::io::Error::other(e.to_string()))
            .and_then(|writer| {
                writer
                    .into_inner()
                    .map_err(|e| std::io::Error::other(e.to_string()))
            }) {
            Ok(bytes) => $dst.write_all(&bytes).await,
            Err(e) => Err(e),
        }
    }};
}
