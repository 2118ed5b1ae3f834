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

// src/selector.rs
// Output selectors: which part of a response (or bound input) the caller
// gets back.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::descriptor::{DefaultOutput, OperationDescriptor};
use crate::errors::ShimError;
use crate::params::{BoundParameters, ResponseValue};

/// Marker for "return the whole response".
pub const SELECT_ALL: &str = "*";

/// Prefix marking a selector that echoes a bound parameter back.
pub const ECHO_PREFIX: char = '^';

/// OutputSelector is what the caller asked for, before it is checked
/// against an operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputSelector {
    #[default]
    Default,
    All,
    Field(String),
    EchoParameter(String),
}

impl FromStr for OutputSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if s.is_empty() {
            OutputSelector::Default
        } else if s == SELECT_ALL {
            OutputSelector::All
        } else if let Some(param) = s.strip_prefix(ECHO_PREFIX) {
            OutputSelector::EchoParameter(param.to_string())
        } else {
            OutputSelector::Field(s.to_string())
        })
    }
}

impl fmt::Display for OutputSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSelector::Default => write!(f, "<default>"),
            OutputSelector::All => write!(f, "{SELECT_ALL}"),
            OutputSelector::Field(name) => write!(f, "{name}"),
            OutputSelector::EchoParameter(name) => write!(f, "{ECHO_PREFIX}{name}"),
        }
    }
}

/// ResolvedSelector has been checked against one operation and names
/// fields and parameters by their canonical spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedSelector {
    Nothing,
    Everything,
    Field(&'static str),
    Echo(&'static str),
}

/// Selected is what an invocation hands back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Selected {
    Nothing,
    Value(Value),
}

impl OutputSelector {
    /// Resolve once, at invocation setup. Unknown fields or parameters
    /// fail here, before anything goes over the wire.
    pub fn resolve(&self, descriptor: &OperationDescriptor) -> Result<ResolvedSelector, ShimError> {
        match self {
            OutputSelector::Default => Ok(match descriptor.default_output {
                DefaultOutput::Field(field) => ResolvedSelector::Field(field),
                DefaultOutput::Everything => ResolvedSelector::Everything,
                DefaultOutput::Nothing => ResolvedSelector::Nothing,
            }),
            OutputSelector::All => Ok(ResolvedSelector::Everything),
            OutputSelector::Field(name) => descriptor
                .response_field(name)
                .map(ResolvedSelector::Field)
                .ok_or_else(|| {
                    ShimError::invalid_selector(
                        descriptor.name,
                        self.to_string(),
                        format!(
                            "response has no field '{name}' (available: {})",
                            available(descriptor.response_fields.iter().copied())
                        ),
                    )
                }),
            OutputSelector::EchoParameter(name) => descriptor
                .param(name)
                .map(|spec| ResolvedSelector::Echo(spec.name))
                .ok_or_else(|| {
                    ShimError::invalid_selector(
                        descriptor.name,
                        self.to_string(),
                        format!(
                            "operation has no parameter '{name}' (available: {})",
                            available(descriptor.params.iter().map(|p| p.name))
                        ),
                    )
                }),
        }
    }
}

fn available<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<_> = names.collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

impl ResolvedSelector {
    /// Project a response (or the bound input) onto what was selected.
    pub fn apply(
        &self,
        descriptor: &OperationDescriptor,
        bound: &BoundParameters,
        response: ResponseValue,
    ) -> Selected {
        match self {
            ResolvedSelector::Nothing => Selected::Nothing,
            ResolvedSelector::Everything => Selected::Value(response),
            ResolvedSelector::Field(field) => {
                let value = match response {
                    Value::Object(mut map) => map.remove(*field).unwrap_or(Value::Null),
                    _ => Value::Null,
                };
                Selected::Value(value)
            }
            ResolvedSelector::Echo(param) => {
                let value = descriptor
                    .param(param)
                    .and_then(|spec| bound.lookup(spec))
                    .map(|v| v.to_json())
                    .unwrap_or(Value::Null);
                Selected::Value(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::operations;

    #[test]
    fn test_parse_selector_strings() {
        assert_eq!("".parse::<OutputSelector>().unwrap(), OutputSelector::Default);
        assert_eq!("*".parse::<OutputSelector>().unwrap(), OutputSelector::All);
        assert_eq!(
            "NamedQuery".parse::<OutputSelector>().unwrap(),
            OutputSelector::Field("NamedQuery".to_string())
        );
        assert_eq!(
            "^NamedQueryId".parse::<OutputSelector>().unwrap(),
            OutputSelector::EchoParameter("NamedQueryId".to_string())
        );
    }

    #[test]
    fn test_default_follows_descriptor() {
        let default = OutputSelector::Default;
        assert_eq!(
            default.resolve(&operations::GET_NAMED_QUERY).unwrap(),
            ResolvedSelector::Field("NamedQuery")
        );
        assert_eq!(
            default.resolve(&operations::BATCH_GET_NAMED_QUERY).unwrap(),
            ResolvedSelector::Everything
        );
        assert_eq!(
            default.resolve(&operations::DELETE_NAMED_QUERY).unwrap(),
            ResolvedSelector::Nothing
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = OutputSelector::Field("Bogus".to_string())
            .resolve(&operations::GET_NAMED_QUERY)
            .unwrap_err();
        assert!(matches!(err, ShimError::InvalidSelector { .. }));
        assert!(err.to_string().contains("available: NamedQuery"));

        let err = OutputSelector::EchoParameter("SessionId".to_string())
            .resolve(&operations::GET_NAMED_QUERY)
            .unwrap_err();
        assert!(matches!(err, ShimError::InvalidSelector { .. }));
    }

    #[test]
    fn test_field_selector_returns_only_that_field() {
        let response = json!({
            "State": "TERMINATED",
            "ResponseMetadata": {"RequestId": "r-1"}
        });
        let selected = OutputSelector::Field("state".to_string())
            .resolve(&operations::TERMINATE_SESSION)
            .unwrap()
            .apply(
                &operations::TERMINATE_SESSION,
                &BoundParameters::new(),
                response,
            );
        assert_eq!(selected, Selected::Value(json!("TERMINATED")));
    }

    #[test]
    fn test_echo_selector_returns_bound_input() {
        let bound = BoundParameters::new().with("id", "q-9");
        let selected = OutputSelector::EchoParameter("NamedQueryId".to_string())
            .resolve(&operations::DELETE_NAMED_QUERY)
            .unwrap()
            .apply(&operations::DELETE_NAMED_QUERY, &bound, json!({}));
        assert_eq!(selected, Selected::Value(json!("q-9")));
    }
}
