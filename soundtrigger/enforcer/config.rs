// Copyright 2024, The Android Open Source Project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;

const SEVERITY_VAR: &str = "SOUNDTRIGGER_ENFORCER_SEVERITY";
const CAPTURE_STACK_VAR: &str = "SOUNDTRIGGER_ENFORCER_CAPTURE_STACK";

/// Log level of contract violations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViolationSeverity {
    #[default]
    Error,
    Warn,
}

/// Behavior of the enforcer on contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnforcerConfig {
    pub severity: ViolationSeverity,
    /// Attach the call stack to the log of a violation
    pub capture_stack: bool,
}

impl Default for EnforcerConfig {
    fn default() -> Self {
        Self { severity: ViolationSeverity::Error, capture_stack: true }
    }
}

impl EnforcerConfig {
    /// Read the configuration from the environment, falling back to the
    /// defaults for unset or malformed variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match lookup(SEVERITY_VAR).as_deref().map(str::trim) {
            Some("error") => config.severity = ViolationSeverity::Error,
            Some("warn") => config.severity = ViolationSeverity::Warn,
            Some(v) => log::warn!("Ignoring {}={:?}", SEVERITY_VAR, v),
            None => (),
        }

        match lookup(CAPTURE_STACK_VAR).as_deref().map(str::trim) {
            Some("0") => config.capture_stack = false,
            Some("1") => config.capture_stack = true,
            Some(v) => log::warn!("Ignoring {}={:?}", CAPTURE_STACK_VAR, v),
            None => (),
        }

        config
    }
}
