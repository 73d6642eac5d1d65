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

use crate::config::{EnforcerConfig, ViolationSeverity};
use crate::state::RecognitionState;
use soundtrigger_hal::{ModelHandle, RecognitionStatus};
use std::backtrace::Backtrace;
use std::fmt;

/// Kind of event which broke the HAL contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Recognition,
    PhraseRecognition,
}

/// Contract violation detected on a recognition event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: EventKind,
    /// Model designated by the event
    pub model: ModelHandle,
    /// Shadow state on reception, `None` for a model not loaded
    pub observed: Option<RecognitionState>,
    pub status: RecognitionStatus,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let observed = match self.observed {
            Some(ref s) => s.to_string(),
            None => "unknown".to_string(),
        };
        write!(
            f,
            "Unexpected recognition event for model: {} (expected {}, observed {}, status {:?}, {:?})",
            self.model,
            RecognitionState::Armed,
            observed,
            self.status,
            self.kind
        )
    }
}

/// Sink of contract violations. Reporting cannot fail, and must not call
/// back into the HAL.
pub trait ViolationReporter {
    fn report(&self, violation: &Violation);
}

/// Report violations on the log
pub struct LogReporter {
    config: EnforcerConfig,
}

impl LogReporter {
    pub fn new(config: EnforcerConfig) -> Self {
        Self { config }
    }
}

impl ViolationReporter for LogReporter {
    fn report(&self, violation: &Violation) {
        let level = match self.config.severity {
            ViolationSeverity::Error => log::Level::Error,
            ViolationSeverity::Warn => log::Level::Warn,
        };

        if self.config.capture_stack {
            log::log!(level, "{}\n{}", violation, Backtrace::force_capture());
        } else {
            log::log!(level, "{}", violation);
        }
    }
}
