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

use thiserror::Error;

/// Failures reported by a HAL call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HalError {
    /// The process hosting the HAL is gone
    #[error("HAL process died")]
    DeadObject,
    /// The call is not valid in the current state
    #[error("invalid operation")]
    InvalidOperation,
    /// An argument is out of range, or refers to an unknown model
    #[error("bad value")]
    BadValue,
    /// The HAL is not initialized
    #[error("not initialized")]
    NoInit,
    /// Implementation defined error code
    #[error("service specific error {0}")]
    ServiceSpecific(i32),
    /// The call could not be carried to the HAL
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result of a HAL call
pub type Result<T> = std::result::Result<T, HalError>;
