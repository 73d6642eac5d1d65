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

//! Sound Trigger HAL enforcer module
//!
//! The module sits between the middleware and the HAL, and looks at the calls
//! and the recognition events to track the state of each loaded model:
//!
//! ```text
//!            Calls | ^ Events
//!       ___________|_|___________
//!      |           : :  enforcer |       ____________
//!      |           : :           |      |            |
//!      |           : :   model --|----->|  reporter  |
//!      |           : :   states  |      |____________|
//!      |___________:_:___________|
//!                  | |
//!            Calls v | Events
//!                   HAL
//! ```
//!
//! Events received for a model which is not armed are reported, then
//! forwarded as any other event.

mod config;
mod enforcer;
mod reporter;
mod state;
mod utils;


pub use config::{EnforcerConfig, ViolationSeverity};
pub use enforcer::{SoundTriggerHw2Enforcer, SoundTriggerHw2EnforcerBuilder};
pub use reporter::{EventKind, LogReporter, Violation, ViolationReporter};
pub use state::RecognitionState;
pub use utils::init_logging;

/// Tag of the enforcer logs
pub const TAG: &str = "SoundTriggerHw2Enforcer";
