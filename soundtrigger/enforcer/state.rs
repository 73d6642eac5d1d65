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

use soundtrigger_hal::ModelHandle;
use std::collections::HashMap;
use std::fmt;

/// Recognition state of a model, as last seen by the enforcer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionState {
    /// Loaded, no recognition event expected
    Idle,
    /// Recognition started, a single event expected
    Armed,
}

impl fmt::Display for RecognitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Armed => write!(f, "armed"),
        }
    }
}

/// Shadow of the recognition state of the loaded models.
/// Entries live from a successful load to the unload of the model.
#[derive(Debug, Default)]
pub(crate) struct ModelStates {
    models: HashMap<ModelHandle, RecognitionState>,
}

impl ModelStates {
    pub(crate) fn get(&self, handle: ModelHandle) -> Option<RecognitionState> {
        self.models.get(&handle).copied()
    }

    pub(crate) fn loaded(&mut self, handle: ModelHandle) {
        if self.models.insert(handle, RecognitionState::Idle).is_some() {
            log::warn!("Model {} loaded while still tracked", handle);
        }
    }

    pub(crate) fn unloaded(&mut self, handle: ModelHandle) {
        self.models.remove(&handle);
    }

    /// Update the state of a tracked model; unknown handles are left untracked.
    pub(crate) fn replace(&mut self, handle: ModelHandle, state: RecognitionState) {
        if let Some(s) = self.models.get_mut(&handle) {
            *s = state;
        }
    }

    pub(crate) fn reset_all(&mut self) {
        self.models.values_mut().for_each(|s| *s = RecognitionState::Idle);
    }
}
