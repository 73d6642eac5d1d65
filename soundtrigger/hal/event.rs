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

use crate::error::HalError;
use crate::model::{PhraseRecognitionExtra, SoundModelType};
use crate::ModelHandle;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// Status carried by a recognition event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum RecognitionStatus {
    /// Recognition succeeded
    #[default]
    Success = 0,
    /// Recognition aborted, typically on a concurrent capture
    Aborted = 1,
    /// Recognition failed
    Failure = 2,
    /// Event requested through `get_model_state()`, not a detection
    Forced = 3,
}

impl RecognitionStatus {
    /// Forced events do not end the recognition session
    pub fn is_forced(&self) -> bool {
        *self == RecognitionStatus::Forced
    }
}

impl TryFrom<i32> for RecognitionStatus {
    type Error = HalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_i32(value).ok_or(HalError::BadValue)
    }
}

/// Audio format of the capture following a recognition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioConfig {
    pub sample_rate_hz: u32,
    pub channel_mask: u32,
    pub format: u32,
}

/// Header common to all recognition events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionEventHeader {
    pub status: RecognitionStatus,
    pub model_type: SoundModelType,
    /// Model reporting the event
    pub model: ModelHandle,
    pub capture_available: bool,
    pub capture_session: i32,
    pub capture_delay_ms: i32,
    pub capture_preamble_ms: i32,
    pub trigger_in_data: bool,
    pub audio_config: AudioConfig,
}

/// Event reported by a generic model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionEvent {
    pub header: RecognitionEventHeader,
    /// Opaque data from the implementation
    pub data: Vec<u8>,
}

impl RecognitionEvent {
    /// New event of a generic model, without capture
    pub fn new(model: ModelHandle, status: RecognitionStatus) -> Self {
        Self {
            header: RecognitionEventHeader { status, model, ..Default::default() },
            ..Default::default()
        }
    }
}

/// Event reported by a keyphrase model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseRecognitionEvent {
    pub common: RecognitionEvent,
    /// Result of each recognized phrase
    pub phrase_extras: Vec<PhraseRecognitionExtra>,
}

impl PhraseRecognitionEvent {
    /// New event of a keyphrase model, without capture
    pub fn new(model: ModelHandle, status: RecognitionStatus) -> Self {
        let mut common = RecognitionEvent::new(model, status);
        common.header.model_type = SoundModelType::Keyphrase;
        Self { common, phrase_extras: vec![] }
    }

    /// Header shared with the generic event
    pub fn header(&self) -> &RecognitionEventHeader {
        &self.common.header
    }
}
