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
use bitflags::bitflags;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

bitflags! {
    /// Recognition modes of a phrase, or supported by an implementation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RecognitionModes: u32 {
        const VOICE_TRIGGER = 0x1;
        const USER_IDENTIFICATION = 0x2;
        const USER_AUTHENTICATION = 0x4;
        const GENERIC_TRIGGER = 0x8;
    }
}

bitflags! {
    /// Audio processing applied on the capture path
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AudioCapabilities: u32 {
        const ECHO_CANCELLATION = 0x1;
        const NOISE_SUPPRESSION = 0x2;
    }
}

impl Default for RecognitionModes {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for AudioCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

/// Kind of a sound model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum SoundModelType {
    Keyphrase = 0,
    #[default]
    Generic = 1,
}

/// Opaque sound model, interpreted by the implementation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoundModel {
    pub model_type: SoundModelType,
    /// Identify the model
    pub uuid: String,
    /// Identify the implementation the model targets
    pub vendor_uuid: String,
    pub data: Vec<u8>,
}

/// A phrase spoken by one or several users
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Phrase {
    pub id: i32,
    pub recognition_modes: RecognitionModes,
    pub users: Vec<i32>,
    /// BCP 47 language tag
    pub locale: String,
    pub text: String,
}

/// Sound model recognizing one or several keyphrases
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseSoundModel {
    pub common: SoundModel,
    pub phrases: Vec<Phrase>,
}

/// Confidence level of a user recognition
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfidenceLevel {
    pub user_id: i32,
    pub level_percent: i32,
}

/// Recognition configuration, or result, of a single phrase
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhraseRecognitionExtra {
    pub id: i32,
    pub recognition_modes: RecognitionModes,
    pub confidence_level: i32,
    pub levels: Vec<ConfidenceLevel>,
}

/// Parameters of a recognition session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionConfig {
    /// Audio capture is requested on detection
    pub capture_requested: bool,
    pub phrases: Vec<PhraseRecognitionExtra>,
    /// Opaque data for the implementation
    pub data: Vec<u8>,
    pub audio_capabilities: AudioCapabilities,
}

/// Description of an implementation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    pub implementor: String,
    pub description: String,
    pub version: u32,
    pub uuid: String,
    pub supported_model_arch: String,
    pub max_sound_models: u32,
    pub max_key_phrases: u32,
    pub max_users: u32,
    pub recognition_modes: RecognitionModes,
    pub capture_transition: bool,
    pub max_buffer_ms: u32,
    pub concurrent_capture: bool,
    pub trigger_in_event: bool,
    pub power_consumption_mw: u32,
    pub audio_capabilities: AudioCapabilities,
}

/// Tunable parameter of a loaded model
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum ModelParameter {
    Invalid = -1,
    /// Offset of the detection threshold
    ThresholdFactor = 0,
}

impl TryFrom<i32> for ModelParameter {
    type Error = HalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_i32(value).ok_or(HalError::BadValue)
    }
}

/// Inclusive range of values supported by a model parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelParameterRange {
    pub start: i32,
    pub end: i32,
}

impl ModelParameterRange {
    /// Tell if `value` lies in the range
    pub fn contains(&self, value: i32) -> bool {
        (self.start..=self.end).contains(&value)
    }
}
