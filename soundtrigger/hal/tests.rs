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

use crate::*;
use std::rc::Rc;

struct BaseHal;

impl ISoundTriggerHw2 for BaseHal {
    fn get_properties(&self) -> Result<Properties> {
        Ok(Properties { description: "base".to_string(), ..Default::default() })
    }
    fn load_sound_model(&mut self, _: &SoundModel, _: Box<dyn Callback>, _: i32) -> Result<i32> {
        Ok(1)
    }
    fn load_phrase_sound_model(
        &mut self,
        _: &PhraseSoundModel,
        _: Box<dyn Callback>,
        _: i32,
    ) -> Result<i32> {
        Ok(2)
    }
    fn unload_sound_model(&mut self, _: i32) -> Result<()> {
        Ok(())
    }
    fn start_recognition(
        &mut self,
        _: i32,
        _: &RecognitionConfig,
        _: Box<dyn Callback>,
        _: i32,
    ) -> Result<()> {
        Ok(())
    }
    fn stop_recognition(&mut self, _: i32) -> Result<()> {
        Ok(())
    }
    fn stop_all_recognitions(&mut self) -> Result<()> {
        Ok(())
    }
    fn get_model_state(&mut self, _: i32) -> Result<()> {
        Err(HalError::InvalidOperation)
    }
    fn get_model_parameter(&self, _: i32, _: ModelParameter) -> Result<i32> {
        Ok(0)
    }
    fn set_model_parameter(&mut self, _: i32, _: ModelParameter, _: i32) -> Result<()> {
        Ok(())
    }
    fn query_parameter(&self, _: i32, _: ModelParameter) -> Result<Option<ModelParameterRange>> {
        Ok(None)
    }
    fn link_to_death(&mut self, _: Rc<dyn DeathRecipient>, _: u64) -> bool {
        true
    }
    fn unlink_to_death(&mut self, _: &Rc<dyn DeathRecipient>) -> bool {
        true
    }
    fn interface_descriptor(&self) -> Result<String> {
        Ok("android.hardware.soundtrigger@2.3::ISoundTriggerHw".to_string())
    }
}

/// Decorator appending its tag to the description of the properties
struct Tagged {
    tag: &'static str,
    underlying: Box<dyn ISoundTriggerHw2>,
}

struct TaggedBuilder(&'static str);

impl HalDecoratorBuilder for TaggedBuilder {
    fn build(&self, underlying: Box<dyn ISoundTriggerHw2>) -> Box<dyn ISoundTriggerHw2> {
        Box::new(Tagged { tag: self.0, underlying })
    }
}

impl ISoundTriggerHw2 for Tagged {
    fn get_properties(&self) -> Result<Properties> {
        let mut properties = self.underlying.get_properties()?;
        properties.description = format!("{}/{}", self.tag, properties.description);
        Ok(properties)
    }
    fn load_sound_model(
        &mut self,
        m: &SoundModel,
        c: Box<dyn Callback>,
        cookie: i32,
    ) -> Result<i32> {
        self.underlying.load_sound_model(m, c, cookie)
    }
    fn load_phrase_sound_model(
        &mut self,
        m: &PhraseSoundModel,
        c: Box<dyn Callback>,
        cookie: i32,
    ) -> Result<i32> {
        self.underlying.load_phrase_sound_model(m, c, cookie)
    }
    fn unload_sound_model(&mut self, h: i32) -> Result<()> {
        self.underlying.unload_sound_model(h)
    }
    fn start_recognition(
        &mut self,
        h: i32,
        config: &RecognitionConfig,
        c: Box<dyn Callback>,
        cookie: i32,
    ) -> Result<()> {
        self.underlying.start_recognition(h, config, c, cookie)
    }
    fn stop_recognition(&mut self, h: i32) -> Result<()> {
        self.underlying.stop_recognition(h)
    }
    fn stop_all_recognitions(&mut self) -> Result<()> {
        self.underlying.stop_all_recognitions()
    }
    fn get_model_state(&mut self, h: i32) -> Result<()> {
        self.underlying.get_model_state(h)
    }
    fn get_model_parameter(&self, h: i32, p: ModelParameter) -> Result<i32> {
        self.underlying.get_model_parameter(h, p)
    }
    fn set_model_parameter(&mut self, h: i32, p: ModelParameter, v: i32) -> Result<()> {
        self.underlying.set_model_parameter(h, p, v)
    }
    fn query_parameter(&self, h: i32, p: ModelParameter) -> Result<Option<ModelParameterRange>> {
        self.underlying.query_parameter(h, p)
    }
    fn link_to_death(&mut self, r: Rc<dyn DeathRecipient>, cookie: u64) -> bool {
        self.underlying.link_to_death(r, cookie)
    }
    fn unlink_to_death(&mut self, r: &Rc<dyn DeathRecipient>) -> bool {
        self.underlying.unlink_to_death(r)
    }
    fn interface_descriptor(&self) -> Result<String> {
        self.underlying.interface_descriptor()
    }
}

#[test]
fn decorate_first_builder_is_outermost() {
    let builders: Vec<Box<dyn HalDecoratorBuilder>> =
        vec![Box::new(TaggedBuilder("outer")), Box::new(TaggedBuilder("inner"))];
    let mut hal = decorate(Box::new(BaseHal), &builders);

    assert_eq!(hal.get_properties().unwrap().description, "outer/inner/base");
    assert_eq!(hal.get_model_state(0), Err(HalError::InvalidOperation));
}

#[test]
fn decorate_without_builders() {
    let hal = decorate(Box::new(BaseHal), &[]);
    assert_eq!(hal.get_properties().unwrap().description, "base");
}

#[test]
fn recognition_status_from_raw() {
    assert_eq!(RecognitionStatus::try_from(0), Ok(RecognitionStatus::Success));
    assert_eq!(RecognitionStatus::try_from(1), Ok(RecognitionStatus::Aborted));
    assert_eq!(RecognitionStatus::try_from(2), Ok(RecognitionStatus::Failure));
    assert_eq!(RecognitionStatus::try_from(3), Ok(RecognitionStatus::Forced));
    assert_eq!(RecognitionStatus::try_from(4), Err(HalError::BadValue));
    assert_eq!(RecognitionStatus::try_from(-1), Err(HalError::BadValue));

    assert!(RecognitionStatus::Forced.is_forced());
    assert!(!RecognitionStatus::Failure.is_forced());
}

#[test]
fn model_parameter_from_raw() {
    assert_eq!(ModelParameter::try_from(0), Ok(ModelParameter::ThresholdFactor));
    assert_eq!(ModelParameter::try_from(-1), Ok(ModelParameter::Invalid));
    assert_eq!(ModelParameter::try_from(7), Err(HalError::BadValue));
}

#[test]
fn model_parameter_range() {
    let range = ModelParameterRange { start: -10, end: 10 };
    assert!(range.contains(-10));
    assert!(range.contains(10));
    assert!(!range.contains(11));
}

#[test]
fn phrase_event_shares_header() {
    let e = PhraseRecognitionEvent::new(7, RecognitionStatus::Forced);
    assert_eq!(e.header().model, 7);
    assert_eq!(e.header().status, RecognitionStatus::Forced);
    assert_eq!(e.header().model_type, SoundModelType::Keyphrase);
}
