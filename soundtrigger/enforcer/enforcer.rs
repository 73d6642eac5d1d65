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

use crate::config::EnforcerConfig;
use crate::reporter::{EventKind, LogReporter, Violation, ViolationReporter};
use crate::state::{ModelStates, RecognitionState};
use soundtrigger_hal::{
    Callback, DeathRecipient, HalDecoratorBuilder, ISoundTriggerHw2, ModelHandle, ModelParameter,
    ModelParameterRange, PhraseRecognitionEvent, PhraseSoundModel, Properties, RecognitionConfig,
    RecognitionEvent, RecognitionEventHeader, Result, SoundModel,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Sound Trigger HAL enforcer builder
#[derive(Default)]
pub struct SoundTriggerHw2EnforcerBuilder {
    config: EnforcerConfig,
    reporter: Option<Rc<dyn ViolationReporter>>,
}

impl SoundTriggerHw2EnforcerBuilder {
    pub fn new(config: EnforcerConfig) -> Self {
        Self { config, reporter: None }
    }

    /// Report violations to `reporter` instead of the log
    pub fn reporter(mut self, reporter: Rc<dyn ViolationReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }
}

impl HalDecoratorBuilder for SoundTriggerHw2EnforcerBuilder {
    /// Build the enforcer on top of the underlying HAL
    fn build(&self, underlying: Box<dyn ISoundTriggerHw2>) -> Box<dyn ISoundTriggerHw2> {
        let reporter = match self.reporter {
            Some(ref r) => r.clone(),
            None => Rc::new(LogReporter::new(self.config.clone())),
        };
        Box::new(SoundTriggerHw2Enforcer::with_reporter(underlying, reporter))
    }
}

/// A decorator around a HAL, checking that the HAL behaves as expected.
///
/// This is not a strict enforcement of the HAL contract, but a place to catch
/// common HAL malfunctions: each model is tracked as idle or armed, and a
/// recognition event for a model which is not armed is reported as a
/// violation. Calls and events are always passed through unmodified; the
/// tracked state never drives the HAL.
///
/// The enforcer is not thread-safe, and is neither `Send` nor `Sync`:
/// calls and events must all be issued from the thread driving the HAL.
pub struct SoundTriggerHw2Enforcer {
    underlying: Box<dyn ISoundTriggerHw2>,
    shared: Rc<Shared>,
}

struct Shared {
    states: RefCell<ModelStates>,
    reporter: Rc<dyn ViolationReporter>,
}

/// Wraps the client callback given on load or start, to check the events
struct CallbackEnforcer {
    shared: Rc<Shared>,
    underlying: Box<dyn Callback>,
}

impl SoundTriggerHw2Enforcer {
    /// Enforcer reporting violations on the log
    pub fn new(underlying: Box<dyn ISoundTriggerHw2>) -> Self {
        Self::with_reporter(underlying, Rc::new(LogReporter::new(Default::default())))
    }

    pub fn with_reporter(
        underlying: Box<dyn ISoundTriggerHw2>,
        reporter: Rc<dyn ViolationReporter>,
    ) -> Self {
        Self {
            underlying,
            shared: Rc::new(Shared { states: RefCell::new(Default::default()), reporter }),
        }
    }

    /// Tracked state of a model, `None` when the model is not loaded
    pub fn model_state(&self, handle: ModelHandle) -> Option<RecognitionState> {
        self.shared.states.borrow().get(handle)
    }

    fn enforce(&self, callback: Box<dyn Callback>) -> Box<dyn Callback> {
        Box::new(CallbackEnforcer { shared: self.shared.clone(), underlying: callback })
    }
}

// The table is only borrowed after the underlying call returns, so that the
// HAL may deliver events from within the call.
impl ISoundTriggerHw2 for SoundTriggerHw2Enforcer {
    fn get_properties(&self) -> Result<Properties> {
        self.underlying.get_properties()
    }

    fn load_sound_model(
        &mut self,
        sound_model: &SoundModel,
        callback: Box<dyn Callback>,
        cookie: i32,
    ) -> Result<ModelHandle> {
        let callback = self.enforce(callback);
        let handle = self.underlying.load_sound_model(sound_model, callback, cookie)?;
        self.shared.states.borrow_mut().loaded(handle);
        Ok(handle)
    }

    fn load_phrase_sound_model(
        &mut self,
        sound_model: &PhraseSoundModel,
        callback: Box<dyn Callback>,
        cookie: i32,
    ) -> Result<ModelHandle> {
        let callback = self.enforce(callback);
        let handle = self.underlying.load_phrase_sound_model(sound_model, callback, cookie)?;
        self.shared.states.borrow_mut().loaded(handle);
        Ok(handle)
    }

    fn unload_sound_model(&mut self, model_handle: ModelHandle) -> Result<()> {
        self.underlying.unload_sound_model(model_handle)?;
        self.shared.states.borrow_mut().unloaded(model_handle);
        Ok(())
    }

    fn start_recognition(
        &mut self,
        model_handle: ModelHandle,
        config: &RecognitionConfig,
        callback: Box<dyn Callback>,
        cookie: i32,
    ) -> Result<()> {
        let callback = self.enforce(callback);
        self.underlying.start_recognition(model_handle, config, callback, cookie)?;
        self.shared.states.borrow_mut().replace(model_handle, RecognitionState::Armed);
        Ok(())
    }

    fn stop_recognition(&mut self, model_handle: ModelHandle) -> Result<()> {
        self.underlying.stop_recognition(model_handle)?;
        self.shared.states.borrow_mut().replace(model_handle, RecognitionState::Idle);
        Ok(())
    }

    fn stop_all_recognitions(&mut self) -> Result<()> {
        self.underlying.stop_all_recognitions()?;
        self.shared.states.borrow_mut().reset_all();
        Ok(())
    }

    fn get_model_state(&mut self, model_handle: ModelHandle) -> Result<()> {
        self.underlying.get_model_state(model_handle)
    }

    fn get_model_parameter(
        &self,
        model_handle: ModelHandle,
        param: ModelParameter,
    ) -> Result<i32> {
        self.underlying.get_model_parameter(model_handle, param)
    }

    fn set_model_parameter(
        &mut self,
        model_handle: ModelHandle,
        param: ModelParameter,
        value: i32,
    ) -> Result<()> {
        self.underlying.set_model_parameter(model_handle, param, value)
    }

    fn query_parameter(
        &self,
        model_handle: ModelHandle,
        param: ModelParameter,
    ) -> Result<Option<ModelParameterRange>> {
        self.underlying.query_parameter(model_handle, param)
    }

    fn link_to_death(&mut self, recipient: Rc<dyn DeathRecipient>, cookie: u64) -> bool {
        self.underlying.link_to_death(recipient, cookie)
    }

    fn unlink_to_death(&mut self, recipient: &Rc<dyn DeathRecipient>) -> bool {
        self.underlying.unlink_to_death(recipient)
    }

    fn interface_descriptor(&self) -> Result<String> {
        self.underlying.interface_descriptor()
    }
}

impl CallbackEnforcer {
    fn check(&self, kind: EventKind, header: &RecognitionEventHeader) {
        let model = header.model;

        // Released before reporting, and before the event reaches the client.
        let observed = self.shared.states.borrow().get(model);
        if observed != Some(RecognitionState::Armed) {
            self.shared.reporter.report(&Violation {
                kind,
                model,
                observed,
                status: header.status,
            });
        }

        if !header.status.is_forced() {
            self.shared.states.borrow_mut().replace(model, RecognitionState::Idle);
        }
    }
}

impl Callback for CallbackEnforcer {
    fn recognition_callback(&self, event: &RecognitionEvent, cookie: i32) {
        self.check(EventKind::Recognition, &event.header);
        self.underlying.recognition_callback(event, cookie);
    }

    fn phrase_recognition_callback(&self, event: &PhraseRecognitionEvent, cookie: i32) {
        self.check(EventKind::PhraseRecognition, event.header());
        self.underlying.phrase_recognition_callback(event, cookie);
    }
}
