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

//! Sound Trigger HAL interface, as seen by the middleware,
//! along with the data types exchanged over it.
//!
//! Implementations are confined to the thread driving the HAL: none of the
//! interfaces below require `Send` or `Sync`, and callbacks are delivered on
//! that same thread.

use std::rc::Rc;

mod error;
mod event;
mod model;

#[cfg(test)]
mod tests;

pub use error::*;
pub use event::*;
pub use model::*;

/// Identifier of a loaded model, allocated by the HAL
pub type ModelHandle = i32;

/// Interface for building a decorator around a HAL
pub trait HalDecoratorBuilder {
    /// Build the decorator on top of the `underlying` HAL
    fn build(&self, underlying: Box<dyn ISoundTriggerHw2>) -> Box<dyn ISoundTriggerHw2>;
}

/// Wrap `underlying` with the decorators given by `builders`.
/// The first builder produces the outermost layer, which is the one
/// seen by the client.
pub fn decorate(
    underlying: Box<dyn ISoundTriggerHw2>,
    builders: &[Box<dyn HalDecoratorBuilder>],
) -> Box<dyn ISoundTriggerHw2> {
    let mut hal = underlying;
    for b in builders.iter().rev() {
        hal = b.build(hal);
    }
    hal
}

/// Events from the HAL to the client
pub trait Callback {
    /// A generic model reports a recognition, an error, or its state
    fn recognition_callback(&self, event: &RecognitionEvent, cookie: i32);

    /// A keyphrase model reports a recognition, an error, or its state
    fn phrase_recognition_callback(&self, event: &PhraseRecognitionEvent, cookie: i32);
}

/// Notified when the process hosting the HAL dies
pub trait DeathRecipient {
    /// `cookie` is the value given on `link_to_death()`
    fn service_died(&self, cookie: u64);
}

/// Interface of a Sound Trigger HAL, version 2.x
pub trait ISoundTriggerHw2 {
    /// Implementation properties and capabilities
    fn get_properties(&self) -> Result<Properties>;

    /// Load a generic sound model. Events related to the model are
    /// reported through `callback`, along with `cookie`.
    fn load_sound_model(
        &mut self,
        sound_model: &SoundModel,
        callback: Box<dyn Callback>,
        cookie: i32,
    ) -> Result<ModelHandle>;

    /// Load a keyphrase sound model. Events related to the model are
    /// reported through `callback`, along with `cookie`.
    fn load_phrase_sound_model(
        &mut self,
        sound_model: &PhraseSoundModel,
        callback: Box<dyn Callback>,
        cookie: i32,
    ) -> Result<ModelHandle>;

    /// Unload a model. The handle may be reused afterwards.
    fn unload_sound_model(&mut self, model_handle: ModelHandle) -> Result<()>;

    /// Start recognition on a loaded model. A single recognition event is
    /// expected, after which the model is no longer armed.
    fn start_recognition(
        &mut self,
        model_handle: ModelHandle,
        config: &RecognitionConfig,
        callback: Box<dyn Callback>,
        cookie: i32,
    ) -> Result<()>;

    /// Stop recognition on a model
    fn stop_recognition(&mut self, model_handle: ModelHandle) -> Result<()>;

    /// Stop recognition on all models
    fn stop_all_recognitions(&mut self) -> Result<()>;

    /// Request an event with the current state of the model,
    /// delivered with the `Forced` status.
    fn get_model_state(&mut self, model_handle: ModelHandle) -> Result<()>;

    /// Read a model parameter
    fn get_model_parameter(&self, model_handle: ModelHandle, param: ModelParameter)
        -> Result<i32>;

    /// Write a model parameter
    fn set_model_parameter(
        &mut self,
        model_handle: ModelHandle,
        param: ModelParameter,
        value: i32,
    ) -> Result<()>;

    /// Range of a model parameter, `None` when the parameter is not supported
    fn query_parameter(
        &self,
        model_handle: ModelHandle,
        param: ModelParameter,
    ) -> Result<Option<ModelParameterRange>>;

    /// Register to be notified of the death of the HAL process
    fn link_to_death(&mut self, recipient: Rc<dyn DeathRecipient>, cookie: u64) -> bool;

    /// Unregister a recipient previously given to `link_to_death()`
    fn unlink_to_death(&mut self, recipient: &Rc<dyn DeathRecipient>) -> bool;

    /// Fully qualified name of the interface
    fn interface_descriptor(&self) -> Result<String>;
}
