// SPDX-FileCopyrightText: The foliogrid authors
// SPDX-License-Identifier: MPL-2.0

//! Speech synthesis demo
//!
//! Handlers for a demo button that reads a fixed sentence aloud. The
//! platform's speech queue is accessed through [`SpeechSynthesis`], no
//! other state is kept apart from the one-time priming flag.

use crate::Error;

/// The sentence spoken by the demo
pub const DEMO_TEXT: &str = "Hello! This is a test of speech synthesis on iPhone.";

/// Language of the demo sentence
pub const DEMO_LANG: &str = "en-US";

/// A speech request.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// The text to speak
    pub text: String,

    /// BCP 47 language tag, empty for the platform default
    pub lang: String,

    /// Pitch in the range `0.0..=2.0`
    pub pitch: f32,

    /// Rate in the range `0.1..=10.0`
    pub rate: f32,

    /// Volume in the range `0.0..=1.0`
    pub volume: f32,
}

impl Utterance {
    /// Create an utterance with the platform defaults.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: String::new(),
            pitch: 1.0,
            rate: 1.0,
            volume: 1.0,
        }
    }

    /// Set the language.
    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

/// The platform's speech queue.
pub trait SpeechSynthesis {
    /// Append an utterance to the queue.
    fn speak(&mut self, utterance: Utterance);
}

/// Handlers of the speech demo.
///
/// Create one instance at startup and forward the first touch and all
/// clicks of the demo button to it.
#[derive(Debug)]
pub struct SpeechDemo<S> {
    synthesis: Option<S>,
    primed: bool,
}

impl<S> SpeechDemo<S>
where
    S: SpeechSynthesis,
{
    /// Initialize the demo.
    ///
    /// Pass `None` if the platform has no speech synthesis.
    #[must_use]
    pub const fn new(synthesis: Option<S>) -> Self {
        Self {
            synthesis,
            primed: false,
        }
    }

    /// Check for speech synthesis support.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.synthesis.is_some()
    }

    /// The speech synthesis, if supported.
    #[must_use]
    pub const fn synthesis(&self) -> Option<&S> {
        self.synthesis.as_ref()
    }

    /// Handle a touch anywhere on the page.
    ///
    /// Some mobile browsers only allow speech after a user gesture. The
    /// first touch queues an empty utterance to unlock the queue; all
    /// later touches are ignored.
    ///
    /// Returns `true` if the queue has been primed by this call.
    pub fn on_touch(&mut self) -> bool {
        if self.primed {
            return false;
        }
        self.primed = true;
        let Some(synthesis) = &mut self.synthesis else {
            return false;
        };
        log::debug!("Priming speech synthesis");
        synthesis.speak(Utterance::new(""));
        true
    }

    /// Handle a click of the demo button.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SpeechUnsupported`] if the platform has no speech
    /// synthesis. The host should display the error message to the user.
    pub fn on_click(&mut self) -> crate::Result<()> {
        let Some(synthesis) = &mut self.synthesis else {
            log::warn!("Speech synthesis is not supported");
            return Err(Error::SpeechUnsupported);
        };
        synthesis.speak(Utterance::new(DEMO_TEXT).with_lang(DEMO_LANG));
        Ok(())
    }
}
