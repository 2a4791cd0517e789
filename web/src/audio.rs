use std::cell::RefCell;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{AudioContext, HtmlAudioElement, OscillatorType};
use whackamole_core::Cue;

/// Plays feedback cues. Missing elements, blocked autoplay or a missing Web Audio API only ever cost the sound.
#[derive(Debug, Default)]
pub(crate) struct Sounds {
    hit: Option<HtmlAudioElement>,
    miss: Option<HtmlAudioElement>,
    context: RefCell<Option<AudioContext>>,
}

impl Sounds {
    pub(crate) const HIT_ID: &'static str = "hitSound";
    pub(crate) const MISS_ID: &'static str = "missSound";

    pub(crate) fn from_document() -> Self {
        Self {
            hit: Self::element(Self::HIT_ID),
            miss: Self::element(Self::MISS_ID),
            context: RefCell::new(None),
        }
    }

    fn element(id: &str) -> Option<HtmlAudioElement> {
        let element = gloo::utils::document().get_element_by_id(id);
        if element.is_none() {
            log::debug!("no <audio id=\"{}\">, cue will be silent", id);
        }
        element?.dyn_into().ok()
    }

    pub(crate) fn play(&self, cue: Cue) {
        match cue {
            Cue::Hit => Self::play_element(self.hit.as_ref()),
            Cue::Miss => Self::play_element(self.miss.as_ref()),
            Cue::Pop => {
                if let Err(err) = self.pop() {
                    log::debug!("web audio unavailable ({:?}), using hit sound", err);
                    Self::play_element(self.hit.as_ref());
                }
            }
        }
    }

    fn play_element(element: Option<&HtmlAudioElement>) {
        let Some(element) = element else {
            return;
        };
        element.set_current_time(0.0);
        match element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::debug!("sound was not played: {:?}", err);
                }
            }),
            Err(err) => log::debug!("sound was not played: {:?}", err),
        }
    }

    fn context(&self) -> Result<AudioContext, JsValue> {
        let mut slot = self.context.borrow_mut();
        if let Some(context) = slot.as_ref() {
            return Ok(context.clone());
        }
        let context = AudioContext::new()?;
        *slot = Some(context.clone());
        Ok(context)
    }

    /// Short triangle blip, synthesized so no asset is needed.
    fn pop(&self) -> Result<(), JsValue> {
        let context = self.context()?;
        let now = context.current_time();

        let oscillator = context.create_oscillator()?;
        oscillator.set_type(OscillatorType::Triangle);
        oscillator.frequency().set_value_at_time(700.0, now)?;

        let gain = context.create_gain()?;
        let envelope = gain.gain();
        envelope.set_value_at_time(0.0001, now)?;
        envelope.exponential_ramp_to_value_at_time(0.15, now + 0.01)?;
        envelope.exponential_ramp_to_value_at_time(0.0001, now + 0.25)?;

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&context.destination())?;
        oscillator.start()?;
        oscillator.stop_with_when(now + 0.26)?;
        Ok(())
    }
}
