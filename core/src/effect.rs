use core::time::Duration;
use smallvec::SmallVec;

use crate::protocol::ApiCall;
use crate::*;

/// Audible feedback, the host decides how (or whether) to play it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cue {
    Hit,
    Miss,
    Pop,
}

/// Work the controller asks its host to do. The controller itself never touches the network, timers or speakers.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Send a request, and feed the outcome back through `Controller::on_reply`
    Call(ApiCall),
    /// (Re)arm a periodic task, replacing any live instance of it
    StartTask(Task, Duration),
    StopTask(Task),
    Play(Cue),
    /// One-shot delayed cue, allowed to fire even if the round ended meanwhile
    PlayLater(Cue, Duration),
    ShowSummary(Summary, Duration),
}

pub type Effects = SmallVec<[Effect; 4]>;

pub trait EffectsExt {
    fn calls(&self) -> impl Iterator<Item = &ApiCall>;
    fn has_call(&self, call: ApiCall) -> bool;
}

impl EffectsExt for Effects {
    fn calls(&self) -> impl Iterator<Item = &ApiCall> {
        self.iter().filter_map(|effect| match effect {
            Effect::Call(call) => Some(call),
            _ => None,
        })
    }

    fn has_call(&self, call: ApiCall) -> bool {
        self.calls().any(|&c| c == call)
    }
}
