use crate::api::ApiClient;
use crate::audio::Sounds;
use crate::theme;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::rc::Rc;
use std::time::Duration;
use whackamole_core::{Config, Controller, Creature, Effect, Effects, Round, Task, Theme};
use whackamole_protocol::{ApiCall, CallError, Difficulty, HOLE_COUNT, HoleIndex, Reply};
use yew::prelude::*;

fn millis(duration: Duration) -> u32 {
    duration.as_millis().try_into().unwrap_or(u32::MAX)
}

#[derive(Debug)]
pub(crate) enum Msg {
    NewGame,
    HoleClicked(HoleIndex),
    SetDifficulty(Difficulty),
    TogglePause,
    ToggleTheme,
    Tick(Task),
    Replied(Round, ApiCall, Result<Reply, CallError>),
}

#[derive(Properties, Clone, PartialEq)]
struct HoleProps {
    index: HoleIndex,
    creature: Option<Creature>,
    #[prop_or_default]
    locked: bool,
    callback: Callback<HoleIndex>,
}

#[function_component(HoleView)]
fn hole_component(props: &HoleProps) -> Html {
    let HoleProps {
        index,
        creature,
        locked,
        callback,
    } = props.clone();

    let class = classes!(
        "hole",
        creature.is_some().then_some("active"),
        locked.then_some("locked")
    );
    let style = creature.map(|creature| format!("--mole-img: url('{}')", creature.asset()));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("hole {} clicked", index);
        callback.emit(index)
    });

    html! {
        <div {class} {style} {onclick} data-index={index.to_string()}>
            <div class="mole"/>
        </div>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for creature skins instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the game server, defaults to the page's origin
    #[arg(long, default_value = "")]
    pub api: String,

    /// Difficulty selected on load (easy, medium or hard)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Length of a round in seconds
    #[arg(long)]
    pub seconds: Option<u32>,
}

impl GameProps {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(seconds) = self.seconds {
            config = config.with_game_seconds(seconds);
        }
        config
    }
}

pub(crate) struct GameView {
    controller: Controller<SmallRng>,
    api: ApiClient,
    sounds: Rc<Sounds>,
    preferences: LocalPreferences,
    theme: Theme,
    countdown: Option<Interval>,
    refresh: Option<Interval>,
}

impl GameView {
    fn task_slot(&mut self, task: Task) -> &mut Option<Interval> {
        match task {
            Task::Countdown => &mut self.countdown,
            Task::Refresh => &mut self.refresh,
        }
    }

    fn create_timer(ctx: &Context<Self>, task: Task, period: Duration) -> Interval {
        let link = ctx.link().clone();
        Interval::new(millis(period), move || link.send_message(Msg::Tick(task)))
    }

    fn send(&self, ctx: &Context<Self>, call: ApiCall) {
        let api = self.api.clone();
        let link = ctx.link().clone();
        let round = self.controller.round();
        wasm_bindgen_futures::spawn_local(async move {
            let reply = api.send(call).await;
            link.send_message(Msg::Replied(round, call, reply));
        });
    }

    /// Carry out what the controller asked for.
    fn run(&mut self, ctx: &Context<Self>, effects: Effects) {
        for effect in effects {
            log::trace!("effect: {:?}", effect);
            match effect {
                Effect::Call(call) => self.send(ctx, call),
                Effect::StartTask(task, period) => {
                    // replacing the old interval drops it, which cancels it
                    let timer = GameView::create_timer(ctx, task, period);
                    *self.task_slot(task) = Some(timer);
                }
                Effect::StopTask(task) => {
                    self.task_slot(task).take();
                }
                Effect::Play(cue) => self.sounds.play(cue),
                Effect::PlayLater(cue, delay) => {
                    let sounds = Rc::clone(&self.sounds);
                    Timeout::new(millis(delay), move || sounds.play(cue)).forget();
                }
                Effect::ShowSummary(summary, delay) => {
                    let notice = summary.to_string();
                    Timeout::new(millis(delay), move || gloo::dialogs::alert(&notice)).forget();
                }
            }
        }
    }

    fn view_stats(&self) -> Html {
        let timer = self.controller.timer();
        let scoreboard = self.controller.scoreboard();
        html! {
            <nav class="stats">
                <aside>{"Time: "}<b id="timer">{timer.time_left().to_string()}</b></aside>
                <aside>{"Score: "}<b id="score">{scoreboard.score.to_string()}</b></aside>
                <aside>{"Hits: "}<b id="hits">{scoreboard.hits.to_string()}</b></aside>
                <aside>
                    {"Misses: "}<b id="misses">{scoreboard.misses.to_string()}</b>
                    {
                        if scoreboard.max_misses > 0 {
                            html! { <small>{format!(" / {}", scoreboard.max_misses)}</small> }
                        } else {
                            html! {}
                        }
                    }
                </aside>
            </nav>
        }
    }

    fn view_controls(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let mode = self.controller.mode();
        let (pause_label, pause_class) = if mode.is_paused() {
            ("Resume", "paused")
        } else {
            ("Pause", "running")
        };
        let selected = self.controller.difficulty();

        html! {
            <div class="controls">
                <button id="pauseBtn" class={pause_class} disabled={mode.is_over()}
                    onclick={ctx.link().callback(|_| TogglePause)}>{pause_label}</button>
                {
                    for Difficulty::ALL.into_iter().map(|difficulty| {
                        let class = classes!("difficulty", (difficulty == selected).then_some("selected"));
                        let onclick = ctx.link().callback(move |_| SetDifficulty(difficulty));
                        html! {
                            <button id={format!("{}Btn", difficulty.level())} {class} {onclick}>{difficulty.label()}</button>
                        }
                    })
                }
                <button id="resetBtn" onclick={ctx.link().callback(|_| NewGame)}>{"Reset"}</button>
            </div>
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let locked = !self.controller.holes_enabled();
        let board = self.controller.board();
        html! {
            <div class={classes!("board", locked.then_some("locked"))}>
                {
                    for (0..HOLE_COUNT as HoleIndex).map(|index| {
                        let creature = board.creature_at(index);
                        let callback = ctx.link().callback(Msg::HoleClicked);
                        html! {
                            <HoleView {index} {creature} {locked} {callback}/>
                        }
                    })
                }
            </div>
        }
    }

    fn view_badges(&self) -> Html {
        let badges = self.controller.scoreboard().badges;
        html! {
            <section id="badgesList">
                { for badges.names().map(|name| html! { <div class="badge">{name}</div> }) }
            </section>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let preferences = LocalPreferences;
        let mut view = Self {
            controller: Controller::new(props.config(), SmallRng::seed_from_u64(seed)),
            api: ApiClient::new(&props.api),
            sounds: Rc::new(Sounds::from_document()),
            theme: theme::init(&preferences),
            preferences,
            countdown: None,
            refresh: None,
        };

        // always begin with a fresh round on page load
        let effects = view.controller.start_game();
        view.run(ctx, effects);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let effects = match msg {
            NewGame => self.controller.start_game(),
            HoleClicked(hole) => self.controller.hole_clicked(hole),
            SetDifficulty(difficulty) => self.controller.set_difficulty(difficulty),
            TogglePause => self.controller.toggle_pause(),
            ToggleTheme => {
                self.theme = self.theme.toggle(&mut self.preferences);
                theme::apply(self.theme);
                Effects::new()
            }
            Tick(task) => self.controller.tick(task),
            Replied(round, call, reply) => self.controller.on_reply(round, call, reply),
        };
        self.run(ctx, effects);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_toggle_theme = ctx.link().callback(|_| ToggleTheme);
        let status = match self.controller.last_error() {
            Some(err) => html! { <p class="status error">{err}</p> },
            None => html! {},
        };

        html! {
            <div class="whackamole">
                <header>
                    <h1>{"Whack-a-Mole"}</h1>
                    <button id="themeToggle" onclick={cb_toggle_theme}>{self.theme.icon()}</button>
                </header>
                {self.view_stats()}
                {self.view_controls(ctx)}
                {self.view_board(ctx)}
                {self.view_badges()}
                {status}
            </div>
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        let effects = self.controller.dispose();
        self.run(ctx, effects);
    }
}
