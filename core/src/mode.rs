/// What the player can currently do with the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl UiMode {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::GameOver)
    }
}
