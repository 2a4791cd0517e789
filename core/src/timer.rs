/// Local countdown, the server never sees it except as the `timeLeft` of a pause.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClientTimer {
    time_left: u32,
    counting_down: bool,
}

impl ClientTimer {
    pub const fn new(seconds: u32) -> Self {
        Self {
            time_left: seconds,
            counting_down: true,
        }
    }

    pub fn reset(&mut self, seconds: u32) {
        *self = Self::new(seconds);
    }

    pub const fn time_left(&self) -> u32 {
        self.time_left
    }

    pub const fn time_left_ms(&self) -> u64 {
        self.time_left as u64 * 1000
    }

    pub const fn is_counting_down(&self) -> bool {
        self.counting_down
    }

    pub const fn is_expired(&self) -> bool {
        self.time_left == 0
    }

    pub fn halt(&mut self) {
        self.counting_down = false;
    }

    pub fn resume(&mut self) {
        self.counting_down = !self.is_expired();
    }

    /// Consume one second and return what is left. Halted timers do not move.
    pub fn tick(&mut self) -> u32 {
        if self.counting_down {
            self.time_left = self.time_left.saturating_sub(1);
            if self.time_left == 0 {
                self.counting_down = false;
            }
        }
        self.time_left
    }
}
