use core::time::Duration;

/// The two periodic jobs that drive a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    /// Once per second, moves the local countdown
    Countdown,
    /// At the difficulty's spawn interval, polls the server for moles
    Refresh,
}

impl Task {
    pub const ALL: [Task; 2] = [Task::Countdown, Task::Refresh];
}

/// Which periodic tasks are live and at what period.
///
/// There is at most one instance of each task: starting a task that is already live replaces it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskSchedule {
    countdown: Option<Duration>,
    refresh: Option<Duration>,
}

impl TaskSchedule {
    fn slot(&mut self, task: Task) -> &mut Option<Duration> {
        match task {
            Task::Countdown => &mut self.countdown,
            Task::Refresh => &mut self.refresh,
        }
    }

    pub fn period(&self, task: Task) -> Option<Duration> {
        match task {
            Task::Countdown => self.countdown,
            Task::Refresh => self.refresh,
        }
    }

    pub fn is_live(&self, task: Task) -> bool {
        self.period(task).is_some()
    }

    pub fn any_live(&self) -> bool {
        Task::ALL.into_iter().any(|task| self.is_live(task))
    }

    /// Returns the period that was replaced, if any.
    pub fn start(&mut self, task: Task, period: Duration) -> Option<Duration> {
        self.slot(task).replace(period)
    }

    /// Returns whether the task was live.
    pub fn stop(&mut self, task: Task) -> bool {
        self.slot(task).take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_replaces_instead_of_stacking() {
        let mut tasks = TaskSchedule::default();

        assert_eq!(tasks.start(Task::Refresh, Duration::from_millis(1000)), None);
        assert_eq!(
            tasks.start(Task::Refresh, Duration::from_millis(500)),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(tasks.period(Task::Refresh), Some(Duration::from_millis(500)));
        assert!(!tasks.is_live(Task::Countdown));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut tasks = TaskSchedule::default();
        tasks.start(Task::Countdown, Duration::from_secs(1));

        assert!(tasks.stop(Task::Countdown));
        assert!(!tasks.stop(Task::Countdown));
        assert!(!tasks.any_live());
    }
}
