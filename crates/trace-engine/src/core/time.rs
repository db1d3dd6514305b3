use crate::api::types::Prompt;
use crate::catalog::Section;

/// Deferred session work. Timers are driven by `tick(dt)` instead of a wall
/// clock so tests can step time explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedAction {
    /// Wipe the ink trail after a completed stroke has flashed.
    ClearTrail,
    /// Lower the celebration flag.
    HideCelebration,
    /// Move on from the given completed item, unless the user already left it.
    AdvanceItem { section: Section, index: usize },
    /// Dismiss the current prompt.
    HidePrompt,
    /// Show a prompt later (the welcome greeting).
    ShowPrompt(Prompt),
}

impl TimedAction {
    fn same_kind(&self, other: &TimedAction) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

#[derive(Debug, Clone)]
struct Pending {
    remaining: f32,
    action: TimedAction,
}

/// Fire-and-forget timer queue with cancellation by action kind.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` once `delay` seconds have elapsed.
    pub fn schedule(&mut self, delay: f32, action: TimedAction) {
        self.pending.push(Pending {
            remaining: delay.max(0.0),
            action,
        });
    }

    /// Replace any pending action of the same kind.
    pub fn reschedule(&mut self, delay: f32, action: TimedAction) {
        self.cancel(&action);
        self.schedule(delay, action);
    }

    /// Drop every pending action of the same kind as `action`
    /// (payloads are ignored).
    pub fn cancel(&mut self, action: &TimedAction) {
        self.pending.retain(|p| !p.action.same_kind(action));
    }

    /// Count down every pending timer.
    pub fn advance(&mut self, dt: f32) {
        for p in &mut self.pending {
            p.remaining -= dt;
        }
    }

    /// Remove and return the most overdue action, if any came due.
    ///
    /// Callers pop one action at a time so that a handler which cancels or
    /// reschedules other timers affects actions that are due in the same tick.
    pub fn pop_due(&mut self) -> Option<TimedAction> {
        let (i, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.remaining <= 0.0)
            .min_by(|a, b| a.1.remaining.total_cmp(&b.1.remaining))?;
        Some(self.pending.remove(i).action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(s: &mut Scheduler, dt: f32) -> Vec<TimedAction> {
        s.advance(dt);
        std::iter::from_fn(|| s.pop_due()).collect()
    }

    #[test]
    fn fires_after_delay() {
        let mut s = Scheduler::new();
        s.schedule(0.3, TimedAction::ClearTrail);
        assert!(step(&mut s, 0.2).is_empty());
        assert_eq!(step(&mut s, 0.15), vec![TimedAction::ClearTrail]);
        assert!(step(&mut s, 1.0).is_empty());
    }

    #[test]
    fn due_actions_in_deadline_order() {
        let mut s = Scheduler::new();
        s.schedule(2.2, TimedAction::AdvanceItem { section: Section::Letters, index: 0 });
        s.schedule(2.0, TimedAction::HideCelebration);
        let due = step(&mut s, 3.0);
        assert_eq!(
            due,
            vec![
                TimedAction::HideCelebration,
                TimedAction::AdvanceItem { section: Section::Letters, index: 0 },
            ]
        );
    }

    #[test]
    fn cancel_between_pops_drops_due_action() {
        let mut s = Scheduler::new();
        s.schedule(1.0, TimedAction::AdvanceItem { section: Section::Letters, index: 0 });
        s.schedule(2.0, TimedAction::HidePrompt);
        s.advance(2.5);
        assert_eq!(
            s.pop_due(),
            Some(TimedAction::AdvanceItem { section: Section::Letters, index: 0 })
        );
        s.cancel(&TimedAction::HidePrompt);
        assert_eq!(s.pop_due(), None);
    }

    #[test]
    fn reschedule_is_last_wins() {
        let mut s = Scheduler::new();
        s.schedule(1.0, TimedAction::HidePrompt);
        step(&mut s, 0.9);
        s.reschedule(1.0, TimedAction::HidePrompt);
        assert!(step(&mut s, 0.5).is_empty());
        assert_eq!(step(&mut s, 0.5), vec![TimedAction::HidePrompt]);
    }

    #[test]
    fn cancel_ignores_payload() {
        let mut s = Scheduler::new();
        s.schedule(1.0, TimedAction::AdvanceItem { section: Section::Words, index: 4 });
        s.cancel(&TimedAction::AdvanceItem { section: Section::Letters, index: 0 });
        assert!(step(&mut s, 2.0).is_empty());
    }
}
