//! Cycling highlight: an index that walks a list on a fixed period.

use std::rc::Rc;

use yew::prelude::*;

pub const SERVICES_PERIOD_MS: u32 = 2_000;
pub const PORTFOLIO_PERIOD_MS: u32 = 1_500;
pub const TEAM_PERIOD_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cycle {
    len: usize,
    index: Option<usize>,
}

pub enum CycleAction {
    SetLen(usize),
    Start,
    Tick,
}

impl Cycle {
    pub fn new(len: usize) -> Self {
        Self { len, index: None }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_active(&self, i: usize) -> bool {
        self.index == Some(i)
    }

    pub fn start(&mut self) {
        if self.len > 0 {
            self.index = Some(0);
        }
    }

    pub fn tick(&mut self) {
        if self.len == 0 {
            self.index = None;
            return;
        }
        self.index = Some(match self.index {
            None => 0,
            Some(i) => (i + 1) % self.len,
        });
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index.map_or(false, |i| i >= len) {
            self.index = None;
        }
    }
}

impl Reducible for Cycle {
    type Action = CycleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CycleAction::SetLen(len) => next.set_len(len),
            CycleAction::Start => next.start(),
            CycleAction::Tick => next.tick(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_selects_zero() {
        let mut c = Cycle::new(12);
        assert_eq!(c.index(), None);
        c.tick();
        assert_eq!(c.index(), Some(0));
        c.tick();
        assert_eq!(c.index(), Some(1));
    }

    #[test]
    fn wraps_and_stays_in_bounds() {
        let mut c = Cycle::new(3);
        c.start();
        let mut seen = Vec::new();
        for _ in 0..7 {
            c.tick();
            let i = c.index().unwrap();
            assert!(i < 3);
            seen.push(i);
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn empty_list_never_activates() {
        let mut c = Cycle::new(0);
        c.start();
        assert_eq!(c.index(), None);
        c.tick();
        assert_eq!(c.index(), None);
        assert!(!c.is_active(0));
    }

    #[test]
    fn shrinking_drops_out_of_range_index() {
        let mut c = Cycle::new(5);
        c.start();
        for _ in 0..4 {
            c.tick();
        }
        assert_eq!(c.index(), Some(4));
        c.set_len(3);
        assert_eq!(c.index(), None);

        let mut c = Cycle::new(5);
        c.start();
        c.set_len(2);
        assert_eq!(c.index(), Some(0));
    }

    #[test]
    fn reducer_matches_direct_calls() {
        let c = Rc::new(Cycle::new(2));
        let c = c.reduce(CycleAction::Start);
        assert!(c.is_active(0));
        let c = c.reduce(CycleAction::Tick);
        assert!(c.is_active(1));
        let c = c.reduce(CycleAction::SetLen(4));
        assert_eq!(c.len(), 4);
        let c = c.reduce(CycleAction::Tick);
        assert!(c.is_active(2));
    }
}
