// Frame-stepped number counter used for the stats section.
//
// Counts from 0 to a target over a fixed duration at a nominal frame rate;
// intermediate frames display the ceiling of the running value, the final
// frame displays the target exactly.

pub const COUNT_DURATION_MS: f64 = 2000.0;
pub const NOMINAL_FRAME_MS: f64 = 16.0;

pub struct Counter {
    target: f64,
    current: f64,
    increment: f64,
}

/// One frame of counting: still running with a display value, or finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStep {
    Running(i64),
    Done(i64),
}

impl CounterStep {
    pub fn display(self) -> i64 {
        match self {
            CounterStep::Running(v) | CounterStep::Done(v) => v,
        }
    }
}

impl Counter {
    pub fn new(target: i64) -> Self {
        let target = target as f64;
        Self {
            target,
            current: 0.0,
            increment: target / (COUNT_DURATION_MS / NOMINAL_FRAME_MS),
        }
    }

    pub fn step(&mut self) -> CounterStep {
        self.current += self.increment;
        if self.current < self.target {
            CounterStep::Running(self.current.ceil() as i64)
        } else {
            CounterStep::Done(self.target as i64)
        }
    }
}
