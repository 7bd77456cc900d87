//! Tick-driven delays

/// Outcome of advancing a time-driven step by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Running,
    Finished,
}

impl Progress {
    pub fn is_finished(&self) -> bool {
        matches!(self, Progress::Finished)
    }
}

/// Fixed-duration suspension
///
/// Finishes on the first tick whose accumulated time reaches the duration,
/// so even a zero duration lasts one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delay {
    duration: f32,
    elapsed: f32,
}

impl Delay {
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) -> Progress {
        self.elapsed += sanitize_dt(dt);
        if self.elapsed >= self.duration {
            Progress::Finished
        } else {
            Progress::Running
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Negative or non-finite frame deltas count as no time passing
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_accumulates_until_duration() {
        let mut delay = Delay::new(0.5);
        assert_eq!(delay.tick(0.2), Progress::Running);
        assert_eq!(delay.tick(0.2), Progress::Running);
        assert_eq!(delay.tick(0.2), Progress::Finished);
    }

    #[test]
    fn zero_delay_still_takes_a_tick() {
        let mut delay = Delay::new(0.0);
        assert_eq!(delay.elapsed(), 0.0);
        assert_eq!(delay.tick(0.0), Progress::Finished);
    }

    #[test]
    fn bad_deltas_are_ignored() {
        let mut delay = Delay::new(1.0);
        delay.tick(-3.0);
        delay.tick(f32::NAN);
        delay.tick(f32::INFINITY);
        assert_eq!(delay.elapsed(), 0.0);
    }
}
