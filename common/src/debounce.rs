// last-write-wins debouncing
//
// every input takes a token and replaces the pending value.  the timer started for
// that input later hands the token back; only the newest token releases the value, so
// a burst of keystrokes starts exactly one search no matter how the timers interleave
#[derive(Clone, Debug, Default)]
pub struct Debouncer<T> {
    latest: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Debouncer {
            latest: 0,
            pending: None,
        }
    }

    pub fn input(&mut self, value: T) -> u64 {
        self.latest += 1;
        self.pending = Some(value);
        self.latest
    }

    // called when the quiet period for `token` has elapsed
    pub fn settle(&mut self, token: u64) -> Option<T> {
        if token != self.latest {
            return None;
        }

        self.pending.take()
    }
}
