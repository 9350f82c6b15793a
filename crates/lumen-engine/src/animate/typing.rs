//! Typing-text animation: cycles through role phrases, typing forward and
//! erasing backward.
//!
//! Driven from the frame loop with a millisecond wait accumulator rather
//! than chained host timeouts, so the state stays owned and testable.

/// Millisecond delays for each phase of the typing loop.
#[derive(Debug, Clone)]
pub struct TypingConfig {
    /// Delay after typing one character.
    pub type_delay_ms: f32,
    /// Delay after erasing one character.
    pub erase_delay_ms: f32,
    /// Hold time with the full phrase shown.
    pub hold_delay_ms: f32,
    /// Pause before the next phrase starts typing.
    pub resume_delay_ms: f32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_delay_ms: 60.0,
            erase_delay_ms: 30.0,
            hold_delay_ms: 800.0,
            resume_delay_ms: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Typing,
    Erasing,
}

/// State machine for the phrase carousel.
/// `tick` advances it by frame time; `text` is the string to display.
pub struct TypingLoop {
    config: TypingConfig,
    phrases: Vec<String>,
    phrase_idx: usize,
    /// Characters of the current phrase shown right now.
    shown: usize,
    direction: Direction,
    wait_ms: f32,
}

impl TypingLoop {
    pub fn new(phrases: Vec<String>, config: TypingConfig) -> Self {
        Self {
            config,
            phrases,
            phrase_idx: 0,
            shown: 0,
            direction: Direction::Typing,
            wait_ms: 0.0,
        }
    }

    fn current(&self) -> &str {
        &self.phrases[self.phrase_idx]
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    /// Visible portion of the current phrase.
    pub fn text(&self) -> String {
        if self.phrases.is_empty() {
            return String::new();
        }
        self.current().chars().take(self.shown).collect()
    }

    /// Advance by `dt_ms`. Returns true when the visible text changed.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        self.wait_ms -= dt_ms;
        let mut changed = false;
        while self.wait_ms <= 0.0 {
            changed |= self.step();
        }
        changed
    }

    /// One step of the cadence; schedules the next wait.
    fn step(&mut self) -> bool {
        match self.direction {
            Direction::Typing => {
                if self.shown < self.current_len() {
                    self.shown += 1;
                    self.wait_ms += self.config.type_delay_ms;
                    true
                } else {
                    self.direction = Direction::Erasing;
                    self.wait_ms += self.config.hold_delay_ms;
                    false
                }
            }
            Direction::Erasing => {
                if self.shown > 0 {
                    self.shown -= 1;
                    self.wait_ms += self.config.erase_delay_ms;
                    true
                } else {
                    self.direction = Direction::Typing;
                    self.phrase_idx = (self.phrase_idx + 1) % self.phrases.len();
                    self.wait_ms += self.config.resume_delay_ms;
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// A loop primed the way the runner primes it: the first frame has a
    /// zero delta, which types the first character immediately.
    fn primed(items: &[&str]) -> TypingLoop {
        let mut t = TypingLoop::new(phrases(items), TypingConfig::default());
        t.tick(0.0);
        t
    }

    #[test]
    fn first_frame_types_first_char() {
        let t = primed(&["AI"]);
        assert_eq!(t.text(), "A");
    }

    #[test]
    fn types_one_char_per_delay() {
        let mut t = primed(&["AI"]);
        assert!(t.tick(60.0));
        assert_eq!(t.text(), "AI");
    }

    #[test]
    fn holds_at_full_phrase_then_erases() {
        let mut t = primed(&["AI"]);
        t.tick(60.0); // "AI"
        assert!(!t.tick(60.0), "flip to erasing shows no change yet");
        assert_eq!(t.text(), "AI");
        // Nothing happens until the hold expires.
        assert!(!t.tick(700.0));
        assert!(t.tick(100.0));
        assert_eq!(t.text(), "A");
        t.tick(30.0);
        assert_eq!(t.text(), "");
    }

    #[test]
    fn wraps_to_next_phrase() {
        let mut t = primed(&["Hi", "Yo"]);
        t.tick(60.0); // "Hi"
        t.tick(60.0); // hold starts
        t.tick(800.0); // "H"
        t.tick(30.0); // ""
        t.tick(30.0); // flip to next phrase, resume wait
        t.tick(200.0); // first char of "Yo"
        assert_eq!(t.text(), "Y");
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let mut t = TypingLoop::new(Vec::new(), TypingConfig::default());
        assert!(!t.tick(1000.0));
        assert_eq!(t.text(), "");
    }

    #[test]
    fn multibyte_phrases_slice_by_char() {
        let mut t = primed(&["Café"]);
        t.tick(60.0);
        t.tick(60.0);
        t.tick(60.0);
        assert_eq!(t.text(), "Café");
    }
}
