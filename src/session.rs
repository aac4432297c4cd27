//! The typing test itself: a state machine fed by ticks and keystrokes.

/// Seconds a test runs for unless configured otherwise
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 30;

/// Lifecycle stage of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for the first keystroke
    Ready,
    Typing,
    /// Time is up
    Done,
}

/// Which screen is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Prompt,
    Stats,
}

/// Keyboard input as seen by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// One or more runes entered at once, e.g. a keypress or a paste
    Chars(Vec<char>),
    Backspace,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One second of wall-clock time has passed
    Tick,
    Key(Key),
}

/// What the host should do after an event has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    /// Schedule the next tick
    Tick,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub time_limit_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    prompt: Vec<char>,
    user_input: Vec<char>,
    cursor: usize,
    mistakes: usize,
    chars_typed: usize,
    time_passed: u64,
    time_limit: u64,
    view: View,
    state: State,
}

impl SessionState {
    pub fn new(prompt: &str, config: &SessionConfig) -> Self {
        Self {
            prompt: prompt.chars().collect(),
            user_input: Vec::new(),
            cursor: 0,
            mistakes: 0,
            chars_typed: 0,
            time_passed: 0,
            time_limit: config.time_limit_secs,
            view: View::Prompt,
            state: State::Ready,
        }
    }

    pub fn handle(&mut self, event: &Event) -> Command {
        if self.view == View::Stats {
            return Command::Quit;
        }

        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => self.on_key(key),
        }
    }

    fn on_tick(&mut self) -> Command {
        if self.state == State::Typing {
            // Checked before counting this tick, so a test lasts
            // time_limit + 1 ticks.
            if self.time_passed >= self.time_limit {
                self.state = State::Done;
                self.view = View::Stats;
                tracing::info!(
                    chars_typed = self.chars_typed,
                    mistakes = self.mistakes,
                    time_passed = self.time_passed,
                    "typing test finished"
                );
            }

            self.time_passed += 1;
        }

        Command::Tick
    }

    fn on_key(&mut self, key: &Key) -> Command {
        match key {
            Key::Cancel => Command::Quit,
            Key::Backspace => {
                self.backspace();
                Command::None
            }
            Key::Chars(chars) => {
                self.write(chars);
                Command::None
            }
        }
    }

    fn backspace(&mut self) {
        if self.state != State::Typing || self.cursor == 0 {
            return;
        }

        self.cursor -= 1;
        self.user_input.truncate(self.cursor);
    }

    fn write(&mut self, chars: &[char]) {
        if chars.is_empty() {
            return;
        }

        if self.state == State::Ready {
            self.state = State::Typing;
            tracing::info!(
                prompt_len = self.prompt.len(),
                time_limit = self.time_limit,
                "typing test started"
            );
        }

        if self.state != State::Typing {
            return;
        }

        // Anything past the end of the prompt has nothing to match.
        let mistakes = chars
            .iter()
            .enumerate()
            .filter(|&(i, c)| self.prompt.get(self.cursor + i) != Some(c))
            .count();

        self.mistakes += mistakes;
        self.user_input.extend_from_slice(chars);
        self.cursor += chars.len();
        self.chars_typed += chars.len();
        tracing::trace!(cursor = self.cursor, mistakes = self.mistakes, "input");
    }

    pub fn prompt(&self) -> &[char] {
        &self.prompt
    }

    pub fn user_input(&self) -> &[char] {
        &self.user_input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    pub fn chars_typed(&self) -> usize {
        self.chars_typed
    }

    pub fn time_passed(&self) -> u64 {
        self.time_passed
    }

    pub fn time_limit(&self) -> u64 {
        self.time_limit
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.time_limit.saturating_sub(self.time_passed)
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn state(&self) -> State {
        self.state
    }
}

/// Apply one event to a session, returning the next session and the host command
pub fn update(mut session: SessionState, event: &Event) -> (SessionState, Command) {
    let command = session.handle(event);
    (session, command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(prompt: &str, time_limit_secs: u64) -> SessionState {
        SessionState::new(prompt, &SessionConfig { time_limit_secs })
    }

    fn chars(s: &str) -> Event {
        Event::Key(Key::Chars(s.chars().collect()))
    }

    fn type_each(session: &mut SessionState, s: &str) {
        for c in s.chars() {
            session.handle(&Event::Key(Key::Chars(vec![c])));
        }
    }

    #[test]
    fn new_session_is_ready_and_empty() {
        let s = SessionState::new("hello world", &SessionConfig::default());

        assert_eq!(s.state(), State::Ready);
        assert_eq!(s.view(), View::Prompt);
        assert_eq!(s.prompt().len(), 11);
        assert!(s.user_input().is_empty());
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.mistakes(), 0);
        assert_eq!(s.chars_typed(), 0);
        assert_eq!(s.time_passed(), 0);
        assert_eq!(s.time_limit(), DEFAULT_TIME_LIMIT_SECS);
    }

    #[test]
    fn first_char_starts_typing_and_is_counted() {
        let mut s = session("test", 30);

        let cmd = s.handle(&chars("t"));

        assert_eq!(cmd, Command::None);
        assert_eq!(s.state(), State::Typing);
        assert_eq!(s.cursor(), 1);
        assert_eq!(s.chars_typed(), 1);
        assert_eq!(s.mistakes(), 0);
        assert_eq!(s.user_input(), &['t']);
    }

    #[test]
    fn empty_batch_does_not_start_the_test() {
        let mut s = session("test", 30);

        assert_eq!(s.handle(&chars("")), Command::None);
        assert_eq!(s.state(), State::Ready);
        assert_eq!(s.chars_typed(), 0);
    }

    #[test]
    fn matching_input_has_no_mistakes() {
        let mut s = session("hello world", 30);

        type_each(&mut s, "hello ");
        s.handle(&chars("world"));

        assert_eq!(s.mistakes(), 0);
        assert_eq!(s.chars_typed(), 11);
        assert_eq!(s.cursor(), s.user_input().len());
    }

    #[test]
    fn every_wrong_char_is_a_mistake() {
        let mut s = session("abcd", 30);

        s.handle(&chars("xy"));
        type_each(&mut s, "zw");

        assert_eq!(s.mistakes(), 4);
        assert_eq!(s.mistakes(), s.chars_typed());
    }

    #[test]
    fn batch_is_compared_positionally() {
        let mut s = session("abcd", 30);

        s.handle(&chars("a"));
        s.handle(&chars("bXd"));

        assert_eq!(s.mistakes(), 1);
        assert_eq!(s.chars_typed(), 4);
        assert_eq!(s.cursor(), 4);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut s = session("Go", 30);

        s.handle(&chars("go"));

        assert_eq!(s.mistakes(), 1);
    }

    #[test]
    fn backspace_truncates_input() {
        let mut s = session("abc", 30);

        s.handle(&chars("ab"));
        s.handle(&Event::Key(Key::Backspace));

        assert_eq!(s.cursor(), 1);
        assert_eq!(s.user_input(), &['a']);
        assert_eq!(s.chars_typed(), 2);
    }

    #[test]
    fn backspace_at_start_is_a_noop() {
        let mut s = session("abc", 30);

        s.handle(&chars("a"));
        s.handle(&Event::Key(Key::Backspace));
        s.handle(&Event::Key(Key::Backspace));

        assert_eq!(s.cursor(), 0);
        assert!(s.user_input().is_empty());
        assert_eq!(s.state(), State::Typing);
    }

    #[test]
    fn backspace_before_typing_is_ignored() {
        let mut s = session("abc", 30);

        assert_eq!(s.handle(&Event::Key(Key::Backspace)), Command::None);
        assert_eq!(s.state(), State::Ready);
        assert_eq!(s.cursor(), 0);
    }

    #[test]
    fn backspace_does_not_retract_mistakes() {
        let mut s = session("abc", 30);

        s.handle(&chars("x"));
        s.handle(&Event::Key(Key::Backspace));
        s.handle(&chars("a"));

        assert_eq!(s.mistakes(), 1);
        assert_eq!(s.chars_typed(), 2);
        assert_eq!(s.user_input(), &['a']);
    }

    #[test]
    fn retyping_the_same_wrong_char_counts_again() {
        let mut s = session("abc", 30);

        s.handle(&chars("x"));
        s.handle(&Event::Key(Key::Backspace));
        s.handle(&chars("x"));

        assert_eq!(s.mistakes(), 2);
        assert_eq!(s.chars_typed(), 2);
    }

    #[test]
    fn typing_past_the_prompt_counts_as_mistakes() {
        let mut s = session("ab", 30);

        s.handle(&chars("ab"));
        s.handle(&chars("cd"));
        s.handle(&chars("e"));

        assert_eq!(s.mistakes(), 3);
        assert_eq!(s.chars_typed(), 5);
        assert_eq!(s.cursor(), 5);
        assert_eq!(s.user_input().len(), 5);
    }

    #[test]
    fn batch_straddling_the_prompt_end() {
        let mut s = session("ab", 30);

        s.handle(&chars("abc"));

        assert_eq!(s.mistakes(), 1);
        assert_eq!(s.chars_typed(), 3);
    }

    #[test]
    fn ticks_before_typing_are_inert() {
        let mut s = session("abc", 1);

        for _ in 0..5 {
            assert_eq!(s.handle(&Event::Tick), Command::Tick);
        }

        assert_eq!(s.state(), State::Ready);
        assert_eq!(s.time_passed(), 0);
    }

    #[test]
    fn test_finishes_one_tick_after_the_limit() {
        let limit = 3;
        let mut s = session("abc", limit);
        s.handle(&chars("a"));

        for tick in 1..=limit {
            assert_eq!(s.handle(&Event::Tick), Command::Tick);
            assert_eq!(s.state(), State::Typing, "still typing after tick {tick}");
            assert_eq!(s.time_passed(), tick);
        }
        assert_eq!(s.seconds_remaining(), 0);

        assert_eq!(s.handle(&Event::Tick), Command::Tick);
        assert_eq!(s.state(), State::Done);
        assert_eq!(s.view(), View::Stats);
        assert_eq!(s.time_passed(), limit + 1);
    }

    #[test]
    fn zero_time_limit_finishes_on_first_tick() {
        let mut s = session("abc", 0);
        s.handle(&chars("a"));

        s.handle(&Event::Tick);

        assert_eq!(s.state(), State::Done);
        assert_eq!(s.time_passed(), 1);
    }

    #[test]
    fn cancel_quits_in_any_state() {
        let cancel = Event::Key(Key::Cancel);

        let mut ready = session("abc", 1);
        assert_eq!(ready.handle(&cancel), Command::Quit);
        assert_eq!(ready.state(), State::Ready);

        let mut typing = session("abc", 1);
        typing.handle(&chars("a"));
        assert_eq!(typing.handle(&cancel), Command::Quit);
        assert_eq!(typing.cursor(), 1);
    }

    #[test]
    fn any_event_quits_once_stats_are_shown() {
        let mut s = session("abc", 0);
        s.handle(&chars("a"));
        s.handle(&Event::Tick);
        assert_eq!(s.view(), View::Stats);
        let before = s.clone();

        assert_eq!(s.handle(&Event::Tick), Command::Quit);
        assert_eq!(s.handle(&chars("b")), Command::Quit);
        assert_eq!(s.handle(&Event::Key(Key::Backspace)), Command::Quit);
        assert_eq!(s.handle(&chars("")), Command::Quit);
        assert_eq!(s, before);
    }

    #[test]
    fn typing_after_done_is_ignored() {
        let mut s = session("abc", 0);
        s.handle(&chars("a"));
        s.handle(&Event::Tick);
        let typed = s.chars_typed();

        s.handle(&chars("bc"));

        assert_eq!(s.chars_typed(), typed);
    }

    #[test]
    fn update_is_a_pure_transition() {
        let s = session("ab", 5);

        let (s, cmd) = update(s, &chars("a"));
        assert_eq!(cmd, Command::None);
        assert_eq!(s.state(), State::Typing);

        let (s, cmd) = update(s, &Event::Tick);
        assert_eq!(cmd, Command::Tick);
        assert_eq!(s.time_passed(), 1);

        let (_, cmd) = update(s, &Event::Key(Key::Cancel));
        assert_eq!(cmd, Command::Quit);
    }

    #[test]
    fn typo_then_run_out_the_clock() {
        let mut s = session("ab cd", 1);

        type_each(&mut s, "ax cd");
        s.handle(&Event::Tick);
        assert_eq!(s.view(), View::Prompt);
        s.handle(&Event::Tick);

        assert_eq!(s.view(), View::Stats);
        assert_eq!(s.mistakes(), 1);
        assert_eq!(s.chars_typed(), 5);
        let acc = crate::stats::accuracy(s.chars_typed(), s.mistakes());
        assert_eq!(format!("{acc:.2}"), "80.00");
    }
}
