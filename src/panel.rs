//! Translation panel state machine.
//!
//! Owns all interactive session state: the input text, the translated text,
//! and the selected language pair. Edits re-arm a single coalescing debounce
//! deadline; when the deadline elapses, `poll` hands back a request for the
//! current state. Responses are applied through `apply`, which drops anything
//! older than the result already on screen.
//!
//! The panel is deliberately free of I/O: the caller supplies the clock,
//! dispatches requests, and feeds back results, so the whole state machine is
//! testable without a timer or a network.

use std::time::{Duration, Instant};
use tracing::debug;

/// Lifecycle of the translation output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No input; output is clear.
    #[default]
    Idle,
    /// A debounce deadline is armed or a request is in flight.
    Pending,
    /// Output holds a successful translation.
    Done,
    /// Output holds an error string.
    Error,
}

/// A translation request ready to be dispatched.
///
/// `seq` is monotonically increasing; responses echo it back so stale
/// results can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    pub seq: u64,
    pub text: String,
    pub from: String,
    pub to: String,
}

/// The interactive translation session.
#[derive(Debug)]
pub struct Panel {
    source_text: String,
    translated_text: String,
    source_lang: String,
    target_lang: String,
    phase: Phase,
    debounce: Duration,
    deadline: Option<Instant>,
    next_seq: u64,
    applied_seq: u64,
}

impl Panel {
    /// Create a panel with the given language pair and debounce interval.
    ///
    /// Callers are expected to pass catalog codes; the panel itself never
    /// rejects a pair (same-language pairs are allowed and not
    /// short-circuited).
    pub fn new(source_lang: &str, target_lang: &str, debounce: Duration) -> Self {
        Self {
            source_text: String::new(),
            translated_text: String::new(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
            phase: Phase::Idle,
            debounce,
            deadline: None,
            next_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Replace the input text and re-arm the debounce deadline.
    pub fn set_source_text(&mut self, text: impl Into<String>, now: Instant) {
        self.source_text = text.into();
        self.rearm(now);
    }

    /// Append a character to the input text.
    pub fn push_char(&mut self, c: char, now: Instant) {
        self.source_text.push(c);
        self.rearm(now);
    }

    /// Delete the last character of the input text.
    pub fn pop_char(&mut self, now: Instant) {
        if self.source_text.pop().is_some() {
            self.rearm(now);
        }
    }

    /// Select a new source language.
    pub fn set_source_lang(&mut self, code: &str, now: Instant) {
        if self.source_lang != code {
            self.source_lang = code.to_string();
            self.rearm(now);
        }
    }

    /// Select a new target language.
    pub fn set_target_lang(&mut self, code: &str, now: Instant) {
        if self.target_lang != code {
            self.target_lang = code.to_string();
            self.rearm(now);
        }
    }

    /// Exchange source and target languages together with their text
    /// buffers, in one state update.
    ///
    /// Swapping changes the input text, so the normal on-change rule re-arms
    /// the deadline; the swap itself issues nothing.
    pub fn swap(&mut self, now: Instant) {
        std::mem::swap(&mut self.source_lang, &mut self.target_lang);
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
        self.rearm(now);
    }

    /// Check the debounce deadline; if it has elapsed, produce the request
    /// for the current state.
    ///
    /// Blank input issues nothing and clears the output instead.
    pub fn poll(&mut self, now: Instant) -> Option<TranslateRequest> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;

        if self.source_text.trim().is_empty() {
            self.translated_text.clear();
            self.phase = Phase::Idle;
            return None;
        }

        Some(self.issue())
    }

    /// Request a translation immediately, bypassing the timer.
    ///
    /// No-op on blank input: nothing is issued and the output is untouched.
    pub fn translate_now(&mut self) -> Option<TranslateRequest> {
        if self.source_text.trim().is_empty() {
            return None;
        }
        self.deadline = None;
        Some(self.issue())
    }

    /// Apply a finished translation attempt.
    ///
    /// Responses older than the last applied one are dropped; returns whether
    /// the result was taken. Failures surface as `"Error: "` plus the message.
    pub fn apply(&mut self, seq: u64, result: Result<String, String>) -> bool {
        if seq < self.applied_seq {
            debug!("dropping stale response {} (applied {})", seq, self.applied_seq);
            return false;
        }
        self.applied_seq = seq;

        match result {
            Ok(text) => {
                self.translated_text = text;
                self.phase = Phase::Done;
            }
            Err(message) => {
                self.translated_text = format!("Error: {}", message);
                self.phase = Phase::Error;
            }
        }
        true
    }

    // A new deadline replaces any armed one: rapid edits coalesce into a
    // single request for the final state.
    fn rearm(&mut self, now: Instant) {
        self.deadline = Some(now + self.debounce);
        self.phase = Phase::Pending;
    }

    fn issue(&mut self) -> TranslateRequest {
        self.phase = Phase::Pending;
        self.next_seq += 1;
        TranslateRequest {
            seq: self.next_seq,
            text: self.source_text.clone(),
            from: self.source_lang.clone(),
            to: self.target_lang.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(250);

    fn panel() -> Panel {
        Panel::new("en", "uz", DEBOUNCE)
    }

    #[test]
    fn test_starts_idle() {
        let p = panel();
        assert_eq!(p.phase(), Phase::Idle);
        assert_eq!(p.source_text(), "");
        assert_eq!(p.translated_text(), "");
    }

    #[test]
    fn test_debounce_fires_after_interval() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        assert_eq!(p.phase(), Phase::Pending);
        assert_eq!(p.poll(t0), None);
        assert_eq!(p.poll(t0 + Duration::from_millis(100)), None);

        let req = p.poll(t0 + DEBOUNCE).unwrap();
        assert_eq!(req.text, "hello");
        assert_eq!(req.from, "en");
        assert_eq!(req.to, "uz");
    }

    #[test]
    fn test_rapid_edits_coalesce_to_one_request() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("h", t0);
        p.set_source_text("he", t0 + Duration::from_millis(50));
        p.set_source_text("hel", t0 + Duration::from_millis(100));

        // First deadline would have elapsed by now, but edits re-armed it.
        assert_eq!(p.poll(t0 + DEBOUNCE), None);

        let req = p.poll(t0 + Duration::from_millis(100) + DEBOUNCE).unwrap();
        assert_eq!(req.text, "hel");

        // Nothing further is due.
        assert_eq!(p.poll(t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_blank_input_clears_without_request() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        p.apply(req.seq, Ok("salom".to_string()));
        assert_eq!(p.translated_text(), "salom");

        p.set_source_text("", t0 + Duration::from_secs(1));
        assert_eq!(p.poll(t0 + Duration::from_secs(1) + DEBOUNCE), None);
        assert_eq!(p.translated_text(), "");
        assert_eq!(p.phase(), Phase::Idle);
    }

    #[test]
    fn test_whitespace_only_input_issues_nothing() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("   \t ", t0);
        assert_eq!(p.poll(t0 + DEBOUNCE), None);
        assert_eq!(p.phase(), Phase::Idle);
    }

    #[test]
    fn test_success_applies_translation() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        assert!(p.apply(req.seq, Ok("salom".to_string())));
        assert_eq!(p.translated_text(), "salom");
        assert_eq!(p.phase(), Phase::Done);
    }

    #[test]
    fn test_failure_surfaces_error_string() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        assert!(p.apply(req.seq, Err("network down".to_string())));
        assert_eq!(p.translated_text(), "Error: network down");
        assert_eq!(p.phase(), Phase::Error);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let first = p.poll(t0 + DEBOUNCE).unwrap();

        p.set_source_text("hello world", t0 + Duration::from_secs(1));
        let second = p.poll(t0 + Duration::from_secs(1) + DEBOUNCE).unwrap();
        assert!(second.seq > first.seq);

        // Newer response lands first; the older one must not overwrite it.
        assert!(p.apply(second.seq, Ok("salom dunyo".to_string())));
        assert!(!p.apply(first.seq, Ok("salom".to_string())));
        assert_eq!(p.translated_text(), "salom dunyo");
    }

    #[test]
    fn test_swap_exchanges_languages_and_text() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        p.apply(req.seq, Ok("salom".to_string()));

        p.swap(t0 + Duration::from_secs(1));
        assert_eq!(p.source_lang(), "uz");
        assert_eq!(p.target_lang(), "en");
        assert_eq!(p.source_text(), "salom");
        assert_eq!(p.translated_text(), "hello");
    }

    #[test]
    fn test_swap_twice_is_involution() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        p.apply(req.seq, Ok("salom".to_string()));

        // No deadline fires and no response lands between the two swaps.
        p.swap(t0 + Duration::from_secs(1));
        p.swap(t0 + Duration::from_secs(1));
        assert_eq!(p.source_lang(), "en");
        assert_eq!(p.target_lang(), "uz");
        assert_eq!(p.source_text(), "hello");
        assert_eq!(p.translated_text(), "salom");
    }

    #[test]
    fn test_swap_rearms_debounce_for_new_source() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        p.apply(req.seq, Ok("salom".to_string()));

        let t1 = t0 + Duration::from_secs(1);
        p.swap(t1);
        let req = p.poll(t1 + DEBOUNCE).unwrap();
        assert_eq!(req.text, "salom");
        assert_eq!(req.from, "uz");
        assert_eq!(req.to, "en");
    }

    #[test]
    fn test_language_change_rearms() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        p.apply(req.seq, Ok("salom".to_string()));

        let t1 = t0 + Duration::from_secs(1);
        p.set_target_lang("ru", t1);
        let req = p.poll(t1 + DEBOUNCE).unwrap();
        assert_eq!(req.to, "ru");
        assert_eq!(req.text, "hello");
    }

    #[test]
    fn test_same_language_pair_still_issues() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_target_lang("en", t0);
        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        assert_eq!(req.from, "en");
        assert_eq!(req.to, "en");
    }

    #[test]
    fn test_setting_same_language_does_not_rearm() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_lang("en", t0);
        assert_eq!(p.phase(), Phase::Idle);
        assert_eq!(p.poll(t0 + DEBOUNCE), None);
    }

    #[test]
    fn test_translate_now_bypasses_timer() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.translate_now().unwrap();
        assert_eq!(req.text, "hello");

        // The armed deadline was cancelled along the way.
        assert_eq!(p.poll(t0 + DEBOUNCE), None);
    }

    #[test]
    fn test_translate_now_noop_on_blank() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        p.apply(req.seq, Ok("salom".to_string()));

        p.set_source_text("  ", t0 + Duration::from_secs(1));
        assert_eq!(p.translate_now(), None);
        // Manual translate leaves the output untouched.
        assert_eq!(p.translated_text(), "salom");
    }

    #[test]
    fn test_recovers_after_error() {
        let mut p = panel();
        let t0 = Instant::now();

        p.set_source_text("hello", t0);
        let req = p.poll(t0 + DEBOUNCE).unwrap();
        p.apply(req.seq, Err("network down".to_string()));
        assert_eq!(p.phase(), Phase::Error);

        let t1 = t0 + Duration::from_secs(1);
        p.set_source_text("hello again", t1);
        let req = p.poll(t1 + DEBOUNCE).unwrap();
        assert!(p.apply(req.seq, Ok("yana salom".to_string())));
        assert_eq!(p.phase(), Phase::Done);
        assert_eq!(p.translated_text(), "yana salom");
    }

    #[test]
    fn test_push_and_pop_chars() {
        let mut p = panel();
        let t0 = Instant::now();

        p.push_char('h', t0);
        p.push_char('i', t0);
        assert_eq!(p.source_text(), "hi");

        p.pop_char(t0);
        assert_eq!(p.source_text(), "h");

        let req = p.poll(t0 + DEBOUNCE).unwrap();
        assert_eq!(req.text, "h");
    }
}
