//! Hero typewriter sequencer.
//!
//! Types the headline one character at a time, pauses, then types the
//! description at a faster cadence. Configured highlight terms are wrapped
//! in `<span class='highlight'>…</span>` the instant the typed prefix
//! completes them, so the emphasis pops in mid-animation exactly as the
//! surrounding text arrives.
//!
//! The sequencer is a plain pull-based stepper: each [`tick`] returns the
//! markup to render and the delay before the next step, and the shell
//! drives it with sleeps. No clocks in here.
//!
//! [`tick`]: Typewriter::tick

/// Per-character delay for the headline.
pub const HEADLINE_CHAR_MS: u64 = 65;
/// Per-character delay for the description.
pub const DESCRIPTION_CHAR_MS: u64 = 15;
/// Pause between finishing the headline and starting the description.
pub const PHASE_PAUSE_MS: u64 = 500;

/// Static copy fed to the typewriter.
#[derive(Clone, Copy, Debug)]
pub struct TypewriterScript {
    pub headline: &'static str,
    /// Terms wrapped when typed with their trailing space (mid-sentence).
    pub headline_highlights: &'static [&'static str],
    pub description: &'static str,
    /// Terms wrapped the moment their last character lands.
    pub description_highlights: &'static [&'static str],
}

/// Which element a step renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingTarget {
    Headline,
    Description,
}

/// One animation step: markup for a target plus the delay before the
/// next call to [`Typewriter::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct TypingStep {
    pub target: TypingTarget,
    pub html: String,
    pub delay_ms: u64,
}

enum Phase {
    Headline,
    Description,
    Done,
}

/// Progressive two-phase typing animation over a [`TypewriterScript`].
pub struct Typewriter {
    script: TypewriterScript,
    headline_chars: Vec<char>,
    description_chars: Vec<char>,
    phase: Phase,
    index: usize,
    rendered: String,
}

impl Typewriter {
    pub fn new(script: TypewriterScript) -> Self {
        Self {
            script,
            headline_chars: script.headline.chars().collect(),
            description_chars: script.description.chars().collect(),
            phase: Phase::Headline,
            index: 0,
            rendered: String::new(),
        }
    }

    /// Advance one character. Returns `None` once both phases finished.
    pub fn tick(&mut self) -> Option<TypingStep> {
        match self.phase {
            Phase::Headline => {
                if self.headline_chars.is_empty() {
                    self.phase = Phase::Description;
                    return self.tick();
                }
                let ch = self.headline_chars[self.index];
                self.rendered.push(ch);
                self.index += 1;
                for term in self.script.headline_highlights {
                    wrap_completed_term(&mut self.rendered, term, true);
                }

                let html = self.rendered.clone();
                if self.index < self.headline_chars.len() {
                    Some(TypingStep {
                        target: TypingTarget::Headline,
                        html,
                        delay_ms: HEADLINE_CHAR_MS,
                    })
                } else {
                    self.phase = Phase::Description;
                    self.index = 0;
                    self.rendered.clear();
                    Some(TypingStep {
                        target: TypingTarget::Headline,
                        html,
                        delay_ms: PHASE_PAUSE_MS,
                    })
                }
            }
            Phase::Description => {
                if self.description_chars.is_empty() {
                    self.phase = Phase::Done;
                    return None;
                }
                let ch = self.description_chars[self.index];
                self.rendered.push(ch);
                self.index += 1;
                for term in self.script.description_highlights {
                    wrap_completed_term(&mut self.rendered, term, false);
                }

                let html = self.rendered.clone();
                if self.index >= self.description_chars.len() {
                    self.phase = Phase::Done;
                }
                Some(TypingStep {
                    target: TypingTarget::Description,
                    html,
                    delay_ms: DESCRIPTION_CHAR_MS,
                })
            }
            Phase::Done => None,
        }
    }
}

/// If `rendered` just completed `term` (plus a trailing space when
/// `trailing_space` is set), rewrap that suffix in a highlight span.
/// Already-wrapped occurrences end in `</span>` and cannot match again.
fn wrap_completed_term(rendered: &mut String, term: &str, trailing_space: bool) {
    let plain = if trailing_space {
        format!("{term} ")
    } else {
        term.to_string()
    };
    if !rendered.ends_with(&plain) {
        return;
    }
    rendered.truncate(rendered.len() - plain.len());
    rendered.push_str("<span class='highlight'>");
    rendered.push_str(term);
    rendered.push_str("</span>");
    if trailing_space {
        rendered.push(' ');
    }
}

/// Per-word `animation-delay` values for a staggered reveal.
pub fn stagger_delays(words: usize, base_ms: u64, step_ms: u64) -> Vec<u64> {
    (0..words as u64).map(|i| base_ms + i * step_ms).collect()
}
