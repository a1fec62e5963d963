use std::rc::Rc;

use crate::config::TypewriterTiming;
use crate::error::SiteError;
use crate::page::{MountPoint, Page};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Growing,
    Shrinking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterState {
    pub phrase_index: usize,
    pub length: usize,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay_ms: u32,
}

/// Cycles through the phrases, typing each one out and erasing it again.
///
/// Lengths count characters, never bytes, and stay within
/// `0..=phrase_len` on every tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    state: TypewriterState,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Result<Self, SiteError> {
        if phrases.is_empty() {
            return Err(SiteError::EmptyList("phrases"));
        }
        Ok(Self {
            phrases,
            timing,
            state: TypewriterState {
                phrase_index: 0,
                length: 0,
                direction: Direction::Growing,
            },
        })
    }

    pub fn state(&self) -> TypewriterState {
        self.state
    }

    pub fn tick(&mut self) -> Frame {
        let phrase = &self.phrases[self.state.phrase_index % self.phrases.len()];
        let phrase_len = phrase.chars().count();
        let length = self.state.length.min(phrase_len);

        let (length, delay_ms) = match self.state.direction {
            Direction::Growing => {
                let next = (length + 1).min(phrase_len);
                if next == phrase_len {
                    self.state.direction = Direction::Shrinking;
                    (next, self.timing.full_dwell_ms)
                } else {
                    (next, self.timing.type_delay_ms)
                }
            }
            Direction::Shrinking => {
                let next = length.saturating_sub(1);
                if next == 0 {
                    self.state.direction = Direction::Growing;
                    self.state.phrase_index = (self.state.phrase_index + 1) % self.phrases.len();
                    (next, self.timing.empty_dwell_ms)
                } else {
                    (next, self.timing.erase_delay_ms)
                }
            }
        };

        self.state.length = length;
        Frame {
            text: phrase.chars().take(length).collect(),
            delay_ms,
        }
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Renders the first frame right away; every tick schedules exactly one successor.
pub fn start<P, C>(engine: Typewriter, page: Rc<P>, scheduler: Rc<C>)
where
    P: Page + 'static,
    C: Scheduler + 'static,
{
    tracing::debug!(phrases = engine.phrases.len(), "typewriter: start");
    step(engine, page, scheduler);
}

fn step<P, C>(mut engine: Typewriter, page: Rc<P>, scheduler: Rc<C>)
where
    P: Page + 'static,
    C: Scheduler + 'static,
{
    let frame = engine.tick();
    page.set_text(MountPoint::Tagline, &frame.text);
    let next = Rc::clone(&scheduler);
    scheduler.schedule(
        frame.delay_ms,
        Box::new(move || step(engine, page, next)),
    );
}

#[cfg(target_arch = "wasm32")]
pub struct TimeoutScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn engine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(
            phrases.iter().map(|p| p.to_string()).collect(),
            TypewriterTiming::default(),
        )
        .unwrap()
    }

    fn run(engine: &mut Typewriter, ticks: usize) -> Vec<Frame> {
        (0..ticks).map(|_| engine.tick()).collect()
    }

    #[test]
    fn hi_bye_walkthrough() {
        let mut typewriter = engine(&["Hi.", "Bye."]);
        let frames = run(&mut typewriter, 3);
        assert_eq!(
            frames,
            vec![
                Frame { text: "H".into(), delay_ms: 100 },
                Frame { text: "Hi".into(), delay_ms: 100 },
                Frame { text: "Hi.".into(), delay_ms: 2000 },
            ]
        );
        assert_eq!(typewriter.state().direction, Direction::Shrinking);

        let frames = run(&mut typewriter, 3);
        assert_eq!(
            frames,
            vec![
                Frame { text: "Hi".into(), delay_ms: 50 },
                Frame { text: "H".into(), delay_ms: 50 },
                Frame { text: "".into(), delay_ms: 500 },
            ]
        );
        assert_eq!(
            typewriter.state(),
            TypewriterState { phrase_index: 1, length: 0, direction: Direction::Growing }
        );
        assert_eq!(typewriter.tick().text, "B");
    }

    #[test]
    fn full_phrase_after_len_ticks() {
        let mut typewriter = engine(&["Chief Information Officer."]);
        let frames = run(&mut typewriter, "Chief Information Officer.".len());
        assert_eq!(frames.last().unwrap().text, "Chief Information Officer.");
        assert_eq!(typewriter.state().direction, Direction::Shrinking);
    }

    #[test]
    fn last_phrase_wraps_to_first() {
        let mut typewriter = engine(&["ab", "c"]);
        run(&mut typewriter, 4);
        assert_eq!(typewriter.state().phrase_index, 1);
        run(&mut typewriter, 2);
        assert_eq!(typewriter.state().phrase_index, 0);
        assert_eq!(typewriter.state().length, 0);
    }

    #[test]
    fn never_exceeds_active_phrase() {
        let phrases = ["Family Man.", "", "x", "Ünïcödé ✓"];
        let mut typewriter = engine(&phrases);
        for _ in 0..500 {
            let active = phrases[typewriter.state().phrase_index];
            let frame = typewriter.tick();
            assert!(active.starts_with(&frame.text));
            assert!(frame.text.chars().count() <= active.chars().count());
            assert!(typewriter.state().length <= active.chars().count());
        }
    }

    #[test]
    fn empty_phrase_flips_immediately() {
        let mut typewriter = engine(&["", "a"]);
        assert_eq!(typewriter.tick(), Frame { text: "".into(), delay_ms: 2000 });
        assert_eq!(typewriter.tick(), Frame { text: "".into(), delay_ms: 500 });
        assert_eq!(typewriter.state().phrase_index, 1);
    }

    #[test]
    fn multibyte_phrases_count_characters() {
        let mut typewriter = engine(&["é✓"]);
        assert_eq!(typewriter.tick().text, "é");
        assert_eq!(typewriter.tick(), Frame { text: "é✓".into(), delay_ms: 2000 });
    }

    #[test]
    fn custom_timing_is_used() {
        let timing = TypewriterTiming {
            type_delay_ms: 10,
            erase_delay_ms: 5,
            full_dwell_ms: 20,
            empty_dwell_ms: 15,
        };
        let mut typewriter = Typewriter::new(vec!["ab".into()], timing).unwrap();
        let delays: Vec<u32> = run(&mut typewriter, 4).into_iter().map(|f| f.delay_ms).collect();
        assert_eq!(delays, vec![10, 20, 5, 15]);
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        assert!(matches!(
            Typewriter::new(Vec::new(), TypewriterTiming::default()),
            Err(SiteError::EmptyList("phrases"))
        ));
    }
}
