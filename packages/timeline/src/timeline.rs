//! Assembles render instructions for a whole event log.
//!
//! Envelopes are decoded once up front so grouping can look at neighbours;
//! each instruction is built only when the iterator reaches it. Output order
//! is input order, and the iterator is double-ended for newest-first display.

use crate::config::TimelineConfig;
use crate::error::NarrationError;
use crate::grouping::run_position;
use crate::instruction::RenderInstruction;
use crate::narrator::NarratorRegistry;
use crate::render::render_message;
use matryx_entity::{DecodeResult, RoomEvent};
use serde_json::Value;
use std::iter::FusedIterator;
use std::ops::Range;
use tracing::{error, warn};

/// A decoded event log, ready to render
#[derive(Debug)]
pub struct Timeline {
    events: Vec<DecodeResult<RoomEvent>>,
    narrators: NarratorRegistry,
    config: TimelineConfig,
}

impl Timeline {
    pub fn new(raw_events: impl IntoIterator<Item = Value>) -> Self {
        Self::with_config(raw_events, TimelineConfig::default())
    }

    pub fn with_config(
        raw_events: impl IntoIterator<Item = Value>,
        config: TimelineConfig,
    ) -> Self {
        let events = raw_events.into_iter().map(RoomEvent::from_value).collect();
        Self { events, narrators: NarratorRegistry::default(), config }
    }

    /// Replace the state event narrators
    pub fn with_narrators(mut self, narrators: NarratorRegistry) -> Self {
        self.narrators = narrators;
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Decoded envelopes in input order
    pub fn events(&self) -> &[DecodeResult<RoomEvent>] {
        &self.events
    }

    /// A fresh pass over the instructions; call again to restart
    pub fn instructions(&self) -> Instructions<'_> {
        Instructions { timeline: self, range: 0..self.events.len() }
    }

    /// Instruction for the event at `index`
    pub fn render(&self, index: usize) -> Option<RenderInstruction> {
        let instruction = match self.events.get(index)? {
            Err(e) => {
                warn!(index, "dropping undecodable envelope: {e}");
                RenderInstruction::DecodeFailed { event_type: None, reason: e.to_string() }
            },
            Ok(event) if event.is_message() => {
                render_message(event, run_position(&self.events, index), &self.config)
            },
            Ok(event) => self.narrate(index, event),
        };
        Some(instruction)
    }

    fn narrate(&self, index: usize, event: &RoomEvent) -> RenderInstruction {
        let event_type = event.event_type.clone();
        match self.narrators.narrate(event) {
            None => RenderInstruction::Unsupported { event_type },
            Some(Ok(text)) => RenderInstruction::PlainText(text),
            Some(Err(NarrationError::Decode(e))) => {
                warn!(index, "{e}");
                RenderInstruction::DecodeFailed {
                    event_type: Some(event_type),
                    reason: e.to_string(),
                }
            },
            Some(Err(NarrationError::ImpossibleTransition(e))) => {
                error!(index, sender = %event.sender, state_key = ?event.state_key, "{e}");
                RenderInstruction::Inconsistent { event_type, reason: e.to_string() }
            },
        }
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = RenderInstruction;
    type IntoIter = Instructions<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions()
    }
}

/// Lazy iterator over a timeline's render instructions
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    timeline: &'a Timeline,
    range: Range<usize>,
}

impl Iterator for Instructions<'_> {
    type Item = RenderInstruction;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.range.next()?;
        self.timeline.render(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Instructions<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.range.next_back()?;
        self.timeline.render(index)
    }
}

impl ExactSizeIterator for Instructions<'_> {}

impl FusedIterator for Instructions<'_> {}

/// One render instruction per raw event, in input order
pub fn decode_timeline<I>(raw_events: I) -> impl Iterator<Item = RenderInstruction>
where
    I: IntoIterator<Item = Value>,
{
    let timeline = Timeline::new(raw_events);
    (0..timeline.len()).filter_map(move |index| timeline.render(index))
}
