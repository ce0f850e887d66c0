//! In-memory console fed from a fixed list of answers.

use super::{Console, ConsoleError, Tone};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, instrument};

/// Console that replays canned input and records everything written.
///
/// Reading past the last scripted answer behaves like a closed stdin.
/// Pauses are recorded but never slept.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<(Tone, String)>,
    clears: usize,
    pauses: Vec<Duration>,
}

impl ScriptedConsole {
    /// Creates a console that will answer prompts with `inputs`, in order.
    #[instrument(skip(inputs))]
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inputs: VecDeque<String> = inputs.into_iter().map(Into::into).collect();
        debug!(count = inputs.len(), "Scripted console loaded");
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Every write, in order, with its tone. Echoed input is included as plain text.
    pub fn transcript(&self) -> &[(Tone, String)] {
        &self.transcript
    }

    /// All written text concatenated, styling dropped.
    pub fn output(&self) -> String {
        self.transcript.iter().map(|(_, text)| text.as_str()).collect()
    }

    /// Number of times `needle` appears in the output.
    pub fn count(&self, needle: &str) -> usize {
        self.output().matches(needle).count()
    }

    /// Whether any write with `tone` contains `needle`.
    pub fn wrote(&self, tone: Tone, needle: &str) -> bool {
        self.transcript
            .iter()
            .any(|(t, text)| *t == tone && text.contains(needle))
    }

    /// Answers not yet consumed.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// How many times the screen was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Pauses requested so far.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> Result<(), ConsoleError> {
        self.clears += 1;
        Ok(())
    }

    fn write(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError> {
        self.transcript.push((tone, text.to_string()));
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let next = self.inputs.pop_front();
        if let Some(answer) = &next {
            self.transcript.push((Tone::Plain, format!("{}\n", answer)));
        }
        Ok(next)
    }

    fn pause(&mut self, duration: Duration) -> Result<(), ConsoleError> {
        self.pauses.push(duration);
        Ok(())
    }
}
