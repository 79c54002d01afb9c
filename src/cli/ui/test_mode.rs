//! Scripted prompt answers for automated runs.
//!
//! When `SPENDCHART_TEST_PROMPT_INPUTS` is set, amount prompts pop their
//! answers from its `|`-separated queue instead of reading the terminal.

use once_cell::sync::Lazy;
use std::{
    collections::VecDeque,
    env,
    sync::{Mutex, MutexGuard, PoisonError},
};

pub const PROMPT_INPUTS_VAR: &str = "SPENDCHART_TEST_PROMPT_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextTestInput {
    Value(String),
    Cancel,
}

struct TextQueue {
    enabled: bool,
    inputs: VecDeque<TextTestInput>,
}

impl TextQueue {
    fn from_env() -> Self {
        match env::var(PROMPT_INPUTS_VAR) {
            Ok(raw) => Self {
                enabled: true,
                inputs: parse_text_sequences(&raw),
            },
            Err(_) => Self {
                enabled: false,
                inputs: VecDeque::new(),
            },
        }
    }
}

static TEXT_INPUTS: Lazy<Mutex<TextQueue>> = Lazy::new(|| Mutex::new(TextQueue::from_env()));

fn queue() -> MutexGuard<'static, TextQueue> {
    TEXT_INPUTS.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn is_enabled() -> bool {
    queue().enabled
}

/// Next scripted answer, or `None` when scripting is off.
///
/// An exhausted queue answers with [`TextTestInput::Cancel`].
pub fn next_text_input(label: &str) -> Option<TextTestInput> {
    let mut guard = queue();
    if !guard.enabled {
        return None;
    }
    Some(guard.inputs.pop_front().unwrap_or_else(|| {
        tracing::warn!(prompt = label, "scripted prompt inputs exhausted; cancelling");
        TextTestInput::Cancel
    }))
}

pub fn install_text_inputs(inputs: Vec<TextTestInput>) {
    let mut guard = queue();
    guard.enabled = true;
    guard.inputs = inputs.into();
}

pub fn reset_text_inputs() {
    let mut guard = queue();
    guard.enabled = false;
    guard.inputs.clear();
}

fn parse_text_input(token: &str) -> TextTestInput {
    match token.to_ascii_uppercase().as_str() {
        "<CANCEL>" | "<ESC>" => TextTestInput::Cancel,
        "<BLANK>" | "<EMPTY>" => TextTestInput::Value(String::new()),
        _ => TextTestInput::Value(token.to_string()),
    }
}

fn parse_text_sequences(raw: &str) -> VecDeque<TextTestInput> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(parse_text_input(trimmed))
            }
        })
        .collect()
}
