use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum SelectionInput {
    #[strum(to_string = "left", serialize = "prev", serialize = "l")]
    MoveLeft,
    #[strum(to_string = "right", serialize = "next", serialize = "r")]
    MoveRight,
    #[strum(to_string = "activate", serialize = "enter", serialize = "select")]
    Activate,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay,
)]
#[strum(serialize_all = "snake_case")]
pub enum AudioCue {
    MoveLeft,
    MoveRight,
}

/// What the owner of the selection has to do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Restart the cue from zero.
    Cue(AudioCue),
    Reflow,
    Open(usize),
}

/// Active menu index with wrap-around navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    count: usize,
}

impl Selection {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.count > 0 && self.index == index
    }

    /// Applies one input. `enabled` is false for the compact presentation, where
    /// every input is dropped.
    pub fn handle(&mut self, input: SelectionInput, enabled: bool) -> Vec<SelectionEffect> {
        if !enabled || self.count == 0 {
            return Vec::new();
        }

        match input {
            SelectionInput::MoveLeft => {
                self.index = (self.index + self.count - 1) % self.count;
                vec![
                    SelectionEffect::Cue(AudioCue::MoveLeft),
                    SelectionEffect::Reflow,
                ]
            }
            SelectionInput::MoveRight => {
                self.index = (self.index + 1) % self.count;
                vec![
                    SelectionEffect::Cue(AudioCue::MoveRight),
                    SelectionEffect::Reflow,
                ]
            }
            SelectionInput::Activate => vec![SelectionEffect::Open(self.index)],
        }
    }
}
