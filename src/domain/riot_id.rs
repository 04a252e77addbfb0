use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::InputError;

static TAG_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]{3,5}$").expect("valid tag line regex"));

const MAX_GAME_NAME_CHARS: usize = 16;

/// `gameName#tagLine`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl RiotId {
    /// Parse user input. A bare legacy summoner name gets `default_tag_line`.
    pub fn parse(input: &str, default_tag_line: &str) -> Result<Self, InputError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(InputError::Empty);
        }

        let (name, tag) = match input.split_once('#') {
            Some((name, tag)) => (name.trim(), tag.trim()),
            None => (input, default_tag_line),
        };

        let name_chars = name.chars().count();
        if name_chars == 0 || name_chars > MAX_GAME_NAME_CHARS {
            return Err(InputError::InvalidGameName);
        }
        if !TAG_LINE.is_match(tag) {
            return Err(InputError::InvalidTagLine);
        }

        Ok(Self {
            game_name: name.to_string(),
            tag_line: tag.to_string(),
        })
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}
