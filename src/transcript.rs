//! Transcript Parser
//!
//! Splits a finished voice transcript into a task title and description.
//!
//! Cues are matched independently against the whole transcript:
//! - title: "title", "title is", "titled"
//! - description: "description", "description is", "about", "details", "it is"
//!
//! Each cue captures text up to the next `.`, `?`, `!` or the end. When no
//! cue matches, the first sentence becomes the title and the rest the
//! description. Overlapping captures are kept as they are; an "it is" inside
//! a title span also fills the description.

use std::sync::OnceLock;

use regex::Regex;

static TITLE_CUE: OnceLock<Regex> = OnceLock::new();
static DESCRIPTION_CUE: OnceLock<Regex> = OnceLock::new();

const TERMINATORS: [char; 3] = ['.', '?', '!'];

fn title_cue() -> &'static Regex {
    TITLE_CUE.get_or_init(|| {
        Regex::new(r"(?i)\btitle(?:d)?\b(?:\s+is\b)?[\s:,]*([^.?!]*)").expect("valid title cue pattern")
    })
}

fn description_cue() -> &'static Regex {
    DESCRIPTION_CUE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:description(?:\s+is\b)?|about|details|it\s+is)\b[\s:,]*([^.?!]*)")
            .expect("valid description cue pattern")
    })
}

/// Best-effort title/description pair; either may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTranscript {
    pub title: String,
    pub description: String,
}

impl ParsedTranscript {
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

fn capture(cue: &Regex, text: &str) -> String {
    cue.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Parse a final transcript
pub fn parse_transcript(transcript: &str) -> ParsedTranscript {
    let title = capture(title_cue(), transcript);
    let description = capture(description_cue(), transcript);
    if !title.is_empty() || !description.is_empty() {
        return ParsedTranscript { title, description };
    }

    let sentences: Vec<&str> = transcript
        .split(TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    match sentences.as_slice() {
        [] => ParsedTranscript::default(),
        [_] => ParsedTranscript {
            title: transcript.trim().to_string(),
            description: String::new(),
        },
        [first, rest @ ..] => ParsedTranscript {
            title: first.to_string(),
            description: rest.join(". "),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(title: &str, description: &str) -> ParsedTranscript {
        ParsedTranscript {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_title_and_description_cues() {
        assert_eq!(
            parse_transcript("title is fix the bug. description is the login button is broken"),
            parsed("fix the bug", "the login button is broken")
        );
    }

    #[test]
    fn test_cues_in_reverse_order() {
        assert_eq!(
            parse_transcript("description is call the plumber. title is kitchen sink"),
            parsed("kitchen sink", "call the plumber")
        );
    }

    #[test]
    fn test_title_cue_variants() {
        assert_eq!(parse_transcript("title groceries").title, "groceries");
        assert_eq!(parse_transcript("titled quarterly review!").title, "quarterly review");
        assert_eq!(parse_transcript("title: dentist").title, "dentist");
    }

    #[test]
    fn test_cue_words_inside_other_words() {
        assert_eq!(parse_transcript("title isabella").title, "isabella");
        assert_eq!(parse_transcript("description island trip").description, "island trip");
        assert_eq!(parse_transcript("subtitles for the demo"), parsed("subtitles for the demo", ""));
    }

    #[test]
    fn test_cue_with_nothing_after_is() {
        // A bare "title is." has no title text; the sentence fallback takes over
        let result = parse_transcript("title is.");
        assert_ne!(result.title, "is");
        assert_eq!(result, parsed("title is.", ""));

        let result = parse_transcript("title is. description is the invoice");
        assert_eq!(result, parsed("", "the invoice"));

        assert_eq!(parse_transcript("description is.").description, "");
    }

    #[test]
    fn test_description_cue_variants() {
        assert_eq!(parse_transcript("details bring the slides").description, "bring the slides");
        assert_eq!(parse_transcript("a call about the invoice?").description, "the invoice");
        assert_eq!(parse_transcript("description renew passport").description, "renew passport");
    }

    #[test]
    fn test_only_description_cue_leaves_title_empty() {
        assert_eq!(
            parse_transcript("meeting notes. it is due on friday"),
            parsed("", "due on friday")
        );
    }

    #[test]
    fn test_overlapping_cue_is_kept() {
        // "about" inside the title span also fills the description
        assert_eq!(
            parse_transcript("title is talk about budget"),
            parsed("talk about budget", "budget")
        );
    }

    #[test]
    fn test_two_sentences_without_cues() {
        assert_eq!(
            parse_transcript("update website design. make the homepage more modern"),
            parsed("update website design", "make the homepage more modern")
        );
    }

    #[test]
    fn test_many_sentences_without_cues() {
        assert_eq!(
            parse_transcript("plan trip. book flights! reserve hotel? pack."),
            parsed("plan trip", "book flights. reserve hotel. pack")
        );
    }

    #[test]
    fn test_single_sentence_without_cues() {
        assert_eq!(parse_transcript("buy milk"), parsed("buy milk", ""));
        assert_eq!(parse_transcript("  buy milk  "), parsed("buy milk", ""));
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        assert_eq!(parse_transcript(""), parsed("", ""));
        assert_eq!(parse_transcript("   "), parsed("", ""));
        assert_eq!(parse_transcript("...?!"), parsed("", ""));
    }

    #[test]
    fn test_has_fields() {
        let result = parse_transcript("buy milk");
        assert!(result.has_title());
        assert!(!result.has_description());
    }
}
