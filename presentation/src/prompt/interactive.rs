//! Interactive anchor prompting.
//!
//! This module provides the terminal interface for collecting anchor
//! answers during a prediction run.
//!
//! # User Interface
//!
//! Each pending anchor is rendered as:
//!
//! ```text
//! [2/13] 2.6 Does the organization process personal data of EU or EEA residents?
//!   1. Yes
//!   2. No
//!   3. Unknown
//!   (number or text; Enter or "skip" to skip)
//! assess>
//! ```
//!
//! A numbered reply selects the matching option; anything else is taken
//! as free text. Multi-select questions accept comma-separated entries.
//! An out-of-range number re-prompts; end of input cancels the prompt.

use assess_application::{AnchorPrompt, AnswerPromptPort, PromptError};
use assess_domain::SKIPPED;
use async_trait::async_trait;
use colored::Colorize;
use std::io::{self, Write};

/// Interactive anchor prompt for the terminal.
///
/// Implements [`AnswerPromptPort`] by rendering each anchor with its
/// numbered options and reading one reply line from stdin.
///
/// # Example
///
/// ```ignore
/// use assess_presentation::InteractiveAnswerPrompt;
/// use std::sync::Arc;
///
/// let prompt = Arc::new(InteractiveAnswerPrompt::new());
/// let use_case = PredictAssessmentUseCase::new(catalog, prompt);
/// ```
pub struct InteractiveAnswerPrompt;

impl InteractiveAnswerPrompt {
    pub fn new() -> Self {
        Self
    }

    /// Display one anchor with its options and reply hint
    fn display_anchor(&self, anchor: &AnchorPrompt) {
        println!();
        println!(
            "{} {} {}",
            format!("[{}/{}]", anchor.index, anchor.total).cyan().bold(),
            anchor.key.bold(),
            anchor.text
        );

        for (i, option) in anchor.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option);
        }

        let hint = if anchor.multi_select {
            "numbers or text, comma-separated; Enter or \"skip\" to skip"
        } else if anchor.options.is_empty() {
            "free text; Enter or \"skip\" to skip"
        } else {
            "number or text; Enter or \"skip\" to skip"
        };
        println!("  {}", format!("({})", hint).dimmed());
    }

    /// Read one reply line
    fn read_reply(&self) -> Result<String, PromptError> {
        print!("{} ", "assess>".magenta().bold());
        io::stdout()
            .flush()
            .map_err(|e| PromptError::IoError(format!("Failed to flush stdout: {}", e)))?;

        let mut input = String::new();
        let bytes = io::stdin()
            .read_line(&mut input)
            .map_err(|e| PromptError::IoError(format!("Failed to read input: {}", e)))?;
        if bytes == 0 {
            return Err(PromptError::Cancelled);
        }

        Ok(input.trim().to_string())
    }

    /// Map a reply onto option labels.
    ///
    /// Numbered entries select options; the error carries an out-of-range
    /// selection. Free text passes through, and every numeral is free text
    /// when the question has no options.
    fn resolve_selections(anchor: &AnchorPrompt, input: &str) -> Result<String, usize> {
        if anchor.multi_select {
            let mut picks = Vec::new();
            for part in input.split(',') {
                let part = part.trim();
                if part.is_empty() {
                    continue;
                }
                picks.push(Self::resolve_one(anchor, part)?.to_string());
            }
            Ok(picks.join(", "))
        } else {
            Self::resolve_one(anchor, input).map(str::to_string)
        }
    }

    fn resolve_one<'a>(anchor: &'a AnchorPrompt, part: &'a str) -> Result<&'a str, usize> {
        if anchor.options.is_empty() {
            return Ok(part);
        }
        if let Ok(selection) = part.parse::<usize>() {
            if selection >= 1 && selection <= anchor.options.len() {
                return Ok(&anchor.options[selection - 1]);
            }
            return Err(selection);
        }
        Ok(part)
    }
}

impl Default for InteractiveAnswerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerPromptPort for InteractiveAnswerPrompt {
    async fn prompt(&self, anchor: &AnchorPrompt) -> Result<String, PromptError> {
        self.display_anchor(anchor);

        loop {
            let input = self.read_reply()?;

            if input.is_empty()
                || input.eq_ignore_ascii_case("skip")
                || input.eq_ignore_ascii_case("s")
            {
                return Ok(SKIPPED.to_string());
            }

            match Self::resolve_selections(anchor, &input) {
                Ok(reply) => return Ok(reply),
                Err(selection) => {
                    println!(
                        "{} No option {} (choose 1-{})",
                        "!".yellow(),
                        selection,
                        anchor.options.len()
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(options: &[&str], multi_select: bool) -> AnchorPrompt {
        AnchorPrompt {
            key: "3.1".to_string(),
            text: "Which regulatory regimes apply?".to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            multi_select,
            index: 1,
            total: 13,
        }
    }

    #[test]
    fn test_number_selects_option() {
        let anchor = anchor(&["GDPR", "CCPA/CPRA", "PIPEDA"], false);
        let reply = InteractiveAnswerPrompt::resolve_selections(&anchor, "2").unwrap();
        assert_eq!(reply, "CCPA/CPRA");
    }

    #[test]
    fn test_out_of_range_number_is_rejected() {
        let anchor = anchor(&["Yes", "No"], false);
        assert_eq!(
            InteractiveAnswerPrompt::resolve_selections(&anchor, "7"),
            Err(7)
        );
        assert_eq!(
            InteractiveAnswerPrompt::resolve_selections(&anchor, "0"),
            Err(0)
        );
    }

    #[test]
    fn test_free_text_passes_through() {
        let anchor = anchor(&["Yes", "No"], false);
        let reply = InteractiveAnswerPrompt::resolve_selections(&anchor, "Under review").unwrap();
        assert_eq!(reply, "Under review");
    }

    #[test]
    fn test_numeral_is_free_text_without_options() {
        let anchor = anchor(&[], false);
        let reply = InteractiveAnswerPrompt::resolve_selections(&anchor, "3").unwrap();
        assert_eq!(reply, "3");
    }

    #[test]
    fn test_multi_select_mixes_numbers_and_text() {
        let anchor = anchor(&["GDPR", "CCPA/CPRA", "PIPEDA"], true);
        let reply =
            InteractiveAnswerPrompt::resolve_selections(&anchor, "1, LGPD, 3").unwrap();
        assert_eq!(reply, "GDPR, LGPD, PIPEDA");
    }

    #[test]
    fn test_multi_select_skips_empty_entries() {
        let anchor = anchor(&["GDPR", "CCPA/CPRA"], true);
        let reply = InteractiveAnswerPrompt::resolve_selections(&anchor, "1,,2,").unwrap();
        assert_eq!(reply, "GDPR, CCPA/CPRA");
    }
}
