use crate::console::LogLevel;
use crate::pipe::core::{LogPipe, PipeConfigError, PipeResult};
use crate::value::LogValue;
use regex::Regex;

/// One exclusion token for `MessageFilterPipe`.
#[derive(Debug, Clone)]
pub enum MessageToken {
    /// Substring match against string arguments.
    Text(String),
    /// Regex match against string arguments; compiled at construction.
    Pattern(String),
}

#[derive(Debug, Clone)]
pub struct MessageFilterPipeOptions {
    /// The whole log call is suppressed when any token is found in any
    /// string argument.
    pub excluded_message_tokens: Vec<MessageToken>,

    /// When `false`, text tokens are matched case-insensitively.
    /// Regex tokens always match as written. Default: `false`.
    pub is_case_sensitive: bool,
}

impl Default for MessageFilterPipeOptions {
    fn default() -> Self {
        Self {
            excluded_message_tokens: Vec::new(),
            is_case_sensitive: false,
        }
    }
}

/// Suppresses log calls whose string arguments contain an excluded token.
pub struct MessageFilterPipe {
    text_tokens: Vec<String>,
    patterns: Vec<Regex>,
    is_case_sensitive: bool,
}

impl MessageFilterPipe {
    pub fn new(options: MessageFilterPipeOptions) -> Result<Self, PipeConfigError> {
        let mut text_tokens = Vec::new();
        let mut patterns = Vec::new();
        for token in options.excluded_message_tokens {
            match token {
                MessageToken::Text(text) => {
                    if options.is_case_sensitive {
                        text_tokens.push(text);
                    } else {
                        text_tokens.push(text.to_lowercase());
                    }
                }
                MessageToken::Pattern(pattern) => {
                    let compiled = Regex::new(&pattern).map_err(|source| {
                        PipeConfigError::InvalidFilterPattern { pattern, source }
                    })?;
                    patterns.push(compiled);
                }
            }
        }
        Ok(Self {
            text_tokens,
            patterns,
            is_case_sensitive: options.is_case_sensitive,
        })
    }

    fn matches(&self, text: &str) -> bool {
        let text_hit = if self.is_case_sensitive {
            self.text_tokens.iter().any(|token| text.contains(token))
        } else {
            let lowered = text.to_lowercase();
            self.text_tokens.iter().any(|token| lowered.contains(token))
        };
        text_hit || self.patterns.iter().any(|pattern| pattern.is_match(text))
    }
}

impl LogPipe for MessageFilterPipe {
    fn transform(&self, _level: LogLevel, args: &[LogValue]) -> PipeResult {
        if self.text_tokens.is_empty() && self.patterns.is_empty() {
            return PipeResult::Forward(args.to_vec());
        }
        for arg in args {
            if let LogValue::Str(text) = arg {
                if self.matches(text) {
                    return PipeResult::Suppress;
                }
            }
        }
        PipeResult::Forward(args.to_vec())
    }
}
