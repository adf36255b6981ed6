use super::simple_log::{SimpleEventLog, Trace};

/// Error while parsing the textual simple event log notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogParseError {
    /// Input is not enclosed in `[` and `]`
    MissingBrackets,
    /// An entry does not start with a `<`...`>` trace (offending rest included)
    MalformedEntry(String),
    /// A trace is not followed by a positive integer count (offending text included)
    InvalidCount(String),
    /// A variant count of 0 (trace included); counts must be at least 1
    ZeroCount(String),
    /// The input contains no trace/count entries at all
    EmptyLog,
}

impl std::fmt::Display for LogParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse event log: {:?}", self)
    }
}

impl std::error::Error for LogParseError {}

///
/// Parse the textual simple event log notation (e.g., `[<acd>45, <bce>42]`)
///
/// Whitespace is ignored everywhere. Inside `<...>`, a comma-separated list
/// denotes multi-character activity names (`<a,b,c>`); without commas every
/// character is one activity (`<acd>`). Repeated variants accumulate their
/// counts. An input without any entry is rejected, so a successfully parsed
/// log always satisfies the event log invariants.
///
pub fn parse_simple_log(input: &str) -> Result<SimpleEventLog, LogParseError> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let inner = cleaned
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(LogParseError::MissingBrackets)?;

    let mut log = SimpleEventLog::new();
    let mut rest = inner;
    while !rest.is_empty() {
        let after_open = rest
            .strip_prefix('<')
            .ok_or_else(|| LogParseError::MalformedEntry(rest.to_string()))?;
        let (trace_part, after_trace) = after_open
            .split_once('>')
            .ok_or_else(|| LogParseError::MalformedEntry(rest.to_string()))?;
        let (count_part, remainder) = match after_trace.split_once(',') {
            Some((count_part, remainder)) => (count_part, remainder),
            None => (after_trace, ""),
        };
        let count: u64 = count_part
            .parse()
            .map_err(|_| LogParseError::InvalidCount(count_part.to_string()))?;
        if count == 0 {
            return Err(LogParseError::ZeroCount(trace_part.to_string()));
        }
        log.add_variant(parse_trace(trace_part), count);
        rest = remainder;
    }

    if log.variants.is_empty() {
        return Err(LogParseError::EmptyLog);
    }
    Ok(log)
}

fn parse_trace(part: &str) -> Trace {
    if part.contains(',') {
        part.split(',')
            .filter(|symbol| !symbol.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        part.chars().map(|c| c.to_string()).collect()
    }
}
