/// How label tokens are cleaned up after splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// tokens are kept exactly as split, surrounding whitespace included
    Verbatim,
    /// tokens are trimmed and empty tokens are dropped
    Trimmed,
}

impl Default for LabelMode {
    fn default() -> Self {
        LabelMode::Verbatim
    }
}

/// Splits a comma-separated label argument into ordered label tokens.
///
/// With `LabelMode::Verbatim`, `"a, b"` gives `"a"` and `" b"`:
/// the space is part of the second label and takes part in file matching.
pub fn parse_labels(label_arg: &str, mode: LabelMode) -> Vec<String> {
    let split = label_arg.split(',');
    match mode {
        LabelMode::Verbatim => split.map(String::from).collect(),
        LabelMode::Trimmed => split
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect(),
    }
}
