//! Idempotent text merge for index files.
//!
//! A registration is an import line plus a body line. The import line doubles
//! as the registration key: if it already appears anywhere in the text the
//! merge is a no-op. Otherwise the import goes to the very top of the file and
//! the body line is placed relative to a textual marker. Everything else in
//! the file is kept byte for byte.

/// Where the body line of a registration goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Insert on the line after the first `marker`, directly above the
    /// entries already there, so no blank line opens up inside the block.
    /// When the marker is absent, `fallback` is appended to the end of the
    /// file instead.
    AfterMarker {
        marker: &'static str,
        fallback: String,
    },
    /// Insert right before the first `marker`. When the marker is absent the
    /// body line is dropped and only the import is added.
    BeforeMarker { marker: &'static str },
}

/// Lines that register one resource in an index file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Full import line including its trailing newline
    pub import_line: String,
    /// Full body line including its trailing newline
    pub body_line: String,
    pub placement: Placement,
}

/// What a merge did to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The import line was already present; text is unchanged.
    AlreadyRegistered,
    /// Import and body line were both added.
    Registered,
    /// The import was added but `marker` was not found, so the body line was skipped.
    MarkerMissing { marker: &'static str },
}

impl MergeOutcome {
    /// Whether the merged text differs from the input.
    pub fn changes_text(&self) -> bool {
        !matches!(self, MergeOutcome::AlreadyRegistered)
    }
}

/// Result of merging a registration into index text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    pub text: String,
    pub outcome: MergeOutcome,
}

/// Merge `registration` into `text`.
pub fn merge(text: &str, registration: &Registration) -> Merge {
    if text.contains(&registration.import_line) {
        return Merge {
            text: text.to_string(),
            outcome: MergeOutcome::AlreadyRegistered,
        };
    }

    let offset = registration.import_line.len();
    let mut merged = String::with_capacity(offset + text.len() + registration.body_line.len() + 16);
    merged.push_str(&registration.import_line);
    merged.push_str(text);

    let outcome = match &registration.placement {
        Placement::AfterMarker { marker, fallback } => {
            match text.find(marker) {
                Some(pos) => {
                    let end = offset + pos + marker.len();
                    if merged[end..].starts_with('\n') {
                        merged.insert_str(end + 1, &registration.body_line);
                    } else {
                        merged.insert_str(end, &format!("\n{}", registration.body_line));
                    }
                }
                None => merged.push_str(fallback),
            }
            MergeOutcome::Registered
        }
        Placement::BeforeMarker { marker } => match text.find(marker) {
            Some(pos) => {
                merged.insert_str(offset + pos, &registration.body_line);
                MergeOutcome::Registered
            }
            None => MergeOutcome::MarkerMissing { marker },
        },
    };

    Merge {
        text: merged,
        outcome,
    }
}
