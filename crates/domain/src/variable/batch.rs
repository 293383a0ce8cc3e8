//! Batch encoding for resolving many variables in a single shell invocation

/// Marker placed between variable references in a batch.
///
/// Variable names must never contain it, otherwise the split is corrupted.
pub const BATCH_DIVIDER: &str = "##";

/// Outcome of expanding a single variable reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// The shell produced a non-empty value.
    Resolved(String),

    /// The shell produced nothing for this name.
    Unresolved,
}

impl Expansion {
    /// Classifies raw shell output. Empty output means the variable is unset.
    #[must_use]
    pub fn from_output(output: impl Into<String>) -> Self {
        let output = output.into();
        if output.is_empty() {
            Self::Unresolved
        } else {
            Self::Resolved(output)
        }
    }

    /// Returns true if a value was produced.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the resolved value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved => None,
        }
    }

    /// Consumes the expansion, returning the resolved value, if any.
    #[must_use]
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved => None,
        }
    }
}

/// Joins variable references into one composite shell target.
#[must_use]
pub fn encode_batch<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(BATCH_DIVIDER)
}

/// Splits the output of a batch invocation and pairs each segment, in order,
/// with the name that produced it.
///
/// Names without a matching segment are [`Expansion::Unresolved`]. Extra
/// segments are ignored.
#[must_use]
pub fn decode_batch<S: AsRef<str>>(names: &[S], output: &str) -> Vec<(String, Expansion)> {
    let mut segments = output.split(BATCH_DIVIDER);

    names
        .iter()
        .map(|name| {
            let expansion = segments
                .next()
                .map_or(Expansion::Unresolved, Expansion::from_output);
            (name.as_ref().to_string(), expansion)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolved(value: &str) -> Expansion {
        Expansion::Resolved(value.to_string())
    }

    #[test]
    fn test_encode_batch() {
        assert_eq!(encode_batch(&["$BAR", "$FOO"]), "$BAR##$FOO");
        assert_eq!(encode_batch(&["$ONE"]), "$ONE");
        assert_eq!(encode_batch::<&str>(&[]), "");
    }

    #[test]
    fn test_decode_batch_pairs_in_order() {
        let decoded = decode_batch(&["$BAR", "$FOO"], "baz##quux");
        assert_eq!(
            decoded,
            vec![
                ("$BAR".to_string(), resolved("baz")),
                ("$FOO".to_string(), resolved("quux")),
            ]
        );
    }

    #[test]
    fn test_decode_batch_leading_empty_segment() {
        let decoded = decode_batch(&["$BAR", "$FOO"], "##baz");
        assert_eq!(
            decoded,
            vec![
                ("$BAR".to_string(), Expansion::Unresolved),
                ("$FOO".to_string(), resolved("baz")),
            ]
        );
    }

    #[test]
    fn test_decode_batch_fewer_segments_than_names() {
        // Trailing blanks collapse when the whole output is trimmed.
        let decoded = decode_batch(&["$A", "$B", "$C"], "one");
        assert_eq!(
            decoded,
            vec![
                ("$A".to_string(), resolved("one")),
                ("$B".to_string(), Expansion::Unresolved),
                ("$C".to_string(), Expansion::Unresolved),
            ]
        );
    }

    #[test]
    fn test_decode_batch_ignores_extra_segments() {
        let decoded = decode_batch(&["$A"], "one##two");
        assert_eq!(decoded, vec![("$A".to_string(), resolved("one"))]);
    }

    #[test]
    fn test_decode_batch_empty_output() {
        let decoded = decode_batch(&["$A"], "");
        assert_eq!(decoded, vec![("$A".to_string(), Expansion::Unresolved)]);
    }

    #[test]
    fn test_expansion_accessors() {
        let value = Expansion::from_output("v");
        assert!(value.is_resolved());
        assert_eq!(value.value(), Some("v"));
        assert_eq!(value.into_value(), Some("v".to_string()));

        let missing = Expansion::from_output("");
        assert!(!missing.is_resolved());
        assert_eq!(missing.value(), None);
    }
}
