use serde::Serialize;

/// Inline style flags inherited down the markup tree.
///
/// Each recursion frame receives its own copy. Flags are only ever OR-ed in on
/// the way down, so a child can never clear what an ancestor set and a sibling
/// never sees what another sibling's subtree set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct StyleState {
    pub bold: bool,
    pub italic: bool,
    pub in_hyperlink: bool,
}

impl StyleState {
    pub const PLAIN: Self = Self {
        bold: false,
        italic: false,
        in_hyperlink: false,
    };

    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self { bold: true, ..self }
    }

    #[must_use]
    pub const fn with_italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    #[must_use]
    pub const fn with_hyperlink(self) -> Self {
        Self {
            in_hyperlink: true,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_accumulate_and_never_clear() {
        let state = StyleState::PLAIN.with_italic().with_bold().with_italic();
        assert_eq!(
            state,
            StyleState {
                bold: true,
                italic: true,
                in_hyperlink: false,
            }
        );
        assert!(state.with_hyperlink().with_bold().in_hyperlink);
    }

    #[test]
    fn deriving_leaves_the_parent_untouched() {
        let parent = StyleState::PLAIN;
        let _child = parent.with_bold();
        assert_eq!(parent, StyleState::default());
    }
}
