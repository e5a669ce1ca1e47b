//! Property-based tests for the directive line grammar.
//!
//! These tests use proptest to generate random field values and verify that
//! the parse/render pair holds its invariants for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::line::{EntryKind, SourceLine};
    use proptest::prelude::*;

    fn entry_kind() -> impl Strategy<Value = EntryKind> {
        prop_oneof![Just(EntryKind::Binary), Just(EntryKind::Source)]
    }

    prop_compose! {
        fn source_line()(
            enabled in any::<bool>(),
            kind in entry_kind(),
            url in "https?://[a-z0-9.-]{1,20}(/[a-z0-9]{1,8}){0,3}",
            release in "[a-z][a-z0-9]{0,11}",
            components in prop::collection::vec("[a-z][a-z0-9-]{0,10}", 1..4),
        ) -> SourceLine {
            SourceLine { enabled, kind, url, release, components }
        }
    }

    proptest! {
        /// Property: render followed by parse returns the exact field values.
        #[test]
        fn render_then_parse_is_identity(line in source_line()) {
            let reparsed = SourceLine::parse(&line.render()).unwrap();
            prop_assert_eq!(line, reparsed);
        }

        /// Property: parsing a rendered line twice is stable (semantic
        /// idempotence of the round trip).
        #[test]
        fn round_trip_is_stable(line in source_line()) {
            let once = SourceLine::parse(&line.render()).unwrap();
            let twice = SourceLine::parse(&once.render()).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Property: the disable marker is reversible metadata — toggling
        /// enabled off and back on restores the original rendering.
        #[test]
        fn disable_marker_round_trips(line in source_line()) {
            let mut toggled = SourceLine::parse(&line.render()).unwrap();
            toggled.enabled = !toggled.enabled;
            let mut back = SourceLine::parse(&toggled.render()).unwrap();
            back.enabled = !back.enabled;
            prop_assert_eq!(back.render(), line.render());
        }
    }
}
