//! Single-pass overlap filter

use crate::span::Match;

/// Remove overlapping matches from a sorted list in one left-to-right pass
///
/// For each adjacent overlapping pair the shorter match is removed; when both
/// have the same length the second one goes. The cursor advances after every
/// comparison, deletion or not, so a pair that only becomes adjacent through
/// a deletion is never compared. With three or more mutually overlapping
/// matches an overlap can therefore survive the pass.
///
/// `matches` is expected to be sorted by span.
pub fn filter_overlaps<P>(matches: &mut Vec<Match<P>>) {
    let mut i = 0;
    while i + 1 < matches.len() {
        let (a, b) = (&matches[i], &matches[i + 1]);
        if a.overlaps(b) {
            if a.len() < b.len() {
                matches.remove(i);
            } else {
                matches.remove(i + 1);
            }
        }
        i += 1;
    }
}
