use crate::types::{Token, TranscriptUnit};

/// Streaming unit-to-token matcher.
///
/// Walks the token sequence with a single forward cursor while iterating the
/// transcript units in order. Token and unit boundaries routinely disagree
/// (punctuation splitting, clitics, whitespace normalization), so the match
/// test is substring containment: a token whose text occurs inside the
/// current unit's trimmed text takes the unit's start/end/confidence. A token
/// that differs from the full unit text is flagged `was_split`; when it is
/// also the unit's suffix the unit is consumed and matching moves on,
/// otherwise following tokens keep absorbing the same unit's times.
///
/// Tokens that fail the containment test are passed over with no timestamps,
/// and a unit that matches nothing runs the cursor forward unboundedly (still
/// capped by the token count). Both are deliberate degraded outcomes, not
/// errors. The cursor never moves backward.
pub fn assign_unit_timestamps(tokens: &mut [Token], units: &[TranscriptUnit]) {
    let mut cursor = 0usize;

    for unit in units {
        let remainder = unit.text.trim();

        while cursor < tokens.len() {
            let token = &mut tokens[cursor];

            if remainder.contains(token.text.as_str()) {
                token.start_time = Some(unit.start);
                token.end_time = Some(unit.end);
                token.confidence = unit.confidence;

                if token.text != remainder {
                    token.was_split = true;
                    if remainder.ends_with(&token.text) {
                        // This token completes the unit.
                        cursor += 1;
                        break;
                    }
                } else {
                    cursor += 1;
                    break;
                }
            }

            cursor += 1;
        }
    }
}
