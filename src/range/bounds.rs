//! Bound analysis for key-range queries.
//!
//! A query is any combination of a key `prefix`, an inclusive lower bound
//! `from` and an inclusive upper bound `to`. An empty slice means the
//! constraint is absent. [`analyze`] reduces the three constraints, once per
//! query, to the cheapest [`Strategy`] that still emits exactly the matching
//! keys, so the per-step check is at most one comparison.

/// Iteration strategy selected for a query, with the bounds it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Whole keyspace.
    Unconstrained,
    /// Keys starting with `prefix`.
    PrefixOnly { prefix: Vec<u8> },
    /// Keys `>= from`.
    LowerOnly { from: Vec<u8> },
    /// Keys `<= to`.
    UpperOnly { to: Vec<u8> },
    /// Keys in `[from, to]`.
    Range { from: Vec<u8>, to: Vec<u8> },
    /// Keys `>= from` that start with `prefix`.
    ///
    /// Keys sharing a prefix are contiguous, so once the cursor leaves the
    /// prefix block nothing after it can match and no upper bound is needed.
    PrefixWithLower { prefix: Vec<u8>, from: Vec<u8> },
}

/// Tag of a [`Strategy`] without its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Unconstrained,
    PrefixOnly,
    LowerOnly,
    UpperOnly,
    Range,
    PrefixWithLower,
}

impl Strategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Unconstrained => StrategyKind::Unconstrained,
            Strategy::PrefixOnly { .. } => StrategyKind::PrefixOnly,
            Strategy::LowerOnly { .. } => StrategyKind::LowerOnly,
            Strategy::UpperOnly { .. } => StrategyKind::UpperOnly,
            Strategy::Range { .. } => StrategyKind::Range,
            Strategy::PrefixWithLower { .. } => StrategyKind::PrefixWithLower,
        }
    }
}

/// `key <= upper` under unsigned lexicographic order; ties are inclusive.
#[inline]
pub fn key_le(key: &[u8], upper: &[u8]) -> bool {
    key <= upper
}

/// Candidate for the largest key under `prefix`, sized against `to`.
///
/// When `to` is longer than `prefix`, the prefix is padded with `0xFF` up to
/// the length of `to`; otherwise the prefix itself is the candidate. If the
/// candidate is `<= to`, the prefix block is treated as lying entirely under
/// `to`.
///
/// This is a heuristic rather than the exact supremum: with `to == prefix` the
/// candidate equals `to`, yet keys extending the prefix sort after `to`.
pub fn last_in_prefix(prefix: &[u8], to: &[u8]) -> Vec<u8> {
    let mut last = prefix.to_vec();
    if to.len() > prefix.len() {
        last.resize(to.len(), 0xFF);
    }
    last
}

/// Select the iteration strategy for `(prefix, from, to)`.
///
/// Total over all inputs. Contradictory constraints (`from > to`, a prefix
/// outside `[from, to]`) still produce a strategy; the resulting iterator is
/// just empty.
pub fn analyze(prefix: &[u8], from: &[u8], to: &[u8]) -> Strategy {
    let (has_prefix, has_from, has_to) = (!prefix.is_empty(), !from.is_empty(), !to.is_empty());

    match (has_prefix, has_from, has_to) {
        (false, false, false) => Strategy::Unconstrained,
        (true, false, false) => Strategy::PrefixOnly {
            prefix: prefix.to_vec(),
        },
        (false, false, true) => Strategy::UpperOnly { to: to.to_vec() },
        (false, true, false) => Strategy::LowerOnly {
            from: from.to_vec(),
        },
        (false, true, true) => Strategy::Range {
            from: from.to_vec(),
            to: to.to_vec(),
        },
        (true, false, true) => {
            if key_le(&last_in_prefix(prefix, to), to) {
                Strategy::PrefixOnly {
                    prefix: prefix.to_vec(),
                }
            } else {
                // every key under the prefix is >= prefix, so it doubles as the lower bound
                Strategy::Range {
                    from: prefix.to_vec(),
                    to: to.to_vec(),
                }
            }
        }
        (true, true, false) => {
            if prefix >= from {
                Strategy::PrefixOnly {
                    prefix: prefix.to_vec(),
                }
            } else {
                Strategy::PrefixWithLower {
                    prefix: prefix.to_vec(),
                    from: from.to_vec(),
                }
            }
        }
        (true, true, true) => analyze_all(prefix, from, to),
    }
}

fn analyze_all(prefix: &[u8], from: &[u8], to: &[u8]) -> Strategy {
    // both act as lower bounds, keep the larger one
    let f = if prefix >= from { prefix } else { from };

    if key_le(&last_in_prefix(prefix, to), to) {
        if f == prefix {
            return Strategy::PrefixOnly {
                prefix: prefix.to_vec(),
            };
        }
        return Strategy::PrefixWithLower {
            prefix: prefix.to_vec(),
            from: f.to_vec(),
        };
    }

    Strategy::Range {
        from: f.to_vec(),
        to: to.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix_only(p: &str) -> Strategy {
        Strategy::PrefixOnly {
            prefix: p.as_bytes().to_vec(),
        }
    }

    fn range(f: &str, t: &str) -> Strategy {
        Strategy::Range {
            from: f.as_bytes().to_vec(),
            to: t.as_bytes().to_vec(),
        }
    }

    fn prefix_with_lower(p: &str, f: &str) -> Strategy {
        Strategy::PrefixWithLower {
            prefix: p.as_bytes().to_vec(),
            from: f.as_bytes().to_vec(),
        }
    }

    fn an(p: &str, f: &str, t: &str) -> Strategy {
        analyze(p.as_bytes(), f.as_bytes(), t.as_bytes())
    }

    #[test]
    fn test_key_le_is_inclusive_and_lexicographic() {
        assert!(key_le(b"a", b"a"));
        assert!(key_le(b"a", b"ab"));
        assert!(!key_le(b"ab", b"a"));
        assert!(key_le(b"", b"a"));
        assert!(!key_le(&[0x80], &[0x7F]));
        assert!(key_le(b"az", b"b"));
    }

    #[test]
    fn test_last_in_prefix_pads_to_upper_bound_length() {
        assert_eq!(last_in_prefix(b"9", b"92"), vec![b'9', 0xFF]);
        assert_eq!(last_in_prefix(b"d", b"dgh"), vec![b'd', 0xFF, 0xFF]);
        assert_eq!(last_in_prefix(b"abc", b"z"), b"abc".to_vec());
        assert_eq!(last_in_prefix(b"ab", b"zz"), b"ab".to_vec());
    }

    #[test]
    fn test_single_constraints() {
        assert_eq!(an("", "", ""), Strategy::Unconstrained);
        assert_eq!(an("prefix", "", ""), prefix_only("prefix"));
        assert_eq!(an("", "from", ""), Strategy::LowerOnly { from: b"from".to_vec() });
        assert_eq!(an("", "", "to"), Strategy::UpperOnly { to: b"to".to_vec() });
    }

    #[test]
    fn test_from_to_is_a_range_even_when_inverted() {
        assert_eq!(an("", "from", "to"), range("from", "to"));
        assert_eq!(an("", "z", "a"), range("z", "a"));
    }

    #[test]
    fn test_prefix_and_upper_bound() {
        // "d\xff" > "dg": the upper bound cuts into the prefix block
        assert_eq!(an("d", "", "dg"), range("d", "dg"));
        // upper bound below the whole block
        assert_eq!(an("d", "", "c"), range("d", "c"));
        // upper bound past the whole block
        assert_eq!(an("g", "", "z"), prefix_only("g"));
        assert_eq!(an("9", "", "92"), range("9", "92"));
    }

    #[test]
    fn test_prefix_equal_to_upper_bound_reduces_to_prefix() {
        assert_eq!(an("9", "", "9"), prefix_only("9"));
    }

    #[test]
    fn test_prefix_and_lower_bound() {
        assert_eq!(an("d", "dg", ""), prefix_with_lower("d", "dg"));
        assert_eq!(an("i", "g", ""), prefix_only("i"));
        assert_eq!(an("i", "i", ""), prefix_only("i"));
        // from past the prefix block, still a PrefixWithLower that emits nothing
        assert_eq!(an("i", "k", ""), prefix_with_lower("i", "k"));
    }

    #[test]
    fn test_all_three_constraints() {
        assert_eq!(an("k", "ka", "kb"), range("ka", "kb"));
        assert_eq!(an("k", "a", "kb"), range("k", "kb"));
        assert_eq!(an("b", "a", "c"), prefix_only("b"));
        assert_eq!(an("b", "bb", "c"), prefix_with_lower("b", "bb"));
        assert_eq!(an("9", "91", "92"), range("91", "92"));
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(an("", "", "").kind(), StrategyKind::Unconstrained);
        assert_eq!(an("b", "bb", "c").kind(), StrategyKind::PrefixWithLower);
        assert_eq!(an("", "a", "").kind(), StrategyKind::LowerOnly);
    }
}
