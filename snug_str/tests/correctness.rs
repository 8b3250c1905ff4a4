//! Randomized correctness tests: apply arbitrary mutation sequences to a
//! `SnugString` and a `String` in lockstep, asserting the observable state
//! never diverges.

use proptest::prelude::*;
use snug_str::SnugString;

#[derive(Debug, Clone)]
enum Op {
    PushStr(String),
    PushChar(char),
    Pop,
    Insert { pos_seed: usize, text: String },
    Remove { pos_seed: usize },
    Replace { range_seed: (usize, usize), text: String },
    Truncate { pos_seed: usize },
    SplitOff { pos_seed: usize },
    Reserve(u16),
    ShrinkToFit,
}

fn op() -> impl Strategy<Value = Op> {
    let short = "[a-zA-Zéö🦀]{0,6}";
    prop_oneof![
        short.prop_map(Op::PushStr),
        any::<char>().prop_map(Op::PushChar),
        Just(Op::Pop),
        (any::<usize>(), short.prop_map(String::from))
            .prop_map(|(pos_seed, text)| Op::Insert { pos_seed, text }),
        any::<usize>().prop_map(|pos_seed| Op::Remove { pos_seed }),
        (any::<(usize, usize)>(), short.prop_map(String::from))
            .prop_map(|(range_seed, text)| Op::Replace { range_seed, text }),
        any::<usize>().prop_map(|pos_seed| Op::Truncate { pos_seed }),
        any::<usize>().prop_map(|pos_seed| Op::SplitOff { pos_seed }),
        any::<u16>().prop_map(Op::Reserve),
        Just(Op::ShrinkToFit),
    ]
}

/// Map an arbitrary seed onto a valid char boundary of `s`
fn boundary(s: &str, seed: usize) -> usize {
    let boundaries: Vec<usize> = (0..=s.len()).filter(|&i| s.is_char_boundary(i)).collect();
    boundaries[seed % boundaries.len()]
}

fn apply(op: &Op, snug: &mut SnugString, mirror: &mut String) {
    match op {
        Op::PushStr(s) => {
            snug.push_str(s);
            mirror.push_str(s);
        }
        Op::PushChar(ch) => {
            snug.push(*ch);
            mirror.push(*ch);
        }
        Op::Pop => {
            assert_eq!(snug.pop(), mirror.pop());
        }
        Op::Insert { pos_seed, text } => {
            let pos = boundary(mirror, *pos_seed);
            snug.insert_str(pos, text);
            mirror.insert_str(pos, text);
        }
        Op::Remove { pos_seed } => {
            if mirror.is_empty() {
                return;
            }
            let pos = boundary(mirror, *pos_seed);
            if pos == mirror.len() {
                return;
            }
            assert_eq!(snug.remove(pos), mirror.remove(pos));
        }
        Op::Replace { range_seed, text } => {
            let a = boundary(mirror, range_seed.0);
            let b = boundary(mirror, range_seed.1);
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            snug.replace_range(start..end, text);
            mirror.replace_range(start..end, text);
        }
        Op::Truncate { pos_seed } => {
            let pos = boundary(mirror, *pos_seed);
            snug.truncate(pos);
            mirror.truncate(pos);
        }
        Op::SplitOff { pos_seed } => {
            let pos = boundary(mirror, *pos_seed);
            let snug_tail = snug.split_off(pos);
            let mirror_tail = mirror.split_off(pos);
            assert_eq!(snug_tail, mirror_tail.as_str());
        }
        Op::Reserve(additional) => {
            snug.reserve(*additional as usize);
            mirror.reserve(*additional as usize);
        }
        Op::ShrinkToFit => {
            snug.shrink_to_fit();
            mirror.shrink_to_fit();
        }
    }
}

proptest! {
    #[test]
    fn test_mutation_sequences_match_std(ops in proptest::collection::vec(op(), 0..40)) {
        let mut snug = SnugString::default();
        let mut mirror = String::new();

        for op in &ops {
            apply(op, &mut snug, &mut mirror);

            // observable state stays in lockstep after every step
            prop_assert_eq!(snug.as_str(), mirror.as_str());
            prop_assert_eq!(snug.len(), mirror.len());
            prop_assert!(snug.len() <= snug.capacity());
            prop_assert_eq!(snug.as_bytes_with_nul().last(), Some(&0));
            prop_assert_eq!(
                snug.is_heap_allocated(),
                snug.capacity() > SnugString::inline_capacity()
            );
        }
    }

    #[test]
    fn test_clone_matches_and_detaches(ops in proptest::collection::vec(op(), 0..20)) {
        let mut snug = SnugString::default();
        let mut mirror = String::new();
        for op in &ops {
            apply(op, &mut snug, &mut mirror);
        }

        let snapshot = snug.clone();
        prop_assert_eq!(snapshot.as_str(), mirror.as_str());

        snug.push_str("diverge");
        prop_assert_eq!(snapshot.as_str(), mirror.as_str());
    }
}

#[test]
fn test_interleaved_growth_and_shrink() {
    let mut snug = SnugString::default();

    for round in 0..6 {
        for i in 0..200 {
            snug.push(char::from(b'a' + ((round + i) % 26) as u8));
        }
        assert_eq!(snug.len(), (round as usize + 1) * 200);
        assert!(snug.is_heap_allocated());

        snug.shrink_to_fit();
        assert_eq!(snug.capacity(), snug.len());
    }

    snug.truncate(3);
    snug.shrink_to_fit();
    assert!(!snug.is_heap_allocated());
    assert_eq!(snug.len(), 3);
}
