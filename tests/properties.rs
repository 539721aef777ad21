//! Property tests for the structural laws of groups.

use cardpile::{Card, Group, Rank, Suit, reverse, shuffle_seeded};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        1 => Just(Card::joker()),
        12 => (0..13_usize, 0..4_usize).prop_map(|(r, s)| Card::new(Rank::ALL[r], Suit::ALL[s])),
    ]
}

fn any_group() -> impl Strategy<Value = Group> {
    prop::collection::vec((any_card(), any::<bool>()), 0..40).prop_map(|entries| {
        let mut group: Group = entries.iter().map(|&(card, _)| card).collect();
        for (pos, &(_, up)) in entries.iter().enumerate() {
            group.set_face_up(pos as isize, up);
        }
        group
    })
}

/// A group together with a valid half-open range over it.
fn group_and_range() -> impl Strategy<Value = (Group, usize, usize)> {
    any_group().prop_flat_map(|group| {
        let len = group.len();
        (Just(group), 0..=len, 0..=len)
            .prop_map(|(group, a, b)| (group, a.min(b), a.max(b)))
    })
}

fn sorted_pairs(group: &Group) -> Vec<(Card, bool)> {
    let mut pairs: Vec<_> = group.iter().collect();
    pairs.sort();
    pairs
}

proptest! {
    #[test]
    fn flip_is_an_involution((mut group, start, end) in group_and_range()) {
        let original = group.clone();
        group.flip(start as isize, end as isize);
        group.flip(start as isize, end as isize);
        prop_assert_eq!(group, original);
    }

    #[test]
    fn flip_toggles_every_card_in_range((mut group, start, end) in group_and_range()) {
        let original = group.clone();
        group.flip(start as isize, end as isize);
        for pos in start..end {
            let mirror = start + end - 1 - pos;
            prop_assert_eq!(group.card(pos as isize), original.card(mirror as isize));
            prop_assert_eq!(group.is_face_up(pos as isize), !original.is_face_up(mirror as isize));
        }
    }

    #[test]
    fn draw_then_insert_restores(mut group in any_group(), count in 0..50_usize) {
        let original = group.clone();
        let drawn = group.draw(count);
        prop_assert_eq!(drawn.len() + group.len(), original.len());
        group.insert(drawn);
        prop_assert_eq!(&group, &original);

        let drawn = group.draw_bottom(count);
        group.insert_bottom(drawn);
        prop_assert_eq!(group, original);
    }

    #[test]
    fn draw_at_then_insert_at_restores((mut group, split, _end) in group_and_range()) {
        let original = group.clone();
        let drawn = group.draw_at(0, split as isize);
        prop_assert_eq!(drawn.len(), split);
        group.insert_at(0, drawn);
        prop_assert_eq!(group, original);
    }

    #[test]
    fn negative_top_index_matches_last(group in any_group()) {
        prop_assume!(!group.is_empty());
        let last = group.len() as isize - 1;
        prop_assert_eq!(group.card(-1), group.card(last));
    }

    #[test]
    fn shuffle_is_a_permutation(mut group in any_group(), seed in any::<u64>()) {
        let before = sorted_pairs(&group);
        shuffle_seeded(&mut group, seed);
        prop_assert_eq!(sorted_pairs(&group), before);
    }

    #[test]
    fn reverse_twice_restores(mut group in any_group()) {
        let original = group.clone();
        reverse(&mut group);
        reverse(&mut group);
        prop_assert_eq!(group, original);
    }

    #[test]
    fn sort_orders_by_comparator(mut group in any_group()) {
        let before = sorted_pairs(&group);
        group.sort();
        for pos in 1..group.len() as isize {
            prop_assert!(!group.less(pos, pos - 1));
        }
        prop_assert_eq!(sorted_pairs(&group), before);
    }
}
