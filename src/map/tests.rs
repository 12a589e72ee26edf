use super::*;
use crate::test_helpers::test_rng;
use crate::testing::crash_test::{CrashTestDummy, Panic};
use crate::testing::rng::DeterministicRng;
use crate::KeyNotFound;
use rand::Rng;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::iter;
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::panic::{catch_unwind, AssertUnwindSafe};
use alloc::vec::Vec;

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut s = DefaultHasher::new();
    t.hash(&mut s);
    s.finish()
}

// Checks the map against a `BTreeMap` holding the same entries.
fn check_against<K, V>(map: &FlatMap<K, V>, oracle: &BTreeMap<K, V>)
where
    K: OrdStoredKey + Debug + PartialEq,
    V: Debug + PartialEq,
{
    assert!(map.is_strictly_sorted());
    assert_eq!(map.len(), oracle.len());
    assert!(map.iter().eq(oracle.iter()), "{map:?} != {oracle:?}");
}

#[derive(Default)]
struct Reverse;

impl TotalOrder for Reverse {
    type OrderedType = i32;
    fn cmp(&self, this: &i32, that: &i32) -> Ordering {
        that.cmp(this)
    }
}

impl LookupKey<Reverse> for i32 {
    fn key(&self) -> &i32 {
        self
    }
}

struct ByLength {
    max: usize, // runtime state: longer strings all compare equal
}

impl TotalOrder for ByLength {
    type OrderedType = str;
    fn cmp(&self, this: &str, that: &str) -> Ordering {
        this.len().min(self.max).cmp(&that.len().min(self.max))
    }
}

impl LookupKey<ByLength> for str {
    fn key(&self) -> &str {
        self
    }
}

impl LookupKey<ByLength> for String {
    fn key(&self) -> &str {
        self
    }
}

#[test]
fn test_round_trip() {
    let mut map = FlatMap::from([(3, "c"), (1, "a"), (2, "b")]);
    assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&2, &"b"), (&3, &"c")]);

    assert_eq!(map.remove(&2), Some("b"));
    assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &"a"), (&3, &"c")]);

    assert_eq!(map.at(&2), Err(KeyNotFound));
    assert_eq!(map.at(&1), Ok(&"a"));
}

#[test]
fn test_duplicate_batch_keeps_first() {
    let map = FlatMap::from([(1, "x"), (1, "y"), (1, "z")]);
    assert_eq!(map.into_iter().collect::<Vec<_>>(), [(1, "x")]);
}

#[test]
fn test_all_duplicate_batches_terminate() {
    let mut map = FlatMap::with_capacity(4);
    map.insert(1, "w");
    map.extend(iter::repeat((1, "x")).take(1000));
    assert_eq!(map.as_slice(), [(1, "w")]);

    map.extend(iter::repeat((1, "y")).take(1000).chain([(0, "z")]));
    assert_eq!(map.as_slice(), [(0, "z"), (1, "w")]);
}

#[test]
fn test_insert_does_not_overwrite() {
    let mut map = FlatMap::new();
    assert_eq!(map.insert(5, 'a'), (0, true));
    assert_eq!(map.insert(5, 'b'), (0, false));
    assert_eq!(map.insert(7, 'c'), (1, true));
    assert_eq!(map.insert(6, 'd'), (1, true));
    assert_eq!(map.insert_entry((7, 'e')), (2, false));
    assert_eq!(map.as_slice(), [(5, 'a'), (6, 'd'), (7, 'c')]);
}

#[test]
fn test_lookup_insert_duality() {
    let mut rng = test_rng();
    let mut map = FlatMap::new();
    for _ in 0..500 {
        let key: u16 = rng.gen_range(0..300);
        let value: u32 = rng.gen();
        let present = map.get(&key).copied();
        let (index, inserted) = map.insert(key, value);
        assert_eq!(inserted, present.is_none());
        assert_eq!(map.find(&key), Some(index));
        assert_eq!(map.get_index(index), Some((&key, &present.unwrap_or(value))));
        assert!(map.is_strictly_sorted());
    }
}

#[test]
fn test_bulk_insert_matches_stable_sort_keep_first() {
    let mut rng = test_rng();
    for _ in 0..100 {
        let len = rng.gen_range(0..200);
        let input: Vec<(u8, usize)> = (0..len).map(|i| (rng.gen_range(0..50), i)).collect();

        let mut expected = input.clone();
        expected.sort_by_key(|e| e.0);
        expected.dedup_by_key(|e| e.0);

        let map: FlatMap<u8, usize> = input.iter().copied().collect();
        assert_eq!(map.as_slice(), expected);

        let mut one_at_a_time = FlatMap::new();
        for &(k, v) in &input {
            one_at_a_time.insert(k, v);
        }
        assert_eq!(one_at_a_time, map);
    }
}

#[test]
fn test_extend_existing_keys_win() {
    let mut rng = test_rng();
    for _ in 0..100 {
        let mut map = FlatMap::new();
        let mut oracle = BTreeMap::new();
        for _ in 0..rng.gen_range(0..40) {
            let key: u8 = rng.gen_range(0..60);
            map.insert(key, 0);
            oracle.entry(key).or_insert(0);
        }
        map.shrink_to_fit();

        let input: Vec<(u8, i32)> = (1..rng.gen_range(1..100))
            .map(|i| (rng.gen_range(0..60), i))
            .collect();
        for &(k, v) in &input {
            oracle.entry(k).or_insert(v);
        }
        map.extend(input);
        check_against(&map, &oracle);
    }
}

#[test]
fn test_extend_refs() {
    let mut map = FlatMap::from([(2, 'b')]);
    let more = [(3, 'c'), (1, 'a'), (2, 'x')];
    map.extend(more.iter().map(|(k, v)| (k, v)));
    assert_eq!(map.as_slice(), [(1, 'a'), (2, 'b'), (3, 'c')]);
}

#[test]
fn test_try_extend_rolls_back_batch_on_err() {
    let mut map = FlatMap::with_capacity(8);
    map.insert(10, 'j');
    let input = [Ok((3, 'c')), Ok((1, 'a')), Err("bad"), Ok((2, 'b'))];
    assert_eq!(map.try_extend(input), Err("bad"));
    assert_eq!(map.as_slice(), [(10, 'j')]);
}

#[test]
fn test_try_extend_keeps_merged_batches() {
    let mut map = FlatMap::<usize, ()>::new();
    map.reserve(4);
    let cap = map.capacity();

    // The first `cap` entries fill a whole batch, which is merged before the storage
    // grows; the next entry goes in on its own, and the error lands in a fresh batch.
    let input = (0..=cap).rev().map(|k| Ok((k, ()))).chain([Err(()), Ok((cap + 1, ()))]);
    assert_eq!(map.try_extend(input), Err(()));
    assert_eq!(map.len(), cap + 1);
    assert!(map.keys().copied().eq(0..=cap));
}

#[test]
fn test_extend_rolls_back_batch_on_panic() {
    let a = CrashTestDummy::new(0);
    let b = CrashTestDummy::new(1);
    let c = CrashTestDummy::new(2);
    let mut map = FlatMap::with_capacity(4);
    map.insert(0, a.spawn(Panic::Never));

    let mut yielded = 0;
    let input = iter::from_fn(|| {
        yielded += 1;
        match yielded {
            1 => Some((2, b.spawn(Panic::Never))),
            2 => Some((1, c.spawn(Panic::Never))),
            _ => panic!("panic in input"),
        }
    });
    catch_unwind(AssertUnwindSafe(|| map.extend(input))).unwrap_err();

    assert_eq!(map.len(), 1);
    assert_eq!(map.keys().collect::<Vec<_>>(), [&0]);
    assert_eq!(a.dropped(), 0);
    assert_eq!(b.dropped(), 1);
    assert_eq!(c.dropped(), 1);
    drop(map);
    assert_eq!(a.dropped(), 1);
}

#[test]
fn test_emplace_panicking_value_leaves_map_unchanged() {
    let mut map = FlatMap::from([(1, String::from("a")), (3, String::from("c"))]);
    catch_unwind(AssertUnwindSafe(|| map.emplace(2, || panic!("panic in value")))).unwrap_err();
    assert_eq!(map.len(), 2);
    assert!(map.is_strictly_sorted());
    assert_eq!(map.emplace(3, || panic!("not called")), (1, false));
}

#[test]
fn test_emplace_hint_matches_emplace() {
    let base = FlatMap::from([(10, 'a'), (20, 'b'), (30, 'c')]);
    for key in [5, 10, 15, 20, 25, 30, 35] {
        let mut expected = base.clone();
        let (expected_index, _) = expected.emplace(key, || 'x');
        for hint in 0..=base.len() + 1 {
            let mut map = base.clone();
            assert_eq!(map.emplace_hint(hint, key, || 'x'), expected_index);
            assert_eq!(map, expected);

            let mut map = base.clone();
            assert_eq!(map.insert_hint(hint, key, 'x'), expected_index);
            assert_eq!(map, expected);
        }
    }
}

#[test]
fn test_emplace_hint_sequential() {
    let mut map = FlatMap::new();
    let mut hint = 0;
    for key in 0..100 {
        hint = map.emplace_hint(hint, key, || key * 2) + 1;
    }
    assert_eq!(map.len(), 100);
    assert!(map.iter().all(|(k, v)| *v == k * 2));
    assert!(map.is_strictly_sorted());
}

#[test]
fn test_remove_index_shifts() {
    let base: FlatMap<i32, i32> = (0..10).map(|k| (k, -k)).collect();
    for i in 0..base.len() {
        let mut map = base.clone();
        assert_eq!(map.remove_index(i), base.as_slice()[i]);
        assert_eq!(map.len(), base.len() - 1);
        assert_eq!(map.as_slice()[..i], base.as_slice()[..i]);
        assert_eq!(map.as_slice()[i..], base.as_slice()[i + 1..]);
    }
}

#[test]
#[should_panic]
fn test_remove_index_out_of_bounds() {
    let mut map = FlatMap::from([(1, 1)]);
    map.remove_index(1);
}

#[test]
fn test_remove_range() {
    let mut map: FlatMap<i32, ()> = (0..10).map(|k| (k, ())).collect();
    assert_eq!(map.remove_range(2..4), 2);
    assert_eq!(map.remove_range((Excluded(5), Included(6))), 6);
    assert_eq!(map.remove_range(6..6), 6);
    assert!(map.keys().copied().eq([0, 1, 4, 5, 6, 7, 9]));
    assert_eq!(map.remove_range(..), 0);
    assert!(map.is_empty());
}

#[test]
fn test_remove_and_remove_entry() {
    let mut map = FlatMap::from([(String::from("a"), 1), (String::from("b"), 2)]);
    assert_eq!(map.remove("c"), None);
    assert_eq!(map.remove_entry("a"), Some((String::from("a"), 1)));
    assert_eq!(map.remove("b"), Some(2));
    assert!(map.is_empty());
}

#[test]
fn test_at() {
    let mut map = FlatMap::from([(1, 10), (2, 20)]);
    assert_eq!(map.at(&2), Ok(&20));
    *map.at_mut(&2).unwrap() += 1;
    assert_eq!(map[&2], 21);
    assert_eq!(map.at_mut(&3), Err(KeyNotFound));
    assert_eq!(map.len(), 2);
    assert_eq!(KeyNotFound.to_string(), "key passed to `at` does not exist in this map");
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn test_index_missing() {
    let map = FlatMap::from([(1, 10)]);
    let _value = map[&2];
}

#[test]
fn test_bounds() {
    let map = FlatMap::from([(10, ()), (20, ()), (30, ())]);
    for (key, lower, upper) in [(5, 0, 0), (10, 0, 1), (15, 1, 1), (30, 2, 3), (35, 3, 3)] {
        assert_eq!(map.lower_bound(&key), lower);
        assert_eq!(map.upper_bound(&key), upper);
        assert_eq!(map.equal_range(&key), lower..upper);
        assert_eq!(map.find(&key), (lower < upper).then_some(lower));
        assert_eq!(map.contains_key(&key), lower < upper);
    }
}

#[test]
fn test_range() {
    let map: FlatMap<i32, i32> = (0..20).map(|k| (k * 2, k)).collect();
    assert!(map.range(3..9).map(|(k, _)| *k).eq([4, 6, 8]));
    assert!(map.range(..=4).map(|(k, _)| *k).eq([0, 2, 4]));
    assert!(map.range((Excluded(36), Unbounded)).map(|(k, _)| *k).eq([38]));
    assert_eq!(map.range(5..5).count(), 0);
    assert_eq!(map.range_indices(4..=8), 2..5);
    assert_eq!(map.range::<i32, _>(..).len(), map.len());
    assert!(map.range(10..16).rev().map(|(k, _)| *k).eq([14, 12, 10]));
}

#[test]
fn test_range_mut() {
    let mut map: FlatMap<i32, i32> = (0..5).map(|k| (k, 0)).collect();
    for (_, v) in map.range_mut(1..3) {
        *v += 1;
    }
    assert!(map.values().copied().eq([0, 1, 1, 0, 0]));
}

#[test]
#[should_panic(expected = "range start is greater than range end in FlatMap")]
fn test_range_backwards() {
    let map = FlatMap::from([(1, 1), (2, 2)]);
    let _ = map.range(3..1);
}

#[test]
#[should_panic(expected = "range start and end are equal and excluded in FlatMap")]
fn test_range_equal_excluded() {
    let map = FlatMap::from([(1, 1), (2, 2)]);
    let _ = map.range((Excluded(2), Excluded(2)));
}

#[test]
fn test_reverse_order() {
    let mut map = FlatMap::with_order(Reverse);
    map.extend([(1, 'a'), (3, 'c'), (2, 'b'), (3, 'x')]);
    assert_eq!(map.as_slice(), [(3, 'c'), (2, 'b'), (1, 'a')]);
    assert_eq!(map.lower_bound(&2), 1);
    assert!(map.range(3..=2).map(|(k, _)| *k).eq([3, 2]));
    assert_eq!(map.entry_ordering(&(1, 'z'), &(2, 'a')), Ordering::Greater);
    assert_eq!(map.pop_first(), Some((3, 'c')));
}

#[test]
fn test_stateful_order() {
    let mut map = FlatMap::with_order(ByLength { max: 3 });
    map.insert(String::from("ccc"), 3);
    map.insert(String::from("a"), 1);
    map.insert(String::from("bb"), 2);
    // equivalent to "ccc" under this order
    assert_eq!(map.insert(String::from("dddd"), 4), (2, false));

    assert_eq!(map.len(), 3);
    assert_eq!(map.get("zzzzz"), Some(&3));
    assert_eq!(map.get("z"), Some(&1));
    assert_eq!(map.get(""), None);
    assert_eq!(map.order().max, 3);
}

#[test]
fn test_random_operations_keep_invariant() {
    let mut rng = DeterministicRng::new();
    let mut map = FlatMap::new();
    let mut oracle = BTreeMap::new();

    for _ in 0..3000 {
        let key = rng.below(200);
        match rng.below(8) {
            0 | 1 => {
                map.insert(key, key);
                oracle.entry(key).or_insert(key);
            }
            2 => {
                let hint = rng.below(map.len() as u32 + 2) as usize;
                map.emplace_hint(hint, key, || key + 1);
                oracle.entry(key).or_insert(key + 1);
            }
            3 => {
                assert_eq!(map.remove(&key), oracle.remove(&key));
            }
            4 if !map.is_empty() => {
                let index = rng.below(map.len() as u32) as usize;
                let (k, v) = map.remove_index(index);
                assert_eq!(oracle.remove(&k), Some(v));
            }
            5 => {
                let batch: Vec<_> = (0..rng.below(8)).map(|i| (rng.below(200), i)).collect();
                for &(k, v) in &batch {
                    oracle.entry(k).or_insert(v);
                }
                map.extend(batch);
            }
            6 => {
                let start = rng.below(map.len() as u32 + 1) as usize;
                let end = start + rng.below(3) as usize;
                let end = end.min(map.len());
                for (k, _) in &map.as_slice()[start..end] {
                    oracle.remove(k);
                }
                assert_eq!(map.remove_range(start..end), start);
            }
            _ => {
                assert_eq!(map.get(&key), oracle.get(&key));
                assert_eq!(map.pop_last(), oracle.pop_last());
            }
        }
        check_against(&map, &oracle);
    }
}

#[test]
fn test_iterators() {
    let mut map = FlatMap::from([(3, 30), (1, 10), (2, 20)]);

    let mut iter = map.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some((&1, &10)));
    assert_eq!(iter.next_back(), Some((&3, &30)));
    assert_eq!(iter.as_slice(), [(2, 20)]);
    assert_eq!(iter.next(), Some((&2, &20)));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    assert!(map.keys().rev().copied().eq([3, 2, 1]));
    assert_eq!(map.values().len(), 3);
    for v in map.values_mut() {
        *v += 1;
    }
    for (k, v) in &mut map {
        *v += *k;
    }
    assert!(map.values().copied().eq([12, 23, 34]));
    assert_eq!(map.iter_mut().nth(1), Some((&2, &mut 23)));

    assert!(map.clone().into_keys().eq([1, 2, 3]));
    assert!(map.clone().into_values().rev().eq([34, 23, 12]));

    let mut into_iter = map.into_iter();
    assert_eq!(into_iter.next_back(), Some((3, 34)));
    assert_eq!(into_iter.len(), 2);
    assert_eq!(into_iter.collect::<Vec<_>>(), [(1, 12), (2, 23)]);
}

#[test]
fn test_positional_access() {
    let mut map = FlatMap::from([(2, 'b'), (1, 'a'), (3, 'c')]);
    assert_eq!(map.first_key_value(), Some((&1, &'a')));
    assert_eq!(map.last_key_value(), Some((&3, &'c')));
    assert_eq!(map.get_index(1), Some((&2, &'b')));
    if let Some((_, v)) = map.get_index_mut(1) {
        *v = 'x';
    }
    assert_eq!(map[&2], 'x');
    assert_eq!(map.get_index_mut(3), None);
    assert_eq!(map.get_key_value(&3), Some((&3, &'c')));
    assert_eq!(map.pop_first(), Some((1, 'a')));
    assert_eq!(map.pop_last(), Some((3, 'c')));
    assert_eq!(map.pop_last(), Some((2, 'x')));
    assert_eq!(map.pop_first(), None);
    assert_eq!(map.first_key_value(), None);
}

#[test]
fn test_get_or_insert() {
    let mut map: FlatMap<&str, Vec<i32>> = FlatMap::new();
    map.get_or_insert_default("b").push(1);
    map.get_or_insert_with("a", || vec![0]).push(2);
    map.get_or_insert_default("b").push(3);
    assert_eq!(map.as_slice(), [("a", vec![0, 2]), ("b", vec![1, 3])]);
}

#[test]
fn test_debug() {
    let map = FlatMap::from([(2, "b"), (1, "a")]);
    assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
    assert_eq!(format!("{:?}", FlatMap::<i32, i32>::new()), "{}");
    assert_eq!(format!("{:?}", map.keys()), "[1, 2]");
    assert_eq!(format!("{:?}", map.values()), r#"["a", "b"]"#);
    assert_eq!(format!("{:?}", map.into_iter()), r#"[(1, "a"), (2, "b")]"#);
}

#[test]
fn test_comparisons() {
    let a = FlatMap::from([(1, 'a'), (2, 'b')]);
    let b = FlatMap::from([(2, 'b'), (1, 'a')]);
    let c = FlatMap::from([(1, 'a'), (3, 'a')]);
    let d = FlatMap::from([(1, 'a')]);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a < c);
    assert!(d < a);
    assert_eq!(a.cmp(&b), Ordering::Equal);
    assert_eq!(c.partial_cmp(&d), Some(Ordering::Greater));
}

#[test]
fn test_hash() {
    let a = FlatMap::from([(1, 'a'), (2, 'b')]);
    let b: FlatMap<_, _> = [(2, 'b'), (1, 'a'), (2, 'z')].into_iter().collect();
    assert_eq!(hash_of(&a), hash_of(&b));

    // the length prefix keeps nested maps apart
    let nested_a = (FlatMap::<i32, i32>::new(), FlatMap::from([(1, 1)]));
    let nested_b = (FlatMap::from([(1, 1)]), FlatMap::<i32, i32>::new());
    assert_ne!(hash_of(&nested_a), hash_of(&nested_b));
}

#[test]
fn test_clone_and_clone_from() {
    let map = FlatMap::from([(1, String::from("a")), (2, String::from("b"))]);
    let cloned = map.clone();
    assert_eq!(cloned, map);

    let mut target = FlatMap::from([(9, String::from("z"))]);
    target.reserve(16);
    let capacity = target.capacity();
    target.clone_from(&map);
    assert_eq!(target, map);
    assert_eq!(target.capacity(), capacity);
}

#[test]
fn test_clone_panic_leaves_original() {
    let a = CrashTestDummy::new(0);
    let b = CrashTestDummy::new(1);
    let mut map = FlatMap::new();
    map.insert(0, a.spawn(Panic::Never));
    map.insert(1, b.spawn(Panic::InClone));

    catch_unwind(AssertUnwindSafe(|| map.clone())).unwrap_err();
    assert_eq!(a.cloned(), 1);
    assert_eq!(b.cloned(), 1);
    assert_eq!(a.dropped(), 1);
    assert_eq!(b.dropped(), 0);
    assert_eq!(map.len(), 2);
}

#[test]
fn test_clear_with_panicking_drop() {
    let a = CrashTestDummy::new(0);
    let b = CrashTestDummy::new(1);
    let c = CrashTestDummy::new(2);
    let mut map = FlatMap::with_capacity(3);
    map.insert(0, a.spawn(Panic::Never));
    map.insert(1, b.spawn(Panic::InDrop));
    map.insert(2, c.spawn(Panic::Never));

    catch_unwind(AssertUnwindSafe(|| map.clear())).unwrap_err();
    assert!(map.is_empty());
    assert!(map.capacity() >= 3);
    assert_eq!(a.dropped(), 1);
    assert_eq!(b.dropped(), 1);
    assert_eq!(c.dropped(), 1);
}

#[test]
fn test_retain() {
    let mut map: FlatMap<i32, i32> = (0..100).map(|x| (x, x * 10)).collect();
    map.retain(|&k, v| {
        *v += 1;
        k % 2 == 0
    });
    assert_eq!(map.len(), 50);
    assert_eq!(map[&2], 21);
    assert_eq!(map.get(&3), None);
    assert!(map.is_strictly_sorted());
}

#[test]
fn test_retain_panic_in_predicate() {
    let a = CrashTestDummy::new(0);
    let b = CrashTestDummy::new(1);
    let c = CrashTestDummy::new(2);
    let mut map = FlatMap::new();
    map.insert(0, a.spawn(Panic::Never));
    map.insert(1, b.spawn(Panic::InQuery));
    map.insert(2, c.spawn(Panic::Never));

    catch_unwind(AssertUnwindSafe(|| map.retain(|&k, v| v.query(k != 0)))).unwrap_err();
    assert_eq!(a.queried(), 1);
    assert_eq!(b.queried(), 1);
    assert_eq!(c.queried(), 0);
    assert_eq!(a.dropped(), 1);
    assert!(map.keys().copied().eq([1, 2]));
    drop(map);
    assert_eq!(b.dropped(), 1);
    assert_eq!(c.dropped(), 1);
}

#[test]
fn test_append() {
    let mut a = FlatMap::from([(1, "a"), (3, "c")]);
    let mut b = FlatMap::from([(2, "b"), (3, "x"), (4, "d")]);
    a.append(&mut b);
    assert!(b.is_empty());
    assert_eq!(a.as_slice(), [(1, "a"), (2, "b"), (3, "c"), (4, "d")]);

    b.insert(0, "z");
    a.append(&mut b);
    assert_eq!(a.first_key_value(), Some((&0, &"z")));
}

#[test]
fn test_swap() {
    let mut a = FlatMap::from([(1, 'a')]);
    let mut b = FlatMap::from([(2, 'b'), (3, 'c')]);
    let b_capacity = b.capacity();
    a.swap(&mut b);
    assert_eq!(a.as_slice(), [(2, 'b'), (3, 'c')]);
    assert_eq!(b.as_slice(), [(1, 'a')]);
    assert_eq!(a.capacity(), b_capacity);

    let mut rev = FlatMap::with_order(Reverse);
    rev.insert(1, ());
    let mut other = FlatMap::with_order(Reverse);
    other.insert(5, ());
    rev.swap(&mut other);
    rev.insert(6, ());
    assert!(rev.keys().copied().eq([6, 5]));
}

#[test]
fn test_capacity_is_a_hint() {
    let mut map: FlatMap<i32, i32> = (0..10).map(|k| (k, k)).collect();
    let before: Vec<_> = map.iter().map(|(k, v)| (*k, *v)).collect();

    map.reserve(100);
    assert!(map.capacity() >= 110);
    map.reserve_exact(5);
    map.try_reserve(10).unwrap();
    assert!(map.try_reserve(usize::MAX).is_err());
    map.shrink_to_fit();
    assert!(map.capacity() >= 10);

    assert_eq!(map.as_slice(), before);
    assert!(map.max_size() >= map.len());
    assert_eq!(FlatMap::<(), ()>::new().max_size(), usize::MAX);
}

#[test]
fn test_default_and_empty() {
    let map: FlatMap<i32, i32> = FlatMap::default();
    assert!(map.is_empty());
    assert_eq!(map.capacity(), 0);
    assert_eq!(map.iter().next(), None);
    assert_eq!(map.range::<i32, _>(..).next(), None);
    assert_eq!(map.lower_bound(&0), 0);
    assert_eq!(map.find(&0), None);

    let map: FlatMap<i32, i32, Reverse> = FlatMap::default();
    assert!(map.is_empty());
}

#[test]
fn test_borrowed_lookups() {
    let mut map = FlatMap::new();
    map.insert(String::from("b"), 2);
    map.insert(String::from("a"), 1);
    assert_eq!(map.get("a"), Some(&1));
    assert_eq!(map["b"], 2);
    assert!(map.contains_key("b"));
    assert!(map.range::<str, _>((Included("a"), Excluded("b"))).map(|(k, _)| k.as_str()).eq(["a"]));
    let entries = map.iter().map(|(k, v)| (k.to_string(), *v)).collect::<Vec<_>>();
    assert_eq!(entries, [(String::from("a"), 1), (String::from("b"), 2)]);
}

#[test]
fn test_range_by_borrowed_bounds() {
    let mut map: FlatMap<String, i32> =
        ["ant", "bee", "cat", "dog"].iter().zip(1..).map(|(k, v)| (k.to_string(), v)).collect();

    let range = map.range::<str, _>((Included("bee"), Excluded("dog")));
    assert!(range.map(|(k, _)| k.as_str()).eq(["bee", "cat"]));
    let range = map.range::<str, _>((Excluded("bee"), Unbounded));
    assert!(range.map(|(k, _)| k.as_str()).eq(["cat", "dog"]));
    let range = map.range::<str, _>((Unbounded, Included("b")));
    assert!(range.map(|(k, _)| k.as_str()).eq(["ant"]));
    assert_eq!(map.range::<str, _>((Included("c"), Excluded("c"))).count(), 0);
    assert_eq!(map.range_indices::<str, _>((Excluded("ant"), Included("cow"))), 1..3);

    for (_, v) in map.range_mut::<str, _>((Included("cat"), Unbounded)) {
        *v *= 10;
    }
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [1, 2, 30, 40]);
}

#[test]
fn test_range_by_bound_pairs() {
    let map = FlatMap::from([(3, "a"), (5, "b"), (8, "c"), (13, "d")]);

    let range = map.range::<i32, _>((Included(&4), Included(&8)));
    assert!(range.map(|(k, _)| *k).eq([5, 8]));
    let range = map.range::<i32, _>((Excluded(&3), Excluded(&13)));
    assert!(range.map(|(k, _)| *k).eq([5, 8]));
    let range = map.range::<i32, _>((Excluded(&8), Unbounded));
    assert!(range.map(|(k, _)| *k).eq([13]));
    let range = map.range::<i32, _>((Included(&4), Included(&8)));
    assert!(range.rev().map(|(k, _)| *k).eq([8, 5]));
    assert_eq!(map.range::<i32, _>((Included(&4), Included(&8))).next(), Some((&5, &"b")));
}

#[test]
fn test_default_order_key_forms() {
    use std::borrow::Cow;
    use std::rc::Rc;

    const BY_STR: OrdTotalOrder<str> = OrdTotalOrder::new();
    assert_eq!(format!("{BY_STR:?}"), "OrdTotalOrder");
    assert!(BY_STR.lt("a", "b"));
    assert_eq!(BY_STR.cmp("b", "a"), Ordering::Greater);

    let mut names = FlatMap::<String, i32, _>::with_order(BY_STR);
    names.insert(String::from("zed"), 1);
    names.insert(String::from("amy"), 2);
    assert_eq!(names.get("amy"), Some(&2));

    let mut bytes: FlatMap<Vec<u8>, i32> = FlatMap::new();
    bytes.insert(vec![2, 1], 1);
    bytes.insert(vec![1, 9, 9], 2);
    assert_eq!(bytes.get(&[2u8, 1][..]), Some(&1));
    assert_eq!(bytes.first_key_value(), Some((&vec![1, 9, 9], &2)));

    let arrays = FlatMap::from([([3u8, 0], 'c'), ([1, 0], 'a')]);
    assert_eq!(arrays.get(&[1u8, 0][..]), Some(&'a'));
    assert_eq!(arrays.get(&[3u8, 0]), Some(&'c'));

    let boxed = FlatMap::from([(Box::<str>::from("b"), 2), (Box::<str>::from("a"), 1)]);
    assert_eq!(boxed["a"], 1);

    let shared = FlatMap::from([(Rc::<str>::from("x"), 0), (Rc::<str>::from("w"), 1)]);
    assert!(shared.contains_key("w"));
    assert_eq!(shared.lower_bound("x"), 1);

    let cows: FlatMap<Cow<'static, str>, i32> =
        [(Cow::Borrowed("b"), 2), (Cow::Owned(String::from("a")), 1)].into_iter().collect();
    assert!(cows.keys().map(|k| &**k).eq(["a", "b"]));
    assert_eq!(cows.find("b"), Some(1));
}
