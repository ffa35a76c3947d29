//! Tests for the collections module.

use std::cell::Cell;

use super::*;

/// Composite key whose identity is only its coordinates
#[derive(Debug, Clone, PartialEq)]
struct Tagged {
    x: i32,
    y: i32,
    label: &'static str,
}

fn tagged_hash(t: &Tagged) -> (i32, i32) {
    (t.x, t.y)
}

fn tagged(x: i32, y: i32, label: &'static str) -> Tagged {
    Tagged { x, y, label }
}

#[test]
fn test_xmap_get_with_distinct_but_equal_key() {
    let mut map = XMap::new(tagged_hash);
    map.insert(tagged(1, 1, "first"), 10);

    assert_eq!(map.get(&tagged(1, 1, "other")), Some(&10));
    assert!(map.contains_key(&tagged(1, 1, "")));
    assert!(!map.contains_key(&tagged(1, 2, "first")));
}

#[test]
fn test_xmap_insert_replaces_key_and_value() {
    let mut map = XMap::new(tagged_hash);
    assert_eq!(map.insert(tagged(0, 0, "old"), 1), None);
    assert_eq!(map.insert(tagged(0, 0, "new"), 2), Some(1));

    assert_eq!(map.len(), 1);
    let (key, value) = map.get_key_value(&tagged(0, 0, "probe")).unwrap();
    assert_eq!(key.label, "new");
    assert_eq!(*value, 2);
}

#[test]
fn test_xmap_iteration_yields_original_keys() {
    let mut map = XMap::new(tagged_hash);
    map.insert(tagged(1, 2, "a"), 'a');
    map.insert(tagged(3, 4, "b"), 'b');

    let mut labels: Vec<_> = map.iter().map(|(key, value)| (key.label, *value)).collect();
    labels.sort();
    assert_eq!(labels, vec![("a", 'a'), ("b", 'b')]);

    let mut owned: Vec<_> = map.into_iter().map(|(key, _)| (key.x, key.y)).collect();
    owned.sort();
    assert_eq!(owned, vec![(1, 2), (3, 4)]);
}

#[test]
fn test_xmap_remove() {
    let mut map = XMap::new(tagged_hash);
    map.insert(tagged(5, 5, "x"), "five");

    assert_eq!(map.remove(&tagged(5, 5, "y")), Some("five"));
    assert_eq!(map.remove(&tagged(5, 5, "y")), None);
    assert!(map.is_empty());
}

#[test]
fn test_xmap_clone_is_independent() {
    let mut original = XMap::new(tagged_hash);
    original.insert(tagged(0, 0, "a"), 1);

    let mut copy = original.clone();
    copy.insert(tagged(0, 0, "a"), 100);
    copy.insert(tagged(1, 0, "b"), 2);
    original.remove(&tagged(0, 0, "a"));

    assert_eq!(original.len(), 0);
    assert_eq!(copy.len(), 2);
    assert_eq!(copy.get(&tagged(0, 0, "a")), Some(&100));
}

#[test]
fn test_xmap_clone_with_capturing_closure() {
    let width = 10;
    let mut original = XMap::new(move |p: &(i32, i32)| p.1 * width + p.0);
    original.insert((3, 2), "cell");

    let copy = original.clone();
    assert_eq!(copy.hash_of(&(3, 2)), 23);
    assert_eq!(copy.get(&(3, 2)), Some(&"cell"));
}

#[test]
fn test_xmap_get_or_insert_with_only_computes_once() {
    let calls = Cell::new(0);
    let mut map = XMap::new(tagged_hash);

    for _ in 0..3 {
        *map.get_or_insert_with(tagged(2, 2, "k"), || {
            calls.set(calls.get() + 1);
            0
        }) += 5;
    }

    assert_eq!(calls.get(), 1);
    assert_eq!(map.get(&tagged(2, 2, "")), Some(&15));
}

#[test]
fn test_xmap_retain_and_extend() {
    let mut map = XMap::new(|n: &u32| n % 100);
    map.extend((0..10).map(|n| (n, n * n)));
    map.retain(|key, _| key % 2 == 0);

    assert_eq!(map.len(), 5);
    let mut values: Vec<_> = map.values().copied().collect();
    values.sort();
    assert_eq!(values, vec![0, 4, 16, 36, 64]);
}

#[test]
fn test_xset_add_has_delete() {
    let mut set = XSet::new(tagged_hash);
    assert!(set.insert(tagged(1, 1, "a")));
    assert!(!set.insert(tagged(1, 1, "b")));
    assert!(set.contains(&tagged(1, 1, "z")));
    assert_eq!(set.get(&tagged(1, 1, "z")).map(|t| t.label), Some("b"));

    assert!(set.remove(&tagged(1, 1, "z")));
    assert!(!set.remove(&tagged(1, 1, "z")));
    assert!(set.is_empty());
}

#[test]
fn test_xset_borrowed_iteration() {
    let mut set = XSet::new(tagged_hash);
    set.extend([tagged(0, 0, "a"), tagged(1, 0, "b"), tagged(0, 0, "c")]);

    let mut labels = Vec::new();
    for t in &set {
        labels.push(t.label);
    }
    labels.sort();

    assert_eq!(labels, vec!["b", "c"]);
    // Still usable after borrowing
    assert_eq!(set.len(), 2);
}

#[test]
fn test_xset_intersection() {
    let mut left = XSet::new(tagged_hash);
    left.extend([tagged(0, 0, "l"), tagged(1, 0, "l"), tagged(2, 0, "l")]);
    let mut right = XSet::new(tagged_hash);
    right.extend([tagged(1, 0, "r"), tagged(2, 0, "r"), tagged(3, 0, "r")]);

    let both = left.intersection(&right);
    let mut xs: Vec<_> = both.iter().map(|t| (t.x, t.label)).collect();
    xs.sort();

    // Elements come from the left-hand set
    assert_eq!(xs, vec![(1, "l"), (2, "l")]);
    // Inputs are untouched
    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
}

#[test]
fn test_xset_intersection_with_disjoint_set_is_empty() {
    let mut left = XSet::new(|n: &i64| *n);
    left.extend([1, 2, 3]);
    let mut right = XSet::new(|n: &i64| *n);
    right.extend([4, 5]);

    assert!(left.intersection(&right).is_empty());
}

#[test]
fn test_default_map_get_materializes_default() {
    let calls = Cell::new(0);
    let mut map = DefaultMap::new(|| {
        calls.set(calls.get() + 1);
        Vec::new()
    });

    map.get("a").push(1);
    map.get("a").push(2);
    map.get("b").push(3);

    assert_eq!(calls.get(), 2);
    assert_eq!(map.peek("a"), Some(&vec![1, 2]));
    assert_eq!(map.peek("b"), Some(&vec![3]));
}

#[test]
fn test_default_map_other_operations_do_not_materialize() {
    let calls = Cell::new(0);
    let mut map: DefaultMap<u64, u32, _> = DefaultMap::new(|| {
        calls.set(calls.get() + 1);
        0
    });

    assert_eq!(map.peek(&7), None);
    assert!(!map.contains_key(&7));
    assert_eq!(map.remove(&7), None);
    assert_eq!(map.insert(7, 70), None);
    assert_eq!(map.iter().count(), 1);
    assert_eq!(calls.get(), 0);

    assert_eq!(*map.get(7), 70);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_default_map_with_default_counts() {
    let mut counts: DefaultMap<char, usize> = DefaultMap::with_default();
    for c in "mississippi".chars() {
        *counts.get(c) += 1;
    }

    let mut pairs: Vec<_> = counts.into_iter().collect();
    pairs.sort();
    assert_eq!(pairs, vec![('i', 4), ('m', 1), ('p', 2), ('s', 4)]);
}

#[test]
fn test_min_heap_pops_smallest_priority() {
    let mut heap = MinHeap::new();
    for (priority, item) in [(7, 'g'), (2, 'b'), (9, 'i'), (1, 'a'), (4, 'd')] {
        heap.push(priority, item);
    }

    assert_eq!(heap.peek(), Some((&1, &'a')));
    let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|(_, item)| item).collect();
    assert_eq!(order, vec!['a', 'b', 'd', 'g', 'i']);
    assert!(heap.is_empty());
}

#[test]
fn test_min_heap_ties_pop_in_insertion_order() {
    let mut heap: MinHeap<u32, &str> = [(3, "x"), (1, "first"), (1, "second"), (1, "third")]
        .into_iter()
        .collect();

    assert_eq!(heap.pop(), Some((1, "first")));
    assert_eq!(heap.pop(), Some((1, "second")));
    assert_eq!(heap.pop(), Some((1, "third")));
    assert_eq!(heap.pop(), Some((3, "x")));
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_min_heap_items_need_no_ordering() {
    struct Opaque(u8);

    let mut heap = MinHeap::new();
    heap.push(2u8, Opaque(2));
    heap.push(1u8, Opaque(1));

    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop().map(|(_, item)| item.0), Some(1));
}

#[test]
fn test_queue_is_fifo() {
    let mut queue = Queue::new();
    queue.push(1);
    queue.push(2);
    queue.extend([3, 4]);

    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek(), Some(&1));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    queue.push(5);
    let rest: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
    assert_eq!(rest, vec![3, 4, 5]);
    assert!(queue.is_empty());
}
