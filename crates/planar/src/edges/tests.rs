//! Store-level laws: append, links, merge, growth, diagnostics.

use super::*;
use crate::rotation::{count_faces, from_rotations, thread_rotation, validate};
use proptest::prelude::*;

/// Triangle 0-1-2 with both rotations threaded.
fn triangle() -> EdgeStore {
    let mut s = EdgeStore::with_capacity(3);
    let a = s.append(0, 1).unwrap();
    let b = s.append(1, 2).unwrap();
    let c = s.append(2, 0).unwrap();
    thread_rotation(&mut s, 0, &[a, c]).unwrap();
    thread_rotation(&mut s, 1, &[b, a]).unwrap();
    thread_rotation(&mut s, 2, &[c, b]).unwrap();
    s
}

#[test]
fn construct_reserves_identity_labels() {
    let s = EdgeStore::with_capacity(5);
    assert_eq!(s.size(), 0);
    assert_eq!(s.capacity(), 5);
    assert!(s.is_empty());
    assert!(s.labels().is_empty());
    assert_eq!(s.vertex_count(), 0);
}

#[test]
fn sequential_appends_fill_slots_in_order() {
    let pairs = [(3, 4), (4, 5), (5, 3), (0, 9)];
    let mut s = EdgeStore::with_capacity(pairs.len());
    for (k, &(u, v)) in pairs.iter().enumerate() {
        assert_eq!(s.append(u, v).unwrap(), k as EdgeId);
    }
    assert_eq!(s.size(), pairs.len());
    for (i, &(u, v)) in pairs.iter().enumerate() {
        assert_eq!((s.vertex1()[i], s.vertex2()[i]), (u, v));
    }
    assert_eq!(s.labels(), &[0, 1, 2, 3]);
    assert_eq!(s.vertex_count(), 10);
    // Fresh edges carry no links yet.
    let e = s.edge(0).unwrap();
    assert_eq!((e.next1, e.prev1, e.next2, e.prev2), (NO_EDGE, NO_EDGE, NO_EDGE, NO_EDGE));
    assert!(!s.is_linked(0, 3));
}

#[test]
fn append_past_capacity_fails_fast() {
    let mut s = EdgeStore::with_capacity(1);
    s.append(0, 1).unwrap();
    assert_eq!(
        s.append(1, 2),
        Err(EdgeStoreError::CapacityExceeded { capacity: 1 })
    );
    assert_eq!(s.size(), 1);
}

#[test]
fn push_grows_per_cfg() {
    let cfg = StoreCfg {
        initial_capacity: 2,
        growth_factor: 2,
        min_growth: 1,
    };
    let mut s = EdgeStore::new(cfg);
    for k in 0..5u32 {
        s.push(k, k + 1);
    }
    assert_eq!(s.size(), 5);
    assert_eq!(s.capacity(), 8);
    assert_eq!(s.labels(), &[0, 1, 2, 3, 4]);

    let mut empty = EdgeStore::with_capacity(0);
    empty.push(0, 1);
    assert_eq!(empty.capacity(), StoreCfg::default().min_growth);
}

#[test]
fn set_next_updates_both_directions() {
    let mut s = EdgeStore::with_capacity(3);
    let a = s.append(0, 1).unwrap();
    let b = s.append(2, 0).unwrap();
    s.set_next_edge(a, 0, b).unwrap();
    assert_eq!(s.next_edge(a, 0), b);
    assert_eq!(s.previous_edge(b, 0), a);
    // Vertex 0 is `vertex2` of `b`: only the second link pair moved.
    let vb = s.edge(b).unwrap();
    assert_eq!((vb.prev2, vb.prev1), (a, NO_EDGE));

    s.set_previous_edge(a, 0, b).unwrap();
    assert_eq!(s.previous_edge(a, 0), b);
    assert_eq!(s.next_edge(b, 0), a);
}

#[test]
fn set_links_reject_non_endpoints() {
    let mut s = EdgeStore::with_capacity(2);
    let a = s.append(0, 1).unwrap();
    let b = s.append(2, 3).unwrap();
    assert_eq!(
        s.set_next_edge(a, 0, b),
        Err(EdgeStoreError::InvalidVertex { edge: b, vertex: 0 })
    );
    assert_eq!(
        s.set_previous_edge(a, 7, a),
        Err(EdgeStoreError::InvalidVertex { edge: a, vertex: 7 })
    );
    assert_eq!(
        s.set_next_edge(a, 0, 5),
        Err(EdgeStoreError::EdgeOutOfRange { edge: 5, size: 2 })
    );
    // Nothing was written on failure.
    assert_eq!(s.next_edge(a, 0), NO_EDGE);
}

#[test]
fn opposite_vertex_both_ways() {
    let s = triangle();
    for e in 0..s.size() as EdgeId {
        let (v1, v2) = (s.vertex1()[e as usize], s.vertex2()[e as usize]);
        assert_eq!(s.opposite_vertex(e, v1), v2);
        assert_eq!(s.opposite_vertex(e, v2), v1);
    }
    assert_eq!(s.endpoint(0, 1), Ok(Endpoint::Second));
    assert_eq!(
        s.endpoint(0, 2),
        Err(EdgeStoreError::InvalidVertex { edge: 0, vertex: 2 })
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "is not an endpoint")]
fn opposite_vertex_panics_on_foreign_vertex_in_debug() {
    let s = triangle();
    s.opposite_vertex(0, 2);
}

#[test]
fn darts_index_by_endpoint() {
    let s = triangle();
    assert_eq!(Endpoint::First.index(), 0);
    assert_eq!(Endpoint::Second.index(), 1);
    // Edge 2 is (2, 0).
    assert_eq!(s.dart(2, 2), 4);
    assert_eq!(s.dart(2, 0), 5);
}

#[test]
fn self_loop_uses_first_link_pair() {
    let mut s = EdgeStore::with_capacity(1);
    let e = s.append(4, 4).unwrap();
    s.set_next_edge(e, 4, e).unwrap();
    assert_eq!(s.endpoint(e, 4), Ok(Endpoint::First));
    assert_eq!(s.opposite_vertex(e, 4), 4);
    let v = s.edge(e).unwrap();
    assert_eq!((v.next1, v.prev1, v.next2), (e, e, NO_EDGE));
}

#[test]
fn extend_rebases_labels_and_links() {
    let mut left = triangle();
    let right = {
        let mut s = triangle();
        s.increase_capacity(6).unwrap();
        s
    };
    left.extend(&right);
    assert_eq!(left.size(), 6);
    assert_eq!(left.capacity(), 6);
    assert_eq!(left.labels(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(&left.vertex1()[3..], right.vertex1());
    assert_eq!(&left.vertex2()[3..], right.vertex2());
    for i in 0..3 {
        let a = right.edge(i).unwrap();
        let b = left.edge(i + 3).unwrap();
        assert_eq!(b.next1, a.next1 + 3);
        assert_eq!(b.prev2, a.prev2 + 3);
    }
    // Both copies share vertex ids, so vertex 0 now has two disjoint rings.
    assert!(validate(&left).is_err());
}

#[test]
fn extend_with_disjoint_vertices_keeps_rotations_valid() {
    let mut left = triangle();
    // Square on vertices 3..=6, listed counter-clockwise.
    let square = from_rotations(
        &[
            vec![],
            vec![],
            vec![],
            vec![4, 6],
            vec![5, 3],
            vec![6, 4],
            vec![3, 5],
        ],
        StoreCfg::default(),
    )
    .unwrap();
    let (tri_faces, sq_faces) = (count_faces(&left), count_faces(&square));
    assert_eq!((tri_faces, sq_faces), (2, 2));

    left.extend(&square);
    assert_eq!(left.size(), 7);
    validate(&left).unwrap();
    assert_eq!(count_faces(&left), tri_faces + sq_faces);
    // Each rebased link stays inside the merged square block.
    for e in 3..7 {
        let v = left.edge(e).unwrap();
        for link in [v.next1, v.prev1, v.next2, v.prev2] {
            assert!((3..7).contains(&link));
        }
    }
}

#[test]
fn extend_keeps_spare_capacity_and_unset_links() {
    let mut left = EdgeStore::with_capacity(10);
    left.append(0, 1).unwrap();
    let mut right = EdgeStore::with_capacity(2);
    right.append(5, 6).unwrap();
    right.append(6, 7).unwrap();
    left.extend(&right);
    assert_eq!(left.capacity(), 10);
    assert_eq!(left.size(), 3);
    assert_eq!(left.edge(2).unwrap().next1, NO_EDGE);
    // Appends continue after the merged range with identity labels.
    let e = left.append(7, 8).unwrap();
    assert_eq!(e, 3);
    assert_eq!(left.labels(), &[0, 1, 2, 3]);
}

#[test]
fn extend_with_empty_is_noop() {
    let mut s = triangle();
    let before = s.string_lines();
    s.extend(&EdgeStore::with_capacity(4));
    assert_eq!(s.string_lines(), before);
}

#[test]
fn growth_preserves_edges_links_and_labels() {
    let mut left = triangle();
    left.extend(&triangle());
    let before: Vec<EdgeView> = left.edges().collect();
    left.increase_capacity(20).unwrap();
    assert_eq!(left.capacity(), 20);
    assert_eq!(left.edges().collect::<Vec<_>>(), before);
    // Reserved slots come back with identity labels.
    for k in 6..20u32 {
        assert_eq!(left.append(k, k + 1).unwrap(), k);
    }
    assert_eq!(left.labels()[19], 19);
}

#[test]
fn growth_below_size_is_rejected() {
    let mut s = triangle();
    assert_eq!(
        s.increase_capacity(2),
        Err(EdgeStoreError::CapacityUnderflow {
            requested: 2,
            size: 3
        })
    );
    assert_eq!(s.size(), 3);
    // Trimming reserved slots down to `size` is allowed.
    s.increase_capacity(3).unwrap();
    assert_eq!(s.capacity(), 3);
    validate(&s).unwrap();
}

#[test]
fn diagnostic_lines_format() {
    let mut s = triangle();
    s.append(3, 4).unwrap_err();
    let lines = s.string_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Edge(#0, v1=0, v2=1, ccw1=2, cw1=2, ccw2=1, cw2=1)");
    s.increase_capacity(4).unwrap();
    s.append(3, 4).unwrap();
    assert_eq!(
        s.string_lines()[3],
        "Edge(#3, v1=3, v2=4, ccw1=-, cw1=-, ccw2=-, cw2=-)"
    );
    let dump = s.to_string();
    assert!(dump.starts_with("EdgeStore(size=4, capacity=4)"));
    assert_eq!(dump.lines().count(), 5);
}

proptest! {
    #[test]
    fn merge_sizing_law(
        a in proptest::collection::vec((0u32..50, 0u32..50), 0..30),
        b in proptest::collection::vec((0u32..50, 0u32..50), 0..30),
    ) {
        let mut left = EdgeStore::with_capacity(a.len());
        for &(u, v) in &a {
            left.append(u, v).unwrap();
        }
        let mut right = EdgeStore::with_capacity(b.len());
        for &(u, v) in &b {
            right.append(u, v).unwrap();
        }
        left.extend(&right);
        prop_assert_eq!(left.size(), a.len() + b.len());
        for (i, &(u, v)) in a.iter().chain(&b).enumerate() {
            prop_assert_eq!((left.vertex1()[i], left.vertex2()[i]), (u, v));
        }
        for i in 0..b.len() {
            prop_assert_eq!(left.labels()[a.len() + i], right.labels()[i] + a.len() as u32);
        }
    }

    #[test]
    fn growth_preservation_law(
        pairs in proptest::collection::vec((0u32..20, 0u32..20), 1..40),
        extra in 0usize..64,
    ) {
        let mut s = EdgeStore::with_capacity(pairs.len());
        for &(u, v) in &pairs {
            s.append(u, v).unwrap();
        }
        // Chain every edge after its predecessor around its first endpoint
        // when they share it, so some links are set and some are not.
        for e in 1..pairs.len() as EdgeId {
            let v = s.vertex1()[e as usize];
            if s.endpoint(e - 1, v).is_ok() {
                s.set_next_edge(e - 1, v, e).unwrap();
            }
        }
        let before: Vec<EdgeView> = s.edges().collect();
        s.increase_capacity(pairs.len() + extra).unwrap();
        prop_assert_eq!(s.size(), pairs.len());
        prop_assert_eq!(s.edges().collect::<Vec<_>>(), before);
    }
}
