//! Integration tests for IndexedView and the Indexed trait.

use std::thread;

use colkern::error::KernelError;
use colkern::math::{Indexed, IndexedView, Vector};

#[test]
fn view_reorders_through_idx() {
    let arr = vec![10, 20, 30];
    let idx = vec![2, 0, 1];
    let view = IndexedView::new(&arr, &idx).unwrap();
    assert_eq!(view.len(), 3);
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![30, 10, 20]);
    assert_eq!(view[0], 30);
    assert_eq!(view.indices(), &[2, 0, 1]);
    assert_eq!(view.at(2), Ok(&20));
}

#[test]
fn view_may_repeat_and_outgrow_source() {
    let arr = Vector::from(vec!['a', 'b']);
    let idx = [1, 1, 0, 1];
    let view = IndexedView::new(&arr, &idx).unwrap();
    assert_eq!(view.len(), 4);
    assert_eq!(view.to_vector().to_vec(), vec!['b', 'b', 'a', 'b']);
}

#[test]
fn empty_idx_gives_empty_view() {
    let arr = [1.0, 2.0];
    let view = IndexedView::new(&arr[..], &[]).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.iter().next(), None);
}

#[test]
fn invalid_index_value_is_rejected_on_construction() {
    let arr = vec![1, 2, 3];
    let idx = vec![0, 3];
    assert_eq!(
        IndexedView::new(&arr, &idx).unwrap_err(),
        KernelError::IndexOutOfRange { index: 3, len: 3 }
    );
}

#[test]
fn position_past_end_is_rejected() {
    let arr = vec![1, 2, 3];
    let idx = vec![0, 1];
    let view = IndexedView::new(&arr, &idx).unwrap();
    assert_eq!(
        view.at(2),
        Err(KernelError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(view.get(5), None);
}

#[test]
#[should_panic(expected = "out of range")]
fn index_operator_panics_past_end() {
    let arr = vec![1, 2, 3];
    let idx = vec![0];
    let view = IndexedView::new(&arr, &idx).unwrap();
    let _ = view[1];
}

#[test]
fn each_traversal_starts_from_the_beginning() {
    let arr = vec![1, 2, 3, 4];
    let idx = vec![3, 2, 1, 0];
    let view = IndexedView::new(&arr, &idx).unwrap();

    let mut first = view.iter();
    assert_eq!(first.next(), Some(&4));
    assert_eq!(first.next(), Some(&3));

    // a second traversal is unaffected by the first one's position
    let second: Vec<i32> = view.iter().copied().collect();
    assert_eq!(second, vec![4, 3, 2, 1]);
    assert_eq!(first.next(), Some(&2));

    let again: Vec<i32> = (&view).into_iter().copied().collect();
    assert_eq!(again, second);
}

#[test]
fn iter_reports_exact_size_and_runs_backwards() {
    let arr = vec![5, 6, 7];
    let idx = vec![0, 2];
    let view = IndexedView::new(&arr, &idx).unwrap();
    let mut it = view.iter();
    assert_eq!(it.len(), 2);
    assert_eq!(it.next_back(), Some(&7));
    assert_eq!(it.len(), 1);
    assert_eq!(it.next(), Some(&5));
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);
}

#[test]
fn views_can_be_nested() {
    let arr = vec![10, 20, 30, 40];
    let outer_idx = vec![3, 2, 1, 0];
    let reversed = IndexedView::new(&arr, &outer_idx).unwrap();
    let inner_idx = vec![0, 0, 3];
    let picked = IndexedView::new(&reversed, &inner_idx).unwrap();
    assert_eq!(picked.to_vector().to_vec(), vec![40, 40, 10]);
}

#[test]
fn concurrent_readers_share_one_view() {
    let arr: Vec<u64> = (0..100).collect();
    let idx: Vec<usize> = (0..100).rev().collect();
    let view = IndexedView::new(&arr, &idx).unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| view.iter().copied().sum::<u64>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 4950);
        }
    });
}
