use seqcomb::prelude::*;
use seqcomb::{SeqError, range};

fn five() -> Vec<i32> {
    vec![0, 1, 2, 3, 4]
}

fn collect<'a>(adapter: impl IntoIterator<Item = &'a i32>) -> Vec<i32> {
    adapter.into_iter().copied().collect()
}

#[test]
fn take_bounds() {
    let data = five();
    assert_eq!(collect(seq(&data).take(0)), Vec::<i32>::new());
    assert_eq!(collect(seq(&data).take(1)), vec![0]);
    assert_eq!(collect(seq(&data).take(10)), data);
}

#[test]
fn skip_bounds() {
    let data = five();
    assert_eq!(collect(seq(&data).skip(0)), data);
    assert_eq!(collect(seq(&data).skip(1)), vec![1, 2, 3, 4]);
    assert_eq!(collect(seq(&data).skip(10)), Vec::<i32>::new());
}

#[test]
fn conditional_slices() {
    let data = five();
    assert_eq!(collect(seq(&data).skip_while(|v| **v < 2)), vec![2, 3, 4]);
    assert_eq!(collect(seq(&data).take_while(|v| **v < 2)), vec![0, 1]);
    assert_eq!(
        collect(seq(&data).skip_while_indexed(|_, i| i < 3)),
        vec![3, 4]
    );
    assert_eq!(
        collect(seq(&data).take_while_indexed(|_, i| i < 3)),
        vec![0, 1, 2]
    );
}

#[test]
fn append_and_prepend() {
    let data = five();
    let extra = 99;
    assert_eq!(collect(seq(&data).append(&extra)), vec![0, 1, 2, 3, 4, 99]);
    assert_eq!(collect(seq(&data).prepend(&extra)), vec![99, 0, 1, 2, 3, 4]);
}

#[test]
fn concat_with_itself() {
    let data = five();
    let source = seq(&data);
    let doubled = source.concat(&source);

    let values = collect(&doubled);
    assert_eq!(values.len(), 10);
    assert_eq!(values[..5], values[5..]);

    let mut first = doubled.cursor();
    let mut second = doubled.cursor();
    for _ in 0..6 {
        assert!(first.move_next());
    }
    assert!(second.move_next());
    assert!(second.move_next());
    second.reset();
    assert_eq!(first.current(), Some(&0));
    assert!(first.move_next());
    assert_eq!(first.current(), Some(&1));
    assert!(second.move_next());
    assert_eq!(second.current(), Some(&0));
}

#[test]
fn zip_uses_shorter_length() {
    let data = five();
    let ones = [1, 1, 1, 1, 1];
    let forward: Vec<(i32, i32)> = seq(&data)
        .zip_with(&ones, |a, b| (*a, *b))
        .into_iter()
        .collect();
    let backward: Vec<(i32, i32)> = seq(&ones)
        .zip_with(&data, |a, b| (*a, *b))
        .into_iter()
        .collect();
    assert_eq!(forward, vec![(0, 1), (1, 1), (2, 1), (3, 1), (4, 1)]);
    assert_eq!(backward, vec![(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)]);

    let three = [7, 8, 9];
    assert_eq!(seq(&data).zip(&three).iter().count(), 3);
}

#[test]
fn single_needs_exactly_one() {
    let source = range(0, 5).unwrap();
    assert_eq!(source.single(), Err(SeqError::MoreThanOneElement));
    assert_eq!(source.single_or_default(), Err(SeqError::MoreThanOneElement));
    assert_eq!(source.single_where(|v| *v == 0), Ok(0));
    assert_eq!(source.single_or_default_where(|v| *v == 0), Ok(0));
}

#[test]
fn aggregate_with_seed_and_result() {
    let source = range(0, 5).unwrap();
    assert_eq!(source.aggregate_with(10, |acc, v| acc + v, |acc| acc - 10), 10);
}

#[test]
fn comparisons_against_self_and_others() {
    let data = five();
    let source = seq(&data);
    let shorter = [0, 1, 2];
    let different = [0, 1, 2, 9, 4];

    assert!(source.sequence_equal(&source));
    assert_eq!(source.mismatch(&source), None);
    assert!(!source.sequence_equal(&shorter));
    assert_eq!(source.mismatch(&shorter), Some(3));
    assert!(!source.sequence_equal(&different));
    assert_eq!(source.mismatch(&different), Some(3));
}

#[test]
fn select_many_over_ranges() {
    let sizes = [0usize, 2, 0, 3];
    let flattened: Vec<usize> = seq(&sizes)
        .select_many(|size| range(0usize, *size).unwrap())
        .into_iter()
        .collect();
    assert_eq!(flattened, vec![0, 1, 0, 1, 2]);
}

#[test]
fn default_if_empty_and_replace() {
    let empty: [i32; 0] = [];
    let data = five();
    let fallback: Vec<i32> = seq(&empty)
        .select(|v| *v)
        .default_if_empty()
        .into_iter()
        .collect();
    assert_eq!(fallback, vec![0]);

    let replaced: Vec<i32> = seq(&data)
        .select(|v| *v)
        .replace(3, 30)
        .into_iter()
        .collect();
    assert_eq!(replaced, vec![0, 1, 2, 30, 4]);
}

#[test]
fn free_functions_match_methods() {
    let data = five();
    let extra = [5, 6];
    assert_eq!(
        collect(seqcomb::concat(&data, &extra)),
        vec![0, 1, 2, 3, 4, 5, 6]
    );
    assert_eq!(collect(seqcomb::take(seqcomb::skip(&data, 1), 2)), vec![1, 2]);
    let doubled: Vec<i32> = seqcomb::select(&data, |v| v * 2).into_iter().collect();
    assert_eq!(doubled, vec![0, 2, 4, 6, 8]);
    assert_eq!(seqcomb::zip(&data, &extra).iter().count(), 2);
}
