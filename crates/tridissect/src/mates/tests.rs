use super::*;
use crate::fixtures::{degenerate3, table};
use crate::table::rand::{back_circulant, random_isotope};
use crate::table::{Bitrade, PartialTable};
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use proptest::prelude::*;

fn sorted(mut cover: Vec<usize>) -> Vec<usize> {
    cover.sort();
    cover
}

#[test]
fn knuth_example_has_one_cover() {
    let rows = vec![
        vec![0, 3, 6],
        vec![0, 3],
        vec![3, 4, 6],
        vec![2, 4, 5],
        vec![1, 2, 5, 6],
        vec![1, 6],
    ];
    let covers: Vec<Vec<usize>> = ExactCover::new(7, rows).map(sorted).collect();
    assert_eq!(covers, vec![vec![1, 3, 5]]);
}

#[test]
fn empty_problem_has_the_empty_cover() {
    let mut x = ExactCover::new(0, Vec::new());
    assert_eq!(x.next(), Some(vec![]));
    assert_eq!(x.next(), None);
}

#[test]
fn uncoverable_column_yields_nothing() {
    let x = ExactCover::new(3, vec![vec![0], vec![1]]);
    assert_eq!(x.num_cols(), 3);
    assert_eq!(x.count(), 0);
}

#[test]
fn width_grows_to_fit_rows() {
    let x = ExactCover::new(1, vec![vec![0, 4]]);
    assert_eq!(x.num_cols(), 5);
    assert_eq!(x.num_rows(), 1);
    assert_eq!(x.row(0), &[0, 4]);
}

#[test]
fn intercalate_mates() {
    let p = table(&[[0i64, 1], [1, 0]]);
    let (rows, decode) = mate_rows(&p, MateCfg::default());
    assert_eq!(rows.len(), 4);
    assert!(decode.iter().all(Option::is_some));

    let disjoint: Vec<PartialTable> = find_mates(&p, MateCfg::default()).collect();
    assert_eq!(disjoint, vec![table(&[[1i64, 0], [0, 1]])]);
    let all = find_mates(
        &p,
        MateCfg {
            allow_subtrade: true,
        },
    );
    assert_eq!(all.count(), 2);
}

#[test]
fn order_three_mates() {
    let p = back_circulant(3);
    let disjoint: Vec<PartialTable> = find_mates(&p, MateCfg::default()).collect();
    assert_eq!(
        disjoint,
        vec![
            table(&[[2i64, 0, 1], [0, 1, 2], [1, 2, 0]]),
            table(&[[1i64, 2, 0], [2, 0, 1], [0, 1, 2]]),
        ]
    );
    let all = find_mates(
        &p,
        MateCfg {
            allow_subtrade: true,
        },
    );
    assert_eq!(all.count(), 12);
}

#[test]
fn order_four_mates() {
    let p = back_circulant(4);
    assert_eq!(find_mates(&p, MateCfg::default()).count(), 29);
    let mut all = find_mates(
        &p,
        MateCfg {
            allow_subtrade: true,
        },
    );
    assert_eq!(
        all.next(),
        Some(table(&[[0i64, 2, 1, 3], [1, 0, 3, 2], [2, 3, 0, 1], [3, 1, 2, 0]]))
    );
    assert_eq!(all.count(), 575);
}

#[test]
fn partial_table_uses_fillers() {
    let b = degenerate3();
    let (rows, decode) = mate_rows(b.t2(), MateCfg::default());
    assert!(decode.iter().any(Option::is_none));
    assert_eq!(rows.len(), decode.len());
    let mates: Vec<PartialTable> = find_mates(b.t2(), MateCfg::default()).collect();
    assert_eq!(mates, vec![b.t1().clone()]);
}

#[test]
fn restart_replays_the_sequence() {
    let mut mates = find_mates(&back_circulant(4), MateCfg::default());
    let first: Vec<PartialTable> = mates.by_ref().take(3).collect();
    mates.restart();
    let again: Vec<PartialTable> = mates.take(3).collect();
    assert_eq!(first, again);
}

#[test]
fn symbols_past_the_order_have_no_mates() {
    let p = table(&[[0i64, 9], [9, 0]]);
    assert!(!p.is_partial_latin());
    let (rows, decode) = mate_rows(&p, MateCfg::default());
    assert!(rows.is_empty() && decode.is_empty());
    let mut mates = find_mates(
        &p,
        MateCfg {
            allow_subtrade: true,
        },
    );
    assert_eq!(mates.next(), None);
    mates.restart();
    assert_eq!(mates.count(), 0);
}

proptest! {
    #[test]
    fn disjoint_mates_form_bitrades(seed in any::<u64>(), n in 2usize..5, k in 1usize..6) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = random_isotope(&back_circulant(n), &mut rng);
        for q in find_mates(&p, MateCfg::default()).take(k) {
            prop_assert_eq!(q.filled_cells(), n * n);
            prop_assert!(Bitrade::new(p.clone(), q).is_ok());
        }
    }
}
