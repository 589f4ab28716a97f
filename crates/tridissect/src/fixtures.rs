//! Literal bitrades and exact-value helpers for unit tests.

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::dissection::{Pt, Triangle};
use crate::table::{Bitrade, PartialTable};

/// `"a/b"` or `"a"` as an exact rational.
pub fn r(s: &str) -> BigRational {
    match s.split_once('/') {
        Some((n, d)) => BigRational::new(
            n.trim().parse::<BigInt>().unwrap(),
            d.trim().parse::<BigInt>().unwrap(),
        ),
        None => BigRational::from_integer(s.trim().parse::<BigInt>().unwrap()),
    }
}

pub fn pt(x: &str, y: &str) -> Pt {
    Pt::new(r(x), r(y))
}

/// `"x,y;x,y;x,y"`.
pub fn tri(s: &str) -> Triangle {
    let pts: Vec<Pt> = s
        .split(';')
        .map(|p| {
            let (x, y) = p.split_once(',').unwrap();
            pt(x, y)
        })
        .collect();
    Triangle::new(pts[0].clone(), pts[1].clone(), pts[2].clone())
}

pub fn table<R: AsRef<[i64]>>(rows: &[R]) -> PartialTable {
    PartialTable::from_rows(rows).unwrap()
}

fn bitrade(t1: &[&[i64]], t2: &[&[i64]]) -> Bitrade {
    Bitrade::new(table(t1), table(t2)).unwrap()
}

/// Order-2 Latin square and its swap.
pub fn intercalate() -> Bitrade {
    bitrade(&[&[0, 1], &[1, 0]], &[&[1, 0], &[0, 1]])
}

/// Three degenerate cells at base (0, 0).
pub fn degenerate3() -> Bitrade {
    bitrade(
        &[&[0, 1, 2], &[1, -1, 0], &[-1, 2, 1]],
        &[&[1, 2, 0], &[0, -1, 1], &[-1, 1, 2]],
    )
}

/// One six-way point at base (2, 3).
pub fn six_way4() -> Bitrade {
    bitrade(
        &[&[0, 1, 2, 3], &[1, -1, -1, 0], &[-1, 2, 3, 1], &[-1, -1, -1, -1]],
        &[&[1, 2, 3, 0], &[0, -1, -1, 1], &[-1, 1, 2, 3], &[-1, -1, -1, -1]],
    )
}

/// Ten triangles and one six-way point at base (0, 0).
pub fn ten_triangle5() -> Bitrade {
    bitrade(
        &[
            &[0, 1, 2, -1, -1],
            &[3, -1, 0, 4, -1],
            &[1, 2, 4, 3, -1],
            &[-1, -1, -1, -1, -1],
            &[-1, -1, -1, -1, -1],
        ],
        &[
            &[1, 2, 0, -1, -1],
            &[0, -1, 4, 3, -1],
            &[3, 1, 2, 4, -1],
            &[-1, -1, -1, -1, -1],
            &[-1, -1, -1, -1, -1],
        ],
    )
}

/// Perfect fifteen-triangle dissection at base (5, 3).
pub fn perfect6() -> Bitrade {
    bitrade(
        &[
            &[0, 1, 2, -1, -1, -1],
            &[3, -1, 0, -1, 5, -1],
            &[1, -1, -1, 3, -1, -1],
            &[-1, 4, -1, 1, -1, -1],
            &[-1, 2, 5, -1, 4, -1],
            &[-1, -1, -1, 4, 3, -1],
        ],
        &[
            &[1, 2, 0, -1, -1, -1],
            &[0, -1, 5, -1, 3, -1],
            &[3, -1, -1, 1, -1, -1],
            &[-1, 1, -1, 4, -1, -1],
            &[-1, 4, 2, -1, 5, -1],
            &[-1, -1, -1, 3, 4, -1],
        ],
    )
}

/// Triangles of `perfect6()` at base (5, 3).
pub const PERFECT15: [&str; 15] = [
    "0,0;0,20/39;20/39,0",
    "0,20/39;0,28/39;8/39,20/39",
    "0,20/39;8/39,4/13;8/39,20/39",
    "0,28/39;0,1;11/39,28/39",
    "0,28/39;11/39,17/39;11/39,28/39",
    "8/39,4/13;8/39,17/39;1/3,4/13",
    "8/39,4/13;20/39,0;20/39,4/13",
    "8/39,17/39;8/39,20/39;11/39,17/39",
    "8/39,17/39;1/3,4/13;1/3,17/39",
    "11/39,17/39;11/39,19/39;1/3,17/39",
    "11/39,19/39;11/39,28/39;20/39,19/39",
    "11/39,19/39;1/3,17/39;1/3,19/39",
    "1/3,4/13;1/3,19/39;20/39,4/13",
    "1/3,19/39;20/39,4/13;20/39,19/39",
    "20/39,0;20/39,19/39;1,0",
];

/// Triangles of `intercalate()` at base (0, 0).
pub const INTERCALATE4: [&str; 4] = [
    "0,0;0,1/2;1/2,0",
    "0,1/2;0,1;1/2,1/2",
    "0,1/2;1/2,0;1/2,1/2",
    "1/2,0;1/2,1/2;1,0",
];

pub fn triangles(literals: &[&str]) -> Vec<Triangle> {
    literals.iter().map(|s| tri(s)).collect()
}
