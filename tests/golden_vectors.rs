//! Recorded output bytes for every reference equation.
//!
//! Each row pins `t` in {0, 1, 65535, 2^32 - 1} with all parameters at the
//! bottom of their declared range and again at the top. Any drift in
//! wraparound, shift reduction or operator grouping shows up here.

mod common;
use common::GOLDEN_TIMES;

use glitchstorm::{domain_of, evaluate, registry_size};

/// (index, samples with parameters at min, samples with parameters at max)
const GOLDEN: [(usize, [u8; 4], [u8; 4]); 16] = [
    (0, [0, 1, 255, 255], [0, 0, 255, 255]),
    (1, [0, 0, 255, 255], [0, 0, 0, 0]),
    (2, [0, 1, 255, 255], [0, 3, 59, 255]),
    (3, [0, 3, 63, 255], [0, 3, 59, 255]),
    (4, [0, 1, 31, 31], [0, 2, 247, 247]),
    (5, [0, 1, 255, 255], [0, 0, 0, 233]),
    (6, [0, 0, 255, 255], [0, 255, 192, 255]),
    (7, [0, 10, 21, 234], [176, 198, 234, 69]),
    (8, [0, 1, 255, 255], [0, 0, 255, 255]),
    (9, [0, 0, 249, 249], [0, 0, 0, 249]),
    (10, [0, 0, 0, 0], [0, 0, 122, 128]),
    (11, [254, 254, 242, 242], [254, 254, 34, 242]),
    (12, [0, 0, 0, 0], [0, 0, 0, 1]),
    (13, [0, 3, 254, 255], [0, 3, 62, 255]),
    (14, [0, 2, 255, 255], [0, 1, 0, 255]),
    (15, [0, 2, 255, 255], [0, 1, 1, 255]),
];

/// (index, t, sample) with every parameter at the centre of its range.
const CENTRE: [(usize, u32, u8); 48] = [
    (0, 8000, 124),
    (0, 123456, 192),
    (0, 2147483648, 0),
    (1, 8000, 125),
    (1, 123456, 137),
    (1, 2147483648, 0),
    (2, 8000, 127),
    (2, 123456, 235),
    (2, 2147483648, 0),
    (3, 8000, 3),
    (3, 123456, 63),
    (3, 2147483648, 0),
    (4, 8000, 31),
    (4, 123456, 242),
    (4, 2147483648, 0),
    (5, 8000, 191),
    (5, 123456, 98),
    (5, 2147483648, 0),
    (6, 8000, 131),
    (6, 123456, 119),
    (6, 2147483648, 0),
    (7, 8000, 224),
    (7, 123456, 79),
    (7, 2147483648, 79),
    (8, 8000, 125),
    (8, 123456, 201),
    (8, 2147483648, 0),
    (9, 8000, 60),
    (9, 123456, 196),
    (9, 2147483648, 0),
    (10, 8000, 167),
    (10, 123456, 36),
    (10, 2147483648, 0),
    (11, 8000, 254),
    (11, 123456, 126),
    (11, 2147483648, 254),
    (12, 8000, 64),
    (12, 123456, 0),
    (12, 2147483648, 0),
    (13, 8000, 253),
    (13, 123456, 137),
    (13, 2147483648, 0),
    (14, 8000, 1),
    (14, 123456, 30),
    (14, 2147483648, 0),
    (15, 8000, 15),
    (15, 123456, 241),
    (15, 2147483648, 0),
];

#[test]
fn test_golden_vectors_at_domain_edges() {
    assert_eq!(GOLDEN.len(), registry_size());

    for (index, at_min, at_max) in GOLDEN {
        let (a_min, a_max, b_min, b_max, c_min, c_max) = domain_of(index).unwrap().as_tuple();

        for (i, &t) in GOLDEN_TIMES.iter().enumerate() {
            assert_eq!(
                evaluate(index, t, a_min, b_min, c_min).unwrap(),
                at_min[i],
                "equation {} at t={} with minimum parameters",
                index,
                t
            );
            assert_eq!(
                evaluate(index, t, a_max, b_max, c_max).unwrap(),
                at_max[i],
                "equation {} at t={} with maximum parameters",
                index,
                t
            );
        }
    }
}

#[test]
fn test_golden_vectors_at_domain_centre() {
    for (index, t, expected) in CENTRE {
        let p = domain_of(index).unwrap().center();
        assert_eq!(
            evaluate(index, t, p.a, p.b, p.c).unwrap(),
            expected,
            "equation {} at t={} with {:?}",
            index,
            t,
            p
        );
    }
}
