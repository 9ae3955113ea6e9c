use densor_core::{ErrorKind, Tensor};

fn filled_2x3() -> Tensor {
    let mut t = Tensor::new(&[2, 3]).unwrap();
    let mut val = 1.0;
    for i in 0..2 {
        for j in 0..3 {
            t.set(&[i, j], val).unwrap();
            val += 1.0;
        }
    }
    t
}

#[test]
fn end_to_end_get() {
    let t = filled_2x3();
    assert_eq!(t.get(&[1, 2]).unwrap(), 6.0);
    assert_eq!(t.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn set_get_round_trip_touches_one_slot() {
    let base = Tensor::arange(&[2, 3, 4]).unwrap();
    for idx in base.shape().indices() {
        let mut t = base.clone();
        t.set(&idx, -1.25).unwrap();
        assert_eq!(t.get(&idx).unwrap(), -1.25);

        let changed = t.offset(&idx).unwrap();
        for (k, (a, b)) in t.data().iter().zip(base.data()).enumerate() {
            if k != changed {
                assert_eq!(a, b, "offset {k} changed after set at {idx:?}");
            }
        }
    }
}

#[test]
fn row_major_offsets_are_a_bijection() {
    let t = Tensor::new(&[3, 2, 4, 2]).unwrap();
    let offsets: Vec<usize> = t
        .shape()
        .indices()
        .map(|idx| t.offset(&idx).unwrap())
        .collect();
    assert_eq!(offsets, (0..t.size()).collect::<Vec<_>>());
}

#[test]
fn strides() {
    let t = Tensor::new(&[2, 3, 4]).unwrap();
    assert_eq!(t.strides(), &[12, 4, 1]);
    assert_eq!(t.offset(&[1, 2, 3]).unwrap(), 23);
}

#[test]
fn wrong_arity_fails() {
    let mut t = filled_2x3();
    let before = t.clone();
    for idx in [vec![], vec![1], vec![0, 0, 0]] {
        let idx: Vec<usize> = idx;
        assert_eq!(t.get(&idx).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(t.set(&idx, 9.0).unwrap_err().kind(), ErrorKind::OutOfRange);
    }
    assert_eq!(t, before);
}

#[test]
fn out_of_bounds_fails() {
    let mut t = filled_2x3();
    let before = t.clone();
    for idx in [[2, 0], [0, 3], [5, 5], [usize::MAX, 0]] {
        assert_eq!(t.get(&idx).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(t.set(&idx, 9.0).unwrap_err().kind(), ErrorKind::OutOfRange);
    }
    assert_eq!(t, before);
}

#[test]
fn last_valid_index() {
    let mut t = Tensor::new(&[2, 2, 2]).unwrap();
    t.set(&[0, 0, 0], 1.5).unwrap();
    t.set(&[1, 1, 1], 9.25).unwrap();
    assert_eq!(t.data(), &[1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 9.25]);
}
