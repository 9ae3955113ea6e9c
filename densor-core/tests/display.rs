use densor_core::Tensor;

#[test]
fn matrix_rows() {
    let t = Tensor::from_vec(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(
        t.to_string(),
        "Tensor shape: [2, 3]\n[ 1, 2, 3 ]\n[ 4, 5, 6 ]\n"
    );
}

#[test]
fn flat_for_other_ranks() {
    let mut t = Tensor::new(&[2, 2, 2]).unwrap();
    t.set(&[0, 0, 0], 1.5).unwrap();
    t.set(&[1, 1, 1], 9.25).unwrap();
    assert_eq!(
        t.to_string(),
        "Tensor shape: [2, 2, 2]\nData (flat): 1.5, 0, 0, 0, 0, 0, 0, 9.25\n"
    );

    let v = Tensor::arange(&[3]).unwrap();
    assert_eq!(v.to_string(), "Tensor shape: [3]\nData (flat): 0, 1, 2\n");
}

#[test]
fn single_column_matrix() {
    let t = Tensor::from_vec(&[2, 1], vec![-1.0, 0.5]).unwrap();
    assert_eq!(t.to_string(), "Tensor shape: [2, 1]\n[ -1 ]\n[ 0.5 ]\n");
}

#[allow(dead_code)]
#[path = "../examples/demo/main.rs"]
mod demo;

#[test]
fn demo_transcript() {
    assert_eq!(
        demo::run().unwrap(),
        "Simple Tensor Demo (f32)\n\
         Created tensor of shape [2, 3]. Filling values...\n\
         Tensor contents:\n\
         Tensor shape: [2, 3]\n\
         [ 1, 2, 3 ]\n\
         [ 4, 5, 6 ]\n\
         Element at (1,2) = 6\n\
         \n\
         Created 3D tensor of shape [2, 2, 2]. Setting some values...\n\
         Tensor shape: [2, 2, 2]\n\
         Data (flat): 1.5, 0, 0, 0, 0, 0, 0, 9.25\n\
         Done.\n"
    );
}
