use gemm::{gemm, Parallelism};

/// Row-major matrix multiplication: (M x K) * (K x N) = (M x N).
///
/// `out` is overwritten, its previous contents are never read.
pub(crate) fn launch_gemm(lhs: &[f32], rhs: &[f32], m: usize, n: usize, k: usize, out: &mut [f32]) {
    debug_assert_eq!(lhs.len(), m * k);
    debug_assert_eq!(rhs.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    // cs = stride[-1], rs = stride[-2]
    let (dst_cs, dst_rs) = (1isize, n as isize);
    let (lhs_cs, lhs_rs) = (1isize, k as isize);
    let (rhs_cs, rhs_rs) = (1isize, n as isize);

    // SAFETY: the three buffers hold exactly m*k, k*n and m*n elements, which
    // are the extents addressed by the row/column strides above.
    unsafe {
        gemm(
            /* m: usize = */ m,
            /* n: usize = */ n,
            /* k: usize = */ k,
            /* dst: *mut T = */ out.as_mut_ptr(),
            /* dst_cs: isize = */ dst_cs,
            /* dst_rs: isize = */ dst_rs,
            /* read_dst: bool = */ false,
            /* lhs: *const T = */ lhs.as_ptr(),
            /* lhs_cs: isize = */ lhs_cs,
            /* lhs_rs: isize = */ lhs_rs,
            /* rhs: *const T = */ rhs.as_ptr(),
            /* rhs_cs: isize = */ rhs_cs,
            /* rhs_rs: isize = */ rhs_rs,
            /* alpha: T = */ 0.0,
            /* beta: T = */ 1.0,
            /* conj_dst: bool = */ false,
            /* conj_lhs: bool = */ false,
            /* conj_rhs: bool = */ false,
            Parallelism::None,
        )
    }
}
