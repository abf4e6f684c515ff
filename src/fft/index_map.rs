/// Maps a gather index `j` of stride `n1` to its scatter destination of stride `n1 * n2`.
///
/// `expand(j, n1, n2) = floor(j / n1) * n1 * n2 + (j mod n1)`
#[inline(always)]
pub const fn expand(j: usize, n1: usize, n2: usize) -> usize {
    (j / n1) * n1 * n2 + (j % n1)
}
