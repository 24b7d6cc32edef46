//! Closed-form index arithmetic for packed matrix layouts.
//!
//! All functions take zero-based coordinates already known to lie in
//! `[0, n)`; bounds are checked by [`super::WeightMatrix`].

use super::format::{Layout, Triangle};

/// Triangular number `T(k) = k(k+1)/2`.
#[inline]
#[must_use]
pub const fn triangular(k: usize) -> usize {
    // Halve the even factor first so the product only overflows when the
    // result itself does.
    if k % 2 == 0 {
        (k / 2).saturating_mul(k + 1)
    } else {
        k.saturating_mul(k / 2 + 1)
    }
}

/// Number of stored values for `layout` at dimension `n`.
///
/// Saturates instead of overflowing, so an absurd dimension yields a count
/// no real token list can match.
#[must_use]
pub fn expected_count(layout: Layout, n: usize) -> usize {
    match layout {
        Layout::Full => n.saturating_mul(n),
        Layout::Triangular { diagonal: true, .. } => triangular(n),
        Layout::Triangular {
            diagonal: false, ..
        } => triangular(n.saturating_sub(1)),
    }
}

/// Where a coordinate lives in packed storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Offset into the flat token list
    Stored(usize),
    /// Diagonal of a layout that does not store it; reads as zero
    ImplicitZero,
}

/// Map `(row, col)` to its slot for `layout` at dimension `n`.
///
/// Triangular layouts fold the unstored half onto the stored one by swapping
/// coordinates, which is what makes every triangular read symmetric.
#[inline]
#[must_use]
pub fn slot(layout: Layout, n: usize, row: usize, col: usize) -> Slot {
    match layout {
        Layout::Full => Slot::Stored(row * n + col),
        Layout::Triangular { triangle, diagonal } => {
            if row == col && !diagonal {
                return Slot::ImplicitZero;
            }
            let (r, c) = match triangle {
                Triangle::Upper if col < row => (col, row),
                Triangle::Lower if col > row => (col, row),
                _ => (row, col),
            };
            Slot::Stored(packed_offset(triangle, diagonal, n, r, c))
        }
    }
}

/// Offset of `(r, c)` inside the stored half. Caller guarantees the
/// coordinate is in that half.
#[inline]
fn packed_offset(triangle: Triangle, diagonal: bool, n: usize, r: usize, c: usize) -> usize {
    match (triangle, diagonal) {
        // Row r holds columns r..n; rows before it hold n, n-1, .. entries.
        (Triangle::Upper, true) => triangular(n) - triangular(n - r) + (c - r),
        // Row r holds columns r+1..n.
        (Triangle::Upper, false) => triangular(n - 1) - triangular(n - 1 - r) + (c - r - 1),
        // Row r holds columns 0..=r.
        (Triangle::Lower, true) => triangular(r) + c,
        // Row r holds columns 0..r.
        (Triangle::Lower, false) => triangular(r) - r + c,
    }
}


#[cfg(kani)]
mod proofs {
    use super::*;

    /// Every in-bounds coordinate maps inside the token list.
    #[kani::proof]
    fn proof_slot_within_expected_count() {
        let n: usize = kani::any();
        kani::assume(n > 0 && n <= 64);
        let row: usize = kani::any();
        let col: usize = kani::any();
        kani::assume(row < n && col < n);
        let triangle = if kani::any() {
            Triangle::Upper
        } else {
            Triangle::Lower
        };
        let diagonal: bool = kani::any();
        let layout = Layout::Triangular { triangle, diagonal };

        if let Slot::Stored(idx) = slot(layout, n, row, col) {
            kani::assert(
                idx < expected_count(layout, n),
                "packed offset must be inside the stored triangle",
            );
        }
    }
}
