// Geometry helpers

use glam::IVec2;

/// True when `from` lies inside the square of half-width `range` centred on `to`.
///
/// Both bounds are inclusive. A negative range never matches.
pub fn in_range(from: IVec2, to: IVec2, range: i32) -> bool {
    // Widened so `to ± range` cannot overflow near the i32 limits.
    let range = i64::from(range);
    (i64::from(from.x) - i64::from(to.x)).abs() <= range
        && (i64::from(from.y) - i64::from(to.y)).abs() <= range
}
