use crate::model::Day;

/// True if `point` lies inside `[start, end]`, both boundaries included.
pub fn point_in_range(point: Day, start: Day, end: Day) -> bool {
    point == start || point == end || (point > start && point < end)
}

/// True if two class ranges may not coexist.
///
/// Open overlap (`a_start < b_end && a_end > b_start`) is a conflict, and so is
/// any range sharing a start with a start or an end with an end, even when the
/// ranges would otherwise only touch.
pub fn ranges_conflict(a_start: Day, a_end: Day, b_start: Day, b_end: Day) -> bool {
    (a_start < b_end && a_end > b_start) || a_start == b_start || a_end == b_end
}
