/// Integer division rounding toward negative infinity.
///
/// Returns `None` when the divisor is zero or the quotient overflows
/// (`i64::MIN DIV -1`).
///
/// ## Example
/// ```
/// use pascalite::util::num::floor_div;
///
/// assert_eq!(floor_div(10, 3), Some(3));
/// assert_eq!(floor_div(-7, 2), Some(-4));
/// assert_eq!(floor_div(7, -2), Some(-4));
/// assert_eq!(floor_div(1, 0), None);
/// ```
#[must_use]
pub const fn floor_div(dividend: i64, divisor: i64) -> Option<i64> {
    let Some(quotient) = dividend.checked_div(divisor) else {
        return None;
    };
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}
