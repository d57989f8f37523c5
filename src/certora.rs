use crate::policy::{checked_add, saturating_add};
use crate::test::add;

use cvlr::prelude::*;

/// Draws an arbitrary `i32`; truncation reaches every bit pattern.
fn nondet_i32() -> i32 {
    nondet::<u64>() as i32
}

/// Verifies that `add` correctly computes the sum of two numbers.
#[rule]
pub fn rule_add_is_correct() {
    let x = nondet_i32();
    let y = nondet_i32();
    let wide = x as i64 + y as i64;
    cvlr::cvlr_assume!(wide >= i32::MIN as i64 && wide <= i32::MAX as i64);
    let result = add(x, y);
    cvlr_assert_eq!(result as i64, wide);
}

/// Verifies that `add` is commutative, overflow included.
#[rule]
pub fn rule_add_is_commutative() {
    let x = nondet_i32();
    let y = nondet_i32();
    cvlr_assert_eq!(add(x, y), add(y, x));
}

#[rule]
pub fn rule_add_zero_is_identity() {
    let x = nondet_i32();
    cvlr_assert_eq!(add(x, 0), x);
}

/// Verifies that the checked and saturating variants agree with `add`
/// whenever `checked_add` succeeds.
#[rule]
pub fn rule_variants_agree_without_overflow() {
    let x = nondet_i32();
    let y = nondet_i32();
    if let Ok(sum) = checked_add(x, y) {
        cvlr_assert_eq!(sum, add(x, y));
        cvlr_assert_eq!(sum, saturating_add(x, y));
    }
}
