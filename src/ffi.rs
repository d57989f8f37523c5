//! # C ABI
//!
//! `extern "C"` exports of the `add::test` namespace for hosts that load the
//! `cdylib`. Symbols are prefixed `add_test_` after the namespace.
//!
//! Fallible functions write their result through an out-pointer and return
//! `true` on success. On overflow they return `false` and leave the
//! out-pointer untouched. Passing a `NULL` out-pointer panics, and since the
//! panic cannot unwind across the C boundary the process aborts.
//!
//! Policies cross the boundary as plain `c_int` values of [`FfiOverflowPolicy`].
//! An unknown value is rejected like an overflow.

use std::os::raw::c_int;

use log::warn;

use crate::policy::{add_with_policy, checked_add, OverflowPolicy};
use crate::test::add;

/// C mirror of [`OverflowPolicy`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiOverflowPolicy {
    Wrap = 0,
    Saturate = 1,
    Fail = 2,
}

impl From<FfiOverflowPolicy> for OverflowPolicy {
    fn from(policy: FfiOverflowPolicy) -> Self {
        match policy {
            FfiOverflowPolicy::Wrap => OverflowPolicy::Wrap,
            FfiOverflowPolicy::Saturate => OverflowPolicy::Saturate,
            FfiOverflowPolicy::Fail => OverflowPolicy::Fail,
        }
    }
}

impl TryFrom<c_int> for FfiOverflowPolicy {
    type Error = c_int;

    fn try_from(value: c_int) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FfiOverflowPolicy::Wrap),
            1 => Ok(FfiOverflowPolicy::Saturate),
            2 => Ok(FfiOverflowPolicy::Fail),
            other => Err(other),
        }
    }
}

impl From<OverflowPolicy> for FfiOverflowPolicy {
    fn from(policy: OverflowPolicy) -> Self {
        match policy {
            OverflowPolicy::Wrap => FfiOverflowPolicy::Wrap,
            OverflowPolicy::Saturate => FfiOverflowPolicy::Saturate,
            OverflowPolicy::Fail => FfiOverflowPolicy::Fail,
        }
    }
}

/// Adds two integers, wrapping on overflow.
#[no_mangle]
pub extern "C" fn add_test_add(a: c_int, b: c_int) -> c_int {
    add(a, b)
}

/// Adds two integers, returning `false` if the sum overflows.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `out` is valid for writes.
#[no_mangle]
pub unsafe extern "C" fn add_test_checked_add(a: c_int, b: c_int, out: *mut c_int) -> bool {
    assert!(
        !out.is_null(),
        "called `add_test_checked_add` with null pointer"
    );

    match checked_add(a, b) {
        Ok(sum) => {
            *out = sum;
            true
        }
        Err(_) => false,
    }
}

/// Adds two integers under `policy`, one of the [`FfiOverflowPolicy`] values.
///
/// Returns `false` when `policy` is not a known value, or when it is `Fail`
/// and the sum overflows. `*out` is only written on success.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `out` is valid for writes.
#[no_mangle]
pub unsafe extern "C" fn add_test_add_with_policy(
    a: c_int,
    b: c_int,
    policy: c_int,
    out: *mut c_int,
) -> bool {
    assert!(
        !out.is_null(),
        "called `add_test_add_with_policy` with null pointer"
    );

    let policy = match FfiOverflowPolicy::try_from(policy) {
        Ok(policy) => policy,
        Err(value) => {
            warn!("`add_test_add_with_policy` called with unknown policy {value}");
            return false;
        }
    };

    match add_with_policy(a, b, policy.into()) {
        Ok(sum) => {
            *out = sum;
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_test_add() {
        assert_eq!(add_test_add(2, 3), 5);
        assert_eq!(add_test_add(c_int::MAX, 1), c_int::MIN);
    }

    #[test]
    fn test_checked_add_writes_sum() {
        let mut out: c_int = 0;
        let ok = unsafe { add_test_checked_add(-5, -7, &mut out) };
        assert!(ok);
        assert_eq!(out, -12);
    }

    #[test]
    fn test_checked_add_leaves_out_untouched_on_overflow() {
        let mut out: c_int = 7;
        let ok = unsafe { add_test_checked_add(c_int::MAX, 1, &mut out) };
        assert!(!ok);
        assert_eq!(out, 7);
    }

    #[test]
    fn test_add_with_policy() {
        let mut out: c_int = 0;

        assert!(unsafe {
            add_test_add_with_policy(c_int::MAX, 1, FfiOverflowPolicy::Wrap as c_int, &mut out)
        });
        assert_eq!(out, c_int::MIN);

        assert!(unsafe {
            add_test_add_with_policy(c_int::MAX, 1, FfiOverflowPolicy::Saturate as c_int, &mut out)
        });
        assert_eq!(out, c_int::MAX);

        out = 0;
        assert!(!unsafe {
            add_test_add_with_policy(c_int::MAX, 1, FfiOverflowPolicy::Fail as c_int, &mut out)
        });
        assert_eq!(out, 0);
    }

    #[test]
    fn test_add_with_unknown_policy_is_rejected() {
        for policy in [-1, 3, 7, c_int::MAX] {
            let mut out: c_int = 11;
            assert!(!unsafe { add_test_add_with_policy(2, 3, policy, &mut out) });
            assert_eq!(out, 11);
        }
    }

    #[test]
    fn test_policy_from_c_int() {
        assert_eq!(FfiOverflowPolicy::try_from(0), Ok(FfiOverflowPolicy::Wrap));
        assert_eq!(FfiOverflowPolicy::try_from(1), Ok(FfiOverflowPolicy::Saturate));
        assert_eq!(FfiOverflowPolicy::try_from(2), Ok(FfiOverflowPolicy::Fail));
        assert_eq!(FfiOverflowPolicy::try_from(3), Err(3));
    }

    #[test]
    fn test_policy_conversion_round_trips() {
        for policy in [
            OverflowPolicy::Wrap,
            OverflowPolicy::Saturate,
            OverflowPolicy::Fail,
        ] {
            assert_eq!(OverflowPolicy::from(FfiOverflowPolicy::from(policy)), policy);
        }
    }
}
