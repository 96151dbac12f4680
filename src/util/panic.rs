/// Asserts that the block panics. The block is wrapped in [`AssertUnwindSafe`] so it can borrow
/// registries, which hold locks and method bodies that aren't unwind safe themselves.
///
/// [`AssertUnwindSafe`]: std::panic::AssertUnwindSafe
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
