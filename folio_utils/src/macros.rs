/// Asserts that an expression matches a pattern, optionally guarded by a
/// predicate over the bindings of that pattern.
///
/// #### Example
/// ```rust
/// # use folio_utils::assert_matches;
/// let result: Result<u8, &str> = Ok(7);
/// assert_matches!(result, Ok(_));
/// assert_matches!(result, Ok(x) if *x > 5);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            value => ::core::panic!(
                "assertion failed: `{value:?}` does not match `{}`",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let value = $expr;
        match (&value) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the guard")]
            $pat => ::core::panic!(
                "assertion failed: `{value:?}` matches `{}` but not `{}`",
                ::core::stringify!($pat),
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "assertion failed: `{value:?}` does not match `{}`",
                ::core::stringify!($pat)
            ),
        }
    }};
}
