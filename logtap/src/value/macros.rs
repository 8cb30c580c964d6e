/// Builds a `Vec<LogValue>` from heterogeneous arguments, converting each
/// through `LogValue::from`.
///
/// ```
/// use logtap::log_args;
/// let args = log_args!["request finished", 200, true];
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        Vec::<$crate::value::LogValue>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::value::LogValue::from($arg)),+]
    };
}
