/// `writeln!` inside [`crate::run`]: a failed write to `out` or `err` ends the
/// run with [`crate::exit_code::ERROR`], since nothing more can be reported.
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
