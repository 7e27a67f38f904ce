use std::fmt;

/// Versions of `.unwrap()` and `.expect()` that print a docprint-specific
/// error message, and format errors with Display instead of Debug.
pub trait DocprintBug<T>: Sized {
    /// Like `.unwrap()`, but with a better error message.
    fn bug(self) -> T;
    /// Like `.expect()`, but with a better error message.
    fn bug_msg(self, msg: &str) -> T;
}

impl<T> DocprintBug<T> for Option<T> {
    fn bug(self) -> T {
        match self {
            Some(val) => val,
            None => crate::bug!("Tried to unwrap a `None` value"),
        }
    }

    fn bug_msg(self, msg: &str) -> T {
        match self {
            Some(val) => val,
            None => crate::bug!("{}", msg),
        }
    }
}

impl<T, E: fmt::Display> DocprintBug<T> for Result<T, E> {
    fn bug(self) -> T {
        match self {
            Ok(ok) => ok,
            Err(err) => crate::bug!("{}", err),
        }
    }

    fn bug_msg(self, msg: &str) -> T {
        match self {
            Ok(ok) => ok,
            Err(err) => crate::bug!("{}\n{}", msg, err),
        }
    }
}

#[doc(hidden)]
pub fn format_bug(location: String, message: String) -> String {
    let mut output = "\n*** Bug in docprint.".to_owned();
    output.push_str("\n*** Location:");
    output.push_str("\n***   ");
    output.push_str(&location);
    output.push_str("\n*** Error message:");
    for line in message.lines() {
        output.push_str("\n***   ");
        output.push_str(line);
    }
    output.push('\n');
    output
}

#[doc(hidden)]
#[macro_export]
/// Like `panic!()`, but with a better error message.
macro_rules! bug {
    ($message:literal) => {
        $crate::bug!($message,)
    };
    ($message:literal, $( $arg:expr ),*) => {
        panic!("{}",
            $crate::infra::format_bug(
                format!("{}:{}:{}", file!(), line!(), column!()),
                format!($message, $( $arg ),*)
            )
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bug() {
        let report = format_bug("src/doc.rs:1:2".to_owned(), "first\nsecond".to_owned());
        assert!(report.contains("*** Bug in docprint."));
        assert!(report.contains("***   src/doc.rs:1:2"));
        assert!(report.contains("***   first\n***   second"));
    }

    #[test]
    #[should_panic(expected = "missing value")]
    fn test_bug_msg_on_none() {
        let missing: Option<usize> = None;
        missing.bug_msg("missing value");
    }

    #[test]
    fn test_bug_on_ok() {
        let ok: Result<usize, String> = Ok(3);
        assert_eq!(ok.bug(), 3);
    }
}
