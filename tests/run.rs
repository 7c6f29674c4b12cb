//! Tests for the single read-format-write pass.

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
#[test]
fn test_run_unsupported_writes_nothing() {
    use modifier_keys::{run, ModifierError};

    let mut out = Vec::new();
    let result = run(&mut out);

    assert!(matches!(result, Err(ModifierError::Unsupported { .. })));
    assert!(out.is_empty());
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
mod supported {
    use modifier_keys::{run, ModifierError};
    use std::io::{self, Write};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_writes_one_line() {
        let mut out = Vec::new();
        run(&mut out).expect("run should succeed");

        let text = String::from_utf8(out).expect("utf8 output");
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 1);
    }

    #[test]
    fn test_run_reports_write_failure() {
        let result = run(&mut ClosedPipe);
        assert!(matches!(result, Err(ModifierError::Output(_))));
    }
}
