//! Console port — line-oriented output visible to the user.

use std::sync::Arc;

/// Receives complete, human-readable lines.
///
/// Writing never fails from the caller's point of view. Adapters decide what
/// to do when the underlying sink is gone.
pub trait Console: Send + Sync {
    /// Emit one line. The adapter appends the line terminator.
    fn write_line(&self, line: &str);
}

impl<T: Console + ?Sized> Console for Arc<T> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}

impl<T: Console + ?Sized> Console for &T {
    fn write_line(&self, line: &str) {
        (**self).write_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingConsole;

    #[test]
    fn should_forward_through_arc() {
        let console = Arc::new(RecordingConsole::default());
        let shared: Arc<dyn Console> = console.clone();
        shared.write_line("hello");
        assert_eq!(console.lines(), vec!["hello"]);
    }

    fn greet(console: impl Console) {
        console.write_line("one");
        console.write_line("two");
    }

    #[test]
    fn should_forward_through_reference() {
        let console = RecordingConsole::default();
        greet(&console);
        assert_eq!(console.lines(), vec!["one", "two"]);
    }
}
