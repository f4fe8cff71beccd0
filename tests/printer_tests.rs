//! Printer tests for sparkfmt
//!
//! Tests for the indent-tracking output sink.

use pretty_assertions::assert_eq;
use sparkfmt::formatter::printer::{Indent, Printer, INDENT_SIZE};
use sparkfmt::Error;

fn finish(printer: Printer) -> String {
    printer.finish().expect("balanced printer should finish")
}

mod printer_basics {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_printer_empty() {
        assert_eq!(finish(Printer::default()), "");
    }

    #[test]
    fn write_multiple_texts() {
        let mut printer = Printer::default();
        printer.write("hello");
        printer.write(" ");
        printer.write("world");
        assert_eq!(finish(printer), "hello world");
    }

    #[test]
    fn newline_adds_line_break() {
        let mut printer = Printer::default();
        printer.write("line1");
        printer.newline();
        printer.write("line2");
        assert_eq!(finish(printer), "line1\nline2");
    }
}

mod indentation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indent_applies_to_next_line() {
        let mut printer = Printer::default();
        printer.write("SELECT");
        printer.indent();
        printer.newline();
        printer.write("a");
        printer.dedent();
        printer.newline();
        printer.write("FROM");
        assert_eq!(finish(printer), "SELECT\n  a\nFROM");
    }

    #[test]
    fn indent_is_taken_at_write_time() {
        let mut printer = Printer::default();
        printer.write("(");
        printer.newline();
        printer.indent();
        printer.write("x");
        printer.dedent();
        assert_eq!(finish(printer), "(\n  x");
    }

    #[test]
    fn blank_lines_carry_no_indent() {
        let mut printer = Printer::default();
        printer.indent();
        printer.newline();
        printer.newline();
        printer.write("x");
        printer.dedent();
        assert_eq!(finish(printer), "\n\n  x");
    }

    #[test]
    fn empty_write_emits_nothing() {
        let mut printer = Printer::default();
        printer.indent();
        printer.newline();
        printer.write("");
        printer.dedent();
        assert_eq!(finish(printer), "\n");
    }

    #[test]
    fn custom_indent_width() {
        let mut printer = Printer::new(4);
        printer.write("a");
        printer.indent();
        printer.indent();
        printer.newline();
        printer.write("b");
        printer.dedent();
        printer.dedent();
        assert_eq!(finish(printer), "a\n        b");
    }

    #[test]
    fn depth_tracking() {
        let mut printer = Printer::default();
        assert_eq!(printer.depth(), 0);
        printer.indent();
        printer.indent();
        assert_eq!(printer.depth(), 2);
        printer.dedent();
        assert_eq!(printer.depth(), 1);
        printer.dedent();
        assert_eq!(printer.depth(), 0);
    }

    #[test]
    fn unbalanced_indent_is_a_format_error() {
        let mut printer = Printer::default();
        printer.write("x");
        printer.indent();
        match printer.finish() {
            Err(Error::FormatError { message }) => {
                assert!(message.contains("indent depth is 1"), "{}", message)
            }
            other => panic!("expected format error, got {:?}", other),
        }
    }
}

mod indent_unit {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_unit_is_two_spaces() {
        assert_eq!(INDENT_SIZE, 2);
        assert_eq!(Indent::default().indent_text(1), "  ");
    }

    #[test]
    fn indent_text_repeats_unit() {
        assert_eq!(Indent::new(3).indent_text(2), "      ");
        assert_eq!(Indent::new(3).indent_text(0), "");
    }

    #[test]
    fn enter_and_leave() {
        let mut indent = Indent::new(2);
        indent.enter();
        indent.enter();
        indent.leave();
        assert_eq!(indent.depth(), 1);
    }
}
