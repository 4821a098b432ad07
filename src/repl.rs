use std::io::{self, BufRead, Write};

use crate::evaluate_line;

/// Greeting printed before the first line is read.
pub const BANNER: &str = "Expression parser, exit with: exit || quit\n\
                          Valid Expressions examples:\n\
                          \t (+ 10 10 10)\n\
                          \t (+ 10 (* 5 2) (- 8 3) (/ 20 4))";

/// Returns `true` if the line asks the loop to stop.
#[must_use]
pub fn is_exit_command(line: &str) -> bool {
    matches!(line, "exit" | "quit")
}

/// Runs the read loop until `exit`, `quit` or the end of `input`.
///
/// Every non-blank line is evaluated on its own. A result is written as
/// `Result: <number>`, a failure as its error message. Failures never stop
/// the loop.
///
/// # Parameters
/// - `input`: Source of lines, usually standard input.
/// - `output`: Destination of results and error messages.
/// - `show_banner`: Whether to print [`BANNER`] first.
///
/// # Errors
/// Returns an error only if reading `input` or writing `output` fails.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use sexpr_calc::repl::run;
///
/// let mut output = Vec::new();
/// run(Cursor::new("(* 6 7)\n)\nquit\n(+ 1 1 1)\n"), &mut output, false).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert_eq!(output, "Result: 42\nSYNTAX ERROR - Unexpected closing parenthesis\n");
/// ```
pub fn run<R, W>(input: R, output: &mut W, show_banner: bool) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    if show_banner {
        writeln!(output, "{BANNER}")?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if is_exit_command(line) {
            log::info!("received {line}, leaving the read loop");
            break;
        }
        if line.is_empty() {
            continue;
        }

        match evaluate_line(line) {
            Ok(value) => writeln!(output, "Result: {value}")?,
            Err(e) => {
                log::debug!("failed to evaluate {line:?}: {e:?}");
                writeln!(output, "{e}")?;
            },
        }
        output.flush()?;
    }

    Ok(())
}
