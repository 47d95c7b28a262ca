use std::io::{self, BufRead, Write};

use crate::{
    cli::OutputFormat,
    error::PResult,
    runtime::{eval::eval, format::format_significant},
    syntax::{parse, to_postfix, tokenize, Token},
};

const EXIT_COMMAND: &str = "exit";

pub(crate) struct Session {
    format: OutputFormat,
    precision: usize,
}

impl Session {
    pub fn new(format: OutputFormat, precision: usize) -> Self {
        Self { format, precision }
    }

    pub fn render(&self, src: &str) -> PResult<String> {
        match self.format {
            OutputFormat::Value => Ok(format_significant(eval(src)?, self.precision)),
            OutputFormat::Postfix => {
                let postfix = to_postfix(tokenize(src)?)?;
                Ok(postfix
                    .iter()
                    .map(Token::to_string)
                    .collect::<Vec<_>>()
                    .join(" "))
            }
            OutputFormat::Tree => Ok(parse(src)?.to_string()),
        }
    }

    /// Renders each input line until `exit` or end of input.
    /// Returns the number of lines that failed.
    pub fn run<R, O, E>(
        &self,
        input: R,
        out: &mut O,
        err: &mut E,
        prompt: Option<&str>,
    ) -> io::Result<usize>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut failures = 0;
        let mut lines = input.lines();

        loop {
            if let Some(prompt) = prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let src = line?;

            if src == EXIT_COMMAND {
                break;
            }
            if src.is_empty() {
                continue;
            }

            match self.render(&src) {
                Ok(rendered) => writeln!(out, "{rendered}")?,
                Err(why) => {
                    failures += 1;
                    writeln!(err, "error: {why} in `{src}`")?;
                }
            }
        }

        Ok(failures)
    }
}

#[cfg(test)]
mod test {
    use super::Session;
    use crate::cli::OutputFormat;

    fn run_lines(session: &Session, input: &str, prompt: Option<&str>) -> (String, String, usize) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = session
            .run(input.as_bytes(), &mut out, &mut err, prompt)
            .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            failures,
        )
    }

    #[test]
    fn stops_at_exit() {
        let session = Session::new(OutputFormat::Value, 10);
        let (out, err, failures) = run_lines(&session, "3+4*2\n1/0\nexit\n2+2\n", None);

        assert_eq!(out, "11\n");
        assert_eq!(err, "error: division by zero in `1/0`\n");
        assert_eq!(failures, 1);
    }

    #[test]
    fn continues_after_errors() {
        let session = Session::new(OutputFormat::Value, 10);
        let (out, err, failures) = run_lines(&session, "(1+2\n\n1/3\r\n", None);

        assert_eq!(out, "0.3333333333\n");
        assert_eq!(err, "error: unbalanced parenthesis `(` in `(1+2`\n");
        assert_eq!(failures, 1);
    }

    #[test]
    fn prints_prompt_before_each_read() {
        let session = Session::new(OutputFormat::Value, 10);
        let (out, _, _) = run_lines(&session, "2^3^2\nexit\n", Some(">>"));

        assert_eq!(out, ">>64\n>>");
    }

    #[test]
    fn renders_postfix_and_tree() {
        let postfix = Session::new(OutputFormat::Postfix, 10);
        assert_eq!(postfix.render("3+4*2").unwrap(), "3 4 2 * +");

        let tree = Session::new(OutputFormat::Tree, 10);
        assert_eq!(tree.render("3+4*2").unwrap(), "(3+(4*2))");
        assert_eq!(tree.render("5^-1").unwrap(), "(5^-1)");
    }

    #[test]
    fn precision_applies_to_values() {
        let session = Session::new(OutputFormat::Value, 4);
        assert_eq!(session.render("2/3").unwrap(), "0.6667");
    }
}
