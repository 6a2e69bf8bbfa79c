use serde_json::Value;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented `key: value` blocks.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorChoice {
    pub fn parse(s: &str) -> Self {
        match s {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
}

/// Printer for `cfg.format` writing to stdout, with summaries on stderr.
pub fn stdout_printer(cfg: PrinterConfig) -> Box<dyn ResultPrinter> {
    match cfg.format {
        OutputFormat::Human => Box::new(HumanPrinter::stdout(cfg)),
        OutputFormat::Json => Box::new(JsonPrinter::stdout()),
    }
}

/// Static context about a print run.
#[derive(Debug)]
pub struct PrintContext<'a> {
    /// Lookup or filter that produced the rows
    pub kind: &'a str,
    pub total: usize,
    pub failed: usize,
}

/// One result, paired with the term that produced it when there is one.
#[derive(Debug)]
pub struct ResultRow<'a> {
    pub term: Option<&'a str>,
    pub value: &'a Value,
}

/// A term whose lookup failed.
#[derive(Debug)]
pub struct FailedRow<'a> {
    pub term: Option<&'a str>,
    pub error: &'a str,
}

pub trait ResultPrinter {
    fn begin(&mut self, ctx: &PrintContext) -> io::Result<()>;

    fn print_row(&mut self, row: &ResultRow<'_>, ctx: &PrintContext) -> io::Result<()>;

    fn print_failure(&mut self, row: &FailedRow<'_>, ctx: &PrintContext) -> io::Result<()>;

    fn finish(&mut self, ctx: &PrintContext) -> io::Result<()>;
}

pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        // Arbitrary writers are never treated as a terminal.
        let use_color = cfg.color == ColorChoice::Always;
        Self {
            out,
            err,
            use_color,
        }
    }

    fn format_term(&self, term: &str) -> String {
        if self.use_color {
            format!("\x1b[32m{}\x1b[0m", term)
        } else {
            term.to_owned()
        }
    }

    fn write_value(&mut self, value: &Value, indent: usize) -> io::Result<()> {
        let pad = "  ".repeat(indent);

        match value {
            Value::Object(map) => {
                for (key, v) in map {
                    if is_nested(v) {
                        writeln!(self.out, "{pad}{key}:")?;
                        self.write_value(v, indent + 1)?;
                    } else {
                        writeln!(self.out, "{pad}{key}: {}", scalar(v))?;
                    }
                }
            }
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if is_nested(item) {
                        writeln!(self.out, "{pad}- [{i}]")?;
                        self.write_value(item, indent + 1)?;
                    } else {
                        writeln!(self.out, "{pad}- {}", scalar(item))?;
                    }
                }
            }
            other => writeln!(self.out, "{pad}{}", scalar(other))?,
        }

        Ok(())
    }
}

impl HumanPrinter<io::Stdout, io::Stderr> {
    /// Create a printer that writes to stdout with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> Self {
        use std::io::IsTerminal;

        let mut printer = Self::new(io::stdout(), io::stderr(), cfg);
        if cfg.color == ColorChoice::Auto {
            printer.use_color = io::stdout().is_terminal();
        }
        printer
    }
}

fn is_nested(v: &Value) -> bool {
    matches!(v, Value::Object(m) if !m.is_empty()) || matches!(v, Value::Array(a) if !a.is_empty())
}

fn scalar(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_owned(),
        other => other.to_string(),
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }
}

impl JsonPrinter<io::Stdout, io::Stderr> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> ResultPrinter for HumanPrinter<W, E> {
    fn begin(&mut self, _ctx: &PrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &ResultRow<'_>, _ctx: &PrintContext) -> io::Result<()> {
        match row.term {
            Some(term) => {
                let header = self.format_term(term);
                writeln!(self.out, "{header}")?;
                self.write_value(row.value, 1)
            }
            None => self.write_value(row.value, 0),
        }
    }

    fn print_failure(&mut self, row: &FailedRow<'_>, _ctx: &PrintContext) -> io::Result<()> {
        match row.term {
            Some(term) => writeln!(self.err, "[error] {term}: {}", row.error),
            None => writeln!(self.err, "[error] {}", row.error),
        }
    }

    fn finish(&mut self, ctx: &PrintContext) -> io::Result<()> {
        self.out.flush()?;

        if ctx.failed > 0 {
            writeln!(
                self.err,
                "[{}] {} of {} results failed",
                ctx.kind, ctx.failed, ctx.total
            )?;
        }

        Ok(())
    }
}

impl<W: Write, E: Write> ResultPrinter for JsonPrinter<W, E> {
    fn begin(&mut self, _ctx: &PrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_row(&mut self, row: &ResultRow<'_>, ctx: &PrintContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "kind": ctx.kind,
            "term": row.term,
            "result": row.value,
        });
        writeln!(self.out, "{}", obj)
    }

    fn print_failure(&mut self, row: &FailedRow<'_>, ctx: &PrintContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "kind": ctx.kind,
            "term": row.term,
            "error": row.error,
        });
        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, ctx: &PrintContext) -> io::Result<()> {
        self.out.flush()?;

        if ctx.failed > 0 {
            let obj = serde_json::json!({
                "type": "summary",
                "kind": ctx.kind,
                "total": ctx.total,
                "failed": ctx.failed,
            });
            writeln!(self.err, "{}", obj)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
