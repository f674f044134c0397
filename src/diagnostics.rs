//! Span-labelled diagnostic rendering.
//!
//! File mode follows every plain diagnostic line with an [`ariadne`] report
//! pointing at the offending span in the source. The plain lines are the
//! stable surface; this rendering is presentation only.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use lox::token::Span;

/// Range to label when a span is empty (e.g. an error at end of input).
fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        source.len().saturating_sub(1)..source.len()
    }
}

/// Renders one error with its source context to stderr.
pub(crate) fn report_span(filename: &str, source: &str, span: Span, message: &str) {
    let range = if span.start < span.end {
        span.start..span.end
    } else {
        end_of_source_range(source)
    };

    let result = Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)));

    if let Err(report_error) = result {
        eprintln!("Error: {} (at {}:{})", message, span.line, span.column);
        eprintln!("(Failed to display detailed error report: {})", report_error);
    }
}
