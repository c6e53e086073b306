use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// A span that the indicatif layer renders as a spinner while it is entered.
pub fn discovery_span(port: u16) -> Span {
    let span = info_span!("discovery", indicatif.pb_show = true);
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        span.pb_set_style(&style.tick_strings(TICK_STRINGS));
    }
    span.pb_set_message(&format!("Knocking on port {port} across the subnet..."));
    span
}

pub fn report_discovery_progress(span: &Span, count: usize) {
    span.pb_set_message(&format!(
        "Identified {} {} so far...",
        count.to_string().green().bold(),
        if count == 1 { "player" } else { "players" }
    ));
}
