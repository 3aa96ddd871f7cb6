use indicatif::ProgressStyle;
use tracing::Subscriber;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::registry::LookupSpan;

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

/// Spinner shown for spans tagged `indicatif.pb_show`: the port probe and the copy.
pub fn indicatif_layer<S>() -> IndicatifLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    IndicatifLayer::new().with_progress_style(spinner_style())
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {span_name} {span_fields}")
        .map(|style| style.tick_strings(TICK_STRINGS))
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
