//! Prometheus text exposition encoder
//!
//! Renders gathered metric families in text format 0.0.4 the way the reference
//! Prometheus client libraries do: sample values always carry a fractional part
//! (`3.0`, not `3`) and large values switch to exponent notation.
//!
//! Counters, gauges and untyped families are encoded here. Histograms and
//! summaries are handed to `prometheus::TextEncoder`.

use prometheus::{
    Encoder, TextEncoder,
    proto::{MetricFamily, MetricType},
};

/// Content type for the text exposition format
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Encode metric families into the text exposition format
///
/// Families are written in the order given (the registry yields them sorted by
/// name). Each line, including the last, ends with `\n`.
pub fn encode(families: &[MetricFamily]) -> String {
    let mut out = String::new();

    for family in families {
        let type_name = match family.get_field_type() {
            MetricType::COUNTER => "counter",
            MetricType::GAUGE => "gauge",
            MetricType::UNTYPED => "untyped",
            _ => {
                encode_with_text_encoder(family, &mut out);
                continue;
            }
        };

        let name = family.name();
        out.push_str(&format!("# HELP {} {}\n", name, escape_help(family.help())));
        out.push_str(&format!("# TYPE {} {}\n", name, type_name));

        for metric in family.get_metric() {
            let value = match family.get_field_type() {
                MetricType::COUNTER => metric.counter.value.unwrap_or(0.0),
                MetricType::GAUGE => metric.gauge.value.unwrap_or(0.0),
                _ => metric.untyped.value.unwrap_or(0.0),
            };

            out.push_str(name);
            let labels = metric.get_label();
            if !labels.is_empty() {
                let pairs: Vec<String> = labels
                    .iter()
                    .map(|l| {
                        format!("{}=\"{}\"", l.get_name(), escape_label_value(l.get_value()))
                    })
                    .collect();
                out.push('{');
                out.push_str(&pairs.join(","));
                out.push('}');
            }
            out.push(' ');
            out.push_str(&format_value(value));
            out.push('\n');
        }
    }

    out
}

fn encode_with_text_encoder(family: &MetricFamily, out: &mut String) {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    match encoder.encode(std::slice::from_ref(family), &mut buffer) {
        Ok(()) => out.push_str(&String::from_utf8_lossy(&buffer)),
        Err(e) => {
            tracing::warn!(
                error = %e,
                metric = family.name(),
                "Skipping metric family the text encoder could not encode"
            );
        }
    }
}

/// Format a sample value the way the reference client does
///
/// - `+Inf`, `-Inf` and `NaN` for non-finite values
/// - shortest round-trip decimal with a fractional part (`3.0`, `0.25`)
/// - exponent form outside `[1e-4, 1e16)` (`1e+16`, `1.5e-05`)
/// - positive values with more than six integer digits use Go-style
///   exponents (`1234567.0` becomes `1.234567e+06`)
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "+Inf".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Inf".to_string();
    }

    let repr = float_repr(value);

    if value > 0.0 {
        if let Some(dot) = repr.find('.') {
            if dot > 6 {
                let mantissa = format!("{}.{}{}", &repr[..1], &repr[1..dot], &repr[dot + 1..]);
                let mantissa = mantissa.trim_end_matches(['0', '.']);
                return format!("{}e+0{}", mantissa, dot - 1);
            }
        }
    }

    repr
}

fn float_repr(value: f64) -> String {
    let magnitude = value.abs();

    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{:e}", value);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                Ok(exp) => {
                    let sign = if exp < 0 { '-' } else { '+' };
                    format!("{}e{}{:02}", mantissa, sign, exp.abs())
                }
                Err(_) => scientific,
            },
            None => scientific,
        };
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

fn escape_help(help: &str) -> String {
    help.replace('\\', r"\\").replace('\n', r"\n")
}

fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('\n', r"\n")
        .replace('"', "\\\"")
}
