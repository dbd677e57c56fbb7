// Metric label formatting

/// Convert a raw metric id into a display label.
/// Example: "cpu_utilization_percent" -> "Cpu Utilization Percent"
pub fn clean_metric_name(raw: &str) -> String {
    raw.replace('_', " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
