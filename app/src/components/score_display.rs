use dioxus::prelude::*;

#[component]
pub fn ScoreDisplay(score: u64, total_clicks: u64) -> Element {
    rsx! {
        div { class: "text-center",
            p { class: "text-low text-sm uppercase tracking-wide", "Points" }
            p { class: "text-high font-mono text-6xl font-bold", {format_points(score)} }
            p { class: "text-low text-sm mt-2", {group_thousands(total_clicks)} " taps" }
        }
    }
}

/// Compact formatting for big scores.
pub fn format_points(points: u64) -> String {
    if points >= 1_000_000 {
        format!("{:.2}M", points as f64 / 1_000_000.0)
    } else if points >= 1_000 {
        format!("{:.1}K", points as f64 / 1_000.0)
    } else {
        points.to_string()
    }
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_points_tiers() {
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(999), "999");
        assert_eq!(format_points(1_000), "1.0K");
        assert_eq!(format_points(1_500), "1.5K");
        assert_eq!(format_points(85_000), "85.0K");
        assert_eq!(format_points(1_250_000), "1.25M");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
