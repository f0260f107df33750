//! Display formatting for movie metadata

use crate::types::CrewMember;

/// Format a runtime in minutes as `"2h 28m"`.
///
/// Returns `None` for missing or non-positive runtimes.
pub fn format_runtime(minutes: f64) -> Option<String> {
    if !minutes.is_finite() || minutes <= 0.0 {
        return None;
    }
    let hours = (minutes / 60.0).floor();
    let mins = (minutes % 60.0).round();
    Some(format!("{}h {}m", hours as u64, mins as u64))
}

/// Format a dollar amount compactly: `$1.2B`, `$160.0M`, `$850K`, `$999`.
///
/// Returns `None` for zero, which the service uses for "unknown".
pub fn format_money(amount: u64) -> Option<String> {
    const BILLION: f64 = 1_000_000_000.0;
    const MILLION: f64 = 1_000_000.0;
    const THOUSAND: f64 = 1_000.0;

    if amount == 0 {
        return None;
    }
    let n = amount as f64;
    let text = if n >= BILLION {
        format!("${:.1}B", n / BILLION)
    } else if n >= MILLION {
        format!("${:.1}M", n / MILLION)
    } else if n >= THOUSAND {
        format!("${}K", (n / THOUSAND).round() as u64)
    } else {
        format!("${}", amount)
    };
    Some(text)
}

/// Year component of an ISO `YYYY-MM-DD` release date
pub fn release_year(release_date: &str) -> Option<&str> {
    release_date
        .split('-')
        .next()
        .map(str::trim)
        .filter(|year| !year.is_empty())
}

/// Rating with one decimal place, e.g. `8.1`
pub fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}

/// Vote count with thousands separators, e.g. `34,495`
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Short label for a crew job as shown in the detail overlay
pub fn crew_role_label(job: &str) -> &str {
    match job {
        "Screenplay" => "Writer",
        "Original Music Composer" => "Music",
        "Director of Photography" => "Cinematography",
        "Executive Producer" => "Exec. Producer",
        other => other,
    }
}

/// Group crew names under their display label, keeping first-seen order.
pub fn group_crew_by_role(crew: &[CrewMember]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for member in crew {
        let label = crew_role_label(&member.job);
        match groups.iter_mut().find(|(existing, _)| existing == label) {
            Some((_, names)) => names.push(member.name.clone()),
            None => groups.push((label.to_string(), vec![member.name.clone()])),
        }
    }
    groups
}
