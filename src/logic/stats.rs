//! Aggregation engine: turns match records into per-friend standings.

use crate::models::{Friend, MatchRecord, Outcome, PlayerStats, ResultLine, StatsSummary};

/// Parse a score the lenient way scores have always been read.
///
/// Leading whitespace and an optional sign are accepted, then the longest run
/// of ASCII digits. Anything after the digits is ignored. No digits, or a value
/// that does not fit in `i64`, yields 0.
pub fn parse_score(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = match rest[..digits_end].parse() {
        Ok(n) => n,
        Err(_) => return 0,
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Signed contribution of one line: `+score` for a win, `-score` for a loss.
/// `parse_score` never returns `i64::MIN`, so the negation cannot overflow.
fn signed_score(line: &ResultLine) -> i64 {
    let score = parse_score(&line.score);
    match line.outcome {
        Outcome::Win => score,
        Outcome::Loss => -score,
    }
}

/// Total score of a single record's lines (no friend filtering).
///
/// Saturates at the `i64` bounds instead of overflowing.
pub fn compute_total_score(lines: &[ResultLine]) -> i64 {
    lines
        .iter()
        .fold(0i64, |total, line| total.saturating_add(signed_score(line)))
}

/// `round(rate * 100) / 100`, rounding half away from zero.
pub fn round_win_rate(win_count: u32, lose_count: u32) -> f64 {
    let games = win_count + lose_count;
    if games == 0 {
        return 0.0;
    }
    let rate = f64::from(win_count) / f64::from(games);
    (rate * 100.0).round() / 100.0
}

/// One [`PlayerStats`] per friend, ranked by total score (highest first).
///
/// Ties keep the order of `friends`. Friends with no results get an all-zero
/// entry. Malformed scores count as 0 but still count as a win or loss.
pub fn compute_stats(friends: &[Friend], records: &[MatchRecord]) -> Vec<PlayerStats> {
    let mut stats: Vec<PlayerStats> = friends
        .iter()
        .map(|friend| {
            let mut total_score: i64 = 0;
            let mut win_count = 0;
            let mut lose_count = 0;

            for line in records
                .iter()
                .flat_map(|r| r.lines.iter())
                .filter(|l| l.friend_id == friend.id)
            {
                total_score = total_score.saturating_add(signed_score(line));
                match line.outcome {
                    Outcome::Win => win_count += 1,
                    Outcome::Loss => lose_count += 1,
                }
            }

            PlayerStats {
                friend_id: friend.id.clone(),
                friend_name: friend.name.clone(),
                total_score,
                win_count,
                lose_count,
                win_rate: round_win_rate(win_count, lose_count),
            }
        })
        .collect();

    // sort_by is stable
    stats.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    stats
}

/// Leaderboard totals for the statistics page.
pub fn summarize(records: &[MatchRecord], stats: &[PlayerStats]) -> StatsSummary {
    let win_count = stats.iter().map(|s| s.win_count).sum();
    let lose_count = stats.iter().map(|s| s.lose_count).sum();
    StatsSummary {
        match_count: records.len(),
        result_count: win_count + lose_count,
        win_count,
        lose_count,
    }
}
