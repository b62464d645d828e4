/// Likes-waiting count at which the estimate stops growing with more likes
const LIKES_SATURATION: f64 = 10.0;
/// Upper bound of the estimate, reached through swiping alone
const MAX_PROBABILITY: f64 = 95.0;

/// Chance, in percent, that the next swipe surfaces someone who already liked the user.
///
/// Engagement nudge for the UI rather than a real probability: it grows
/// with session swipes (`10 + 5 * swipes`, capped at 95) and is scaled down
/// while fewer than ten likes are waiting.
pub fn estimate_match_probability(swipes_this_session: u32, likes_waiting: u32) -> u8 {
    if likes_waiting == 0 {
        return 0;
    }

    let base = (10.0 + swipes_this_session as f64 * 5.0).min(MAX_PROBABILITY);
    let scale = (likes_waiting as f64 / LIKES_SATURATION).min(1.0);

    (base * scale).round() as u8
}
