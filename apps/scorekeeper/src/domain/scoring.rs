//! Skull King per-round scoring rules.

/// Score one player's round from their bid, the tricks they took and any
/// bonus points. Rules apply in priority order:
///
/// 1. zero bid, zero tricks: `10 * round_no + bonus`
/// 2. exact non-zero bid: `20 * bid + bonus`
/// 3. zero bid but took tricks: `-10 * round_no + bonus`
/// 4. any other miss: `-10 * |bid - tricks| + bonus`
///
/// Results outside the `i32` range saturate; use [`checked_round_score`]
/// to reject them instead.
pub fn skull_king_round_score(round_no: u32, bid: i32, tricks_won: i32, bonus: i32) -> i32 {
    let wide = wide_round_score(round_no, bid, tricks_won, bonus);
    i32::try_from(wide).unwrap_or(if wide < 0 { i32::MIN } else { i32::MAX })
}

/// Same rules as [`skull_king_round_score`], `None` when the score does
/// not fit in an `i32`.
pub fn checked_round_score(round_no: u32, bid: i32, tricks_won: i32, bonus: i32) -> Option<i32> {
    i32::try_from(wide_round_score(round_no, bid, tricks_won, bonus)).ok()
}

// Every intermediate fits in i64 for any i32 inputs.
fn wide_round_score(round_no: u32, bid: i32, tricks_won: i32, bonus: i32) -> i64 {
    let round = i64::from(round_no);
    let (bid, tricks, bonus) = (i64::from(bid), i64::from(tricks_won), i64::from(bonus));
    match (bid, tricks) {
        (0, 0) => 10 * round + bonus,
        (b, t) if b == t => 20 * b + bonus,
        (0, t) if t > 0 => -10 * round + bonus,
        (b, t) => -10 * (b - t).abs() + bonus,
    }
}

/// Sum of tricks won must equal the number of cards dealt, which in Skull
/// King is the round number.
pub fn tricks_match_round(round_no: u32, tricks_won: &[i32]) -> bool {
    tricks_won.iter().map(|&t| i64::from(t)).sum::<i64>() == i64::from(round_no)
}
