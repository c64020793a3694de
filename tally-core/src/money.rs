//! Money-token parsing shared by the statement parsers.
//!
//! Statement amounts show up as `1,234.56`, `$1,234.56`, `-15.00`, or with
//! the sign detached as its own column (`- $14.05`). Everything here works
//! on single whitespace-delimited tokens; detached signs are the caller's
//! concern.

/// Parse one money token into a signed value.
///
/// Requires a cents part (`.dd`) so bare integers such as an instance-count
/// column never read as amounts. Returns `None` for anything else.
pub fn parse_money(token: &str) -> Option<f64> {
    let mut t = token.trim();

    let mut negative = false;
    if let Some(rest) = t.strip_prefix('-') {
        negative = true;
        t = rest.trim_start();
    } else if let Some(rest) = t.strip_prefix('+') {
        t = rest.trim_start();
    }
    t = t.strip_prefix('$').unwrap_or(t);

    let cleaned = t.replace(',', "");
    let (whole, cents) = cleaned.split_once('.')?;
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if cents.len() != 2 || !cents.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: f64 = cleaned.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// True for a detached sign column token.
pub fn is_sign_token(token: &str) -> bool {
    matches!(token, "-" | "+")
}

/// True for a bare integer column (Chase business "instances" count).
pub fn is_count_token(token: &str) -> bool {
    !token.is_empty() && token.len() <= 3 && token.bytes().all(|b| b.is_ascii_digit())
}
