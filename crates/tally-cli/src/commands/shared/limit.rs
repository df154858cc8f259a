/// Detail-table size with precedence `--top-n` -> `--limit` -> config.
///
/// Never below one: a zero from the command line still shows the top record.
#[must_use]
pub fn effective_top_n(local: Option<usize>, global: Option<usize>, configured: usize) -> usize {
    local.or(global).unwrap_or(configured).max(1)
}
