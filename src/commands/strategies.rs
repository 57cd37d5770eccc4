//! `pubid strategies` command.

use crate::strategy::Strategy;

/// Render one line per registered strategy, marking the default and the
/// one the current configuration selects.
#[must_use]
pub fn listing(active: Strategy) -> String {
    Strategy::ALL
        .iter()
        .map(|s| {
            let mut markers = String::new();
            if *s == Strategy::default() {
                markers.push_str(" (default)");
            }
            if *s == active {
                markers.push_str(" (active)");
            }
            format!("{:<14} {}{markers}", s.name(), s.summary())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute the `strategies` command.
///
/// # Errors
///
/// Never fails once `active` is resolved; the signature matches the other
/// handlers.
#[allow(clippy::unnecessary_wraps)]
pub fn run(active: Strategy) -> Result<(), String> {
    println!("{}", listing(active));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_strategy_once() {
        let text = listing(Strategy::default());
        assert_eq!(text.lines().count(), Strategy::ALL.len());
        for strategy in Strategy::ALL {
            assert!(text.contains(strategy.name()));
        }
    }

    #[test]
    fn marks_the_default() {
        let text = listing(Strategy::Uuid5);
        let marked: Vec<&str> = text.lines().filter(|l| l.contains("(default)")).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].starts_with("sha256 "));
    }

    #[test]
    fn marks_the_active_strategy() {
        let text = listing(Strategy::Uuid5);
        let active: Vec<&str> = text.lines().filter(|l| l.ends_with("(active)")).collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].starts_with("uuid5 "));
    }
}
