/// Slug derivation
///
/// Slugs are deterministic, URL-safe identifiers derived from a text field
/// (a task title or a username). Derivation lowercases alphanumeric runs
/// and joins them with single hyphens; every other character acts as a
/// separator. The result carries no leading or trailing hyphen.
///
/// # Example
///
/// ```
/// use taskmanager_shared::slug::slugify;
///
/// assert_eq!(slugify("Alice"), "alice");
/// assert_eq!(slugify("Fix the  Roof!"), "fix-the-roof");
/// ```

/// Derives a slug from the given source text
///
/// The derivation is deterministic and idempotent: the same input always
/// produces the same slug, and slugifying a slug returns it unchanged.
pub fn slugify(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut separated = false;

    for ch in source.chars() {
        if ch.is_alphanumeric() {
            if separated && !slug.is_empty() {
                slug.push('-');
            }
            separated = false;
            slug.extend(ch.to_lowercase());
        } else {
            separated = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_source() {
        assert_eq!(slugify("Alice"), "alice");
        assert_eq!(slugify("SHOUTING"), "shouting");
    }

    #[test]
    fn test_hyphenates_words() {
        assert_eq!(slugify("Buy more coffee"), "buy-more-coffee");
    }

    #[test]
    fn test_collapses_separator_runs() {
        assert_eq!(slugify("Fix   the -- Roof!"), "fix-the-roof");
        assert_eq!(slugify("a_b.c/d"), "a-b-c-d");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slugify("  padded  "), "padded");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = slugify("Write the Q3 report");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(slugify("Same Title"), slugify("Same Title"));
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(slugify("Sprint 42 planning"), "sprint-42-planning");
    }
}
