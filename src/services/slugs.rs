/// URL slug derivation. Uniqueness is the persistence layer's concern (it
/// walks [`candidates`] with existence checks); this module is pure.

/// Lowercase, alphanumerics kept, everything else collapsed to single
/// hyphens. Empty input falls back to the given default.
pub fn slugify(input: &str, fallback: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug.truncate(80);
        slug
    }
}

/// The de-dup sequence for a base slug: the base itself, then numbered
/// variants. Callers bound how far they walk before giving up.
pub fn candidates(base: &str) -> impl Iterator<Item = String> + '_ {
    std::iter::once(base.to_string())
        .chain((2..).map(move |n| format!("{}-{}", base, n)))
}
