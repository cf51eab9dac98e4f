use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Class selectors match on whitespace-separated tokens, so `.version` will
// never match `class="versioning"`.
selector!(VERSION_SELECTOR, ".version");
selector!(RELEASE_DATE_SELECTOR, ".releasedate");
// Skips betas and release candidates (`5.0.0RC1`, `5.0.0b1`). This is a
// character class, not an alternation: ANY of `R`, `C`, `|` or `b` matches.
regex!(PRERELEASE_REGEX, r"[RC|b]");
