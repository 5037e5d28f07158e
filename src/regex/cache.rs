/// Compile a fixed regular expression once and hand back a `&'static` to it
/// on every subsequent call. Only for patterns known to be valid; a bad
/// pattern here is a bug and panics.
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
