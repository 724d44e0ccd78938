/// Proptest case count: `PROPTEST_CASES` when set, `default` on CI, and at
/// most 16 for local runs.
pub fn proptest_cases(default: u32) -> u32 {
    let forced = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|cases| cases.parse::<u32>().ok());
    match forced {
        Some(cases) => cases.max(1),
        None if std::env::var_os("CI").is_some() => default.max(1),
        None => default.clamp(1, 16),
    }
}
