/// Config sections reachable through `ATTEST_<SECTION>__<KEY>`.
const SECTIONS: [&str; 4] = ["API", "GENERAL", "STORAGE", "AUTH"];

/// Emit warnings for env vars that look like config keys but use a single
/// underscore, which figment silently ignores.
pub fn warn_mistyped_env() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    keys.sort();

    let mut warnings = Vec::new();
    for key in keys {
        for section in SECTIONS {
            let single = format!("ATTEST_{section}_");
            let double = format!("ATTEST_{section}__");
            if key.starts_with(&single) && !key.starts_with(&double) {
                let suffix = &key[single.len()..];
                warnings.push(format!(
                    "{key} is ignored; use double underscores (example: {double}{suffix})"
                ));
            }
        }
    }
    warnings
}
