use std::collections::BTreeSet;

/// Hostname declared by the first `hostname <name>` line of a config.
pub fn extract_hostname(conf: &str) -> Option<String> {
    conf.lines()
        .map(str::trim)
        .find_map(|trim| trim.strip_prefix("hostname "))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
}

/// Set of hostnames declared across all raw configs.
///
/// Must be computed from every device before any canonical name is assigned,
/// since peer claims naming hosts outside this set are never canonicalized.
pub fn valid_hostnames<'a>(configs: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    configs.into_iter().filter_map(extract_hostname).collect()
}

#[cfg(test)]
mod tests {
    use super::{extract_hostname, valid_hostnames};

    #[test]
    fn finds_first_hostname_line() {
        let conf = "version 17.12\n hostname  spine1 \nhostname other\n";
        assert_eq!(extract_hostname(conf), Some("spine1".to_string()));
    }

    #[test]
    fn ignores_similar_keywords() {
        assert_eq!(extract_hostname("hostnames x\nip host r2 10.0.0.2\n"), None);
        assert_eq!(extract_hostname(""), None);
    }

    #[test]
    fn collects_hostnames_from_every_config() {
        let hosts = valid_hostnames(["hostname a\n", "no hostname here\n", "hostname b\n"]);
        assert_eq!(hosts.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
