use std::{env, str::FromStr};

pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    // Parse typed environment values with a fallback.
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Reads a variable that must carry a value; unset and blank are treated alike.
pub fn env_nonempty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{env_nonempty, env_or};

    #[test]
    fn falls_back_on_unparsable_value() {
        std::env::set_var("FONTSTATS_TEST_PORT", "not-a-port");
        assert_eq!(env_or("FONTSTATS_TEST_PORT", 8080u16), 8080);
        std::env::set_var("FONTSTATS_TEST_PORT", " 9090 ");
        assert_eq!(env_or("FONTSTATS_TEST_PORT", 8080u16), 9090);
    }

    #[test]
    fn blank_value_counts_as_missing() {
        std::env::set_var("FONTSTATS_TEST_BLANK", "   ");
        assert_eq!(env_nonempty("FONTSTATS_TEST_BLANK"), None);
        assert_eq!(env_nonempty("FONTSTATS_TEST_NEVER_SET"), None);
    }
}
