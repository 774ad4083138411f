use anyhow::bail;

pub const DEFAULT_PORT: u16 = 8080;

/// Process configuration, resolved once at startup and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Reads `PORT` from the environment. Unset or empty falls back to
    /// [`DEFAULT_PORT`]; anything else must parse as a port in 1..=65535,
    /// otherwise startup fails.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_port_var(std::env::var("PORT").ok())
    }

    fn from_port_var(raw: Option<String>) -> anyhow::Result<Self> {
        let port = match raw.as_deref() {
            None | Some("") => DEFAULT_PORT,
            Some(value) => match value.parse::<u16>() {
                Ok(0) | Err(_) => {
                    bail!("PORT must be an integer between 1 and 65535, got {value:?}")
                }
                Ok(port) => port,
            },
        };

        Ok(Config { port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_port_uses_default() {
        assert_eq!(Config::from_port_var(None).unwrap().port, DEFAULT_PORT);
    }

    #[test]
    fn empty_port_uses_default() {
        let config = Config::from_port_var(Some(String::new())).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn numeric_port_overrides_default() {
        let config = Config::from_port_var(Some("9999".to_string())).unwrap();
        assert_eq!(config.port, 9999);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = Config::from_port_var(Some("eight".to_string())).unwrap_err();
        assert!(err.to_string().contains("eight"));
    }

    #[test]
    fn zero_and_out_of_range_ports_are_rejected() {
        assert!(Config::from_port_var(Some("0".to_string())).is_err());
        assert!(Config::from_port_var(Some("70000".to_string())).is_err());
        assert!(Config::from_port_var(Some("-1".to_string())).is_err());
    }
}
