use clap::Parser;

/// Serves the ID card generator on a loopback address and opens it in the
/// default browser.
#[derive(Parser, Debug, Clone)]
#[command(name = "idcard-launcher", version, about = "Local launcher for the student ID card generator")]
pub struct LauncherConfig {
    #[arg(long, env = "IDCARD_HOST", default_value = "127.0.0.1", help = "Address to bind.")]
    pub host: String,

    #[arg(long, env = "IDCARD_PORT", default_value_t = 8080, help = "Port to bind.")]
    pub port: u16,

    #[arg(long, help = "Do not open a browser window on start.")]
    pub no_browser: bool,
}

impl LauncherConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_loopback_8080() {
        let config = LauncherConfig::try_parse_from(["idcard-launcher"]).unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.no_browser);
        assert_eq!(config.url(), format!("http://{}:8080", config.host));
    }

    #[test]
    fn flags_override_defaults() {
        let config = LauncherConfig::try_parse_from([
            "idcard-launcher",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--no-browser",
        ])
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert!(config.no_browser);
    }
}
