// ============================================================================
// panelfetch-core/src/metrics/network.rs
// ============================================================================
//
// NETWORK PROBE: Public address, container address and panel allocation
//
// The public address is the only probe that leaves the machine. It goes
// through curl with a hard timeout and is skipped entirely in offline mode.
//
// The panel injects the allocation it assigned to the server as SERVER_IP
// and SERVER_PORT; those are shown as-is.

use std::net::IpAddr;

use serde::Serialize;

use super::{UNAVAILABLE, UNKNOWN};
use crate::command::HostSource;
use crate::config::LaunchConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub public_ip: String,
    pub local_ip: String,
    /// `ip:port` allocation from the panel environment, if any.
    pub allocation: Option<String>,
}

impl NetworkInfo {
    pub fn collect(source: &dyn HostSource, config: &LaunchConfig) -> Self {
        Self {
            public_ip: public_ip(source, config),
            local_ip: local_ip(source),
            allocation: allocation(source),
        }
    }
}

fn public_ip(source: &dyn HostSource, config: &LaunchConfig) -> String {
    if !config.public_ip {
        return UNAVAILABLE.to_string();
    }

    let timeout = config.probe_timeout.as_secs().max(1).to_string();
    source
        .run(
            "curl",
            &["-fsS", "-m", timeout.as_str(), config.public_ip_url.as_str()],
        )
        .ok()
        .and_then(|body| parse_ip(&body))
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

fn local_ip(source: &dyn HostSource) -> String {
    source
        .run("hostname", &["-I"])
        .ok()
        .and_then(|output| output.split_whitespace().find_map(parse_ip))
        .or_else(|| {
            source
                .run("ip", &["-4", "route", "get", "1.1.1.1"])
                .ok()
                .and_then(|output| parse_route_src(&output))
        })
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn allocation(source: &dyn HostSource) -> Option<String> {
    let ip = source.env_var("SERVER_IP").filter(|v| !v.trim().is_empty());
    let port = source.env_var("SERVER_PORT").filter(|v| !v.trim().is_empty());
    match (ip, port) {
        (Some(ip), Some(port)) => Some(format!("{}:{}", ip.trim(), port.trim())),
        (Some(ip), None) => Some(ip.trim().to_string()),
        (None, Some(port)) => Some(format!("*:{}", port.trim())),
        (None, None) => None,
    }
}

/// Accepts a response body only if it is exactly one IP address.
pub fn parse_ip(text: &str) -> Option<String> {
    text.trim().parse::<IpAddr>().ok().map(|ip| ip.to_string())
}

/// Extracts the `src` address from `ip route get` output.
pub fn parse_route_src(output: &str) -> Option<String> {
    let mut tokens = output.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "src" {
            return tokens.next().and_then(parse_ip);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ip_accepts_v4_and_v6_only() {
        assert_eq!(parse_ip(" 203.0.113.7\n").as_deref(), Some("203.0.113.7"));
        assert_eq!(parse_ip("2001:db8::1").as_deref(), Some("2001:db8::1"));
        assert_eq!(parse_ip("<html>blocked</html>"), None);
        assert_eq!(parse_ip(""), None);
    }

    #[test]
    fn parses_route_src() {
        let output = "1.1.1.1 via 172.18.0.1 dev eth0 src 172.18.0.5 uid 988\n    cache\n";
        assert_eq!(parse_route_src(output).as_deref(), Some("172.18.0.5"));
        assert_eq!(parse_route_src("unreachable"), None);
    }
}
