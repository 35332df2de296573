//! Local address discovery for the "open this on your phone" URL.

use crate::config::NetworkConfig;
use crate::error::{PanelError, Result};
use std::net::{IpAddr, UdpSocket};
use tracing::error;

/// Determine the LAN address of the outbound interface.
///
/// Connecting a UDP socket only selects a route; no packet is sent.
pub fn local_ip() -> Result<IpAddr> {
    probe_local_ip(NetworkConfig::ADDRESS_PROBE).map_err(|e| {
        error!("Error getting local IP: {}", e);
        PanelError::Other("Could not determine local IP address".to_string())
    })
}

fn probe_local_ip(probe: &str) -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(probe)?;
    Ok(socket.local_addr()?.ip())
}

/// URL a LAN client should open.
pub fn panel_url(ip: IpAddr, port: u16) -> String {
    match ip {
        IpAddr::V4(v4) => format!("http://{}:{}", v4, port),
        IpAddr::V6(v6) => format!("http://[{}]:{}", v6, port),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_panel_url() {
        let ip = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20));
        assert_eq!(panel_url(ip, 8765), "http://192.168.1.20:8765");

        let ip = IpAddr::V6(Ipv6Addr::LOCALHOST);
        assert_eq!(panel_url(ip, 8765), "http://[::1]:8765");
    }

    #[test]
    fn test_probe_loopback() {
        // Routing to loopback always works, even offline.
        let ip = probe_local_ip("127.0.0.1:9").unwrap();
        assert!(ip.is_loopback());
    }

    #[test]
    fn test_failed_probe_maps_to_error() {
        assert!(probe_local_ip("not an address").is_err());
    }
}
