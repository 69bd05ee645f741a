use std::net::Ipv4Addr;

use tokio::net::UdpSocket;

use crate::error::Result;
use crate::mac::MacAddr;
use crate::packet::MagicPacket;

pub const DEFAULT_BROADCAST_ADDR: &str = "255.255.255.255";
pub const DEFAULT_WOL_PORT: u16 = 9;

/// Sends one magic packet for `mac` to `ip:port`.
///
/// Wake-on-LAN is fire-and-forget: a single datagram, no retries, no
/// acknowledgment. The returned byte count only says the packet left this
/// host, never that the target woke. The socket lives for exactly one send.
pub async fn send(mac: &str, ip: &str, port: u16) -> Result<usize> {
    let addr: MacAddr = mac.parse()?;
    let packet = MagicPacket::new(addr);

    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    socket.set_broadcast(true)?;

    log::debug!("sending magic packet for {} to {}:{}", addr, ip, port);
    let sent = socket.send_to(packet.as_bytes(), (ip, port)).await?;

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WolError;
    use crate::packet::{is_magic_packet, MAGIC_PACKET_LEN};

    #[tokio::test]
    async fn sends_one_well_formed_datagram() {
        let receiver = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = receiver.local_addr().unwrap().port();

        let sent = send("AA-BB-CC-DD-EE-FF", "127.0.0.1", port).await.unwrap();
        assert_eq!(sent, MAGIC_PACKET_LEN);

        let mut buf = [0u8; 256];
        let (len, _) = receiver.recv_from(&mut buf).await.unwrap();
        assert_eq!(len, MAGIC_PACKET_LEN);
        assert!(is_magic_packet(&buf[..len]));
        assert_eq!(&buf[6..12], &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[tokio::test]
    async fn invalid_address_fails_before_any_socket_work() {
        let err = send("00:11:22:33:44", "127.0.0.1", 9).await.unwrap_err();
        assert!(matches!(err, WolError::InvalidLength(10)));

        let err = send("GG:11:22:33:44:55", "127.0.0.1", 9).await.unwrap_err();
        assert!(matches!(err, WolError::InvalidFormat('G')));
    }

    #[tokio::test]
    async fn unresolvable_destination_is_a_transmission_error() {
        let err = send("00:11:22:33:44:55", "not an address", 9)
            .await
            .unwrap_err();
        assert!(matches!(err, WolError::Transmission(_)));
    }
}
