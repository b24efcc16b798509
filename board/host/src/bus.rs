use std::net::SocketAddr;
use std::sync::Arc;

use relay::{PublishError, ScalarPublisher};
use serde::Serialize;
use tokio::net::UdpSocket;

/// One outbound datagram per published value
#[derive(Serialize)]
struct ScalarFrame<'a> {
    topic: &'a str,
    value: f64,
}

/// Publishes one scalar channel as JSON datagrams to a fixed peer address.
///
/// Uses the socket's non-blocking send path: a value either leaves
/// immediately or the publish fails. Nothing waits on delivery.
pub struct UdpScalarPublisher {
    channel: &'static str,
    socket: Arc<UdpSocket>,
    peer: SocketAddr,
}

impl UdpScalarPublisher {
    pub fn new(channel: &'static str, socket: Arc<UdpSocket>, peer: SocketAddr) -> Self {
        UdpScalarPublisher {
            channel,
            socket,
            peer,
        }
    }
}

impl ScalarPublisher for UdpScalarPublisher {
    fn channel(&self) -> &str {
        self.channel
    }

    fn publish(&mut self, value: f64) -> Result<(), PublishError> {
        let frame = ScalarFrame {
            topic: self.channel,
            value,
        };
        let payload = serde_json::to_vec(&frame)
            .map_err(|err| PublishError::new(self.channel, err.to_string()))?;
        self.socket
            .try_send_to(&payload, self.peer)
            .map_err(|err| PublishError::new(self.channel, err.to_string()))?;
        Ok(())
    }
}
