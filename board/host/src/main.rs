use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use relay::{EulerRelay, ImuMessage, RelayConfig};
use tokio::net::UdpSocket;

mod bus;
use bus::UdpScalarPublisher;

const DEFAULT_BIND: &str = "127.0.0.1:18830";
const DEFAULT_PEER: &str = "127.0.0.1:18831";

const ROLL_CHANNEL: &str = "raw/roll";
const PITCH_CHANNEL: &str = "raw/pitch";
const YAW_CHANNEL: &str = "raw/yaw";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let bind = std::env::var("IMU_RELAY_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let peer = std::env::var("IMU_RELAY_PEER").unwrap_or_else(|_| DEFAULT_PEER.to_string());
    let peer: SocketAddr = peer.parse().context("invalid IMU_RELAY_PEER address")?;

    let inbound = UdpSocket::bind(&bind)
        .await
        .with_context(|| format!("failed to bind inbound socket on {}", bind))?;
    let outbound = Arc::new(
        UdpSocket::bind("0.0.0.0:0")
            .await
            .context("failed to bind outbound socket")?,
    );

    let config = RelayConfig::from_env();
    log::info!(
        "imu-relay listening on {}, publishing to {} (degrees: {}, verbose: {})",
        bind,
        peer,
        config.degrees,
        config.verbose
    );

    let mut euler_relay = EulerRelay::new(
        config,
        UdpScalarPublisher::new(ROLL_CHANNEL, outbound.clone(), peer),
        UdpScalarPublisher::new(PITCH_CHANNEL, outbound.clone(), peer),
        UdpScalarPublisher::new(YAW_CHANNEL, outbound, peer),
    );

    // One message at a time: each datagram is decoded and relayed to
    // completion before the next is read.
    let mut buf = [0u8; 2048];
    loop {
        let (len, from) = inbound
            .recv_from(&mut buf)
            .await
            .context("inbound socket closed")?;

        let msg: ImuMessage = match serde_json::from_slice(&buf[..len]) {
            Ok(msg) => msg,
            Err(err) => {
                log::warn!("dropping undecodable datagram from {}: {}", from, err);
                continue;
            }
        };

        if let Err(err) = euler_relay.on_message(&msg) {
            log::error!("message from {} not relayed: {}", from, err);
        }
    }
}
