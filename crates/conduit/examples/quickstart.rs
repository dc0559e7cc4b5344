//! Build a small pipe layout, cut it, run a tick, and save and reload it.
//!
//! Run with `RUST_LOG=conduit_graph=debug` to see merges and splits.

use conduit::codec::{from_bytes, to_bytes};
use conduit::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// What a pipe network carries. Only equal fluids connect.
#[derive(Clone, Debug, PartialEq)]
struct Fluid {
    name: String,
}

impl PayloadCodec for Fluid {
    fn encode_payload(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.name.as_bytes());
    }

    fn decode_payload(bytes: &[u8]) -> Result<Self, conduit::types::PayloadError> {
        let name = std::str::from_utf8(bytes)
            .map_err(|e| conduit::types::PayloadError::new(e.to_string()))?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

/// An in-world pipe block.
#[derive(Debug)]
struct Pipe {
    network: Option<NetworkId>,
}

impl NetworkNode for Pipe {
    fn set_network(&mut self, network: NetworkId) {
        self.network = Some(network);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quickstart=info,conduit_graph=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ManagerConfig::with_type("conduit:fluid");
    let mut pipes: NetworkManager<Fluid, Pipe> = NetworkManager::new(config.clone())?;
    let water = Fluid {
        name: "water".into(),
    };

    // A 3x3 loop of water pipes around an empty centre.
    let ring = [
        Pos::new(0, 0, 0),
        Pos::new(1, 0, 0),
        Pos::new(2, 0, 0),
        Pos::new(2, 0, 1),
        Pos::new(2, 0, 2),
        Pos::new(1, 0, 2),
        Pos::new(0, 0, 2),
        Pos::new(0, 0, 1),
    ];
    for &pos in &ring {
        pipes.attach(Some(Pipe { network: None }), pos, &water)?;
    }
    for (i, &pos) in ring.iter().enumerate() {
        let next = ring[(i + 1) % ring.len()];
        if let Some(dir) = Direction::ALL.into_iter().find(|&d| pos.offset(d) == next) {
            pipes.link(pos, dir)?;
        }
    }
    info!(networks = pipes.network_count(), "loop built");

    // One cut keeps the loop whole; a second splits it.
    pipes.unlink(Pos::new(1, 0, 0), Direction::East)?;
    pipes.unlink(Pos::new(1, 0, 2), Direction::West)?;
    info!(networks = pipes.network_count(), "after two cuts");

    // One scheduler tick: process each network at most once.
    pipes.mark_all_unticked();
    for network in pipes.networks_mut() {
        if network.mark_ticked() {
            info!(
                network = %network.id(),
                members = network.len(),
                fluid = %network.data().name,
                "ticked"
            );
        }
    }

    // Save, reload, and reinstall the node instances.
    let bytes = to_bytes(&pipes)?;
    let mut reloaded: NetworkManager<Fluid, Pipe> = from_bytes(&bytes, config)?;
    for &pos in &ring {
        reloaded.node_loaded(Pipe { network: None }, pos)?;
    }
    info!(
        bytes = bytes.len(),
        networks = reloaded.network_count(),
        owner_of_origin = ?reloaded.node(Pos::ORIGIN).and_then(|p| p.network),
        "reloaded"
    );
    Ok(())
}
