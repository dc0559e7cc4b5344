//! Benchmark fixtures for the Conduit link-graph engine.
//!
//! Pre-built managers for benchmarking:
//!
//! - [`line`]: `n` positions along +x, fully linked
//! - [`plane`]: a `side` by `side` square in the xz plane, fully linked

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;

use conduit_core::{Direction, NetworkData, NetworkId, Pos};
use conduit_graph::{ManagerConfig, NetworkManager};

/// Node handle used by every fixture: the bare owning id.
pub type BenchManager<D> = NetworkManager<D, NetworkId>;

/// Result of building a fixture.
pub type FixtureResult<D> = Result<BenchManager<D>, Box<dyn Error>>;

fn manager<D: NetworkData>(capacity: usize) -> FixtureResult<D> {
    let config = ManagerConfig {
        capacity_hint: capacity,
        ..ManagerConfig::default()
    };
    Ok(NetworkManager::new(config)?)
}

/// One network of `n` positions from the origin along +x.
pub fn line<D: NetworkData>(n: i32, data: &D) -> FixtureResult<D> {
    let mut m = manager(n.max(0) as usize)?;
    for x in 0..n {
        m.attach(Some(NetworkId(0)), Pos::new(x, 0, 0), data)?;
    }
    for x in 0..n - 1 {
        m.link(Pos::new(x, 0, 0), Direction::East)?;
    }
    Ok(m)
}

/// One network covering a `side` by `side` square at y = 0, with every
/// adjacent pair linked.
pub fn plane<D: NetworkData>(side: i32, data: &D) -> FixtureResult<D> {
    let mut m = manager((side.max(0) as usize).pow(2))?;
    for x in 0..side {
        for z in 0..side {
            m.attach(Some(NetworkId(0)), Pos::new(x, 0, z), data)?;
        }
    }
    for x in 0..side {
        for z in 0..side {
            let p = Pos::new(x, 0, z);
            for (dir, other) in p.neighbours() {
                if m.is_attached(other) {
                    m.link(p, dir)?;
                }
            }
        }
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_single_networks() {
        let l = line(10, &0u8).unwrap();
        assert_eq!((l.network_count(), l.node_count()), (1, 10));
        let p = plane(5, &0u8).unwrap();
        assert_eq!((p.network_count(), p.node_count()), (1, 25));
        assert_eq!(p.links_of(Pos::new(2, 0, 2)).unwrap().len(), 4);
        assert_eq!(p.links_of(Pos::ORIGIN).unwrap().len(), 2);
        assert_eq!(p.check_consistency(), Ok(()));
    }
}
