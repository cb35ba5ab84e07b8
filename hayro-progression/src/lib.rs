/*!
Packet progression iterators for JPEG 2000 tiles.

The packets of a tile are addressed by a layer, a resolution level, a
component and a precinct. In which order these packets appear in the
codestream is decided by the progression order of the tile (Section B.12 of
the standard). This crate produces exactly that order, so that a decoder can
associate each packet it reads with its address. It never touches the
packet data itself.

Two progression orders are supported:
- Layer-resolution level-component-position ([`LayerResolutionComponentPosition`]).
- Resolution level-layer-component-position ([`ResolutionLayerComponentPosition`]).

Both take the structural parameters of the tile as an [`IteratorInput`] and a
[`PrecinctCount`] that returns the number of precincts for each
resolution level and component. They share the [`ProgressionIterator`]
protocol and yield the same set of packets, just in a different order.

# Example
```rust
use hayro_progression::{IteratorInput, ProgressionIterator, ProgressionOrder};

// Two layers, no decomposition levels and two components, with a single
// precinct everywhere.
let input = IteratorInput::new(2, 0, 2);
let precinct_count = |_: u16, _: u16| -> u32 { 1 };

let mut iter = ProgressionOrder::from_u8(1)
    .and_then(|order| order.iterator(input, precinct_count))
    .unwrap();

while iter.has_next() {
    let packet = iter.next();
    println!(
        "layer {}, resolution {}, component {}, precinct {}",
        packet.layer_num, packet.resolution, packet.component, packet.precinct
    );
}
```

# Cargo features
This crate has two features:
- `std` (enabled by default): Implements `std::error::Error` for the error type. Without it, the
  crate is `no_std` and doesn't need an allocator.
- `logging`: Emits log messages via the `log` crate.
*/

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]

mod error;
mod log;
mod lrcp;
mod order;
mod progression;
mod rlcp;

pub use error::{ProgressionError, Result};
pub use lrcp::LayerResolutionComponentPosition;
pub use order::{Progression, ProgressionOrder};
pub use progression::{
    IteratorInput, Packets, PrecinctCount, ProgressionData, ProgressionIterator, num_packets,
};
pub use rlcp::ResolutionLayerComponentPosition;
