//! B.12.1.1 Layer-resolution level-component-position progression.
//!
//! "for each l = 0,..., L – 1
//!     for each r = 0,..., Nmax
//!         for each i = 0,..., Csiz – 1
//!             for each k = 0,..., numprecincts – 1
//!                 packet for component i, resolution level r, layer l, and precinct k."
//!
//! Note that `r` always goes up to `Nmax`, even for components with fewer
//! decomposition levels. Those (resolution, component) pairs are still
//! visited and simply report zero precincts.

use crate::log::ltrace;
use crate::progression::{
    IteratorInput, PrecinctCount, ProgressionData, ProgressionIterator, exhausted,
};

/// A progression iterator with layer-resolution level-component-position
/// order.
///
/// One packet is always fetched in advance, so [`has_next`] is accurate
/// right after construction.
///
/// [`has_next`]: ProgressionIterator::has_next
#[derive(Debug, Clone)]
pub struct LayerResolutionComponentPosition<F> {
    input: IteratorInput,
    precinct_count: F,
    // The loop counters, pointing at the packet after `pending`.
    layer: u16,
    resolution: u16,
    component: u16,
    precinct: u32,
    num_precincts: u32,
    pending: Option<ProgressionData>,
}

impl<F: PrecinctCount> LayerResolutionComponentPosition<F> {
    /// Create a new iterator over all packets of a tile.
    pub fn new(input: IteratorInput, precinct_count: F) -> Self {
        ltrace!(
            "LRCP progression: {} layers, {} resolution levels, {} components",
            input.num_layers,
            input.num_resolution_levels(),
            input.num_components
        );

        let num_precincts = if input.is_empty() {
            0
        } else {
            precinct_count.precinct_count(0, 0)
        };

        let mut iterator = Self {
            input,
            precinct_count,
            // An empty input starts out past the last layer.
            layer: if input.is_empty() { input.num_layers } else { 0 },
            resolution: 0,
            component: 0,
            precinct: 0,
            num_precincts,
            pending: None,
        };
        iterator.pending = iterator.resume();

        iterator
    }

    /// Run the loops until they produce the next packet, or until they are
    /// done.
    fn resume(&mut self) -> Option<ProgressionData> {
        loop {
            if self.layer == self.input.num_layers {
                return None;
            }

            if self.precinct < self.num_precincts {
                let data = ProgressionData {
                    layer_num: self.layer,
                    resolution: self.resolution,
                    component: self.component,
                    precinct: self.precinct,
                };

                self.precinct += 1;

                return Some(data);
            }

            self.precinct = 0;
            self.component += 1;

            if self.component == self.input.num_components {
                self.component = 0;
                self.resolution += 1;

                if self.resolution == self.input.num_resolution_levels() {
                    self.resolution = 0;
                    self.layer += 1;

                    if self.layer == self.input.num_layers {
                        return None;
                    }
                }
            }

            self.num_precincts = self
                .precinct_count
                .precinct_count(self.resolution, self.component);
        }
    }
}

impl<F: PrecinctCount> ProgressionIterator for LayerResolutionComponentPosition<F> {
    fn has_next(&self) -> bool {
        self.pending.is_some()
    }

    fn next(&mut self) -> ProgressionData {
        let Some(data) = self.pending else {
            exhausted("LRCP");
        };

        self.pending = self.resume();

        data
    }
}
