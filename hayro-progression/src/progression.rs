//! Progression iterators, defined in Section B.12.
//!
//! A progression iterator essentially yields tuples of
//! (`layer_num`, `resolution`, `component`, `precinct`) in a specific order that
//! determines in which order the packets of a tile appear in the codestream.

use core::iter::FusedIterator;

/// The address of a single packet within a tile.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgressionData {
    /// The quality layer of the packet.
    pub layer_num: u16,
    /// The resolution level of the packet, where 0 is the coarsest level.
    pub resolution: u16,
    /// The index of the image component.
    pub component: u16,
    /// The index of the precinct within the resolution level of the component.
    pub precinct: u32,
}

impl ProgressionData {
    /// Create a new packet address.
    pub fn new(layer_num: u16, resolution: u16, component: u16, precinct: u32) -> Self {
        Self {
            layer_num,
            resolution,
            component,
            precinct,
        }
    }
}

/// The structural parameters of a tile that span the space of packets.
///
/// All values are taken as-is. Checking them against the rest of the
/// codestream is the job of the header parser.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct IteratorInput {
    /// The number of quality layers (`L` in the standard).
    pub num_layers: u16,
    /// The maximum number of decomposition levels used by any component
    /// of the tile (`Nmax` in the standard).
    pub max_decomposition_levels: u8,
    /// The number of components (`Csiz` in the standard).
    pub num_components: u16,
}

impl IteratorInput {
    /// Create a new iterator input.
    pub fn new(num_layers: u16, max_decomposition_levels: u8, num_components: u16) -> Self {
        Self {
            num_layers,
            max_decomposition_levels,
            num_components,
        }
    }

    /// The number of resolution levels, which is one more than the number
    /// of decomposition levels.
    pub fn num_resolution_levels(&self) -> u16 {
        u16::from(self.max_decomposition_levels) + 1
    }

    /// Whether the input cannot contain any packet, regardless of the
    /// precinct counts.
    pub(crate) fn is_empty(&self) -> bool {
        self.num_layers == 0 || self.num_components == 0
    }
}

/// Yields the number of precincts of a resolution level in a component.
///
/// The iterators don't cache the result, so the same query may be issued
/// many times. A component with fewer resolution levels than the tile
/// maximum must report zero precincts for the levels it doesn't have.
pub trait PrecinctCount {
    /// Return the number of precincts for the given resolution level and
    /// component.
    fn precinct_count(&self, resolution: u16, component: u16) -> u32;
}

impl<F> PrecinctCount for F
where
    F: Fn(u16, u16) -> u32,
{
    fn precinct_count(&self, resolution: u16, component: u16) -> u32 {
        self(resolution, component)
    }
}

/// The protocol shared by all progression iterators.
pub trait ProgressionIterator {
    /// Whether there is at least one more packet left.
    fn has_next(&self) -> bool;

    /// Return the next packet and advance the iterator.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is exhausted. Reading more packets than a tile
    /// contains means the caller lost track of the codestream, and going on
    /// would assign all following packets to the wrong coordinates.
    fn next(&mut self) -> ProgressionData;

    /// Turn the progression iterator into a regular [`Iterator`] over the
    /// remaining packets.
    fn packets(self) -> Packets<Self>
    where
        Self: Sized,
    {
        Packets { inner: self }
    }
}

/// An [`Iterator`] over the packets of a progression iterator.
///
/// Created by [`ProgressionIterator::packets`].
#[derive(Debug, Clone)]
pub struct Packets<I> {
    inner: I,
}

impl<I: ProgressionIterator> Iterator for Packets<I> {
    type Item = ProgressionData;

    fn next(&mut self) -> Option<Self::Item> {
        if self.inner.has_next() {
            Some(self.inner.next())
        } else {
            None
        }
    }
}

impl<I: ProgressionIterator> FusedIterator for Packets<I> {}

/// Return the total number of packets of a tile.
///
/// The result is the same for all progression orders, as they only differ
/// in the order in which they visit the packets. The count is a `u128`, since
/// it can exceed `u64::MAX` for the largest inputs.
pub fn num_packets(input: IteratorInput, precinct_count: &impl PrecinctCount) -> u128 {
    let mut total = 0;

    for resolution in 0..input.num_resolution_levels() {
        for component in 0..input.num_components {
            total += u128::from(precinct_count.precinct_count(resolution, component));
        }
    }

    total * u128::from(input.num_layers)
}

pub(crate) fn exhausted(name: &str) -> ! {
    panic!("called `next` on an exhausted {name} progression iterator")
}
