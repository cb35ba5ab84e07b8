//! B.12.1.2 Resolution level-layer-component-position progression.
//!
//! "for each r = 0,..., Nmax
//!     for each l = 0,..., L – 1
//!         for each i = 0,..., Csiz – 1
//!             for each k = 0,..., numprecincts – 1
//!                 packet for component i, resolution level r, layer l, and precinct k."
//!
//! Since the number of precincts depends on `r` and `i` but the layer loop
//! sits in between them, this one is implemented as an odometer instead of
//! a set of resumable loops: the precinct bound is recomputed whenever the
//! component or the layer wraps.

use crate::log::ltrace;
use crate::progression::{
    IteratorInput, PrecinctCount, ProgressionData, ProgressionIterator, exhausted,
};

/// A progression iterator with resolution level-layer-component-position
/// order.
#[derive(Debug, Clone)]
pub struct ResolutionLayerComponentPosition<F> {
    precinct_count: F,
    next: ProgressionData,
    end: ProgressionData,
}

impl<F: PrecinctCount> ResolutionLayerComponentPosition<F> {
    /// Create a new iterator over all packets of a tile.
    pub fn new(input: IteratorInput, precinct_count: F) -> Self {
        ltrace!(
            "RLCP progression: {} resolution levels, {} layers, {} components",
            input.num_resolution_levels(),
            input.num_layers,
            input.num_components
        );

        let mut end = ProgressionData {
            layer_num: input.num_layers,
            resolution: input.num_resolution_levels(),
            component: input.num_components,
            precinct: 0,
        };

        let next = if input.is_empty() {
            Self::terminal(&end)
        } else {
            end.precinct = precinct_count.precinct_count(0, 0);
            ProgressionData::default()
        };

        let mut iterator = Self {
            precinct_count,
            next,
            end,
        };
        iterator.skip_empty();

        iterator
    }

    /// The position the odometer ends up at once all packets have been
    /// yielded.
    fn terminal(end: &ProgressionData) -> ProgressionData {
        ProgressionData {
            layer_num: 0,
            resolution: end.resolution,
            component: 0,
            precinct: 0,
        }
    }

    /// Move the odometer forward until it points at an existing precinct
    /// or at the terminal position.
    fn skip_empty(&mut self) {
        while self.has_next() && self.next.precinct >= self.end.precinct {
            self.next.precinct = 0;
            self.next.component += 1;

            if self.next.component == self.end.component {
                self.next.component = 0;
                self.next.layer_num += 1;

                if self.next.layer_num == self.end.layer_num {
                    self.next.layer_num = 0;
                    self.next.resolution += 1;
                }
            }

            if self.has_next() {
                self.end.precinct = self
                    .precinct_count
                    .precinct_count(self.next.resolution, self.next.component);
            }
        }

        // The resolution only advances after a full wrap of the other
        // counters, so the terminal position can't be hit early.
        debug_assert!(self.next.resolution < self.end.resolution || !self.has_next());
    }
}

impl<F: PrecinctCount> ProgressionIterator for ResolutionLayerComponentPosition<F> {
    fn has_next(&self) -> bool {
        self.next != Self::terminal(&self.end)
    }

    fn next(&mut self) -> ProgressionData {
        if !self.has_next() {
            exhausted("RLCP");
        }

        let data = self.next;

        self.next.precinct += 1;
        self.skip_empty();

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    fn constant(num_precincts: u32) -> impl Fn(u16, u16) -> u32 {
        move |_, _| num_precincts
    }

    fn collect(
        input: IteratorInput,
        count: impl Fn(u16, u16) -> u32,
    ) -> Vec<(u16, u16, u16, u32)> {
        ResolutionLayerComponentPosition::new(input, count)
            .packets()
            .map(|d| (d.layer_num, d.resolution, d.component, d.precinct))
            .collect()
    }

    #[test]
    fn component_before_layer() {
        let packets = collect(IteratorInput::new(2, 0, 2), |_, _| 1);

        assert_eq!(
            packets,
            vec![(0, 0, 0, 0), (0, 0, 1, 0), (1, 0, 0, 0), (1, 0, 1, 0)]
        );
    }

    #[test]
    fn has_next_reflects_first_position() {
        let input = IteratorInput::new(1, 0, 1);

        assert!(ResolutionLayerComponentPosition::new(input, constant(1)).has_next());
        assert!(!ResolutionLayerComponentPosition::new(input, constant(0)).has_next());
    }

    #[test]
    fn has_next_is_idempotent() {
        let mut iter =
            ResolutionLayerComponentPosition::new(IteratorInput::new(1, 0, 1), constant(1));

        assert!(iter.has_next());
        assert!(iter.has_next());
        assert_eq!(iter.next(), ProgressionData::new(0, 0, 0, 0));
        assert!(!iter.has_next());
        assert!(!iter.has_next());
    }

    #[test]
    fn resolution_is_outermost() {
        let packets = collect(IteratorInput::new(2, 1, 1), |r, _| u32::from(r) + 1);

        assert_eq!(
            packets,
            vec![
                (0, 0, 0, 0),
                (1, 0, 0, 0),
                (0, 1, 0, 0),
                (0, 1, 0, 1),
                (1, 1, 0, 0),
                (1, 1, 0, 1),
            ]
        );
    }

    #[test]
    fn skips_empty_first_position() {
        let packets = collect(IteratorInput::new(1, 0, 2), |_, c| u32::from(c));

        assert_eq!(packets, vec![(0, 0, 1, 0)]);
    }

    #[test]
    fn skips_empty_positions_in_between() {
        // Component 1 has no precincts at resolution level 1.
        let packets = collect(IteratorInput::new(1, 1, 3), |r, c| {
            if r == 1 && c == 1 { 0 } else { 1 }
        });

        assert_eq!(
            packets,
            vec![
                (0, 0, 0, 0),
                (0, 0, 1, 0),
                (0, 0, 2, 0),
                (0, 1, 0, 0),
                (0, 1, 2, 0),
            ]
        );
    }

    #[test]
    fn no_precincts_at_all() {
        let iter = ResolutionLayerComponentPosition::new(IteratorInput::new(3, 2, 3), constant(0));
        assert!(!iter.has_next());
    }

    #[test]
    fn empty_input_never_queries() {
        let count = |_: u16, _: u16| -> u32 { panic!("unexpected precinct query") };

        let iter = ResolutionLayerComponentPosition::new(IteratorInput::new(0, 3, 3), count);
        assert!(!iter.has_next());

        let iter = ResolutionLayerComponentPosition::new(IteratorInput::new(3, 3, 0), count);
        assert!(!iter.has_next());
    }

    #[test]
    fn never_queries_past_the_last_resolution() {
        let input = IteratorInput::new(2, 1, 2);
        let highest = Cell::new(0);
        let count = |r: u16, _: u16| -> u32 {
            highest.set(highest.get().max(r));
            1
        };

        let packets = ResolutionLayerComponentPosition::new(input, count)
            .packets()
            .count();

        assert_eq!(packets, 2 * 2 * 2);
        assert_eq!(highest.get(), 1);
    }

    #[test]
    fn terminal_position_is_not_reached_early() {
        // With a single layer and component, every precinct wrap also wraps
        // the layer and component counters, which is the closest the
        // odometer gets to the terminal position before the real end.
        let input = IteratorInput::new(1, 3, 1);
        let mut iter = ResolutionLayerComponentPosition::new(input, constant(1));

        for resolution in 0..4 {
            assert!(iter.has_next());
            assert_eq!(iter.next(), ProgressionData::new(0, resolution, 0, 0));
        }

        assert!(!iter.has_next());
    }

    #[test]
    #[should_panic(expected = "exhausted RLCP")]
    fn next_after_end_panics() {
        let mut iter =
            ResolutionLayerComponentPosition::new(IteratorInput::new(1, 0, 1), constant(2));
        iter.next();
        iter.next();
        iter.next();
    }
}
