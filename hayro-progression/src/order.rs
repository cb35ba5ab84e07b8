//! Selecting a progression iterator based on the progression order of a tile.

use crate::error::{ProgressionError, Result, bail};
use crate::log::{ldebug, lwarn};
use crate::lrcp::LayerResolutionComponentPosition;
use crate::progression::{IteratorInput, PrecinctCount, ProgressionData, ProgressionIterator};
use crate::rlcp::ResolutionLayerComponentPosition;
use core::fmt;

/// Progression order (Table A.16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressionOrder {
    /// Layer-resolution level-component-position progression.
    LayerResolutionComponentPosition,
    /// Resolution level-layer-component-position progression.
    ResolutionLayerComponentPosition,
    /// Resolution level-position-component-layer progression.
    ResolutionPositionComponentLayer,
    /// Position-component-resolution level-layer progression.
    PositionComponentResolutionLayer,
    /// Component-position-resolution level-layer progression.
    ComponentPositionResolutionLayer,
}

impl ProgressionOrder {
    /// Decode the progression order byte of a COD or POC marker.
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::LayerResolutionComponentPosition),
            1 => Ok(Self::ResolutionLayerComponentPosition),
            2 => Ok(Self::ResolutionPositionComponentLayer),
            3 => Ok(Self::PositionComponentResolutionLayer),
            4 => Ok(Self::ComponentPositionResolutionLayer),
            _ => Err(ProgressionError::InvalidProgressionOrder(value)),
        }
    }

    /// Create the progression iterator for this order.
    ///
    /// Only the two orders that don't depend on precinct positions are
    /// supported, all others return an error.
    pub fn iterator<F: PrecinctCount>(
        self,
        input: IteratorInput,
        precinct_count: F,
    ) -> Result<Progression<F>> {
        ldebug!("creating {} progression iterator", self);

        let progression = match self {
            Self::LayerResolutionComponentPosition => {
                let iter = LayerResolutionComponentPosition::new(input, precinct_count);
                Progression::LayerResolutionComponentPosition(iter)
            }
            Self::ResolutionLayerComponentPosition => {
                let iter = ResolutionLayerComponentPosition::new(input, precinct_count);
                Progression::ResolutionLayerComponentPosition(iter)
            }
            Self::ResolutionPositionComponentLayer
            | Self::PositionComponentResolutionLayer
            | Self::ComponentPositionResolutionLayer => {
                lwarn!("{} progression is not supported", self);

                bail!(ProgressionError::UnsupportedProgressionOrder(self));
            }
        };

        Ok(progression)
    }
}

impl fmt::Display for ProgressionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LayerResolutionComponentPosition => "LRCP",
            Self::ResolutionLayerComponentPosition => "RLCP",
            Self::ResolutionPositionComponentLayer => "RPCL",
            Self::PositionComponentResolutionLayer => "PCRL",
            Self::ComponentPositionResolutionLayer => "CPRL",
        };

        f.write_str(name)
    }
}

/// A progression iterator for one of the supported progression orders.
#[derive(Debug, Clone)]
pub enum Progression<F> {
    /// Layer-resolution level-component-position progression.
    LayerResolutionComponentPosition(LayerResolutionComponentPosition<F>),
    /// Resolution level-layer-component-position progression.
    ResolutionLayerComponentPosition(ResolutionLayerComponentPosition<F>),
}

impl<F> Progression<F> {
    /// The progression order of the iterator.
    pub fn order(&self) -> ProgressionOrder {
        match self {
            Self::LayerResolutionComponentPosition(_) => {
                ProgressionOrder::LayerResolutionComponentPosition
            }
            Self::ResolutionLayerComponentPosition(_) => {
                ProgressionOrder::ResolutionLayerComponentPosition
            }
        }
    }
}

impl<F: PrecinctCount> ProgressionIterator for Progression<F> {
    fn has_next(&self) -> bool {
        match self {
            Self::LayerResolutionComponentPosition(i) => i.has_next(),
            Self::ResolutionLayerComponentPosition(i) => i.has_next(),
        }
    }

    fn next(&mut self) -> ProgressionData {
        match self {
            Self::LayerResolutionComponentPosition(i) => i.next(),
            Self::ResolutionLayerComponentPosition(i) => i.next(),
        }
    }
}
