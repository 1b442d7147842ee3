//! Per-channel curve adjustment.
//!
//! [`PerChannelConfig`] holds one [`Curve`] per channel. [`PerChannelFilter`]
//! turns those curves into `u16` transfer tables on first use and caches
//! them until a curve changes or a buffer of another bit depth comes in.

use std::sync::Arc;

use parking_lot::RwLock;
use pigment_core::Channel;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::error::{CurveError, Result};

/// Storage depth a transfer table is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitDepth {
    U8,
    U16,
}

impl BitDepth {
    /// Number of entries in a transfer table for this depth.
    pub const fn table_len(self) -> usize {
        match self {
            Self::U8 => 256,
            Self::U16 => 65536,
        }
    }
}

/// Curves for every channel of a pixel, in channel order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerChannelConfig {
    pub curves: Vec<Curve>,
}

impl PerChannelConfig {
    /// Identity curves for `channels` channels.
    pub fn identity(channels: usize) -> Self {
        Self {
            curves: vec![Curve::identity(); channels],
        }
    }

    /// Whether this configuration can be applied to pixels with
    /// `channel_count` channels.
    pub fn is_compatible(&self, channel_count: usize) -> bool {
        self.curves.len() == channel_count
    }
}

#[derive(Debug)]
struct Transfers {
    depth: BitDepth,
    tables: Vec<Vec<u16>>,
}

/// Applies a [`PerChannelConfig`] to interleaved buffers.
#[derive(Debug)]
pub struct PerChannelFilter {
    config: PerChannelConfig,
    cache: RwLock<Option<Arc<Transfers>>>,
}

impl PerChannelFilter {
    pub fn new(config: PerChannelConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &PerChannelConfig {
        &self.config
    }

    pub fn is_compatible(&self, channel_count: usize) -> bool {
        self.config.is_compatible(channel_count)
    }

    /// Replace the curve for one channel. Cached tables are dropped.
    pub fn set_curve(&mut self, channel: usize, curve: Curve) -> Result<()> {
        let slot = self
            .config
            .curves
            .get_mut(channel)
            .ok_or(CurveError::NoSuchChannel(channel))?;
        *slot = curve;
        *self.cache.get_mut() = None;
        Ok(())
    }

    /// Whether tables for `depth` are already built.
    pub fn is_cached(&self, depth: BitDepth) -> bool {
        self.cache
            .read()
            .as_ref()
            .is_some_and(|t| t.depth == depth)
    }

    fn transfers(&self, depth: BitDepth) -> Arc<Transfers> {
        if let Some(t) = self.cache.read().as_ref() {
            if t.depth == depth {
                return Arc::clone(t);
            }
        }

        let mut cache = self.cache.write();
        // Another thread may have built it while we waited.
        if let Some(t) = cache.as_ref() {
            if t.depth == depth {
                return Arc::clone(t);
            }
        }

        let tables: Vec<Vec<u16>> = self
            .config
            .curves
            .iter()
            .map(|c| c.sample_u16(depth.table_len()))
            .collect();
        debug!(channels = tables.len(), ?depth, "Rebuilt transfer tables");
        let built = Arc::new(Transfers { depth, tables });
        *cache = Some(Arc::clone(&built));
        built
    }

    fn check<T>(&self, pixels: &[T], channels: usize) -> Result<()> {
        if !self.is_compatible(channels) {
            return Err(CurveError::ChannelMismatch {
                expected: self.config.curves.len(),
                got: channels,
            });
        }
        if channels == 0 || pixels.len() % channels != 0 {
            return Err(CurveError::Misaligned {
                len: pixels.len(),
                channels,
            });
        }
        Ok(())
    }

    /// Adjust interleaved 8-bit pixels with `channels` values each.
    pub fn apply_u8(&self, pixels: &mut [u8], channels: usize) -> Result<()> {
        self.check(pixels, channels)?;
        let transfers = self.transfers(BitDepth::U8);
        for px in pixels.chunks_exact_mut(channels) {
            for (v, table) in px.iter_mut().zip(&transfers.tables) {
                *v = u8::from_f64(table[*v as usize].to_f64());
            }
        }
        Ok(())
    }

    /// Adjust interleaved 16-bit pixels with `channels` values each.
    pub fn apply_u16(&self, pixels: &mut [u16], channels: usize) -> Result<()> {
        self.check(pixels, channels)?;
        let transfers = self.transfers(BitDepth::U16);
        for px in pixels.chunks_exact_mut(channels) {
            for (v, table) in px.iter_mut().zip(&transfers.tables) {
                *v = table[*v as usize];
            }
        }
        Ok(())
    }
}

impl Clone for PerChannelFilter {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            cache: RwLock::new(self.cache.read().clone()),
        }
    }
}
