// this_file: crates/pica/src/registry.rs
//! The engine's front door
//!
//! A [`FontRegistry`] owns the rasterizer backend, the graphics
//! backend handle, a pool of rasterizer contexts, and every typeface
//! loaded so far. Callers construct one registry per application (or
//! per renderer) instead of sharing process-wide state; two
//! registries never touch each other's caches.
//!
//! Rasterizer contexts are pooled because most native font libraries
//! are not thread-safe per handle. [`ContextPool::acquire`] blocks
//! until a context is free and hands out a guard that returns it on
//! drop, so font creation serializes on the pool rather than on a
//! global lock.

use std::collections::HashMap;
use std::mem::ManuallyDrop;
use std::ops::Deref;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};
use pica_core::Result;

use crate::backend::GraphicsBackend;
use crate::font::Font;
use crate::raster::{RasterContext, Rasterizer};
use crate::settings::Settings;
use crate::typeface::Typeface;

/// A fixed-size pool of rasterizer contexts.
pub(crate) struct ContextPool {
    available: Mutex<Vec<Box<dyn RasterContext>>>,
    signal: Condvar,
}

impl ContextPool {
    /// Create `capacity` contexts up front (at least one).
    fn new(rasterizer: &dyn Rasterizer, capacity: usize) -> Result<Self> {
        let capacity = capacity.max(1);
        let mut contexts = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            contexts.push(rasterizer.new_context()?);
        }
        log::debug!(
            "pooled {capacity} {} rasterizer context(s)",
            rasterizer.name()
        );
        Ok(Self {
            available: Mutex::new(contexts),
            signal: Condvar::new(),
        })
    }

    /// Take a context, blocking until one is free.
    fn acquire(&self) -> ContextGuard<'_> {
        let mut available = self.available.lock();
        loop {
            if let Some(context) = available.pop() {
                return ContextGuard {
                    pool: self,
                    context: ManuallyDrop::new(context),
                };
            }
            self.signal.wait(&mut available);
        }
    }
}

/// A pooled context on loan; returns to the pool on drop.
pub(crate) struct ContextGuard<'a> {
    pool: &'a ContextPool,
    context: ManuallyDrop<Box<dyn RasterContext>>,
}

impl Deref for ContextGuard<'_> {
    type Target = dyn RasterContext;

    fn deref(&self) -> &Self::Target {
        &**self.context
    }
}

impl Drop for ContextGuard<'_> {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the context is moved out exactly once, here, and
        // never touched again.
        let context = unsafe { ManuallyDrop::take(&mut self.context) };
        let mut available = self.pool.available.lock();
        available.push(context);
        self.pool.signal.notify_one();
    }
}

/// Owns every typeface and the backends they rasterize and render
/// through.
pub struct FontRegistry {
    backend: Arc<dyn GraphicsBackend>,
    settings: Settings,
    contexts: ContextPool,
    typefaces: HashMap<String, Typeface>,
}

impl FontRegistry {
    /// Build a registry over a rasterizer and a graphics backend.
    /// Rasterizer contexts are created eagerly, so a broken backend
    /// fails here rather than on first use.
    pub fn new(
        rasterizer: &dyn Rasterizer,
        backend: Arc<dyn GraphicsBackend>,
        settings: Settings,
    ) -> Result<Self> {
        let contexts = ContextPool::new(rasterizer, settings.context_pool_capacity)?;
        Ok(Self {
            backend,
            settings,
            contexts,
            typefaces: HashMap::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get or create the typeface named `name`. When the retention
    /// setting is on and `bytes` are supplied, the typeface keeps a
    /// copy for later sizes.
    pub fn typeface(&mut self, name: &str, bytes: Option<&[u8]>) -> &mut Typeface {
        let retain = self.settings.store_typeface_data;
        self.typefaces.entry(name.to_string()).or_insert_with(|| {
            log::debug!("registering typeface {name:?}");
            let data = if retain {
                bytes.map(<[u8]>::to_vec)
            } else {
                None
            };
            Typeface::new(name, data)
        })
    }

    /// Get or create the font for `name` at `size`, loading the face
    /// through a pooled rasterizer context when it does not exist yet.
    pub fn font(&mut self, name: &str, bytes: Option<&[u8]>, size: u32) -> Result<&mut Font> {
        let retain = self.settings.store_typeface_data;
        let typeface = self.typefaces.entry(name.to_string()).or_insert_with(|| {
            log::debug!("registering typeface {name:?}");
            let data = if retain {
                bytes.map(<[u8]>::to_vec)
            } else {
                None
            };
            Typeface::new(name, data)
        });
        let context = self.contexts.acquire();
        typeface.font(size, bytes, &*context, &self.backend, &self.settings)
    }

    /// Drop a typeface and every font created from it. Returns
    /// whether it existed.
    pub fn unload_typeface(&mut self, name: &str) -> bool {
        let unloaded = self.typefaces.remove(name).is_some();
        if unloaded {
            log::debug!("unloaded typeface {name:?}");
        }
        unloaded
    }

    /// Names of the registered typefaces.
    pub fn typeface_names(&self) -> impl Iterator<Item = &str> {
        self.typefaces.keys().map(String::as_str)
    }
}
