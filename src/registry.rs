//! Per-element attachment registry.
//!
//! Maps an element handle to its [`Binding`]. Attaching an element that is
//! already attached is a no-op that returns the existing binding; detaching
//! drops the binding and with it the element's geometry.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;

use crate::binding::{Binding, InitError, InteractionHost, attach};
use crate::geometry::Geometry;
use crate::gesture::CropFrame;
use crate::options::CropOptions;

/// Bindings keyed by element handle `K`.
#[derive(Clone, Debug)]
pub struct Registry<K, D = (), R = ()> {
    bindings: BTreeMap<K, Binding<D, R>>,
}

impl<K, D, R> Default for Registry<K, D, R> {
    fn default() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }
}

impl<K: Ord, D, R> Registry<K, D, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `key` unless it is already attached.
    ///
    /// An existing binding is returned as is; `element` and `options` are
    /// ignored in that case. On failure nothing is registered.
    pub fn attach<C>(
        &mut self,
        key: K,
        host: &impl InteractionHost<C>,
        element: Geometry,
        options: CropOptions<C, D, R>,
    ) -> Result<&mut Binding<D, R>, InitError> {
        match self.bindings.entry(key) {
            Entry::Occupied(e) => {
                log::debug!("element already attached, keeping existing binding");
                Ok(e.into_mut())
            }
            Entry::Vacant(v) => Ok(v.insert(attach(host, element, options)?)),
        }
    }

    /// Remove the binding for `key`, returning it.
    pub fn detach(&mut self, key: &K) -> Option<Binding<D, R>> {
        let removed = self.bindings.remove(key);
        if removed.is_some() {
            log::debug!("element detached");
        }
        removed
    }

    pub fn is_attached(&self, key: &K) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&Binding<D, R>> {
        self.bindings.get(key)
    }

    /// The frame for `key`, for feeding drag and resize steps.
    pub fn frame_mut(&mut self, key: &K) -> Option<&mut CropFrame> {
        self.bindings.get_mut(key).map(|b| &mut b.frame)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate bindings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Binding<D, R>)> {
        self.bindings.iter()
    }
}
