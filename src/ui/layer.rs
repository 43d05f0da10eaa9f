//! Draw-order layers for floating UI
//!
//! Modal pieces (dimming overlays, floating panels) don't draw themselves in
//! a fixed slot. They ask a `LayerHost` to raise them to the top or remove
//! them, and the host draws whatever it holds bottom to top.

/// Identifier for a floating layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub &'static str);

/// Add-to-top / remove capability for floating layers
pub trait LayerHost {
    /// Put `layer` above everything else, adding it if missing
    fn raise(&mut self, layer: LayerId);

    /// Take `layer` out of the draw order. No-op when absent.
    fn remove(&mut self, layer: LayerId);

    fn contains(&self, layer: LayerId) -> bool;
}

/// Ordered stack of layers (first = bottom)
#[derive(Debug, Clone, Default)]
pub struct DrawOrder {
    stack: Vec<LayerId>,
}

impl DrawOrder {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Layers from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.stack.iter().copied()
    }

    pub fn position(&self, layer: LayerId) -> Option<usize> {
        self.stack.iter().position(|l| *l == layer)
    }

    /// True when both are present and `upper` draws after `lower`
    pub fn is_above(&self, upper: LayerId, lower: LayerId) -> bool {
        match (self.position(upper), self.position(lower)) {
            (Some(u), Some(l)) => u > l,
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl LayerHost for DrawOrder {
    fn raise(&mut self, layer: LayerId) {
        self.stack.retain(|l| *l != layer);
        self.stack.push(layer);
    }

    fn remove(&mut self, layer: LayerId) {
        self.stack.retain(|l| *l != layer);
    }

    fn contains(&self, layer: LayerId) -> bool {
        self.stack.contains(&layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: LayerId = LayerId("a");
    const B: LayerId = LayerId("b");

    #[test]
    fn test_raise_moves_to_top_without_duplicates() {
        let mut order = DrawOrder::new();
        order.raise(A);
        order.raise(B);
        assert!(order.is_above(B, A));

        order.raise(A);
        assert!(order.is_above(A, B));
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut order = DrawOrder::new();
        order.raise(A);
        order.remove(A);
        order.remove(A);
        assert!(order.is_empty());
        assert!(!order.contains(A));
    }

    #[test]
    fn test_iterates_bottom_to_top() {
        let mut order = DrawOrder::new();
        order.raise(A);
        order.raise(B);
        let drawn: Vec<_> = order.iter().collect();
        assert_eq!(drawn, vec![A, B]);
    }
}
