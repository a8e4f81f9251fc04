use crate::catalog::Product;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("Cart rejected product {id:?}: {reason}")]
    Rejected { id: String, reason: String },
}

/// Receiver of confirmed purchases.
pub trait CartSink {
    fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Keyed quantity accumulator: adding a product already in the cart bumps
/// its quantity instead of adding a second line.
///
/// Every addition is also queued until [`Cart::take_added`] collects it, so
/// the storefront can be notified once the caller has released its state.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    added: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total_cents(&self) -> u64 {
        self.lines
            .iter()
            .map(|l| l.product.price_cents as u64 * l.quantity as u64)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Additions since the last call, oldest first.
    pub fn take_added(&mut self) -> Vec<Product> {
        std::mem::take(&mut self.added)
    }
}

impl CartSink for Cart {
    fn add_to_cart(&mut self, product: &Product) -> Result<(), CartError> {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product: *product,
                quantity: 1,
            }),
        }
        self.added.push(*product);
        log::info!(
            "[cart] {} x{} ({} items)",
            product.name,
            self.quantity_of(product.id),
            self.total_items()
        );
        Ok(())
    }
}
