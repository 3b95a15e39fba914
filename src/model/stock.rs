// src/model/stock.rs

/// State of the single stocking point being simulated.
///
/// On-hand inventory is signed: a negative value is unmet demand (a stockout).
#[derive(Debug, Clone)]
pub struct StockPoint {
    pub on_hand: f64,

    // Tracking for the day's record
    pub last_demand: f64,
    pub last_order_placed: f64,
    pub last_arrival: f64,
}

impl StockPoint {
    pub fn new(initial_on_hand: f64) -> Self {
        Self {
            on_hand: initial_on_hand,
            last_demand: 0.0,
            last_order_placed: 0.0,
            last_arrival: 0.0,
        }
    }

    /// Step 1: record the order placed with the supplier today.
    pub fn place_order(&mut self, quantity: f64) {
        self.last_order_placed = quantity;
    }

    /// Step 2: goods arriving from the supplier go onto the shelf.
    pub fn receive_shipment(&mut self, quantity: f64) {
        self.on_hand += quantity;
        self.last_arrival = quantity;
    }

    /// Step 3: the day's demand is taken off the shelf, even past zero.
    pub fn consume(&mut self, demand: f64) {
        self.on_hand -= demand;
        self.last_demand = demand;
    }

    pub fn is_stocked_out(&self) -> bool {
        self.on_hand < 0.0
    }
}
