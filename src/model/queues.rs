// src/model/queues.rs

use std::collections::VecDeque;

/// Pipeline of orders in transit over a fixed horizon.
///
/// Pre-filled with `min(delay, horizon)` empty slots, so an item pushed on
/// day `d` is popped on day `d + delay`. With `delay == 0` an item comes back
/// out the same day it went in. Orders that would land on or after `horizon`
/// are never enqueued, which keeps the buffer no longer than the horizon.
#[derive(Debug, Clone)]
pub struct TimeDelayQueue {
    buffer: VecDeque<f64>,
    delay_length: usize,
    horizon: usize,
}

impl TimeDelayQueue {
    pub fn new(delay: usize, horizon: usize) -> Self {
        let slots = delay.min(horizon);
        let mut buffer = VecDeque::with_capacity(slots.saturating_add(1));
        for _ in 0..slots {
            buffer.push_back(0.0);
        }

        Self {
            buffer,
            delay_length: delay,
            horizon,
        }
    }

    /// Day an order placed on `placed_on` lands, or `None` if that is past the horizon.
    pub fn arrival_day(&self, placed_on: usize) -> Option<usize> {
        placed_on
            .checked_add(self.delay_length)
            .filter(|&day| day < self.horizon)
    }

    /// Places the order made on `placed_on` into the pipeline and returns its
    /// arrival day. Call once per day, before [`pop_arrival`](Self::pop_arrival).
    pub fn push_departure(&mut self, placed_on: usize, quantity: f64) -> Option<usize> {
        let arrives_on = self.arrival_day(placed_on);
        // An empty slot keeps later orders aligned with their arrival day.
        self.buffer
            .push_back(if arrives_on.is_some() { quantity } else { 0.0 });
        arrives_on
    }

    /// Takes out whatever was ordered `delay` days ago.
    pub fn pop_arrival(&mut self) -> f64 {
        self.buffer.pop_front().unwrap_or(0.0)
    }

    /// Total quantity ordered and still due to arrive within the horizon.
    pub fn in_transit(&self) -> f64 {
        self.buffer.iter().sum()
    }

    pub fn delay(&self) -> usize {
        self.delay_length
    }

    pub fn slots(&self) -> usize {
        self.buffer.len()
    }
}
