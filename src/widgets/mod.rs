// src/widgets/mod.rs
// Generator widgets: each owns its counters and allows one generation at a time

pub mod easter_egg;
pub mod fact;
pub mod food;
pub mod joke;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{FunError, Result};

pub use easter_egg::{ButtonTier, EasterEggWidget, EggReveal};
pub use fact::{FactReveal, FactStanding, FactWidget, KnowledgeLevel, ShareKind};
pub use food::FoodWidget;
pub use joke::{JokeReveal, JokeWidget};

/// Loading flag checked at call entry
#[derive(Debug, Default)]
pub struct InFlight {
    loading: AtomicBool,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the flag, or fail with `Busy` if a call is already running
    pub fn begin(&self, widget: &'static str) -> Result<InFlightGuard<'_>> {
        self.loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightGuard {
                loading: &self.loading,
            })
            .map_err(|_| FunError::Busy(widget))
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }
}

/// Clears the loading flag when dropped
pub struct InFlightGuard<'a> {
    loading: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.loading.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_rejects_second_caller() {
        let flag = InFlight::new();
        let guard = flag.begin("joke widget").unwrap();
        assert!(flag.is_loading());
        assert!(matches!(flag.begin("joke widget"), Err(FunError::Busy("joke widget"))));

        drop(guard);
        assert!(!flag.is_loading());
        assert!(flag.begin("joke widget").is_ok());
    }
}
