//! Brand processors and their registry.
//!
//! The data-driven half of each brand (output schema, merge passes) lives in
//! its [`BrandProfile`](catalog_model::BrandProfile). A [`BrandProcessor`]
//! supplies the code half: how `ItemName` is parsed, which categorical
//! columns are derived, and any lookups that run after enrichment.
//!
//! Processors are resolved once, when a [`Cleaner`](crate::Cleaner) is
//! built, from a registry keyed by [`Brand`].

mod ch;
mod cl;
mod common;
mod fb;
mod generic;
mod ne;
mod pb;
mod sk;

use std::collections::HashMap;
use std::sync::OnceLock;

use catalog_model::Brand;
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::state::CleanState;

pub use ch::ColeHaanProcessor;
pub use cl::ColumbiaProcessor;
pub use fb::FableticsProcessor;
pub use generic::GenericProcessor;
pub use ne::NewEraProcessor;
pub use pb::PsychoBunnyProcessor;
pub use sk::SkechersProcessor;

/// Brand-specific stages of the clean pipeline.
///
/// # Implementing a Processor
///
/// 1. Implement this trait for a unit struct.
/// 2. Register it in [`default_registry`].
pub trait BrandProcessor: Send + Sync {
    fn brand(&self) -> Brand;

    fn description(&self) -> &'static str {
        "Brand processor"
    }

    /// Writes the columns read out of `ItemName`.
    ///
    /// This is the only stage that runs when a brand stops early for lack of
    /// reference data.
    fn parse(&self, df: &mut DataFrame, state: &mut CleanState) -> Result<()>;

    /// Derives categorical columns from parsed ones, before enrichment.
    fn derive(&self, _df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        Ok(())
    }

    /// Runs after enrichment, before projection.
    fn post_enrich(&self, _df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        Ok(())
    }
}

/// Registry of brand processors.
pub struct ProcessorRegistry {
    processors: HashMap<Brand, Box<dyn BrandProcessor>>,
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self {
            processors: HashMap::new(),
        }
    }

    /// Registers a processor for its brand, replacing any previous one.
    pub fn register(&mut self, processor: Box<dyn BrandProcessor>) {
        self.processors.insert(processor.brand(), processor);
    }

    pub fn get(&self, brand: Brand) -> Option<&dyn BrandProcessor> {
        self.processors.get(&brand).map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Registered brands in declaration order.
    pub fn brands(&self) -> Vec<Brand> {
        let mut brands: Vec<Brand> = self.processors.keys().copied().collect();
        brands.sort();
        brands
    }
}

static DEFAULT_REGISTRY: OnceLock<ProcessorRegistry> = OnceLock::new();

/// Registry with a processor for every supported brand, built on first use.
pub fn default_registry() -> &'static ProcessorRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

fn build_default_registry() -> ProcessorRegistry {
    let mut registry = ProcessorRegistry::new();
    registry.register(Box::new(ColeHaanProcessor));
    registry.register(Box::new(ColumbiaProcessor));
    registry.register(Box::new(SkechersProcessor));
    registry.register(Box::new(NewEraProcessor));
    registry.register(Box::new(FableticsProcessor));
    registry.register(Box::new(PsychoBunnyProcessor));
    registry.register(Box::new(GenericProcessor::new(Brand::Bi)));
    registry.register(Box::new(GenericProcessor::new(Brand::Ad)));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_covers_every_brand() {
        let registry = default_registry();
        assert_eq!(registry.len(), Brand::ALL.len());
        assert_eq!(registry.brands(), Brand::ALL.to_vec());
        for brand in Brand::ALL {
            let processor = registry.get(brand).expect("registered processor");
            assert_eq!(processor.brand(), brand);
        }
    }

    #[test]
    fn generic_brands_share_processor_type() {
        let registry = default_registry();
        assert_eq!(
            registry.get(Brand::Bi).map(|p| p.description()),
            registry.get(Brand::Ad).map(|p| p.description())
        );
    }

    #[test]
    fn empty_registry_has_nothing() {
        let registry = ProcessorRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get(Brand::Ch).is_none());
    }
}
