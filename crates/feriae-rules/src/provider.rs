//! External collaborator interfaces and the caller-owned registry.
//!
//! The engine never reads storage or resolves locale bundles itself; these
//! traits are the seams where deserialization and i18n plug in.

use crate::calendar::HolidayCalendar;
use feriae_core::errors::Result;
use crate::hierarchy::HierarchyNode;
use std::collections::HashMap;
use std::sync::Arc;

/// Supplies fully populated configuration trees by calendar identifier.
///
/// Implementations own the storage format (XML, JSON, a database, …); the
/// engine only requires the resulting tree.
pub trait ConfigurationProvider {
    /// Load the configuration tree for `calendar_id`.
    fn load(&self, calendar_id: &str) -> Result<HierarchyNode>;
}

/// Resolves description keys to human-readable text.
///
/// Only used when rendering holidays for display; date computation never
/// consults it.
pub trait DescriptionResolver {
    /// Resolve `description_key` for `locale`, if a translation exists.
    fn resolve(&self, description_key: &str, locale: &str) -> Option<String>;
}

/// A caller-owned cache of composed calendars, keyed by identifier.
///
/// This replaces any process-global manager cache: the registry is an
/// explicit value with the caller's lifetime, and the calendars it hands out
/// are immutable and freely shareable across threads.
pub struct CalendarRegistry<P> {
    provider: P,
    cache: HashMap<String, Arc<HolidayCalendar>>,
}

impl<P: ConfigurationProvider> CalendarRegistry<P> {
    /// Create an empty registry over a configuration provider.
    pub fn new(provider: P) -> Self {
        CalendarRegistry {
            provider,
            cache: HashMap::new(),
        }
    }

    /// Return the calendar for `calendar_id`, loading and composing it on
    /// first use. Composition errors are not cached; a later call retries.
    pub fn get(&mut self, calendar_id: &str) -> Result<Arc<HolidayCalendar>> {
        if let Some(calendar) = self.cache.get(calendar_id) {
            return Ok(Arc::clone(calendar));
        }
        let root = self.provider.load(calendar_id)?;
        let calendar = Arc::new(HolidayCalendar::new(root)?);
        self.cache
            .insert(calendar_id.to_owned(), Arc::clone(&calendar));
        Ok(calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feriae_core::errors::Error;
    use std::cell::Cell;

    struct CountingProvider {
        loads: Cell<u32>,
    }

    impl ConfigurationProvider for CountingProvider {
        fn load(&self, calendar_id: &str) -> Result<HierarchyNode> {
            self.loads.set(self.loads.get() + 1);
            if calendar_id == "missing" {
                return Err(Error::Configuration("no such calendar".into()));
            }
            Ok(HierarchyNode::new(calendar_id))
        }
    }

    #[test]
    fn loads_once_per_identifier() {
        let mut registry = CalendarRegistry::new(CountingProvider { loads: Cell::new(0) });
        let a = registry.get("de").unwrap();
        let b = registry.get("de").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.provider.loads.get(), 1);

        registry.get("fr").unwrap();
        assert_eq!(registry.provider.loads.get(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let mut registry = CalendarRegistry::new(CountingProvider { loads: Cell::new(0) });
        assert!(registry.get("missing").is_err());
        assert!(registry.get("missing").is_err());
        assert_eq!(registry.provider.loads.get(), 2);
    }
}
