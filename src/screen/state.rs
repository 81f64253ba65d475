use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::app::error::Result;

use super::category::{classify, DeviceCategory};
use super::estimate::{snap_diagonal, PhysicalEstimate};
use super::measure::{DpiEstimate, MeasurementProvider, RawMeasurement};
use super::override_store::OverrideStore;

/// Published snapshot of the detection pipeline. Recomputed as one
/// unit; subscribers never see an estimate paired with a stale
/// override or a half-updated diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenState {
    pub raw: RawMeasurement,
    pub estimate: PhysicalEstimate,
    pub adjusted_diagonal: f64,
    pub effective_category: DeviceCategory,
}

impl ScreenState {
    /// The category detection alone would pick, ignoring any
    /// override. `Medium` until a real measurement has landed.
    pub fn computed_category(&self) -> DeviceCategory {
        if self.raw.is_empty() {
            DeviceCategory::default()
        } else {
            classify(self.adjusted_diagonal)
        }
    }
}

impl Default for ScreenState {
    /// State before the first measurement: zeroed metrics, `Medium`.
    fn default() -> Self {
        Self {
            raw: RawMeasurement::default(),
            estimate: PhysicalEstimate::default(),
            adjusted_diagonal: 0.0,
            effective_category: DeviceCategory::Medium,
        }
    }
}

/// Pure reducer: one full pipeline pass over the given inputs.
///
/// Runs strictly in measurement -> estimation -> snapping ->
/// classification -> override-resolution order. Replaying identical
/// inputs yields an identical state. An empty measurement keeps the
/// computed category at the `Medium` default instead of classifying a
/// zero diagonal.
pub fn reduce(
    raw: RawMeasurement,
    dpi: DpiEstimate,
    overridden: Option<DeviceCategory>,
) -> ScreenState {
    let estimate = PhysicalEstimate::from_measurement(raw, dpi);
    let mut state = ScreenState {
        raw,
        estimate,
        adjusted_diagonal: snap_diagonal(estimate.diagonal),
        effective_category: DeviceCategory::default(),
    };
    state.effective_category = overridden.unwrap_or_else(|| state.computed_category());
    state
}

type Subscriber = Box<dyn FnMut(&ScreenState)>;

/// Reactive holder for the current [`ScreenState`].
///
/// Attaching performs an initial measure/classify cycle. `refresh`
/// re-runs the full cycle (resize), `resolve_override` re-resolves
/// the category against the store without re-measuring (override
/// change). Everything is synchronous and single-threaded; the holder
/// and its subscribers live on the UI thread.
pub struct ScreenStateHolder {
    provider: Box<dyn MeasurementProvider>,
    store: Rc<dyn OverrideStore>,
    current: RefCell<ScreenState>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl ScreenStateHolder {
    pub fn new(provider: Box<dyn MeasurementProvider>, store: Rc<dyn OverrideStore>) -> Self {
        let initial = reduce(provider.measure(), provider.probe_dpi(), store.get());
        debug!(
            diagonal = initial.adjusted_diagonal,
            category = %initial.effective_category,
            "screen detection attached"
        );
        Self {
            provider,
            store,
            current: RefCell::new(initial),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// The latest published snapshot.
    pub fn current(&self) -> ScreenState {
        *self.current.borrow()
    }

    /// Register a callback invoked with every newly published
    /// snapshot. Dropped with the holder on teardown.
    pub fn subscribe(&self, subscriber: impl FnMut(&ScreenState) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    /// Full re-measure cycle, for resize events.
    pub fn refresh(&self) {
        let state = reduce(
            self.provider.measure(),
            self.provider.probe_dpi(),
            self.store.get(),
        );
        self.publish(state);
    }

    /// Re-resolve the effective category against the store without
    /// re-measuring, for override-change events. Publishes only when
    /// the effective category actually moved.
    pub fn resolve_override(&self) {
        let previous = self.current();
        let overridden = self.store.get();
        let effective = overridden.unwrap_or_else(|| previous.computed_category());
        if effective != previous.effective_category {
            self.publish(ScreenState {
                effective_category: effective,
                ..previous
            });
        }
    }

    /// Persist a new override (or clear it with `None`) and apply it
    /// locally right away. Other views pick the change up from the
    /// store.
    pub fn set_override(&self, category: Option<DeviceCategory>) -> Result<()> {
        self.store.set(category)?;
        self.resolve_override();
        Ok(())
    }

    /// Currently persisted override, if any.
    pub fn overridden(&self) -> Option<DeviceCategory> {
        self.store.get()
    }

    fn publish(&self, state: ScreenState) {
        *self.current.borrow_mut() = state;
        debug!(
            width = state.raw.pixel_width,
            height = state.raw.pixel_height,
            diagonal = state.adjusted_diagonal,
            category = %state.effective_category,
            "screen state published"
        );
        for subscriber in self.subscribers.borrow_mut().iter_mut() {
            subscriber(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::measure::FixedMeasurementProvider;
    use crate::screen::override_store::MemoryOverrideStore;

    fn holder_with(
        provider: FixedMeasurementProvider,
        store: MemoryOverrideStore,
    ) -> ScreenStateHolder {
        ScreenStateHolder::new(Box::new(provider), Rc::new(store))
    }

    #[test]
    fn test_initial_cycle_full_hd_monitor() {
        // 1920x1080 @1.0, 96 DPI: 22.94" diagonal, medium, no snap.
        let holder = holder_with(
            FixedMeasurementProvider::new(1920, 1080, 1.0, 96.0),
            MemoryOverrideStore::new(),
        );
        let state = holder.current();
        assert_eq!(state.estimate.scaled_dpi, 96.0);
        assert!((state.adjusted_diagonal - 22.94).abs() < 0.01);
        assert_eq!(state.effective_category, DeviceCategory::Medium);
    }

    #[test]
    fn test_initial_cycle_scaled_laptop() {
        // 1920x1080 @1.25: 18.36" raw, snapped to the nearest
        // reference panel (17.3"), still medium.
        let holder = holder_with(
            FixedMeasurementProvider::new(1920, 1080, 1.25, 96.0),
            MemoryOverrideStore::new(),
        );
        let state = holder.current();
        assert_eq!(state.estimate.scaled_dpi, 120.0);
        assert_eq!(state.adjusted_diagonal, 17.3);
        assert_eq!(state.effective_category, DeviceCategory::Medium);
    }

    #[test]
    fn test_empty_measurement_defaults_to_medium() {
        let holder = holder_with(
            FixedMeasurementProvider::new(0, 0, 1.0, 96.0),
            MemoryOverrideStore::new(),
        );
        let state = holder.current();
        assert_eq!(state.adjusted_diagonal, 0.0);
        assert_eq!(state.effective_category, DeviceCategory::Medium);
    }

    #[test]
    fn test_override_precedence_and_clear() {
        let holder = holder_with(
            // 3840x2160 @1.0, 96 DPI: ~45.9" diagonal, extra-large.
            FixedMeasurementProvider::new(3840, 2160, 1.0, 96.0),
            MemoryOverrideStore::new(),
        );
        assert_eq!(holder.current().effective_category, DeviceCategory::ExtraLarge);

        holder.set_override(Some(DeviceCategory::Large)).unwrap();
        assert_eq!(holder.current().effective_category, DeviceCategory::Large);

        holder.set_override(None).unwrap();
        assert_eq!(holder.current().effective_category, DeviceCategory::ExtraLarge);
    }

    #[test]
    fn test_reduce_is_deterministic() {
        let raw = RawMeasurement::new(2560, 1440, 1.5);
        let dpi = DpiEstimate::sanitized(109.0);
        let a = reduce(raw, dpi, Some(DeviceCategory::Small));
        let b = reduce(raw, dpi, Some(DeviceCategory::Small));
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_override_does_not_remeasure() {
        let provider = FixedMeasurementProvider::new(1920, 1080, 1.0, 96.0);
        let probes = provider.call_counter();
        let store = MemoryOverrideStore::new();
        let holder = ScreenStateHolder::new(Box::new(provider), Rc::new(store.clone()));
        assert_eq!(probes.get(), 1);

        store.set(Some(DeviceCategory::Small)).unwrap();
        holder.resolve_override();
        assert_eq!(holder.current().effective_category, DeviceCategory::Small);

        // Only the attach cycle probed the platform; the measurement
        // in the published state is still the attach-time one.
        assert_eq!(probes.get(), 1);
        assert_eq!(holder.current().raw.pixel_width, 1920);

        holder.refresh();
        assert_eq!(probes.get(), 2);
    }

    #[test]
    fn test_cross_view_propagation() {
        // Two holders on clones of one store model two open views of
        // the same display. A write in one converges in the other
        // without re-attaching.
        let scope = MemoryOverrideStore::new();
        let view_a = holder_with(
            FixedMeasurementProvider::new(1920, 1080, 1.0, 96.0),
            scope.clone(),
        );
        let view_b = holder_with(
            FixedMeasurementProvider::new(1920, 1080, 1.0, 96.0),
            scope.clone(),
        );

        view_a.set_override(Some(DeviceCategory::ExtraLarge)).unwrap();
        assert_eq!(view_b.current().effective_category, DeviceCategory::Medium);
        view_b.resolve_override();
        assert_eq!(
            view_b.current().effective_category,
            DeviceCategory::ExtraLarge
        );
    }

    #[test]
    fn test_subscribers_observe_published_snapshots() {
        let holder = holder_with(
            FixedMeasurementProvider::new(1920, 1080, 1.0, 96.0),
            MemoryOverrideStore::new(),
        );
        let seen: Rc<RefCell<Vec<DeviceCategory>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        holder.subscribe(move |state| sink.borrow_mut().push(state.effective_category));

        holder.set_override(Some(DeviceCategory::Small)).unwrap();
        holder.refresh();
        assert_eq!(
            *seen.borrow(),
            vec![DeviceCategory::Small, DeviceCategory::Small]
        );
    }

    #[test]
    fn test_resolve_override_skips_noop_publish() {
        let holder = holder_with(
            FixedMeasurementProvider::new(1920, 1080, 1.0, 96.0),
            MemoryOverrideStore::new(),
        );
        let count = Rc::new(RefCell::new(0u32));
        let sink = count.clone();
        holder.subscribe(move |_| *sink.borrow_mut() += 1);

        // Nothing changed in the store, so nothing is republished.
        holder.resolve_override();
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_overridden_visible_when_publish_skipped() {
        // Another view pins the category detection already computes:
        // the snapshot is unchanged and no publish fires, but the
        // override must still be readable so UI surfaces polling the
        // holder can show it.
        let scope = MemoryOverrideStore::new();
        let holder = holder_with(
            FixedMeasurementProvider::new(1920, 1080, 1.0, 96.0),
            scope.clone(),
        );
        holder.refresh();
        assert_eq!(holder.current().effective_category, DeviceCategory::Medium);

        let count = Rc::new(RefCell::new(0u32));
        let sink = count.clone();
        holder.subscribe(move |_| *sink.borrow_mut() += 1);

        scope.set(Some(DeviceCategory::Medium)).unwrap();
        holder.resolve_override();
        assert_eq!(*count.borrow(), 0);
        assert_eq!(holder.overridden(), Some(DeviceCategory::Medium));
    }

    #[test]
    fn test_override_applies_even_without_measurement() {
        let scope = MemoryOverrideStore::new();
        scope.set(Some(DeviceCategory::Large)).unwrap();
        let holder = holder_with(FixedMeasurementProvider::new(0, 0, 1.0, 0.0), scope);
        assert_eq!(holder.current().effective_category, DeviceCategory::Large);
    }
}
