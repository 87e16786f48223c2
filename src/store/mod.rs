//! In-memory worker record store.
//!
//! This module provides the [`WorkerStore`], the record store behind the
//! HTTP API. It holds workers in insertion order and supports list, create,
//! partial-merge update, delete, and bulk schedule reset. Every mutation
//! returns the current full record set, matching the dashboard contract of
//! refetching after each change.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{DEFAULT_DAILY_RATE, DayKey, Schedule, Worker};

/// Input for creating a worker.
#[derive(Debug, Clone, Default)]
pub struct NewWorker {
    /// The worker's name. Leading and trailing whitespace is trimmed;
    /// a name that is empty after trimming is rejected.
    pub name: String,
    /// The daily pay rate. `None` or a non-positive value falls back to
    /// the store's default rate.
    pub daily_rate: Option<Decimal>,
    /// The initial weekly schedule.
    pub schedule: Schedule,
}

/// A per-day schedule patch.
///
/// Only days carrying `Some` are overwritten; everything else is left
/// untouched, so updating one day never clobbers the rest of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleUpdate {
    /// New Sunday assignment, if any.
    pub sunday: Option<String>,
    /// New Monday assignment, if any.
    pub monday: Option<String>,
    /// New Tuesday assignment, if any.
    pub tuesday: Option<String>,
    /// New Wednesday assignment, if any.
    pub wednesday: Option<String>,
    /// New Thursday assignment, if any.
    pub thursday: Option<String>,
    /// New Friday assignment, if any.
    pub friday: Option<String>,
    /// New Saturday assignment, if any.
    pub saturday: Option<String>,
}

impl ScheduleUpdate {
    /// A patch that sets a single day's site, leaving the rest untouched.
    pub fn single(day: DayKey, site: impl Into<String>) -> Self {
        let mut update = Self::default();
        let slot = match day {
            DayKey::Sunday => &mut update.sunday,
            DayKey::Monday => &mut update.monday,
            DayKey::Tuesday => &mut update.tuesday,
            DayKey::Wednesday => &mut update.wednesday,
            DayKey::Thursday => &mut update.thursday,
            DayKey::Friday => &mut update.friday,
            DayKey::Saturday => &mut update.saturday,
        };
        *slot = Some(site.into());
        update
    }

    /// Applies the patch to a schedule, overwriting only the provided days.
    pub fn apply_to(&self, schedule: &mut Schedule) {
        let days = [
            (DayKey::Sunday, &self.sunday),
            (DayKey::Monday, &self.monday),
            (DayKey::Tuesday, &self.tuesday),
            (DayKey::Wednesday, &self.wednesday),
            (DayKey::Thursday, &self.thursday),
            (DayKey::Friday, &self.friday),
            (DayKey::Saturday, &self.saturday),
        ];
        for (day, site) in days {
            if let Some(site) = site {
                schedule.set_site(day, site.clone());
            }
        }
    }
}

/// A partial update of a worker record.
///
/// Only provided fields change. A schedule patch merges per-day.
#[derive(Debug, Clone, Default)]
pub struct WorkerUpdate {
    /// New name, if any.
    pub name: Option<String>,
    /// New daily rate, if any.
    pub daily_rate: Option<Decimal>,
    /// Schedule patch, if any.
    pub schedule: Option<ScheduleUpdate>,
}

/// The worker record store.
///
/// Records are kept in insertion order, which is the order every derived
/// view preserves. The store is safe to share across request handlers.
#[derive(Debug)]
pub struct WorkerStore {
    workers: RwLock<Vec<Worker>>,
    default_daily_rate: Decimal,
}

impl Default for WorkerStore {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_RATE)
    }
}

impl WorkerStore {
    /// Creates an empty store with the given fallback daily rate.
    pub fn new(default_daily_rate: Decimal) -> Self {
        Self {
            workers: RwLock::new(Vec::new()),
            default_daily_rate,
        }
    }

    // A poisoned lock only means a writer panicked mid-update; the record
    // vector is still structurally sound, so recover the guard.
    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<Worker>> {
        self.workers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<Worker>> {
        self.workers.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Returns a snapshot of all workers in insertion order.
    pub fn list(&self) -> Vec<Worker> {
        self.read_guard().clone()
    }

    /// Returns the number of workers in the store.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Returns true if the store holds no workers.
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Looks up a single worker by id.
    pub fn get(&self, id: Uuid) -> TrackerResult<Worker> {
        self.read_guard()
            .iter()
            .find(|worker| worker.id == id)
            .cloned()
            .ok_or(TrackerError::WorkerNotFound { id })
    }

    /// Creates a worker and returns the updated record set.
    ///
    /// The name is trimmed and must be non-empty afterwards. A missing or
    /// non-positive daily rate falls back to the store default.
    pub fn create(&self, new_worker: NewWorker) -> TrackerResult<Vec<Worker>> {
        let name = new_worker.name.trim().to_string();
        if name.is_empty() {
            return Err(TrackerError::InvalidWorker {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let daily_rate = new_worker
            .daily_rate
            .filter(|rate| *rate > Decimal::ZERO)
            .unwrap_or(self.default_daily_rate);

        let worker = Worker {
            id: Uuid::new_v4(),
            name,
            daily_rate,
            schedule: new_worker.schedule,
        };

        let mut workers = self.write_guard();
        workers.push(worker);
        Ok(workers.clone())
    }

    /// Applies a partial update to the worker with the given id and returns
    /// the updated record set.
    pub fn update(&self, id: Uuid, update: WorkerUpdate) -> TrackerResult<Vec<Worker>> {
        let mut workers = self.write_guard();
        let worker = workers
            .iter_mut()
            .find(|worker| worker.id == id)
            .ok_or(TrackerError::WorkerNotFound { id })?;

        if let Some(name) = update.name {
            worker.name = name;
        }
        if let Some(daily_rate) = update.daily_rate {
            worker.daily_rate = daily_rate;
        }
        if let Some(schedule_update) = update.schedule {
            schedule_update.apply_to(&mut worker.schedule);
        }

        Ok(workers.clone())
    }

    /// Deletes the worker with the given id and returns the updated record set.
    pub fn delete(&self, id: Uuid) -> TrackerResult<Vec<Worker>> {
        let mut workers = self.write_guard();
        let position = workers
            .iter()
            .position(|worker| worker.id == id)
            .ok_or(TrackerError::WorkerNotFound { id })?;
        workers.remove(position);
        Ok(workers.clone())
    }

    /// Clears every worker's schedule, keeping names and rates, and returns
    /// the updated record set.
    pub fn reset_sites(&self) -> Vec<Worker> {
        let mut workers = self.write_guard();
        for worker in workers.iter_mut() {
            worker.schedule.clear();
        }
        workers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn new_worker(name: &str, rate: Option<&str>) -> NewWorker {
        NewWorker {
            name: name.to_string(),
            daily_rate: rate.map(dec),
            schedule: Schedule::default(),
        }
    }

    #[test]
    fn test_create_returns_record_set_with_new_worker() {
        let store = WorkerStore::default();
        let workers = store.create(new_worker("Sita", Some("1000"))).unwrap();

        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].name, "Sita");
        assert_eq!(workers[0].daily_rate, dec("1000"));
    }

    #[test]
    fn test_create_trims_name() {
        let store = WorkerStore::default();
        let workers = store.create(new_worker("  Ravi  ", None)).unwrap();
        assert_eq!(workers[0].name, "Ravi");
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let store = WorkerStore::default();
        let result = store.create(new_worker("   ", Some("1000")));

        assert!(matches!(
            result,
            Err(TrackerError::InvalidWorker { field, .. }) if field == "name"
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_defaults_missing_rate_to_1350() {
        let store = WorkerStore::default();
        let workers = store.create(new_worker("Sita", None)).unwrap();
        assert_eq!(workers[0].daily_rate, dec("1350"));
    }

    #[test]
    fn test_create_defaults_non_positive_rate() {
        let store = WorkerStore::default();
        let workers = store.create(new_worker("Sita", Some("0"))).unwrap();
        assert_eq!(workers[0].daily_rate, dec("1350"));

        let workers = store.create(new_worker("Ravi", Some("-5"))).unwrap();
        assert_eq!(workers[1].daily_rate, dec("1350"));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = WorkerStore::default();
        store.create(new_worker("Zara", None)).unwrap();
        store.create(new_worker("Amit", None)).unwrap();

        let workers = store.list();
        assert_eq!(workers[0].name, "Zara");
        assert_eq!(workers[1].name, "Amit");
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = WorkerStore::default();
        let result = store.get(Uuid::new_v4());
        assert!(matches!(result, Err(TrackerError::WorkerNotFound { .. })));
    }

    #[test]
    fn test_update_rate_only_keeps_schedule() {
        let store = WorkerStore::default();
        let mut schedule = Schedule::default();
        schedule.set_site(DayKey::Monday, "SiteA");
        store
            .create(NewWorker {
                name: "Sita".to_string(),
                daily_rate: Some(dec("1000")),
                schedule,
            })
            .unwrap();
        let id = store.list()[0].id;

        let workers = store
            .update(
                id,
                WorkerUpdate {
                    daily_rate: Some(dec("1500")),
                    ..WorkerUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(workers[0].daily_rate, dec("1500"));
        assert_eq!(workers[0].schedule.site(DayKey::Monday), "SiteA");
    }

    #[test]
    fn test_update_single_day_keeps_other_days() {
        let store = WorkerStore::default();
        let mut schedule = Schedule::default();
        schedule.set_site(DayKey::Monday, "SiteA");
        schedule.set_site(DayKey::Friday, "SiteB");
        store
            .create(NewWorker {
                name: "Sita".to_string(),
                daily_rate: Some(dec("1000")),
                schedule,
            })
            .unwrap();
        let id = store.list()[0].id;

        let workers = store
            .update(
                id,
                WorkerUpdate {
                    schedule: Some(ScheduleUpdate::single(DayKey::Monday, "Depot")),
                    ..WorkerUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(workers[0].schedule.site(DayKey::Monday), "Depot");
        assert_eq!(workers[0].schedule.site(DayKey::Friday), "SiteB");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let store = WorkerStore::default();
        let result = store.update(Uuid::new_v4(), WorkerUpdate::default());
        assert!(matches!(result, Err(TrackerError::WorkerNotFound { .. })));
    }

    #[test]
    fn test_delete_removes_worker() {
        let store = WorkerStore::default();
        store.create(new_worker("Sita", None)).unwrap();
        store.create(new_worker("Ravi", None)).unwrap();
        let id = store.list()[0].id;

        let workers = store.delete(id).unwrap();
        assert_eq!(workers.len(), 1);
        assert_eq!(workers[0].name, "Ravi");
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let store = WorkerStore::default();
        let result = store.delete(Uuid::new_v4());
        assert!(matches!(result, Err(TrackerError::WorkerNotFound { .. })));
    }

    #[test]
    fn test_reset_sites_clears_schedules_keeps_rates() {
        let store = WorkerStore::default();
        let mut schedule = Schedule::default();
        schedule.set_site(DayKey::Tuesday, "SiteA");
        store
            .create(NewWorker {
                name: "Sita".to_string(),
                daily_rate: Some(dec("1000")),
                schedule,
            })
            .unwrap();

        let workers = store.reset_sites();
        assert_eq!(workers.len(), 1);
        assert!(workers[0].schedule.is_empty());
        assert_eq!(workers[0].daily_rate, dec("1000"));
        assert_eq!(workers[0].name, "Sita");
    }

    #[test]
    fn test_schedule_update_single_touches_one_day() {
        let update = ScheduleUpdate::single(DayKey::Thursday, "SiteB");
        let mut schedule = Schedule::default();
        schedule.set_site(DayKey::Monday, "SiteA");

        update.apply_to(&mut schedule);
        assert_eq!(schedule.site(DayKey::Thursday), "SiteB");
        assert_eq!(schedule.site(DayKey::Monday), "SiteA");
    }

    #[test]
    fn test_schedule_update_can_clear_a_day() {
        let update = ScheduleUpdate::single(DayKey::Monday, "");
        let mut schedule = Schedule::default();
        schedule.set_site(DayKey::Monday, "SiteA");

        update.apply_to(&mut schedule);
        assert_eq!(schedule.site(DayKey::Monday), "");
    }
}
