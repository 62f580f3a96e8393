use bustrack_store::RosterStore;
use bustrack_store::entities::account::Role;
use bustrack_store::entities::bus::BusStatus;
use bustrack_store::error::AppError;
use bustrack_store::storage::FileStore;

/// Full admin workflow against an on-disk blob store, then a restart.
#[test]
fn admin_workflow_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let storage = FileStore::new(dir.path()).unwrap();
    let mut store = RosterStore::load(storage);
    assert!(store.is_loaded());

    let admin = store
        .authenticate("superadmin@bustrack.com", "admin123")
        .unwrap();
    assert_eq!(admin.role, Role::SuperAdmin);

    let bus = store.create_bus("LSS5").unwrap();
    assert_eq!(bus.number, "LSS5");
    assert_eq!(bus.status, BusStatus::Active);

    let driver = store
        .create_driver("Ramesh", "ramesh@bustrack.com", "secret", Some("555-0101"))
        .unwrap();
    store.assign_driver(&driver.id, &bus.id).unwrap();
    assert_eq!(store.assigned_bus(&driver.id).unwrap().id, bus.id);

    // Restart: a fresh store over the same directory sees the same world.
    let reloaded = RosterStore::load(FileStore::new(dir.path()).unwrap());
    assert_eq!(
        reloaded.session().unwrap().email,
        "superadmin@bustrack.com"
    );
    assert_eq!(reloaded.buses(), store.buses());
    assert_eq!(reloaded.assignments(), store.assignments());
    assert_eq!(reloaded.assigned_bus(&driver.id).unwrap().number, "LSS5");

    // The new driver can log in but cannot mutate the fleet.
    let mut driver_store = RosterStore::load(FileStore::new(dir.path()).unwrap());
    driver_store
        .authenticate("ramesh@bustrack.com", "secret")
        .unwrap();
    let err = driver_store.create_bus("KTM2").unwrap_err();
    assert!(matches!(
        err,
        AppError::Forbidden {
            actual: Some(Role::Driver),
            ..
        }
    ));
    assert_eq!(driver_store.buses().len(), 1);
}

#[test]
fn logout_clears_persisted_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = RosterStore::load(FileStore::new(dir.path()).unwrap());
    store
        .authenticate("superadmin@bustrack.com", "admin123")
        .unwrap();
    store.end_session().unwrap();

    let reloaded = RosterStore::load(FileStore::new(dir.path()).unwrap());
    assert!(reloaded.session().is_none());
}
