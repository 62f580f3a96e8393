use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::entities::account::{Account, Role};
use crate::entities::assignment::Assignment;
use crate::entities::bus::Bus;
use crate::error::{AppError, AppResult};
use crate::seed;
use crate::storage::{
    ASSIGNMENTS_KEY, BUSES_KEY, BlobStore, SESSION_KEY, StorageError, USERS_KEY,
};

const SUPER_ADMIN_ONLY: &[Role] = &[Role::SuperAdmin];
const ADMINS: &[Role] = &[Role::SuperAdmin, Role::Admin];

/// Session & roster store: owns the account roster, the bus fleet, the daily
/// driver assignments and the current session, mirroring each collection to
/// the blob store after every mutation.
///
/// Single logical actor; mutations take `&mut self` and the surrounding UI
/// is expected to serialize user actions.
pub struct RosterStore<S: BlobStore> {
    storage: S,
    session: Option<Account>,
    accounts: Vec<Account>,
    buses: Vec<Bus>,
    assignments: Vec<Assignment>,
    loaded: bool,
}

impl<S: BlobStore> RosterStore<S> {
    /// A store with built-in defaults only: seed roster, no buses, no
    /// assignments, no session. Nothing is read from storage.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
            accounts: seed::seed_accounts(),
            buses: Vec::new(),
            assignments: Vec::new(),
            loaded: false,
        }
    }

    /// A store restored from persisted blobs. Each blob that is present and
    /// parses replaces the built-in default; a missing or malformed blob is
    /// logged and the default kept. Never fatal.
    pub fn load(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    fn restore(&mut self) {
        if let Some(session) = Self::read_blob::<Account>(&self.storage, SESSION_KEY) {
            self.session = Some(session);
        }
        if let Some(accounts) = Self::read_blob::<Vec<Account>>(&self.storage, USERS_KEY) {
            self.accounts = accounts;
        }
        if let Some(buses) = Self::read_blob::<Vec<Bus>>(&self.storage, BUSES_KEY) {
            self.buses = buses;
        }
        if let Some(assignments) =
            Self::read_blob::<Vec<Assignment>>(&self.storage, ASSIGNMENTS_KEY)
        {
            self.assignments = assignments;
        }
        self.loaded = true;
        tracing::info!(
            accounts = self.accounts.len(),
            buses = self.buses.len(),
            assignments = self.assignments.len(),
            "roster store restored"
        );
    }

    fn read_blob<T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
        match storage.read(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    // A blob that does not parse is treated as absent,
                    // never partially trusted.
                    tracing::warn!(key, %err, "discarding malformed blob");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key, %err, "failed to read blob");
                None
            }
        }
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value).map_err(StorageError::from)?;
        self.storage.write(key, &raw)?;
        Ok(())
    }

    /// True once all four blobs have been read (or fallen back to defaults).
    /// Dependent UI shows a loading state until then.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // ============ Session ============

    /// Login with email and password. Plaintext, case-sensitive equality
    /// against the roster, first match in roster order wins. On success the
    /// account becomes the current session and the session blob is persisted.
    pub fn authenticate(&mut self, email: &str, password: &str) -> AppResult<Account> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .cloned()
            .ok_or(AppError::InvalidCredentials)?;

        self.session = Some(account.clone());
        tracing::info!(email = %account.email, role = ?account.role, "session opened");
        self.persist(SESSION_KEY, &account)?;
        Ok(account)
    }

    /// Clear the session and drop the persisted session blob. Calling with
    /// no active session is a no-op.
    pub fn end_session(&mut self) -> AppResult<()> {
        if self.session.take().is_some() {
            tracing::info!("session closed");
        }
        self.storage.remove(SESSION_KEY)?;
        Ok(())
    }

    pub fn session(&self) -> Option<&Account> {
        self.session.as_ref()
    }

    fn authorize(&self, required: &'static [Role]) -> AppResult<()> {
        let actual = self.session.as_ref().map(|a| a.role);
        match actual {
            Some(role) if required.contains(&role) => Ok(()),
            _ => Err(AppError::Forbidden { required, actual }),
        }
    }

    // ============ Roster ============

    /// Create an admin account. Super-admin only.
    pub fn create_admin(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> AppResult<Account> {
        self.authorize(SUPER_ADMIN_ONLY)?;
        self.insert_account(name, email, password, phone, Role::Admin)
    }

    /// Create a driver account. Admin or super-admin.
    pub fn create_driver(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> AppResult<Account> {
        self.authorize(ADMINS)?;
        self.insert_account(name, email, password, phone, Role::Driver)
    }

    fn insert_account(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
        role: Role,
    ) -> AppResult<Account> {
        let account = Account::new(name, email, password, phone, role);
        self.accounts.push(account.clone());
        tracing::info!(email = %account.email, role = ?account.role, "account created");
        self.persist(USERS_KEY, &self.accounts)?;
        Ok(account)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Roster filtered to driver accounts, for assignment pickers.
    pub fn drivers(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter().filter(|a| a.role == Role::Driver)
    }

    // ============ Buses ============

    /// Create a bus: status active, default location, no stops yet.
    /// Admin or super-admin.
    pub fn create_bus(&mut self, number: &str) -> AppResult<Bus> {
        self.authorize(ADMINS)?;
        let bus = Bus::new(number);
        self.buses.push(bus.clone());
        tracing::info!(number = %bus.number, "bus created");
        self.persist(BUSES_KEY, &self.buses)?;
        Ok(bus)
    }

    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Case-insensitive substring match on the bus number, as the rider
    /// dashboard's search box does.
    pub fn search_buses(&self, term: &str) -> Vec<&Bus> {
        let term = term.to_lowercase();
        self.buses
            .iter()
            .filter(|b| b.number.to_lowercase().contains(&term))
            .collect()
    }

    // ============ Assignments ============

    /// Assign a driver to a bus for today (UTC calendar day). Any existing
    /// assignment for this driver today is replaced outright. Admin or
    /// super-admin. Driver and bus ids are not checked against the roster
    /// or fleet; a dangling id simply never resolves.
    pub fn assign_driver(&mut self, driver_id: &str, bus_id: &str) -> AppResult<Assignment> {
        self.assign_driver_on(driver_id, bus_id, today_utc())
    }

    fn assign_driver_on(
        &mut self,
        driver_id: &str,
        bus_id: &str,
        date: NaiveDate,
    ) -> AppResult<Assignment> {
        self.authorize(ADMINS)?;
        self.assignments
            .retain(|a| !(a.driver_id == driver_id && a.date == date));
        let assignment = Assignment::new(driver_id, bus_id, date);
        self.assignments.push(assignment.clone());
        tracing::info!(driver_id, bus_id, %date, "driver assigned");
        self.persist(ASSIGNMENTS_KEY, &self.assignments)?;
        Ok(assignment)
    }

    /// The bus this driver is assigned to today, if any. Not role-gated;
    /// reads are open to any caller.
    pub fn assigned_bus(&self, driver_id: &str) -> Option<&Bus> {
        self.assigned_bus_on(driver_id, today_utc())
    }

    fn assigned_bus_on(&self, driver_id: &str, date: NaiveDate) -> Option<&Bus> {
        let assignment = self
            .assignments
            .iter()
            .find(|a| a.driver_id == driver_id && a.date == date)?;
        self.buses.iter().find(|b| b.id == assignment.bus_id)
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }
}

/// Assignment days are UTC calendar dates. The mobile app derived the day
/// from an ISO-8601 UTC timestamp, so UTC keeps existing blobs consistent
/// across timezones.
fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
