//! The license service façade.

use chrono::{DateTime, Local};
use licensor_core::{
    generate_license_key, AdminSecret, InvalidReason, License, LicenseDraft, LicensePatch,
    NewLicense, Verdict,
};
use licensor_store::LicenseStore;
use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};

/// Attempts at drawing an unused key before a create gives up.
pub const MAX_KEY_ATTEMPTS: usize = 5;

/// Admin operations and key verification over one [`LicenseStore`].
#[derive(Debug, Clone)]
pub struct LicenseService {
    store: LicenseStore,
    admin_secret: AdminSecret,
    keygen: fn() -> String,
}

impl LicenseService {
    /// Opens the configured database and builds a service over it.
    pub fn open(config: &ServiceConfig) -> ServiceResult<Self> {
        let store = LicenseStore::open(&config.database_path)?;
        Ok(Self::new(store, config.admin_secret.clone()))
    }

    pub fn new(store: LicenseStore, admin_secret: AdminSecret) -> Self {
        Self {
            store,
            admin_secret,
            keygen: generate_license_key,
        }
    }

    /// Replaces the key generator used when a create omits the key.
    #[must_use]
    pub fn with_key_generator(mut self, keygen: fn() -> String) -> Self {
        self.keygen = keygen;
        self
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &LicenseStore {
        &self.store
    }

    /// Checks an admin password. No state is kept either way.
    #[must_use]
    pub fn authenticate(&self, password: &str) -> bool {
        let ok = self.admin_secret.verify(password);
        if !ok {
            warn!("Rejected admin login");
        }
        ok
    }

    /// Lists all licenses, most recently created first.
    pub fn list(&self) -> ServiceResult<Vec<License>> {
        Ok(self.store.list()?)
    }

    /// Creates a license.
    ///
    /// An empty or missing `license_key` is replaced by a generated one. A
    /// generated key that collides with a stored key is redrawn; a supplied
    /// key that collides fails with [`ServiceError::DuplicateKey`].
    pub fn create(&self, request: NewLicense) -> ServiceResult<License> {
        let expiry_date = request
            .expiry_date
            .filter(|e| !e.is_empty())
            .ok_or(ServiceError::MissingExpiryDate)?;

        let mut draft = LicenseDraft {
            license_key: String::new(),
            expiry_date,
            active: request.active.unwrap_or(true),
            user_id: request.user_id,
            notes: request.notes,
        };

        let license = match request.license_key.filter(|k| !k.is_empty()) {
            Some(key) => {
                draft.license_key = key;
                self.store.create(&draft)?
            }
            None => self.create_with_generated_key(&mut draft)?,
        };

        info!("Created license {} (id {})", license.license_key, license.id);
        Ok(license)
    }

    fn create_with_generated_key(&self, draft: &mut LicenseDraft) -> ServiceResult<License> {
        let mut last_err = None;
        for attempt in 1..=MAX_KEY_ATTEMPTS {
            draft.license_key = (self.keygen)();
            match self.store.create(draft) {
                Ok(license) => return Ok(license),
                Err(err) => match ServiceError::from(err) {
                    ServiceError::DuplicateKey(key) => {
                        warn!("Generated key collided on attempt {attempt}, redrawing");
                        last_err = Some(ServiceError::DuplicateKey(key));
                    }
                    other => return Err(other),
                },
            }
        }
        Err(last_err.unwrap_or_else(|| ServiceError::DuplicateKey(draft.license_key.clone())))
    }

    /// Applies a partial update.
    pub fn update(&self, id: i64, patch: &LicensePatch) -> ServiceResult<()> {
        if patch.is_empty() {
            return Err(ServiceError::EmptyPatch);
        }
        if self.store.update(id, patch)? == 0 {
            return Err(ServiceError::NotFound(id));
        }
        info!("Updated license {id}");
        Ok(())
    }

    /// Permanently deletes a license.
    pub fn delete(&self, id: i64) -> ServiceResult<()> {
        if self.store.delete(id)? == 0 {
            return Err(ServiceError::NotFound(id));
        }
        info!("Deleted license {id}");
        Ok(())
    }

    /// Looks up a license by exact key.
    pub fn find_by_key(&self, license_key: &str) -> ServiceResult<Option<License>> {
        Ok(self.store.find_by_key(license_key)?)
    }

    /// Verifies a key against the current time.
    pub fn verify(&self, license_key: Option<&str>) -> ServiceResult<Verdict> {
        self.verify_at(license_key, Local::now())
    }

    /// Verifies a key against `now`. Never writes to the store.
    pub fn verify_at(
        &self,
        license_key: Option<&str>,
        now: DateTime<Local>,
    ) -> ServiceResult<Verdict> {
        let Some(key) = license_key.filter(|k| !k.is_empty()) else {
            return Ok(Verdict::Invalid(InvalidReason::NotProvided));
        };

        let found = self.store.find_by_key(key)?;
        let verdict = Verdict::evaluate(found.as_ref(), now).map_err(|source| {
            ServiceError::CorruptExpiry {
                license_key: key.to_string(),
                source,
            }
        })?;
        debug!("Verified license {key}: {}", verdict.message());
        Ok(verdict)
    }
}
