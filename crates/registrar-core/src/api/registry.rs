use crate::{
    Error, VERSION,
    access::{
        AccessError,
        gate::PermissionGate,
        is_reserved_principal,
        policy::{AccessPolicy, Operation},
    },
    cdk::structures::Memory,
    config::{ConfigError, ConfigModel, ReadAccess, schema::Validate},
    dto::{
        auth::{PermissionEntry, RegistryInfo},
        page::{Page, PageRequest},
        record::{AcademicRecord, CreateRecordArgs, RecordFilter, RegistryStats},
    },
    error::to_public,
    ids::{PermissionLevel, RecordId},
    log,
    log::Topic,
    ops::{
        mapper::{PermissionMapper, RecordMapper},
        permission::PermissionOps,
        record::{NewRecord, RecordOps},
    },
    storage::{
        StoreError,
        stable::{RegistryStore, meta::REGISTRY_SCHEMA_VERSION},
    },
};
use candid::Principal;

///
/// Registry
///
/// One academic record registry bound to a stable memory. The host supplies
/// the authenticated caller and the current time on every call; the
/// registry keeps no clock and no global state of its own.
///

pub struct Registry<M: Memory> {
    store: RegistryStore<M>,
    gate: PermissionGate,
    policy: AccessPolicy,
    max_record_id: u64,
}

impl<M: Memory> Registry<M> {
    // -------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------

    /// Bind a registry to `memory` with `admin` as bootstrap administrator.
    ///
    /// Installing over existing state is accepted only when it names the
    /// same administrator.
    pub fn install(memory: M, admin: Principal, config: &ConfigModel) -> Result<Self, Error> {
        check_config(config)?;

        if is_reserved_principal(admin) {
            return Err(to_public(AccessError::InvalidPrincipal(admin)));
        }

        log::set_min_level(config.log.level);

        let mut store = RegistryStore::init(memory);
        let mut meta = store.meta();
        check_schema(meta.schema_version)?;

        match meta.bootstrap_admin {
            None => {
                meta.bootstrap_admin = Some(admin);
                store.set_meta(meta);
                log!(Topic::Init, Ok, "registry installed, bootstrap admin {admin}");
            }
            Some(existing) if existing == admin => {
                log!(Topic::Init, Info, "registry reinstalled over existing state");
            }
            Some(existing) => {
                return Err(to_public(StoreError::AlreadyInitialized(existing)));
            }
        }

        Ok(Self::assemble(store, admin, config))
    }

    /// Reattach to a registry previously installed in `memory`.
    pub fn open(memory: M, config: &ConfigModel) -> Result<Self, Error> {
        check_config(config)?;
        log::set_min_level(config.log.level);

        let store = RegistryStore::init(memory);
        let meta = store.meta();
        check_schema(meta.schema_version)?;

        let admin = meta
            .bootstrap_admin
            .ok_or_else(|| to_public(StoreError::NotInitialized))?;

        log!(
            Topic::Init,
            Info,
            "registry reopened: {} records, {} archived, {} grants",
            store.record_count(),
            meta.archived_count,
            store.permission_count()
        );

        Ok(Self::assemble(store, admin, config))
    }

    fn assemble(store: RegistryStore<M>, admin: Principal, config: &ConfigModel) -> Self {
        Self {
            store,
            gate: PermissionGate::new(admin),
            policy: AccessPolicy::from_config(&config.access),
            max_record_id: config.records.max_record_id,
        }
    }

    // -------------------------------------------------------------
    // Records
    // -------------------------------------------------------------

    pub fn create_record(
        &mut self,
        caller: Principal,
        now: u64,
        args: CreateRecordArgs,
    ) -> Result<u64, Error> {
        self.authorize(caller, Operation::CreateRecord)?;

        let new = NewRecord {
            student_id: args.student_id,
            category: args.category,
            score: args.score,
        };
        let record =
            RecordOps::create(&mut self.store, new, now, self.max_record_id).map_err(to_public)?;

        log!(
            Topic::Record,
            Ok,
            "record {} created by {caller} ({})",
            record.id,
            record.category
        );

        Ok(record.id.get())
    }

    pub fn get_record(&self, caller: Principal, id: u64) -> Result<AcademicRecord, Error> {
        self.authorize(caller, Operation::ReadRecords)?;

        let record =
            RecordOps::get(&self.store, RecordId::new(id), self.max_record_id).map_err(to_public)?;

        Ok(RecordMapper::record_to_view(record))
    }

    /// Records in ascending id order, narrowed by `filter`.
    pub fn list_records(
        &self,
        caller: Principal,
        filter: RecordFilter,
        page: PageRequest,
    ) -> Result<Page<AcademicRecord>, Error> {
        self.authorize(caller, Operation::ReadRecords)?;

        let page = RecordOps::page(&self.store, filter, page.clamped());

        Ok(Page {
            entries: page
                .entries
                .into_iter()
                .map(RecordMapper::record_to_view)
                .collect(),
            total: page.total,
        })
    }

    pub fn archive_record(&mut self, caller: Principal, id: u64) -> Result<(), Error> {
        self.authorize(caller, Operation::ArchiveRecord)?;

        let record = RecordOps::archive(&mut self.store, RecordId::new(id), self.max_record_id)
            .map_err(to_public)?;
        log!(Topic::Record, Ok, "record {} archived by {caller}", record.id);

        Ok(())
    }

    pub fn restore_record(&mut self, caller: Principal, id: u64) -> Result<(), Error> {
        self.authorize(caller, Operation::RestoreRecord)?;

        let record = RecordOps::restore(&mut self.store, RecordId::new(id), self.max_record_id)
            .map_err(to_public)?;
        log!(Topic::Record, Ok, "record {} restored by {caller}", record.id);

        Ok(())
    }

    pub fn get_statistics(&self, caller: Principal) -> Result<RegistryStats, Error> {
        self.authorize(caller, Operation::ReadRecords)?;

        Ok(RecordOps::stats(&self.store))
    }

    // -------------------------------------------------------------
    // Permissions
    // -------------------------------------------------------------

    pub fn set_permission_level(
        &mut self,
        caller: Principal,
        target: Principal,
        level: u8,
    ) -> Result<(), Error> {
        self.authorize(caller, Operation::ManagePermissions)?;

        PermissionGate::grant(&mut self.store, target, level).map_err(to_public)?;

        Ok(())
    }

    /// Returns whether `target` held a grant.
    pub fn revoke_permission(&mut self, caller: Principal, target: Principal) -> Result<bool, Error> {
        self.authorize(caller, Operation::ManagePermissions)?;

        Ok(PermissionGate::revoke(&mut self.store, target))
    }

    /// Effective level of `principal`; 0 when it holds nothing.
    #[must_use]
    pub fn get_permission_level(&self, principal: Principal) -> u8 {
        PermissionLevel::rank_of(self.gate.level_of(&self.store, principal))
    }

    /// Stored grants in principal order. The bootstrap administrator only
    /// appears here if it was granted a level explicitly.
    pub fn list_permissions(
        &self,
        caller: Principal,
        page: PageRequest,
    ) -> Result<Page<PermissionEntry>, Error> {
        self.authorize(caller, Operation::ListPermissions)?;

        let page = PermissionOps::page(&self.store, page.clamped());

        Ok(Page {
            entries: page
                .entries
                .into_iter()
                .map(|(principal, level)| PermissionMapper::entry_to_view(principal, level))
                .collect(),
            total: page.total,
        })
    }

    // -------------------------------------------------------------
    // Metadata
    // -------------------------------------------------------------

    #[must_use]
    pub const fn bootstrap_admin(&self) -> Principal {
        self.gate.bootstrap_admin()
    }

    #[must_use]
    pub const fn policy(&self) -> AccessPolicy {
        self.policy
    }

    #[must_use]
    pub fn info(&self) -> RegistryInfo {
        RegistryInfo {
            bootstrap_admin: self.bootstrap_admin(),
            read_restricted: self.policy.read == ReadAccess::Restricted,
            create_level: self.policy.create.rank(),
            archive_level: self.policy.archive.rank(),
            max_record_id: self.max_record_id,
            version: VERSION.to_string(),
        }
    }

    fn authorize(&self, caller: Principal, op: Operation) -> Result<(), Error> {
        let requirement = self.policy.requirement(op);

        self.gate
            .authorize(&self.store, caller, requirement)
            .map_err(to_public)
    }
}

fn check_config(config: &ConfigModel) -> Result<(), Error> {
    config.validate().map_err(|err| {
        log!(Topic::Config, Error, "config rejected: {err}");

        to_public(ConfigError::from(err))
    })
}

fn check_schema(found: u32) -> Result<(), Error> {
    if found == REGISTRY_SCHEMA_VERSION {
        Ok(())
    } else {
        Err(to_public(StoreError::SchemaMismatch {
            expected: REGISTRY_SCHEMA_VERSION,
            found,
        }))
    }
}
