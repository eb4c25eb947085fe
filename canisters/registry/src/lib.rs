//!
//! Academic record registry canister.
//!
//! Owns the lifecycle hooks and the Candid surface. Every endpoint resolves
//! the caller (and the clock, for creation) and hands off to the core
//! [`Registry`]; no registry logic lives here.
//!

use candid::{CandidType, Principal};
use ic_cdk::{init, post_upgrade, query, update};
use registrar_core::{
    Error,
    api::Registry,
    cdk::{api::msg_caller, structures::DefaultMemoryImpl, time::now_nanos, trap},
    config::{Config, ConfigModel},
    dto::{
        auth::{PermissionEntry, RegistryInfo},
        page::{Page, PageRequest},
        record::{AcademicRecord, CreateRecordArgs, RecordFilter, RegistryStats},
    },
};
use serde::Deserialize;
use std::cell::RefCell;

const REGISTRAR_TOML: &str = include_str!("../registrar.toml");

thread_local! {
    static REGISTRY: RefCell<Option<Registry<DefaultMemoryImpl>>> = const { RefCell::new(None) };
}

///
/// InitArgs
/// When `admin` is absent the installing principal becomes the bootstrap
/// administrator.
///

#[derive(CandidType, Clone, Debug, Default, Deserialize)]
pub struct InitArgs {
    pub admin: Option<Principal>,
}

// ---- Lifecycle ----

#[init]
fn init(args: Option<InitArgs>) {
    let admin = args.and_then(|args| args.admin).unwrap_or_else(msg_caller);
    let config = load_config();

    match Registry::install(DefaultMemoryImpl::default(), admin, &config) {
        Ok(registry) => set_registry(registry),
        Err(err) => trap(format!("registry install failed: {err}")),
    }
}

#[post_upgrade]
fn post_upgrade() {
    let config = load_config();

    match Registry::open(DefaultMemoryImpl::default(), &config) {
        Ok(registry) => set_registry(registry),
        Err(err) => trap(format!("registry reopen failed: {err}")),
    }
}

// ---- Records ----

#[update]
fn create_record(args: CreateRecordArgs) -> Result<u64, Error> {
    let caller = msg_caller();
    let now = now_nanos();

    with_registry_mut(|registry| registry.create_record(caller, now, args))
}

#[query]
fn get_record(id: u64) -> Result<AcademicRecord, Error> {
    let caller = msg_caller();

    with_registry(|registry| registry.get_record(caller, id))
}

#[query]
fn list_records(filter: RecordFilter, page: PageRequest) -> Result<Page<AcademicRecord>, Error> {
    let caller = msg_caller();

    with_registry(|registry| registry.list_records(caller, filter, page))
}

#[update]
fn archive_record(id: u64) -> Result<(), Error> {
    let caller = msg_caller();

    with_registry_mut(|registry| registry.archive_record(caller, id))
}

#[update]
fn restore_record(id: u64) -> Result<(), Error> {
    let caller = msg_caller();

    with_registry_mut(|registry| registry.restore_record(caller, id))
}

#[query]
fn get_statistics() -> Result<RegistryStats, Error> {
    let caller = msg_caller();

    with_registry(|registry| registry.get_statistics(caller))
}

// ---- Permissions ----

#[update]
fn set_permission_level(target: Principal, level: u8) -> Result<(), Error> {
    let caller = msg_caller();

    with_registry_mut(|registry| registry.set_permission_level(caller, target, level))
}

#[update]
fn revoke_permission(target: Principal) -> Result<bool, Error> {
    let caller = msg_caller();

    with_registry_mut(|registry| registry.revoke_permission(caller, target))
}

#[query]
fn get_permission_level(principal: Principal) -> u8 {
    with_registry(|registry| registry.get_permission_level(principal))
}

#[query]
fn list_permissions(page: PageRequest) -> Result<Page<PermissionEntry>, Error> {
    let caller = msg_caller();

    with_registry(|registry| registry.list_permissions(caller, page))
}

#[query]
fn registry_info() -> RegistryInfo {
    with_registry(Registry::info)
}

// ---- Helpers ----

fn load_config() -> ConfigModel {
    Config::from_toml(REGISTRAR_TOML)
        .unwrap_or_else(|err| trap(format!("invalid registrar.toml: {err}")))
}

fn set_registry(registry: Registry<DefaultMemoryImpl>) {
    REGISTRY.with_borrow_mut(|slot| *slot = Some(registry));
}

// init and post_upgrade trap unless the registry is set, so an empty slot
// means the canister was never installed
fn with_registry<R>(f: impl FnOnce(&Registry<DefaultMemoryImpl>) -> R) -> R {
    REGISTRY.with_borrow(|slot| match slot {
        Some(registry) => f(registry),
        None => trap("registry not initialized"),
    })
}

fn with_registry_mut<R>(f: impl FnOnce(&mut Registry<DefaultMemoryImpl>) -> R) -> R {
    REGISTRY.with_borrow_mut(|slot| match slot {
        Some(registry) => f(registry),
        None => trap("registry not initialized"),
    })
}

ic_cdk::export_candid!();
