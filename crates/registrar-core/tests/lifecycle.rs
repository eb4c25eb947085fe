use candid::Principal;
use registrar_core::{
    ErrorCode, VERSION,
    api::Registry,
    cdk::structures::DefaultMemoryImpl,
    config::{AccessConfig, ConfigModel, RecordsConfig},
    ids::PermissionLevel,
    dto::record::CreateRecordArgs,
};

fn p(n: u8) -> Principal {
    Principal::from_slice(&[n; 29])
}

#[test]
fn reopen_keeps_records_counters_and_grants() {
    let memory = DefaultMemoryImpl::default();
    let config = ConfigModel::default();
    let admin = p(1);

    {
        let mut reg = Registry::install(memory.clone(), admin, &config).expect("install");
        for n in 1..=3 {
            reg.create_record(admin, n, CreateRecordArgs::new("jo", "maths", 50))
                .expect("create");
        }
        reg.archive_record(admin, 2).expect("archive");
        reg.set_permission_level(admin, p(2), 2).expect("grant");
    }

    let mut reg = Registry::open(memory, &config).expect("reopen");

    assert_eq!(reg.bootstrap_admin(), admin);
    assert_eq!(reg.get_permission_level(p(2)), 2);

    let stats = reg.get_statistics(admin).expect("stats");
    assert_eq!(stats.total_created, 3);
    assert_eq!(stats.archived_count, 1);
    assert!(reg.get_record(admin, 2).expect("get").archived);
    assert_eq!(reg.get_record(admin, 3).expect("get").created_at, 3);

    let id = reg
        .create_record(p(2), 4, CreateRecordArgs::new("kim", "maths", 80))
        .expect("create after reopen");
    assert_eq!(id, 4);
}

#[test]
fn open_without_install_fails() {
    let err = Registry::open(DefaultMemoryImpl::default(), &ConfigModel::default())
        .err()
        .expect("empty memory");

    assert_eq!(err.code, ErrorCode::NotInitialized);
}

#[test]
fn reinstall_requires_the_same_admin() {
    let memory = DefaultMemoryImpl::default();
    let config = ConfigModel::default();

    let mut reg = Registry::install(memory.clone(), p(1), &config).expect("install");
    reg.create_record(p(1), 0, CreateRecordArgs::new("lee", "art", 10))
        .expect("create");
    drop(reg);

    let err = Registry::install(memory.clone(), p(2), &config)
        .err()
        .expect("different admin");
    assert_eq!(err.code, ErrorCode::AlreadyInitialized);

    let reg = Registry::install(memory, p(1), &config).expect("same admin");
    assert_eq!(reg.get_statistics(p(1)).expect("stats").total_created, 1);
}

#[test]
fn reserved_principals_cannot_be_admin() {
    for admin in [Principal::anonymous(), Principal::management_canister()] {
        let err = Registry::install(DefaultMemoryImpl::default(), admin, &ConfigModel::default())
            .err()
            .expect("reserved admin");

        assert_eq!(err.code, ErrorCode::InvalidPrincipal);
    }
}

#[test]
fn info_reports_defaults() {
    let reg = Registry::install(DefaultMemoryImpl::default(), p(1), &ConfigModel::default())
        .expect("install");
    let info = reg.info();

    assert_eq!(info.bootstrap_admin, p(1));
    assert!(!info.read_restricted);
    assert_eq!(info.create_level, 2);
    assert_eq!(info.archive_level, 3);
    assert_eq!(info.max_record_id, i64::MAX as u64);
    assert_eq!(info.version, VERSION);
}

#[test]
fn invalid_config_is_rejected_before_touching_memory() {
    struct Case {
        name: &'static str,
        config: ConfigModel,
    }

    let cases = [
        Case {
            name: "zero max id",
            config: ConfigModel {
                records: RecordsConfig { max_record_id: 0 },
                ..ConfigModel::default()
            },
        },
        Case {
            name: "archive below create",
            config: ConfigModel {
                access: AccessConfig {
                    create: PermissionLevel::Admin,
                    archive: PermissionLevel::Read,
                    ..AccessConfig::default()
                },
                ..ConfigModel::default()
            },
        },
    ];

    for case in cases {
        let memory = DefaultMemoryImpl::default();

        let err = Registry::install(memory.clone(), p(1), &case.config)
            .err()
            .expect(case.name);
        assert_eq!(err.code, ErrorCode::InvalidConfig, "case {}", case.name);

        // nothing was written, so the memory is still uninstalled
        let err = Registry::open(memory.clone(), &ConfigModel::default())
            .err()
            .expect(case.name);
        assert_eq!(err.code, ErrorCode::NotInitialized, "case {}", case.name);

        Registry::install(memory.clone(), p(1), &ConfigModel::default()).expect("install");
        let err = Registry::open(memory, &case.config).err().expect(case.name);
        assert_eq!(err.code, ErrorCode::InvalidConfig, "case {}", case.name);
    }
}
