// ==========================================
// UserConsole 集成测试
// ==========================================
// 测试目标: 通过内存输入驱动完整菜单流程
// ==========================================


use emergency_dispatch::config::SeedData;
use emergency_dispatch::{AppConfig, IncidentStatus, UserConsole};
use std::io::Cursor;
use test_helpers::{find_incident, quiet_engine};

type TestConsole = UserConsole<Cursor<Vec<u8>>, Vec<u8>>;

fn create_console(script: &str, seed: SeedData) -> TestConsole {
    let config = AppConfig {
        seed,
        ..AppConfig::default()
    };
    UserConsole::new(
        &config,
        quiet_engine(),
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    )
}

fn run_script(script: &str, seed: SeedData) -> (TestConsole, String) {
    let mut console = create_console(script, seed);
    console.run().expect("控制台运行失败");
    let output = String::from_utf8_lossy(console.output()).to_string();
    (console, output)
}

#[test]
fn test_default_seed_allocate_and_view() {
    let script = "5\n3\n4\n6\n";
    let (console, output) = run_script(script, SeedData::default());

    assert!(output.contains("Resources allocated."));
    assert!(output.contains(
        "ID: INC001, Type: Fire, Priority: High, Status: Resources have now been assigned, Resources: FIRE001"
    ));
    assert!(output.contains(
        "ID: INC002, Type: Medical Emergency, Priority: Medium, Status: Resources have now been assigned, Resources: AMB001, MED001"
    ));
    assert!(output.contains(
        "ID: INC003, Type: Traffic Accident, Priority: Low, Status: Pending, Resources: None"
    ));
    assert!(output.contains("ID: AMB001, Type: Ambulance, Location: Zone 1, Status: Assigned"));

    assert_eq!(console.incidents().unresolved().len(), 1);
}

#[test]
fn test_add_incident_then_allocate() {
    let script = "1\nINC100\nZone 9\nFlood\nHigh\nambulance, fire truck\n5\n6\n";
    let mut console = create_console(script, SeedData::empty());
    console.run().unwrap();

    let incident = find_incident(console.incidents(), "INC100");
    assert_eq!(incident.location, "Zone 9");
    assert_eq!(incident.emergency_type, "Flood");
    assert_eq!(
        incident.required_resources,
        vec!["Ambulance".to_string(), "Fire Truck".to_string()]
    );
    // 没有任何资源, 仍为 Pending
    assert_eq!(incident.status, IncidentStatus::Pending);
}

#[test]
fn test_blank_required_resources_assigned_on_next_pass() {
    // 空白需求列表解析为无需求, 下一轮分配即视为已满足
    let script = "1\nINC300\nZone 3\nFalse Alarm\nLow\n \n5\n3\n6\n";
    let (console, output) = run_script(script, SeedData::empty());

    let incident = find_incident(console.incidents(), "INC300");
    assert!(incident.required_resources.is_empty());
    assert_eq!(incident.status, IncidentStatus::Assigned);
    assert!(output.contains(
        "ID: INC300, Type: False Alarm, Priority: Low, Status: Resources have now been assigned, Resources: None"
    ));
}

#[test]
fn test_add_incident_duplicate_id_refused() {
    let script = "1\nINC001\n6\n";
    let (console, output) = run_script(script, SeedData::default());

    assert!(output.contains("Incident with ID 'INC001' already exists. Please enter a unique ID."));
    assert_eq!(console.incidents().len(), 3);
}

#[test]
fn test_add_resource_and_fill_pending_incident() {
    // 默认数据中 INC003 缺一辆救护车; 新增后再次分配
    let script = "5\n2\nAmbulance\nZone 2\n5\n6\n";
    let (console, output) = run_script(script, SeedData::default());

    assert!(output.contains("Generated Resource ID: A001"));
    let incident = find_incident(console.incidents(), "INC003");
    assert_eq!(incident.status, IncidentStatus::Assigned);
    assert_eq!(incident.allocated_summary(), "A001");
}

#[test]
fn test_invalid_priority_reports_failure() {
    let script = "1\nINC200\nZone 1\nFire\nUrgent\nFire Truck\n5\n6\n";
    let (console, output) = run_script(script, SeedData::default());

    assert!(output.contains("Allocation failed:"));
    // 本轮未做任何分配
    assert!(console.resources().iter().all(|r| r.available));
}
