use netkit_model::*;
use serde_json::json;

#[test]
fn ssid_parses_dashboard_payload() {
    let payload = json!([
        {
            "name": "Guest",
            "enabled": true,
            "visible": true,
            "authMode": "open",
            "ipAssignmentMode": "Bridge"
        },
        {
            "name": "Corp",
            "enabled": true,
            "visible": false,
            "authMode": "psk",
            "psk": "hunter2-but-longer",
            "ipAssignmentMode": "NAT mode",
            "number": 1,
            "splashPage": "None"
        }
    ]);

    let ssids: Vec<Ssid> = serde_json::from_value(payload).expect("parse ssid list");
    assert_eq!(ssids.len(), 2);

    assert!(ssids[0].is_open());
    assert!(ssids[0].psk.is_none());
    assert_eq!(ssids[0].ip_assignment_mode, "Bridge");

    assert!(!ssids[1].is_open());
    assert_eq!(ssids[1].psk.as_deref(), Some("hunter2-but-longer"));
    assert!(!ssids[1].visible);
}

#[test]
fn debug_output_redacts_secrets() {
    let login = DeviceLogin {
        device_type: DeviceType::Fortinet,
        host: "192.0.2.1".into(),
        username: "admin".into(),
        password: "very-secret".into(),
    };
    let rendered = format!("{:?}", login);
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("very-secret"));

    let ssid: Ssid = serde_json::from_value(json!({
        "name": "Corp",
        "enabled": true,
        "visible": true,
        "authMode": "psk",
        "psk": "wifi-secret",
        "ipAssignmentMode": "Bridge"
    }))
    .expect("parse ssid");
    let rendered = format!("{:?}", ssid);
    assert!(rendered.contains("Corp"));
    assert!(!rendered.contains("wifi-secret"));
}

#[test]
fn device_type_from_str() {
    assert_eq!("fortinet".parse::<DeviceType>(), Ok(DeviceType::Fortinet));
    assert_eq!(" FortiOS ".parse::<DeviceType>(), Ok(DeviceType::Fortinet));
    assert!("cisco".parse::<DeviceType>().is_err());
}
